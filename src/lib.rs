//! Xiangqi (Chinese chess) engine library implementing the UCCI protocol.
//!
//! Provides a complete engine core with:
//! - 16×16 embedded board representation with byte-addressed squares
//! - Alpha-beta search with iterative deepening and quiescence
//! - Transposition table and history-heuristic move ordering
//! - Zobrist hashing with incremental updates
//! - Perpetual-check aware repetition scoring
//! - UCCI protocol support for GUI integration
//!
//! # Quick Start
//!
//! ```
//! use std::time::Duration;
//! use xiangqi_engine::board::Position;
//!
//! // The opening position has exactly 44 moves for Red
//! let mut pos = Position::startpos();
//! assert_eq!(pos.generate_moves(false).len(), 44);
//!
//! // Search for a short while and play the best move found
//! let (pv, _score) = pos.search_main(Duration::from_millis(200));
//! let best = pv[0];
//! assert!(pos.make_move(best));
//! ```
//!
//! # Building Positions
//!
//! ```
//! use xiangqi_engine::board::{Position, Side};
//!
//! // From FEN notation
//! let pos = Position::from_fen("4ka3/9/9/6N2/9/9/4P4/9/9/5K3 r - - 0 1").unwrap();
//! assert_eq!(pos.side_to_move(), Side::Red);
//!
//! // From a UCCI position string with a move list
//! let pos = Position::from_position_str("startpos moves b2e2 h9g7").unwrap();
//! assert_eq!(pos.distance(), 2);
//! ```
//!
//! # Features
//!
//! - `serde` - Enable serialization for `Side`, `Piece`, `Square`, and `Move`

// Enable pedantic lints with domain-specific exceptions
#![warn(clippy::pedantic)]
// Square bytes and move codes are clearer as bare hex literals
#![allow(clippy::unreadable_literal)]
// Engine code is full of intentionally similar names (vl_red/vl_black, ...)
#![allow(clippy::similar_names)]
// Index casts between square bytes, table indices, and scores are pervasive
#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::cast_possible_wrap)]
#![allow(clippy::cast_sign_loss)]
#![allow(clippy::cast_lossless)]
// Module-level documentation is sufficient for this codebase
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod board;
pub mod tt;
pub mod ucci;
pub mod zobrist;

//! Cross-module board tests.

mod search;

use crate::zobrist;

use super::tables;
use super::types::{Piece, Side, Square};
use super::Position;

/// Everything `make_move`/`undo_move` must restore, byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct Snapshot {
    squares: [Piece; 256],
    side: Side,
    vl_red: i32,
    vl_black: i32,
    hash: u64,
}

pub(crate) fn snapshot(pos: &Position) -> Snapshot {
    Snapshot {
        squares: pos.squares,
        side: pos.side_to_move(),
        vl_red: pos.vl_red,
        vl_black: pos.vl_black,
        hash: pos.hash(),
    }
}

/// Material/positional scores recomputed from scratch.
pub(crate) fn scores_from_scratch(pos: &Position) -> (i32, i32) {
    let mut red = 0;
    let mut black = 0;
    for sq in Square::all() {
        let pc = pos.piece_at(sq);
        match pc.side() {
            Some(Side::Red) => red += tables::piece_value(pc.kind(), sq),
            Some(Side::Black) => black += tables::piece_value(pc.kind(), sq.flip()),
            None => {}
        }
    }
    (red, black)
}

/// Zobrist hash recomputed as a from-scratch XOR fold.
pub(crate) fn hash_from_scratch(pos: &Position) -> u64 {
    let mut hash = 0;
    for sq in Square::all() {
        hash ^= zobrist::piece_square(sq, pos.piece_at(sq));
    }
    if pos.side_to_move() == Side::Black {
        hash ^= zobrist::side_to_move();
    }
    hash
}

//! FEN and position-string parsing and rendering.
//!
//! The board field runs from rank 9 (Black's back rank, top) down to rank
//! 0, rows separated by `/`, digits encoding runs of empty squares. Red
//! pieces are `K A B N R C P`, Black lowercase. The side field accepts `w`
//! or `r` for Red and `b` for Black; the remaining four FEN fields are
//! rendered `- - 0 1` and ignored on input.

use std::str::FromStr;

use super::error::ParseError;
use super::types::{Move, Piece, Side, Square};
use super::Position;

/// The standard opening position.
pub const INIT_FEN: &str =
    "rnbakabnr/9/1c5c1/p1p1p1p1p/9/9/P1P1P1P1P/1C5C1/9/RNBAKABNR w - - 0 1";

impl Position {
    /// Parse a FEN string. At least the board and side fields must be
    /// present.
    pub fn from_fen(fen: &str) -> Result<Position, ParseError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() < 2 {
            return Err(ParseError::TooFewFields { found: parts.len() });
        }

        let mut pos = Position::new();
        let (mut x, mut y) = (0u8, 0u8);
        for c in parts[0].chars() {
            if let Some(d) = c.to_digit(10) {
                x += d as u8;
            } else if c == '/' {
                y += 1;
                x = 0;
                if y >= 10 {
                    return Err(ParseError::TooManyRanks);
                }
            } else {
                let pc = Piece::from_fen_char(c).ok_or(ParseError::InvalidPiece { ch: c })?;
                if x >= 9 {
                    return Err(ParseError::TooManyFiles { rank: y as usize });
                }
                pos.add_piece(Square::from_xy(x, y), pc);
                x += 1;
            }
        }

        match parts[1] {
            "w" | "r" => {}
            "b" => pos.change_side(),
            other => {
                return Err(ParseError::InvalidSideToMove {
                    found: other.to_string(),
                })
            }
        }
        Ok(pos)
    }

    /// Parse a UCCI position string: `startpos` or `fen <six fields>`,
    /// optionally followed by `moves <iccs>...`. Every move is validated
    /// and applied; an illegal move fails the whole parse.
    pub fn from_position_str(s: &str) -> Result<Position, ParseError> {
        let parts: Vec<&str> = s.split_whitespace().collect();
        let mut pos: Option<Position> = None;
        let mut i = 0;
        while i < parts.len() {
            match parts[i] {
                "startpos" => {
                    pos = Some(Position::from_fen(INIT_FEN)?);
                    i += 1;
                }
                "fen" => {
                    if i + 7 > parts.len() {
                        return Err(ParseError::TooFewFields {
                            found: parts.len() - i - 1,
                        });
                    }
                    let fen = parts[i + 1..i + 7].join(" ");
                    pos = Some(Position::from_fen(&fen)?);
                    i += 7;
                }
                "moves" => {
                    let p = pos.as_mut().ok_or(ParseError::MissingPosition)?;
                    for token in &parts[i + 1..] {
                        let mv = Move::from_iccs(token).ok_or_else(|| ParseError::InvalidMove {
                            notation: (*token).to_string(),
                        })?;
                        if !p.legal_move(mv) || !p.make_move(mv) {
                            return Err(ParseError::IllegalMove {
                                notation: (*token).to_string(),
                            });
                        }
                    }
                    i = parts.len();
                }
                other => {
                    return Err(ParseError::UnknownDirective {
                        found: other.to_string(),
                    })
                }
            }
        }
        pos.ok_or(ParseError::MissingPosition)
    }

    /// Render the position as a six-field FEN string.
    #[must_use]
    pub fn fen_string(&self) -> String {
        let mut rows = Vec::with_capacity(10);
        for y in 0..10 {
            let mut row = String::new();
            let mut empty = 0;
            for x in 0..9 {
                match self.piece_at(Square::from_xy(x, y)).fen_char() {
                    Some(c) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(c);
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }
        let side = match self.side_to_move() {
            Side::Red => 'w',
            Side::Black => 'b',
        };
        format!("{} {} - - 0 1", rows.join("/"), side)
    }
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

//! Piece, piece-kind, and side types.
//!
//! The numeric encoding is load-bearing: a piece is a 5-bit code with the
//! kind in the low 3 bits and the side in bits 3..4, so `side << 3 | kind`
//! with Red = 1 and Black = 2. Several lookup tables and the pawn-forward
//! formula depend on these exact values.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two players. Red moves first and sits at the bottom of the board.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum Side {
    Red = 1,
    Black = 2,
}

impl Side {
    /// Both sides in index order (Red=0, Black=1)
    pub const BOTH: [Side; 2] = [Side::Red, Side::Black];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        match self {
            Side::Red => 0,
            Side::Black => 1,
        }
    }

    /// Returns the opposing side (`3 - self` in the numeric encoding).
    #[inline]
    #[must_use]
    pub const fn opponent(self) -> Side {
        match self {
            Side::Red => Side::Black,
            Side::Black => Side::Red,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Red => write!(f, "Red"),
            Side::Black => write!(f, "Black"),
        }
    }
}

/// Piece kinds in their 3-bit code order.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum PieceKind {
    King = 0,
    Advisor = 1,
    Bishop = 2,
    Knight = 3,
    Rook = 4,
    Cannon = 5,
    Pawn = 6,
}

impl PieceKind {
    /// All piece kinds in index order
    pub const ALL: [PieceKind; 7] = [
        PieceKind::King,
        PieceKind::Advisor,
        PieceKind::Bishop,
        PieceKind::Knight,
        PieceKind::Rook,
        PieceKind::Cannon,
        PieceKind::Pawn,
    ];

    #[inline]
    #[must_use]
    pub(crate) const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase letter used for this kind in FEN strings.
    #[inline]
    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            PieceKind::King => 'k',
            PieceKind::Advisor => 'a',
            PieceKind::Bishop => 'b',
            PieceKind::Knight => 'n',
            PieceKind::Rook => 'r',
            PieceKind::Cannon => 'c',
            PieceKind::Pawn => 'p',
        }
    }
}

/// A board cell: either empty (the zero value) or a side/kind pair packed
/// into the 5-bit code described in the module docs.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Piece(u8);

impl Piece {
    /// The empty cell.
    pub const EMPTY: Piece = Piece(0);

    /// Pack a side and a kind into a piece code.
    #[inline]
    #[must_use]
    pub const fn new(side: Side, kind: PieceKind) -> Piece {
        Piece(((side as u8) << 3) | kind as u8)
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// The owning side, or `None` for the empty cell.
    #[inline]
    #[must_use]
    pub const fn side(self) -> Option<Side> {
        match self.0 >> 3 {
            1 => Some(Side::Red),
            2 => Some(Side::Black),
            _ => None,
        }
    }

    /// True iff this piece belongs to `side`. The empty cell belongs to nobody.
    #[inline]
    #[must_use]
    pub const fn is_side(self, side: Side) -> bool {
        self.0 >> 3 == side as u8
    }

    /// The piece kind from the low 3 bits. Meaningless for the empty cell;
    /// callers check occupancy (or side) first.
    #[inline]
    #[must_use]
    pub const fn kind(self) -> PieceKind {
        match self.0 & 0x07 {
            0 => PieceKind::King,
            1 => PieceKind::Advisor,
            2 => PieceKind::Bishop,
            3 => PieceKind::Knight,
            4 => PieceKind::Rook,
            5 => PieceKind::Cannon,
            _ => PieceKind::Pawn,
        }
    }

    /// Parse a FEN piece letter: `K A B N R C P` red, lowercase black.
    #[must_use]
    pub fn from_fen_char(c: char) -> Option<Piece> {
        let side = if c.is_ascii_uppercase() {
            Side::Red
        } else {
            Side::Black
        };
        let kind = match c.to_ascii_lowercase() {
            'k' => PieceKind::King,
            'a' => PieceKind::Advisor,
            'b' => PieceKind::Bishop,
            'n' => PieceKind::Knight,
            'r' => PieceKind::Rook,
            'c' => PieceKind::Cannon,
            'p' => PieceKind::Pawn,
            _ => return None,
        };
        Some(Piece::new(side, kind))
    }

    /// FEN letter for this piece, `None` for the empty cell.
    #[inline]
    #[must_use]
    pub fn fen_char(self) -> Option<char> {
        let c = self.kind().to_char();
        match self.side()? {
            Side::Red => Some(c.to_ascii_uppercase()),
            Side::Black => Some(c),
        }
    }

    /// The raw 5-bit code.
    #[inline]
    #[must_use]
    pub const fn code(self) -> u8 {
        self.0
    }
}

impl fmt::Debug for Piece {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.fen_char() {
            Some(c) => write!(f, "Piece({c})"),
            None => write!(f, "Piece(empty)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_codes() {
        assert_eq!(Side::Red as u8, 1);
        assert_eq!(Side::Black as u8, 2);
    }

    #[test]
    fn test_side_opponent() {
        assert_eq!(Side::Red.opponent(), Side::Black);
        assert_eq!(Side::Black.opponent(), Side::Red);
        // numeric convention the tables rely on
        for side in Side::BOTH {
            assert_eq!(side.opponent() as u8, 3 - side as u8);
        }
    }

    #[test]
    fn test_kind_codes() {
        assert_eq!(PieceKind::King.index(), 0);
        assert_eq!(PieceKind::Advisor.index(), 1);
        assert_eq!(PieceKind::Bishop.index(), 2);
        assert_eq!(PieceKind::Knight.index(), 3);
        assert_eq!(PieceKind::Rook.index(), 4);
        assert_eq!(PieceKind::Cannon.index(), 5);
        assert_eq!(PieceKind::Pawn.index(), 6);
    }

    #[test]
    fn test_piece_packing() {
        let pc = Piece::new(Side::Red, PieceKind::King);
        assert_eq!(pc.code(), 0x08);
        let pc = Piece::new(Side::Black, PieceKind::Pawn);
        assert_eq!(pc.code(), 0x16);
        assert_eq!(pc.side(), Some(Side::Black));
        assert_eq!(pc.kind(), PieceKind::Pawn);
    }

    #[test]
    fn test_empty_piece() {
        assert!(Piece::EMPTY.is_empty());
        assert_eq!(Piece::EMPTY.side(), None);
        assert!(!Piece::EMPTY.is_side(Side::Red));
        assert!(!Piece::EMPTY.is_side(Side::Black));
        assert_eq!(Piece::EMPTY.fen_char(), None);
    }

    #[test]
    fn test_fen_chars() {
        assert_eq!(
            Piece::from_fen_char('K'),
            Some(Piece::new(Side::Red, PieceKind::King))
        );
        assert_eq!(
            Piece::from_fen_char('n'),
            Some(Piece::new(Side::Black, PieceKind::Knight))
        );
        assert_eq!(Piece::from_fen_char('x'), None);

        for c in "KABNRCPkabnrcp".chars() {
            let pc = Piece::from_fen_char(c).unwrap();
            assert_eq!(pc.fen_char(), Some(c));
        }
    }

    #[test]
    fn test_is_side() {
        let pc = Piece::new(Side::Red, PieceKind::Rook);
        assert!(pc.is_side(Side::Red));
        assert!(!pc.is_side(Side::Black));
    }
}

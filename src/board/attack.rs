//! In-check detection.

use super::tables::{knight_leg, KNIGHT_DELTAS, LINE_DELTAS};
use super::types::{Piece, PieceKind, Square};
use super::Position;

impl Position {
    /// Whether the side to move's King is currently attacked.
    ///
    /// Tests, in order: opposing pawns one step ahead or beside the King,
    /// opposing knights whose leg square is empty, and the four orthogonal
    /// rays. On each ray the first piece met attacks if it is an opposing
    /// Rook or King (two Kings on an open file face each other); the second
    /// piece attacks if it is an opposing Cannon, which needs exactly one
    /// screen.
    #[must_use]
    pub fn checked(&self) -> bool {
        let side = self.side_to_move;
        let own_king = Piece::new(side, PieceKind::King);
        let Some(king_sq) = Square::all().find(|&sq| self.piece_at(sq) == own_king) else {
            return false;
        };
        let op = side.opponent();

        let op_pawn = Piece::new(op, PieceKind::Pawn);
        if self.piece_at(king_sq.forward(side)) == op_pawn {
            return true;
        }
        for delta in [-0x01, 0x01] {
            if self.piece_at(king_sq.offset(delta)) == op_pawn {
                return true;
            }
        }

        let op_knight = Piece::new(op, PieceKind::Knight);
        for &delta in &KNIGHT_DELTAS {
            let sq = king_sq.offset(delta);
            if self.piece_at(sq) == op_knight && self.piece_at(knight_leg(sq, king_sq)).is_empty()
            {
                return true;
            }
        }

        let op_rook = Piece::new(op, PieceKind::Rook);
        let op_cannon = Piece::new(op, PieceKind::Cannon);
        let op_king = Piece::new(op, PieceKind::King);
        for &delta in &LINE_DELTAS {
            let mut sq = king_sq.offset(delta);
            while sq.in_board() && self.piece_at(sq).is_empty() {
                sq = sq.offset(delta);
            }
            if !sq.in_board() {
                continue;
            }
            let pc = self.piece_at(sq);
            if pc == op_rook || pc == op_king {
                return true;
            }
            sq = sq.offset(delta);
            while sq.in_board() && self.piece_at(sq).is_empty() {
                sq = sq.offset(delta);
            }
            if !sq.in_board() {
                continue;
            }
            if self.piece_at(sq) == op_cannon {
                return true;
            }
        }
        false
    }
}

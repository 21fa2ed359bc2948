//! Pseudo-legal move generation.
//!
//! Moves that leave the mover's own King in check are generated here and
//! rejected by `make_move`; only `legal_move` filters them eagerly.

use super::tables::{
    knight_leg, ADVISOR_DELTAS, BISHOP_DELTAS, KNIGHT_DELTAS, LINE_DELTAS,
};
use super::types::{Move, MoveList, Piece, PieceKind, Side, Square};
use super::Position;

/// Destination filter: never onto an own piece, and in captures-only mode
/// only onto an occupied square.
#[inline]
fn can_land(pc_dst: Piece, side: Side, captures_only: bool) -> bool {
    !pc_dst.is_side(side) && (!captures_only || !pc_dst.is_empty())
}

impl Position {
    /// Generate pseudo-legal moves for the side to move. With
    /// `captures_only` set, only moves onto occupied squares are emitted.
    #[must_use]
    pub fn generate_moves(&self, captures_only: bool) -> MoveList {
        let mut moves = MoveList::new();
        let side = self.side_to_move;
        for sq_src in Square::all() {
            let pc_src = self.piece_at(sq_src);
            if !pc_src.is_side(side) {
                continue;
            }
            match pc_src.kind() {
                PieceKind::King => {
                    for &delta in &LINE_DELTAS {
                        let sq_dst = sq_src.offset(delta);
                        if !sq_dst.in_palace() {
                            continue;
                        }
                        if can_land(self.piece_at(sq_dst), side, captures_only) {
                            moves.push(Move::new(sq_src, sq_dst));
                        }
                    }
                }
                PieceKind::Advisor => {
                    for &delta in &ADVISOR_DELTAS {
                        let sq_dst = sq_src.offset(delta);
                        if !sq_dst.in_palace() {
                            continue;
                        }
                        if can_land(self.piece_at(sq_dst), side, captures_only) {
                            moves.push(Move::new(sq_src, sq_dst));
                        }
                    }
                }
                PieceKind::Bishop => {
                    for &delta in &BISHOP_DELTAS {
                        let sq_dst = sq_src.offset(delta);
                        // bishops never cross the river
                        if !sq_dst.in_board() || sq_dst.side() != side {
                            continue;
                        }
                        let eye = Square::from_index((sq_src.index() + sq_dst.index()) >> 1);
                        if !self.piece_at(eye).is_empty() {
                            continue;
                        }
                        if can_land(self.piece_at(sq_dst), side, captures_only) {
                            moves.push(Move::new(sq_src, sq_dst));
                        }
                    }
                }
                PieceKind::Knight => {
                    for &delta in &KNIGHT_DELTAS {
                        let sq_dst = sq_src.offset(delta);
                        if !sq_dst.in_board() {
                            continue;
                        }
                        if !self.piece_at(knight_leg(sq_src, sq_dst)).is_empty() {
                            continue;
                        }
                        if can_land(self.piece_at(sq_dst), side, captures_only) {
                            moves.push(Move::new(sq_src, sq_dst));
                        }
                    }
                }
                PieceKind::Rook => {
                    for &delta in &LINE_DELTAS {
                        let mut sq_dst = sq_src.offset(delta);
                        while sq_dst.in_board() {
                            let pc_dst = self.piece_at(sq_dst);
                            if pc_dst.is_empty() {
                                if !captures_only {
                                    moves.push(Move::new(sq_src, sq_dst));
                                }
                            } else {
                                if !pc_dst.is_side(side) {
                                    moves.push(Move::new(sq_src, sq_dst));
                                }
                                break;
                            }
                            sq_dst = sq_dst.offset(delta);
                        }
                    }
                }
                PieceKind::Cannon => {
                    for &delta in &LINE_DELTAS {
                        let mut sq_dst = sq_src.offset(delta);
                        while sq_dst.in_board() {
                            if !self.piece_at(sq_dst).is_empty() {
                                break;
                            }
                            if !captures_only {
                                moves.push(Move::new(sq_src, sq_dst));
                            }
                            sq_dst = sq_dst.offset(delta);
                        }
                        // past the screen: the next piece may be captured
                        sq_dst = sq_dst.offset(delta);
                        while sq_dst.in_board() {
                            let pc_dst = self.piece_at(sq_dst);
                            if !pc_dst.is_empty() {
                                if !pc_dst.is_side(side) {
                                    moves.push(Move::new(sq_src, sq_dst));
                                }
                                break;
                            }
                            sq_dst = sq_dst.offset(delta);
                        }
                    }
                }
                PieceKind::Pawn => {
                    let sq_dst = sq_src.forward(side);
                    if sq_dst.in_board() && can_land(self.piece_at(sq_dst), side, captures_only) {
                        moves.push(Move::new(sq_src, sq_dst));
                    }
                    // sideways steps once across the river
                    if sq_src.side() != side {
                        for delta in [-0x01, 0x01] {
                            let sq_dst = sq_src.offset(delta);
                            if sq_dst.in_board()
                                && can_land(self.piece_at(sq_dst), side, captures_only)
                            {
                                moves.push(Move::new(sq_src, sq_dst));
                            }
                        }
                    }
                }
            }
        }
        moves
    }
}

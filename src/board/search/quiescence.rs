//! Quiescence search at the horizon.

use super::super::tables::MVV_LVA_WEIGHT;
use super::super::types::{Move, Piece, ScoredMoveList};
use super::super::Position;
use super::{SearchContext, MATE_VALUE};

#[inline]
fn capture_weight(pc: Piece) -> i32 {
    if pc.is_empty() {
        0
    } else {
        MVV_LVA_WEIGHT[pc.kind().index()]
    }
}

impl Position {
    /// Resolve tactical noise below the horizon. In check the full move
    /// set is searched (an escape search, history-ordered); otherwise the
    /// stand-pat evaluation bounds the node and only captures are tried,
    /// ordered most-valuable-victim first, least-valuable-attacker as the
    /// tiebreak.
    pub(crate) fn search_quiescent(
        &mut self,
        ctx: &mut SearchContext,
        mut alpha: i32,
        beta: i32,
    ) -> (i32, Vec<Move>) {
        if let Some(vl) = self.check_repetition() {
            return (vl, Vec::new());
        }
        if self.distance == ctx.max_distance {
            return (self.evaluate(), Vec::new());
        }

        let mut vl_best = -MATE_VALUE;
        let mut ordered = ScoredMoveList::new();
        if self.in_check() {
            let moves = self.generate_moves(false);
            for &mv in &moves {
                ordered.push(mv, ctx.history.score(mv));
            }
        } else {
            let vl = self.evaluate();
            if vl > vl_best {
                vl_best = vl;
                if vl >= beta {
                    return (vl, Vec::new());
                }
                if vl > alpha {
                    alpha = vl;
                }
            }
            let moves = self.generate_moves(true);
            for &mv in &moves {
                ordered.push(mv, self.mvv_lva_score(mv));
            }
        }
        ordered.sort_by_score_desc();

        let mut best_line: Vec<Move> = Vec::new();
        for scored in ordered.iter() {
            let mv = scored.mv;
            if !self.make_move(mv) {
                continue;
            }
            let (vl_child, line) = self.search_quiescent(ctx, -beta, -alpha);
            let vl = -vl_child;
            self.undo_move();
            if vl > vl_best {
                vl_best = vl;
                if vl >= beta {
                    return (vl, Vec::new());
                }
                if vl > alpha {
                    alpha = vl;
                    best_line = line;
                    best_line.push(mv);
                }
            }
        }

        if vl_best == -MATE_VALUE {
            (
                (self.distance - ctx.init_distance) as i32 - MATE_VALUE,
                Vec::new(),
            )
        } else {
            (vl_best, best_line)
        }
    }

    /// Capture ordering key: `victim << 3 − attacker` over the small
    /// per-kind weights.
    #[inline]
    pub(crate) fn mvv_lva_score(&self, mv: Move) -> i32 {
        (capture_weight(self.piece_at(mv.dst())) << 3) - capture_weight(self.piece_at(mv.src()))
    }
}

//! The negamax alpha-beta recursion.

use crate::tt::Bound;

use super::super::types::{Move, ScoredMoveList};
use super::super::Position;
use super::{SearchContext, MATE_VALUE};

impl Position {
    /// Full-width search to `depth` plies below the root, inside the
    /// `(alpha, beta)` window.
    ///
    /// Returns the score and the line that produced it, child-first; the
    /// driver reverses the accumulated PV once. A cancelled search unwinds
    /// with `(0, [])`, which the driver discards.
    pub(crate) fn search_alpha_beta(
        &mut self,
        ctx: &mut SearchContext,
        mut alpha: i32,
        beta: i32,
        depth: i32,
    ) -> (i32, Vec<Move>) {
        ctx.tick();

        if let Some(vl) = ctx.tt.probe(self.hash, depth, alpha, beta) {
            return (vl, Vec::new());
        }

        if self.distance > ctx.init_distance {
            // at the horizon, resolve captures before trusting the eval
            if depth <= 0 {
                return self.search_quiescent(ctx, alpha, beta);
            }
            if let Some(vl) = self.check_repetition() {
                return (vl, Vec::new());
            }
            if self.distance == ctx.max_distance {
                return (self.evaluate(), Vec::new());
            }
        }

        let original_alpha = alpha;
        let moves = self.generate_moves(false);
        let mut ordered = ScoredMoveList::new();
        for &mv in &moves {
            ordered.push(mv, ctx.history.score(mv));
        }
        ordered.sort_by_score_desc();

        let mut vl_best = -MATE_VALUE;
        let mut mv_best = Move::NULL;
        let mut best_line: Vec<Move> = Vec::new();
        for scored in ordered.iter() {
            let mv = scored.mv;
            if !self.make_move(mv) {
                continue;
            }
            let (vl_child, line) = self.search_alpha_beta(ctx, -beta, -alpha, depth - 1);
            let vl = -vl_child;
            self.undo_move();
            if ctx.stop {
                return (0, Vec::new());
            }
            if vl > vl_best {
                vl_best = vl;
                if vl >= beta {
                    mv_best = mv;
                    break;
                }
                if vl > alpha {
                    mv_best = mv;
                    alpha = vl;
                    best_line = line;
                    best_line.push(mv);
                }
            }
        }

        // every move left the King in check: mated, sooner is worse
        if vl_best == -MATE_VALUE {
            return (
                (self.distance - ctx.init_distance) as i32 - MATE_VALUE,
                Vec::new(),
            );
        }

        if !mv_best.is_null() {
            ctx.history.update(mv_best, depth);
        }

        let bound = if vl_best >= beta {
            Bound::Lower
        } else if vl_best <= original_alpha {
            Bound::Upper
        } else {
            Bound::Exact
        };
        ctx.tt.store(self.hash, depth, bound, vl_best);
        (vl_best, best_line)
    }
}

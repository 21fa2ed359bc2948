//! Iterative-deepening alpha-beta search.
//!
//! The driver walks depths 0..63 over a negamax alpha-beta with
//! transposition-table probing, history-heuristic move ordering,
//! quiescence at the horizon, and repetition scoring. Cancellation is
//! cooperative: the node tick polls the wall clock every 8192 nodes and
//! raises a stop flag; the partial depth in flight is discarded.

mod alphabeta;
mod quiescence;

use std::time::{Duration, Instant};

use crate::tt::TranspositionTable;

use super::types::Move;
use super::Position;

/// Score of a delivered mate.
pub const MATE_VALUE: i32 = 10000;

/// Scores beyond this margin are proven mates; the driver stops deepening.
pub const WIN_VALUE: i32 = MATE_VALUE - 100;

/// Score of a scored-as-draw repetition, from the mover's view.
pub const DRAW_VALUE: i32 = -20;

/// Side-to-move bonus folded into the static evaluation.
pub(crate) const ADVANCED_VALUE: i32 = 3;

/// Hard cap on search depth and on the distance-to-root horizon.
pub const LIMIT_DEPTH: usize = 64;

/// History-heuristic table keyed by the 16-bit move code. Ignoring the
/// moving piece keeps the table at 64K entries, which works well for this
/// engine.
pub(crate) struct HistoryTable {
    entries: Vec<i32>,
}

impl HistoryTable {
    fn new() -> Self {
        HistoryTable {
            entries: vec![0; 1 << 16],
        }
    }

    #[inline]
    pub(crate) fn score(&self, mv: Move) -> i32 {
        self.entries[mv.as_u16() as usize]
    }

    pub(crate) fn update(&mut self, mv: Move, depth: i32) {
        let entry = &mut self.entries[mv.as_u16() as usize];
        *entry = entry.saturating_add(depth * depth);
    }
}

/// Per-search transient state. Lives for one `search_main` call; the
/// history table and transposition table persist across its deepening
/// iterations.
pub(crate) struct SearchContext {
    pub(crate) nodes: u64,
    deadline: Instant,
    pub(crate) stop: bool,
    pub(crate) init_distance: usize,
    pub(crate) max_distance: usize,
    pub(crate) history: HistoryTable,
    pub(crate) tt: TranspositionTable,
}

impl SearchContext {
    fn new(deadline: Instant, root_distance: usize) -> Self {
        SearchContext {
            nodes: 0,
            deadline,
            stop: false,
            init_distance: root_distance,
            max_distance: root_distance + LIMIT_DEPTH,
            history: HistoryTable::new(),
            tt: TranspositionTable::new(),
        }
    }

    /// Count a node; every 8192 nodes, check the wall clock and raise the
    /// stop flag once the deadline has passed.
    #[inline]
    pub(crate) fn tick(&mut self) {
        self.nodes += 1;
        if self.nodes & 0x1fff == 0 && Instant::now() >= self.deadline {
            self.stop = true;
        }
    }
}

impl Position {
    /// Search the position for up to `budget` wall-clock time and return
    /// the principal variation with its score.
    ///
    /// Iterative deepening adopts each fully completed depth; a depth cut
    /// short by the deadline is discarded. Deepening stops early once a
    /// proven mate appears. If not even depth 0 completes, the PV is empty
    /// and the score 0.
    #[must_use]
    pub fn search_main(&mut self, budget: Duration) -> (Vec<Move>, i32) {
        let start = Instant::now();
        let mut ctx = SearchContext::new(start + budget, self.distance);
        let mut best_score = 0;
        let mut pv: Vec<Move> = Vec::new();
        let mut nodes = 0;
        let mut max_depth: i32 = 0;
        for depth in 0..LIMIT_DEPTH as i32 {
            ctx.nodes = 0;
            let (vl, line) = self.search_alpha_beta(&mut ctx, -MATE_VALUE, MATE_VALUE, depth);
            if ctx.stop {
                max_depth = depth - 1;
                break;
            }
            best_score = vl;
            pv = line;
            nodes = ctx.nodes;
            max_depth = depth;
            if vl > WIN_VALUE || vl < -WIN_VALUE {
                break;
            }
        }
        pv.reverse();
        log::info!(
            "search depth: {}, search nodes: {}, search time: {:?}, best move: {}",
            max_depth,
            nodes,
            start.elapsed(),
            pv.first().map_or_else(|| "(none)".to_string(), |mv| mv.iccs())
        );
        (pv, best_score)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_history_table_accumulates() {
        let mut table = HistoryTable::new();
        let mv = Move::from_iccs("b2e2").unwrap();
        assert_eq!(table.score(mv), 0);
        table.update(mv, 3);
        table.update(mv, 2);
        assert_eq!(table.score(mv), 13);
        assert_eq!(table.score(Move::from_iccs("a0a1").unwrap()), 0);
    }

    #[test]
    fn test_tick_counts_nodes() {
        let mut ctx = SearchContext::new(Instant::now() + Duration::from_secs(60), 0);
        for _ in 0..100 {
            ctx.tick();
        }
        assert_eq!(ctx.nodes, 100);
        assert!(!ctx.stop);
    }

    #[test]
    fn test_tick_raises_stop_after_deadline() {
        let mut ctx = SearchContext::new(Instant::now(), 0);
        // the flag is only polled at 8192-node boundaries
        for _ in 0..0x2000 {
            ctx.tick();
        }
        assert!(ctx.stop);
    }
}

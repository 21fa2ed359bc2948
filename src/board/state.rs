//! Position state and the do/undo machinery.
//!
//! `add_piece` and `del_piece` are the only writers to the board array;
//! every other mutation routes through them so the material/positional
//! scores and the Zobrist hash can never drift from the board.

use std::fmt;

use crate::zobrist;

use super::search::{ADVANCED_VALUE, DRAW_VALUE, LIMIT_DEPTH, MATE_VALUE};
use super::tables;
use super::types::{Move, Piece, Side, Square};

/// One played half-move on the history stack.
#[derive(Clone, Copy, Debug)]
pub(crate) struct HistoryEntry {
    pub(crate) mv: Move,
    pub(crate) captured: Piece,
    /// Whether the side to move after this move is in check.
    pub(crate) checked: bool,
    /// Position hash before the move was made.
    pub(crate) hash_before: u64,
}

const SENTINEL: HistoryEntry = HistoryEntry {
    mv: Move::NULL,
    captured: Piece::EMPTY,
    checked: false,
    hash_before: 0,
};

/// The mutable game state: a 16×16 sparse board, side to move, incremental
/// material+positional scores per side, Zobrist hash, and the move-history
/// stack used for undo and repetition detection.
#[derive(Clone)]
pub struct Position {
    pub(crate) squares: [Piece; 256],
    pub(crate) side_to_move: Side,
    pub(crate) vl_red: i32,
    pub(crate) vl_black: i32,
    pub(crate) hash: u64,
    pub(crate) history: Vec<HistoryEntry>,
    /// Number of half-moves on the stack (the sentinel excluded).
    pub(crate) distance: usize,
}

impl Position {
    /// An empty board with Red to move.
    #[must_use]
    pub fn new() -> Self {
        let mut history = Vec::with_capacity(LIMIT_DEPTH * 2);
        history.push(SENTINEL);
        Position {
            squares: [Piece::EMPTY; 256],
            side_to_move: Side::Red,
            vl_red: 0,
            vl_black: 0,
            hash: 0,
            history,
            distance: 0,
        }
    }

    /// The standard opening position.
    ///
    /// # Panics
    /// Never; the opening FEN constant is well-formed.
    #[must_use]
    pub fn startpos() -> Self {
        Position::from_fen(super::fen::INIT_FEN).expect("well-formed opening FEN")
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Side {
        self.side_to_move
    }

    #[inline]
    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    #[inline]
    #[must_use]
    pub fn piece_at(&self, sq: Square) -> Piece {
        self.squares[sq.index()]
    }

    /// Half-moves played since this position was constructed.
    #[inline]
    #[must_use]
    pub fn distance(&self) -> usize {
        self.distance
    }

    /// Put `pc` on `sq`, crediting its side's score and folding its key
    /// into the hash. Placing the empty piece just clears the cell.
    pub fn add_piece(&mut self, sq: Square, pc: Piece) {
        self.squares[sq.index()] = pc;
        let Some(side) = pc.side() else { return };
        match side {
            Side::Red => self.vl_red += tables::piece_value(pc.kind(), sq),
            Side::Black => self.vl_black += tables::piece_value(pc.kind(), sq.flip()),
        }
        self.hash ^= zobrist::piece_square(sq, pc);
    }

    /// Remove and return the piece on `sq`; a no-op on an empty cell.
    pub fn del_piece(&mut self, sq: Square) -> Piece {
        let pc = self.squares[sq.index()];
        let Some(side) = pc.side() else {
            return Piece::EMPTY;
        };
        self.squares[sq.index()] = Piece::EMPTY;
        match side {
            Side::Red => self.vl_red -= tables::piece_value(pc.kind(), sq),
            Side::Black => self.vl_black -= tables::piece_value(pc.kind(), sq.flip()),
        }
        self.hash ^= zobrist::piece_square(sq, pc);
        pc
    }

    /// Slide the piece on `mv.src()` to `mv.dst()`, returning whatever was
    /// captured there. Does not touch the side to move or the stack.
    pub(crate) fn move_piece(&mut self, mv: Move) -> Piece {
        let moved = self.del_piece(mv.src());
        let captured = self.del_piece(mv.dst());
        self.add_piece(mv.dst(), moved);
        captured
    }

    /// Inverse of `move_piece`.
    pub(crate) fn undo_move_piece(&mut self, mv: Move, captured: Piece) {
        self.del_piece(mv.src());
        let moved = self.del_piece(mv.dst());
        self.add_piece(mv.src(), moved);
        self.add_piece(mv.dst(), captured);
    }

    /// Toggle the side to move, folding the side key into the hash.
    pub fn change_side(&mut self) {
        self.side_to_move = self.side_to_move.opponent();
        self.hash ^= zobrist::side_to_move();
    }

    /// Static evaluation from the side to move's point of view, including
    /// the first-move bonus.
    #[must_use]
    pub fn evaluate(&self) -> i32 {
        match self.side_to_move {
            Side::Red => self.vl_red - self.vl_black + ADVANCED_VALUE,
            Side::Black => self.vl_black - self.vl_red + ADVANCED_VALUE,
        }
    }

    /// Play `mv`. Returns false (with the position unchanged) if the move
    /// would leave the mover's own King in check. The null move skips the
    /// self-check test; callers must not pass it while in check.
    pub fn make_move(&mut self, mv: Move) -> bool {
        let hash_before = self.hash;
        let captured = self.move_piece(mv);
        if !mv.is_null() && self.checked() {
            self.undo_move_piece(mv, captured);
            return false;
        }
        self.change_side();
        let checked = self.checked();
        self.history.push(HistoryEntry {
            mv,
            captured,
            checked,
            hash_before,
        });
        self.distance += 1;
        true
    }

    /// Take back the most recent move. Must mirror `make_move` in strict
    /// LIFO order.
    pub fn undo_move(&mut self) {
        self.change_side();
        let entry = self.history[self.distance];
        self.undo_move_piece(entry.mv, entry.captured);
        self.distance -= 1;
        self.history.truncate(self.distance + 1);
    }

    /// Whether the side to move is in check, read from the stack top when
    /// available.
    #[must_use]
    pub fn in_check(&self) -> bool {
        if self.distance == 0 {
            self.checked()
        } else {
            self.history[self.distance].checked
        }
    }

    /// True if `mv` moves a piece of the side to move and does not leave
    /// its own King in check.
    pub fn legal_move(&mut self, mv: Move) -> bool {
        if !self.piece_at(mv.src()).is_side(self.side_to_move) {
            return false;
        }
        if self.make_move(mv) {
            self.undo_move();
            true
        } else {
            false
        }
    }

    /// Scan the history stack for a repetition of the current position.
    ///
    /// Walks from the top toward the root, stopping at the first capture
    /// (captures make a position unrepeatable). Entries alternate between
    /// the opponent's moves and our own; a repetition is found when an
    /// earlier own-move's `hash_before` matches the current hash, meaning
    /// the same position with the same side to move has occurred. The
    /// score encodes the "chaser loses" convention: a side that checked on
    /// every intervening ply is scored as losing.
    #[must_use]
    pub fn check_repetition(&self) -> Option<i32> {
        let mut self_side = false;
        let mut self_always_check = true;
        let mut op_always_check = true;
        for idx in (1..=self.distance).rev() {
            let entry = &self.history[idx];
            if !entry.captured.is_empty() {
                break;
            }
            if self_side {
                self_always_check &= entry.checked;
                if entry.hash_before == self.hash {
                    return Some(repetition_value(self_always_check, op_always_check));
                }
            } else {
                op_always_check &= entry.checked;
            }
            self_side = !self_side;
        }
        None
    }

    /// Scores for in-crate tests that recompute them from scratch.
    #[cfg(test)]
    pub(crate) fn material_scores(&self) -> (i32, i32) {
        (self.vl_red, self.vl_black)
    }
}

fn repetition_value(self_always_check: bool, op_always_check: bool) -> i32 {
    let mut vl = 0;
    if self_always_check {
        vl += -MATE_VALUE;
    }
    if op_always_check {
        vl += MATE_VALUE;
    }
    if vl == 0 {
        vl = -DRAW_VALUE;
    }
    vl
}

impl Default for Position {
    fn default() -> Self {
        Position::new()
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..10 {
            write!(f, "{} ", 9 - y)?;
            for x in 0..9 {
                let pc = self.piece_at(Square::from_xy(x, y));
                write!(f, "{}", pc.fen_char().map_or('.', |c| c))?;
            }
            writeln!(f)?;
            if y == 4 {
                writeln!(f, "  ---------")?;
            }
        }
        write!(f, "  abcdefghi ({} to move)", self.side_to_move)
    }
}

//! Transposition table for caching search results.
//!
//! Direct-mapped over the low 16 bits of the Zobrist hash; the full hash
//! is stored for validation. Replacement is depth-preferred on the same
//! key, unconditional on a key mismatch.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bound {
    /// Score is the exact value.
    Exact,
    /// Score is at least this value (a fail-high).
    Lower,
    /// Score is at most this value (a fail-low).
    Upper,
}

#[derive(Clone, Copy, Debug)]
struct Entry {
    hash: u64,
    depth: i32,
    bound: Bound,
    value: i32,
}

const TABLE_SIZE: usize = 1 << 16;

pub struct TranspositionTable {
    entries: Vec<Option<Entry>>,
}

impl TranspositionTable {
    #[must_use]
    pub fn new() -> Self {
        TranspositionTable {
            entries: vec![None; TABLE_SIZE],
        }
    }

    #[inline]
    fn index(hash: u64) -> usize {
        (hash & (TABLE_SIZE as u64 - 1)) as usize
    }

    /// Look up `hash` at search depth `depth` inside the `(alpha, beta)`
    /// window. Returns a score usable in place of the subtree search, or
    /// `None` on a miss.
    #[must_use]
    pub fn probe(&self, hash: u64, depth: i32, alpha: i32, beta: i32) -> Option<i32> {
        let entry = self.entries[Self::index(hash)]?;
        if entry.hash != hash || entry.depth < depth {
            return None;
        }
        match entry.bound {
            Bound::Exact => Some(entry.value),
            Bound::Upper if entry.value <= alpha => Some(alpha),
            Bound::Lower if entry.value >= beta => Some(beta),
            _ => None,
        }
    }

    /// Record a search result. An existing entry for the same hash with a
    /// strictly greater depth is kept; anything else is overwritten.
    pub fn store(&mut self, hash: u64, depth: i32, bound: Bound, value: i32) {
        let slot = &mut self.entries[Self::index(hash)];
        if let Some(existing) = slot {
            if existing.hash == hash && existing.depth > depth {
                return;
            }
        }
        *slot = Some(Entry {
            hash,
            depth,
            bound,
            value,
        });
    }
}

impl Default for TranspositionTable {
    fn default() -> Self {
        TranspositionTable::new()
    }
}

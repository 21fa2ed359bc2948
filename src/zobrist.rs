//! Zobrist hashing keys.
//!
//! A process-wide table of 64-bit pseudorandom constants, one per
//! (side, kind, square) triple plus one for "Black to move". The position
//! hash is the XOR fold of the keys of all occupied squares, XOR the
//! side-to-move key iff Black is to move; add/remove piece and change of
//! side each maintain it with a single XOR.

use once_cell::sync::Lazy;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::board::{Piece, Square};

/// Fixed RNG seed so hashes (and therefore search traces and tests) are
/// reproducible across runs.
const KEY_SEED: u64 = 0x9e3779b97f4a7c15;

struct Keys {
    piece_square: [[[u64; 256]; 7]; 2],
    side_to_move: u64,
}

static KEYS: Lazy<Keys> = Lazy::new(|| {
    let mut rng = StdRng::seed_from_u64(KEY_SEED);
    let mut piece_square = [[[0u64; 256]; 7]; 2];
    for by_kind in &mut piece_square {
        for by_square in by_kind.iter_mut() {
            for key in by_square.iter_mut() {
                *key = rng.gen();
            }
        }
    }
    Keys {
        piece_square,
        side_to_move: rng.gen(),
    }
});

/// Key for `pc` standing on `sq`. The empty piece hashes to zero so callers
/// may XOR unconditionally.
#[inline]
#[must_use]
pub fn piece_square(sq: Square, pc: Piece) -> u64 {
    match pc.side() {
        Some(side) => KEYS.piece_square[side.index()][pc.kind().index()][sq.index()],
        None => 0,
    }
}

/// Key XORed into the hash while Black is to move.
#[inline]
#[must_use]
pub fn side_to_move() -> u64 {
    KEYS.side_to_move
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::{PieceKind, Side};

    #[test]
    fn test_deterministic() {
        let sq = Square::from_xy(4, 5);
        let pc = Piece::new(Side::Red, PieceKind::Rook);
        assert_eq!(piece_square(sq, pc), piece_square(sq, pc));
        assert_eq!(side_to_move(), side_to_move());
    }

    #[test]
    fn test_empty_piece_hashes_to_zero() {
        assert_eq!(piece_square(Square::from_xy(0, 0), Piece::EMPTY), 0);
    }

    #[test]
    fn test_keys_distinct() {
        let sq = Square::from_xy(4, 5);
        let red_rook = Piece::new(Side::Red, PieceKind::Rook);
        let black_rook = Piece::new(Side::Black, PieceKind::Rook);
        let red_cannon = Piece::new(Side::Red, PieceKind::Cannon);
        assert_ne!(piece_square(sq, red_rook), piece_square(sq, black_rook));
        assert_ne!(piece_square(sq, red_rook), piece_square(sq, red_cannon));
        assert_ne!(
            piece_square(sq, red_rook),
            piece_square(sq.flip(), red_rook)
        );
        assert_ne!(piece_square(sq, red_rook), 0);
        assert_ne!(side_to_move(), 0);
    }
}

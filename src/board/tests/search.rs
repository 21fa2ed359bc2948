use std::time::Duration;

use crate::board::{Piece, PieceKind, Position, Side, Square};

#[test]
fn test_search_returns_a_legal_move() {
    let mut pos = Position::startpos();
    let (pv, _score) = pos.search_main(Duration::from_millis(200));
    let best = pv[0];
    assert!(pos.legal_move(best));
    // the search restores the position it worked on
    assert_eq!(pos.distance(), 0);
    assert_eq!(pos.fen_string(), crate::board::INIT_FEN);
}

#[test]
fn test_search_prefers_the_bigger_capture() {
    let mut pos = Position::new();
    pos.add_piece(
        Square::from_index(0xa7),
        Piece::new(Side::Red, PieceKind::Bishop),
    );
    pos.add_piece(
        Square::from_index(0x85),
        Piece::new(Side::Black, PieceKind::Rook),
    );
    pos.add_piece(
        Square::from_index(0xc9),
        Piece::new(Side::Black, PieceKind::Pawn),
    );
    let (pv, _score) = pos.search_main(Duration::from_millis(300));
    assert_eq!(pv[0].as_u16(), 0x85a7);
}

#[test]
fn test_search_determinism() {
    // a hanging rook keeps the best move identical at every depth, so the
    // answer does not depend on how deep the clock let each run go
    let build = || {
        let mut pos = Position::new();
        pos.add_piece(
            Square::from_index(0xa7),
            Piece::new(Side::Red, PieceKind::Bishop),
        );
        pos.add_piece(
            Square::from_index(0x85),
            Piece::new(Side::Black, PieceKind::Rook),
        );
        pos.add_piece(
            Square::from_index(0xc9),
            Piece::new(Side::Black, PieceKind::Pawn),
        );
        pos
    };
    let (pv_a, _) = build().search_main(Duration::from_millis(200));
    let (pv_b, _) = build().search_main(Duration::from_millis(200));
    assert_eq!(pv_a.first(), pv_b.first());
}

#[test]
fn test_trapped_king_scores_as_mated() {
    // three black pawns smother the lone red king: d0 and f0 walk into a
    // pawn's forward square, and taking e1 leaves the king beside both
    let mut pos =
        Position::from_fen("4k4/9/9/9/9/9/9/9/3ppp3/4K4 w - - 0 1").unwrap();
    let (pv, score) = pos.search_main(Duration::from_millis(200));
    assert!(pv.is_empty());
    assert!(score <= -9900, "expected a mate score, got {score}");
}

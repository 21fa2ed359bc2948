//! End-to-end UCCI session tests.

use xiangqi_engine::board::{Move, Position};
use xiangqi_engine::ucci::Engine;

fn run(engine: &mut Engine, line: &str) -> (String, bool) {
    let mut out = Vec::new();
    let more = engine.exec_command(&mut out, line).unwrap();
    (String::from_utf8(out).unwrap(), more)
}

#[test]
fn handshake_and_readiness() {
    let mut engine = Engine::new();
    let (reply, more) = run(&mut engine, "ucci");
    assert!(more);
    let last = reply.lines().last().unwrap();
    assert_eq!(last, "ucciok");

    let (reply, _) = run(&mut engine, "isready");
    assert_eq!(reply.trim(), "readyok");
}

#[test]
fn full_session_produces_a_legal_bestmove() {
    let mut engine = Engine::new();
    run(&mut engine, "ucci");
    run(&mut engine, "isready");
    let (reply, _) = run(&mut engine, "position startpos moves b2e2 h9g7");
    assert!(reply.is_empty());

    let (reply, more) = run(&mut engine, "go");
    assert!(more);
    let bestmove = reply
        .lines()
        .find_map(|line| line.strip_prefix("bestmove "))
        .expect("go must answer with a bestmove");
    let mv = Move::from_iccs(bestmove).expect("bestmove must be ICCS");

    let mut pos = Position::from_position_str("startpos moves b2e2 h9g7").unwrap();
    assert!(pos.legal_move(mv), "engine played illegal {bestmove}");

    let (reply, more) = run(&mut engine, "quit");
    assert_eq!(reply.trim(), "bye");
    assert!(!more);
}

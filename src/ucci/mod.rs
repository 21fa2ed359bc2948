//! UCCI protocol dispatcher.
//!
//! Recognizes the `ucci`, `isready`, `position`, `go`, and `quit`
//! directives and answers `ucciok`, `readyok`, `bestmove <iccs>`
//! (or `nobestmove`), and `bye`. Unknown directives are ignored, as the
//! protocol requires.

use std::io::{self, Write};
use std::time::Duration;

use crate::board::Position;

/// Wall-clock budget for one `go` directive.
const THINK_TIME: Duration = Duration::from_secs(3);

/// Engine state behind the command loop: just the current position.
pub struct Engine {
    position: Option<Position>,
}

impl Engine {
    #[must_use]
    pub fn new() -> Self {
        Engine { position: None }
    }

    /// Execute one command line, writing any protocol answer to `out`.
    /// Returns `false` when the engine should quit.
    pub fn exec_command<W: Write>(&mut self, out: &mut W, line: &str) -> io::Result<bool> {
        let line = line.trim();
        let (cmd, rest) = line.split_once(' ').unwrap_or((line, ""));
        match cmd {
            "ucci" => {
                writeln!(out, "id name {}", env!("CARGO_PKG_NAME"))?;
                writeln!(out, "id version {}", env!("CARGO_PKG_VERSION"))?;
                writeln!(out, "ucciok")?;
            }
            "isready" => writeln!(out, "readyok")?,
            "position" => match Position::from_position_str(rest) {
                Ok(pos) => self.position = Some(pos),
                Err(err) => log::error!("position parse failure: {rest}: {err}"),
            },
            "go" => self.go(out)?,
            "quit" => {
                writeln!(out, "bye")?;
                return Ok(false);
            }
            _ => {}
        }
        Ok(true)
    }

    fn go<W: Write>(&mut self, out: &mut W) -> io::Result<()> {
        let Some(pos) = self.position.as_mut() else {
            log::warn!("go before any position, ignoring");
            return Ok(());
        };
        let (pv, score) = pos.search_main(THINK_TIME);
        match pv.first() {
            Some(mv) => {
                log::info!("bestmove {}, score {score}", mv.iccs());
                writeln!(out, "bestmove {}", mv.iccs())?;
            }
            None => writeln!(out, "nobestmove")?,
        }
        Ok(())
    }
}

impl Default for Engine {
    fn default() -> Self {
        Engine::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(engine: &mut Engine, line: &str) -> (String, bool) {
        let mut out = Vec::new();
        let more = engine.exec_command(&mut out, line).unwrap();
        (String::from_utf8(out).unwrap(), more)
    }

    #[test]
    fn test_handshake() {
        let mut engine = Engine::new();
        let (reply, more) = run(&mut engine, "ucci");
        assert!(reply.ends_with("ucciok\n"));
        assert!(more);
        let (reply, _) = run(&mut engine, "isready");
        assert_eq!(reply, "readyok\n");
    }

    #[test]
    fn test_quit_says_bye() {
        let mut engine = Engine::new();
        let (reply, more) = run(&mut engine, "quit");
        assert_eq!(reply, "bye\n");
        assert!(!more);
    }

    #[test]
    fn test_unknown_commands_ignored() {
        let mut engine = Engine::new();
        let (reply, more) = run(&mut engine, "banneredhu");
        assert!(reply.is_empty());
        assert!(more);
    }

    #[test]
    fn test_position_then_bad_position_keeps_old() {
        let mut engine = Engine::new();
        let (reply, _) = run(&mut engine, "position startpos");
        assert!(reply.is_empty());
        assert!(engine.position.is_some());
        run(&mut engine, "position garbage");
        assert!(engine.position.is_some());
    }

    #[test]
    fn test_go_without_position_is_silent() {
        let mut engine = Engine::new();
        let (reply, more) = run(&mut engine, "go");
        assert!(reply.is_empty());
        assert!(more);
    }
}

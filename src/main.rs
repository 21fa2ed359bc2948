use std::io::{self, BufRead, Write};

use xiangqi_engine::ucci::Engine;

fn main() {
    env_logger::init();

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    let mut engine = Engine::new();

    for line in stdin.lock().lines() {
        let Ok(line) = line else { break };
        match engine.exec_command(&mut stdout, &line) {
            Ok(true) => {}
            Ok(false) => break,
            Err(err) => {
                log::error!("output write failure: {err}");
                break;
            }
        }
        if stdout.flush().is_err() {
            break;
        }
    }
}

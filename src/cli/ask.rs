use super::Session;
use chrono::{DateTime, Local};
use nova::classify::{classify, normalize};
use nova::config::{NovaConfig, Persona};
use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, RecvTimeoutError};
use std::thread;
use std::time::Duration;

/// Upper bound on a single sleep while waiting for timers
const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Run the ask command
pub fn run_ask(text: &str, persona: Option<Persona>, wait: bool) -> Result<(), String> {
    let config = NovaConfig::load();
    let mut session = Session::open(&config, persona)?;

    println!("{}", session.respond(text));

    if wait {
        while let Some(due) = session.next_due() {
            thread::sleep(wait_for(Some(due)));
            session.tick();
        }
    }

    Ok(())
}

/// How long to wait before the next timer check
fn wait_for(due: Option<DateTime<Local>>) -> Duration {
    match due {
        Some(due) => (due - Local::now())
            .to_std()
            .unwrap_or(Duration::ZERO)
            .min(POLL_INTERVAL),
        None => POLL_INTERVAL,
    }
}

fn prompt() -> Result<(), String> {
    print!("> ");
    io::stdout()
        .flush()
        .map_err(|e| format!("Failed to write prompt: {}", e))
}

/// Run the repl command
pub fn run_repl(persona: Option<Persona>) -> Result<(), String> {
    let config = NovaConfig::load();
    let mut session = Session::open(&config, persona)?;

    println!("{} is listening. Type 'quit' to leave.", session.name().to_uppercase());

    // stdin blocks, so it is read on its own thread and timers keep firing
    let (tx, rx) = mpsc::channel::<io::Result<String>>();
    thread::spawn(move || {
        for line in io::stdin().lock().lines() {
            if tx.send(line).is_err() {
                break;
            }
        }
    });

    prompt()?;

    loop {
        let line = match rx.recv_timeout(wait_for(session.next_due())) {
            Ok(line) => line.map_err(|e| format!("Failed to read input: {}", e))?,
            Err(RecvTimeoutError::Timeout) => {
                if session.tick() > 0 {
                    prompt()?;
                }
                continue;
            }
            Err(RecvTimeoutError::Disconnected) => break,
        };

        let text = line.trim();
        if matches!(normalize(text).as_str(), "quit" | "exit") {
            break;
        }
        if !text.is_empty() {
            println!("{}", session.respond(text));
        }

        session.tick();
        prompt()?;
    }

    Ok(())
}

/// Run the classify command
pub fn run_classify(text: &str) -> Result<(), String> {
    println!("{}", classify(&normalize(text)));
    Ok(())
}

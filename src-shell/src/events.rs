//! Event bridge between the terminal and the shell's main loop.
//!
//! Stdin lines and Ctrl-C arrive on other threads; both are forwarded over a
//! channel so only the main loop ever touches the job board.

use std::io::{BufRead, ErrorKind};
use std::thread;

use crossbeam_channel::{unbounded, Receiver, Sender};
use log::{debug, warn};

/// Something the user did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellEvent {
    /// A line of input, without its line ending.
    Line(String),
    /// Stdin was closed.
    Eof,
    /// Ctrl-C.
    Interrupt,
}

/// Starts the stdin reader and the Ctrl-C handler.
pub fn start_event_bridge() -> Receiver<ShellEvent> {
    let (tx, rx) = unbounded();

    let interrupt_tx = tx.clone();
    if let Err(e) = ctrlc::set_handler(move || {
        let _ = interrupt_tx.send(ShellEvent::Interrupt);
    }) {
        warn!("Failed to install Ctrl-C handler: {}", e);
    }

    thread::spawn(move || forward_lines(std::io::stdin().lock(), &tx));

    rx
}

/// Sends every line of `input` followed by [`ShellEvent::Eof`]. Stops early
/// once the receiver is gone.
///
/// A line that is not valid UTF-8 is skipped with a warning; only end of input
/// or a read error ends the session.
pub fn forward_lines<R: BufRead>(mut input: R, tx: &Sender<ShellEvent>) {
    let mut buf = Vec::new();
    loop {
        buf.clear();
        match input.read_until(b'\n', &mut buf) {
            Ok(0) => break,
            Ok(_) => {
                if buf.last() == Some(&b'\n') {
                    buf.pop();
                    if buf.last() == Some(&b'\r') {
                        buf.pop();
                    }
                }
                match std::str::from_utf8(&buf) {
                    Ok(line) => {
                        if tx.send(ShellEvent::Line(line.to_string())).is_err() {
                            return;
                        }
                    }
                    Err(_) => {
                        warn!(
                            "Ignoring input line that is not valid UTF-8: {}",
                            String::from_utf8_lossy(&buf)
                        );
                    }
                }
            }
            Err(e) if e.kind() == ErrorKind::Interrupted => continue,
            Err(e) => {
                debug!("Stopped reading input: {}", e);
                break;
            }
        }
    }
    let _ = tx.send(ShellEvent::Eof);
}

//! Shell commands: parsing input lines and running them against the board.
//!
//! - `jobs`: handlers for the job list, stage buttons and saving

pub mod jobs;

pub use jobs::execute;

use std::path::PathBuf;

use jobtrack::Stage;

pub const HELP: &str = "\
Commands:
  add <path>           add a PDF and show its job name
  list                 show all jobs
  show <n>             show the stage buttons of job n
  stage <n> <STAGE>    set the stage of job n
  save                 save now
  help                 show this help
  quit                 save and exit";

/// A parsed input line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add(PathBuf),
    List,
    /// Zero-based list index.
    Show(usize),
    /// Zero-based list index and the chosen stage.
    Stage(usize, Stage),
    Save,
    Help,
    Quit,
}

/// What the shell should print, and whether to exit afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reply {
    pub output: String,
    pub quit: bool,
}

impl Reply {
    pub fn show(output: impl Into<String>) -> Self {
        Self {
            output: output.into(),
            quit: false,
        }
    }

    pub fn quit() -> Self {
        Self {
            output: String::new(),
            quit: true,
        }
    }
}

/// Parses one input line. Errors are messages for the user.
pub fn parse_command(line: &str) -> Result<Command, String> {
    let line = line.trim();
    let (verb, rest) = line
        .split_once(char::is_whitespace)
        .map(|(verb, rest)| (verb, rest.trim()))
        .unwrap_or((line, ""));

    match verb.to_lowercase().as_str() {
        "add" => {
            let path = unquote(rest);
            if path.is_empty() {
                return Err("Usage: add <path>".to_string());
            }
            Ok(Command::Add(PathBuf::from(path)))
        }
        "list" | "ls" => Ok(Command::List),
        "show" => parse_index(rest).map(Command::Show),
        "stage" => {
            let (index, label) = rest
                .split_once(char::is_whitespace)
                .ok_or_else(|| "Usage: stage <n> <STAGE>".to_string())?;
            let index = parse_index(index)?;
            let stage = label.parse::<Stage>().map_err(|e| {
                let labels: Vec<&str> = Stage::ALL.iter().map(|s| s.as_str()).collect();
                format!("{} (expected one of: {})", e, labels.join(", "))
            })?;
            Ok(Command::Stage(index, stage))
        }
        "save" => Ok(Command::Save),
        "help" | "?" => Ok(Command::Help),
        "quit" | "exit" => Ok(Command::Quit),
        other => Err(format!("Unknown command '{}'. Type 'help' for commands.", other)),
    }
}

/// Parses a 1-based job number into a list index.
fn parse_index(s: &str) -> Result<usize, String> {
    match s.trim().parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("Expected a job number from the list, got '{}'", s.trim())),
    }
}

fn unquote(s: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(inner) = s.strip_prefix(quote).and_then(|s| s.strip_suffix(quote)) {
            return inner;
        }
    }
    s
}

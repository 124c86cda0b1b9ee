//! Job list, stage and save commands.

use std::path::Path;

use jobtrack::{is_pdf_path, JobBoard, StagePanel, TextExtractor};

use super::{Command, Reply, HELP};

/// Runs one command against the board.
pub fn execute<E: TextExtractor>(board: &mut JobBoard<E>, command: Command) -> Reply {
    match command {
        Command::Add(path) => add_pdf(board, &path),
        Command::List => Reply::show(render_list(board.entries())),
        Command::Show(index) => match board.select_job(index) {
            Some(panel) => Reply::show(render_panel(&panel)),
            None => Reply::show(no_such_job(index, board.entries().len())),
        },
        Command::Stage(index, stage) => {
            let Some(job_name) = board.entries().get(index).cloned() else {
                return Reply::show(no_such_job(index, board.entries().len()));
            };
            let panel = board.select_stage(&job_name, stage);
            Reply::show(render_panel(&panel))
        }
        Command::Save => match board.save() {
            Ok(()) => Reply::show(format!("Saved to {}", board.store().path().display())),
            Err(e) => {
                log::error!("Save failed: {}", e);
                Reply::show(format!("Save failed: {}", e))
            }
        },
        Command::Help => Reply::show(HELP),
        Command::Quit => Reply::quit(),
    }
}

fn add_pdf<E: TextExtractor>(board: &mut JobBoard<E>, path: &Path) -> Reply {
    if !is_pdf_path(path) {
        return Reply::show(format!(
            "Only PDF files can be added: {}",
            path.display()
        ));
    }
    if !path.is_file() {
        return Reply::show(format!("No such file: {}", path.display()));
    }

    let name = board.add_pdf(path).to_string();
    let number = board.entries().len();
    Reply::show(format!("{:>3}. {}", number, name))
}

/// The numbered job list.
pub fn render_list(entries: &[String]) -> String {
    if entries.is_empty() {
        return "No jobs yet. Use 'add <path>' to add a PDF.".to_string();
    }
    entries
        .iter()
        .enumerate()
        .map(|(i, name)| format!("{:>3}. {}", i + 1, name))
        .collect::<Vec<_>>()
        .join("\n")
}

/// The stage buttons of one job; the current stage is shown as `[*LABEL*]`.
pub fn render_panel(panel: &StagePanel) -> String {
    let buttons: Vec<String> = panel
        .buttons
        .iter()
        .map(|button| {
            if button.highlighted {
                format!("[*{}*]", button.stage)
            } else {
                format!("[{}]", button.stage)
            }
        })
        .collect();
    format!("Actions for {}\n  {}", panel.job_name, buttons.join(" "))
}

fn no_such_job(index: usize, len: usize) -> String {
    if len == 0 {
        "No jobs yet. Use 'add <path>' to add a PDF.".to_string()
    } else {
        format!("No job {}; pick 1 to {}", index + 1, len)
    }
}

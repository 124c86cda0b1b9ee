mod commands;
mod events;

use std::io::Write;

use jobtrack::{Config, JobBoard};
use log::{error, info, warn};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::EnvFilter;

use commands::{parse_command, Reply};
use events::{start_event_bridge, ShellEvent};

/// Routes `tracing` spans and `log` records to stderr, filtered by `RUST_LOG`
/// or the configured level.
fn init_logging(default_level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_lowercase()));

    let subscriber = tracing_subscriber::registry().with(filter).with(
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false),
    );

    if tracing::subscriber::set_global_default(subscriber).is_ok() {
        let _ = tracing_log::LogTracer::init();
    }
}

fn prompt() {
    print!("> ");
    let _ = std::io::stdout().flush();
}

fn run(config: &Config) -> jobtrack::Result<()> {
    let mut board = JobBoard::open(config);
    let events = start_event_bridge();

    println!("PDF Job Name Extractor. Type 'help' for commands.");
    println!("{}", commands::jobs::render_list(board.entries()));
    prompt();

    for event in events.iter() {
        let line = match event {
            ShellEvent::Line(line) => line,
            ShellEvent::Eof => break,
            ShellEvent::Interrupt => {
                println!();
                info!("Interrupted, saving before exit");
                break;
            }
        };

        if !line.trim().is_empty() {
            let reply = match parse_command(&line) {
                Ok(command) => commands::execute(&mut board, command),
                Err(message) => Reply::show(message),
            };
            if !reply.output.is_empty() {
                println!("{}", reply.output);
            }
            if reply.quit {
                break;
            }
        }
        prompt();
    }

    board.close()?;
    Ok(())
}

fn main() {
    let discovered = jobtrack::discover_config();
    let config = discovered.config;
    init_logging(&config.log_level);

    for e in &discovered.skipped {
        warn!("Ignoring config file: {}", e);
    }
    if let Some(source) = &discovered.source {
        info!("Loaded config from {}", source.display());
    }

    info!(
        "Starting jobtrack v{} with data file {}",
        env!("CARGO_PKG_VERSION"),
        config.data_file.display()
    );

    if let Err(e) = run(&config) {
        error!("{}", e);
        eprintln!("Failed to save jobs: {}", e);
        std::process::exit(1);
    }
}

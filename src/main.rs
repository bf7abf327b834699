// Terminal Sokoban on ratatui.
// Controls: z/s/q/d or arrow keys to move, x to quit (optionally saving), r to restart.
// Tiles: '#' wall, '@' player, '$' crate, '.' target, '*' crate on target, '+' player on target, ' ' floor.

mod config;
mod console_interface;
mod core;
mod error;
mod models;
mod session;
#[cfg(test)]
mod test;

use std::fs::File;
use std::path::Path;
use std::sync::Arc;

use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::config::{Cli, KeyBindings};
use crate::console_interface::{ConsoleTerminal, prompt_level_path};
use crate::session::{FileStore, Session, SessionStatus};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    init_logging(&cli.log_file)?;

    let bindings = match &cli.keys {
        Some(path) => KeyBindings::load(path)?,
        None => KeyBindings::default(),
    };
    let level = match cli.level.clone() {
        Some(level) => level,
        None => prompt_level_path()?,
    };

    let mut session = match Session::start(FileStore::new(cli.bounds()), level) {
        Ok(session) => session,
        Err(err) => {
            error!(%err, "could not start session");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    };

    let mut console = ConsoleTerminal::new(bindings)?;
    let outcome = session.run(&mut console);
    // Keep showing the win screen until user inputs
    let waited = match outcome {
        Ok(SessionStatus::Won { .. }) => console.wait_for_key(),
        _ => Ok(()),
    };
    console.close()?;
    waited?;

    match outcome {
        Ok(SessionStatus::Won { moves }) => {
            println!("You won with {} moves!", moves);
        }
        Ok(SessionStatus::Quit { saved_to }) => {
            if let Some(path) = saved_to {
                println!("Game saved to {}", path.display());
            }
            println!("Goodbye!");
        }
        Ok(SessionStatus::Continue) => {}
        Err(err) => {
            error!(%err, "session aborted");
            eprintln!("{}", err);
            std::process::exit(1);
        }
    }

    info!(moves = session.game().moves, "exiting");
    Ok(())
}

/// Logs go to a file; stdout belongs to the game screen.
fn init_logging(path: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let log_file = File::create(path)?;
    tracing::subscriber::set_global_default(file_subscriber(log_file))?;
    Ok(())
}

fn file_subscriber(log_file: File) -> impl tracing::Subscriber + Send + Sync {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(Arc::new(log_file))
        .with_ansi(false)
        .finish()
}

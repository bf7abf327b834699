//! Command line arguments and key bindings.

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

use crate::console_interface::ConsoleInput;
use crate::core::{BOARD_COLS, BOARD_ROWS, BoundsOriginRoot, Direction, UserAction};
use crate::error::ConfigError;

/// Terminal Sokoban: push every crate onto a target.
#[derive(Parser, Debug)]
#[command(version, about)]
pub struct Cli {
    /// Level file to play; asked for interactively when omitted
    pub level: Option<PathBuf>,

    /// JSON file overriding the control keys
    #[arg(long)]
    pub keys: Option<PathBuf>,

    /// Where to write the log (the terminal is taken by the game)
    #[arg(long, default_value = "sokoterm.log")]
    pub log_file: PathBuf,

    /// Rows per level file
    #[arg(long, default_value_t = BOARD_ROWS, value_parser = clap::value_parser!(i32).range(1..=256))]
    pub rows: i32,

    /// Columns per level file
    #[arg(long, default_value_t = BOARD_COLS, value_parser = clap::value_parser!(i32).range(1..=256))]
    pub cols: i32,
}

impl Cli {
    pub fn bounds(&self) -> BoundsOriginRoot {
        BoundsOriginRoot::new(self.rows, self.cols)
    }
}

/// Single-character commands. Arrow keys and Esc work regardless of these.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyBindings {
    pub up: char,
    pub down: char,
    pub left: char,
    pub right: char,
    pub quit: char,
    pub restart: char,
}

impl Default for KeyBindings {
    fn default() -> Self {
        KeyBindings {
            up: 'z',
            down: 's',
            left: 'q',
            right: 'd',
            quit: 'x',
            restart: 'r',
        }
    }
}

impl KeyBindings {
    #[instrument]
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let bindings: KeyBindings =
            serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
                path: path.to_path_buf(),
                source,
            })?;
        bindings.validate()?;
        debug!(?bindings, "key bindings loaded");
        Ok(bindings)
    }

    fn keys(&self) -> [char; 6] {
        [self.up, self.down, self.left, self.right, self.quit, self.restart].map(|c| c.to_ascii_lowercase())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let keys = self.keys();
        for (index, key) in keys.iter().enumerate() {
            if keys[index + 1..].contains(key) {
                return Err(ConfigError::DuplicateKey(*key));
            }
        }
        Ok(())
    }

    pub fn command_for(&self, c: char) -> ConsoleInput {
        let c = c.to_ascii_lowercase();
        let [up, down, left, right, quit, restart] = self.keys();
        match c {
            _ if c == up => ConsoleInput::UserAction(UserAction::Move(Direction::Up)),
            _ if c == down => ConsoleInput::UserAction(UserAction::Move(Direction::Down)),
            _ if c == left => ConsoleInput::UserAction(UserAction::Move(Direction::Left)),
            _ if c == right => ConsoleInput::UserAction(UserAction::Move(Direction::Right)),
            _ if c == quit => ConsoleInput::Quit,
            _ if c == restart => ConsoleInput::Restart,
            _ => ConsoleInput::Unknown,
        }
    }

    /// One-line summary for the header.
    pub fn describe(&self) -> String {
        format!(
            "Up: {}  Down: {}  Left: {}  Right: {}  |  Quit: {}  Restart: {}",
            self.up, self.down, self.left, self.right, self.quit, self.restart
        )
    }
}

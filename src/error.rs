//! Error types for level files, configuration and the play loop.

use std::io;
use std::path::PathBuf;

use derive_more::{Display, Error, From};

/// Failure to load or save a board.
#[derive(Debug, Display, Error)]
pub enum BoardError {
    /// The level file could not be opened, read or written.
    #[display("cannot access level file {}: {}", path.display(), source)]
    Io { path: PathBuf, source: io::Error },
    /// The content is not a grid of the expected size made of known glyphs.
    #[display("malformed level at line {line}: {reason}")]
    Format { line: usize, reason: String },
    /// The board has no `@` or `+` cell.
    #[display("level contains no player")]
    NoPlayer,
}

impl BoardError {
    pub fn format(line: usize, reason: impl Into<String>) -> Self {
        BoardError::Format {
            line,
            reason: reason.into(),
        }
    }
}

/// Failure to load key bindings.
#[derive(Debug, Display, Error)]
pub enum ConfigError {
    #[display("cannot read key bindings {}: {}", path.display(), source)]
    Read { path: PathBuf, source: io::Error },
    #[display("invalid key bindings {}: {}", path.display(), source)]
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    #[display("key '{_0}' is bound to more than one command")]
    DuplicateKey(#[error(not(source))] char),
}

/// Failure inside the play loop.
#[derive(Debug, Display, Error, From)]
pub enum SessionError {
    #[display("{_0}")]
    Board(BoardError),
    #[display("terminal error: {_0}")]
    Terminal(io::Error),
}

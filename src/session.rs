//! The play loop: load a level, feed keystrokes to the move engine, detect the win,
//! and handle quit (with optional save) and restart.

use std::io;
use std::path::{Path, PathBuf};

use tracing::{debug, info, instrument, warn};

use crate::console_interface::ConsoleInput;
use crate::core::codec::{load_board, save_board};
use crate::core::{Board, BoundsOriginRoot, GameState, GameUpdate, step};
use crate::error::{BoardError, SessionError};
use crate::models::GameRenderState;

/// Non-blocking keystroke source. `None` means nothing was pressed this tick.
pub trait InputSource {
    fn poll_key(&mut self) -> io::Result<Option<ConsoleInput>>;
}

pub trait Renderer {
    fn render(&mut self, state: &GameRenderState) -> io::Result<()>;
}

/// Blocking questions asked on quit and restart.
pub trait Prompt {
    fn confirm(&mut self, question: &str) -> io::Result<bool>;

    /// Reads a line of text. An empty answer yields `default`; `None` means the user cancelled.
    fn ask_line(&mut self, question: &str, default: &str) -> io::Result<Option<String>>;
}

pub trait Persistence {
    fn load(&self, path: &Path) -> Result<Board, BoardError>;
    fn save(&mut self, board: &Board, path: &Path) -> Result<(), BoardError>;
}

/// Level files on disk, all of the same dimensions.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileStore {
    bounds: BoundsOriginRoot,
}

impl FileStore {
    pub fn new(bounds: BoundsOriginRoot) -> Self {
        FileStore { bounds }
    }
}

impl Persistence for FileStore {
    fn load(&self, path: &Path) -> Result<Board, BoardError> {
        load_board(path, self.bounds)
    }

    fn save(&mut self, board: &Board, path: &Path) -> Result<(), BoardError> {
        save_board(board, path)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionStatus {
    Continue,
    Won { moves: u32 },
    Quit { saved_to: Option<PathBuf> },
}

pub struct Session<P> {
    persistence: P,
    level: PathBuf,
    game: GameState,
    message: Option<String>,
}

impl<P: Persistence> Session<P> {
    #[instrument(skip(persistence))]
    pub fn start(persistence: P, level: PathBuf) -> Result<Self, BoardError> {
        let board = persistence.load(&level)?;
        let game = GameState::new(board)?;
        info!(player = ?game.player, "session started");
        Ok(Session {
            persistence,
            level,
            game,
            message: None,
        })
    }

    pub fn game(&self) -> &GameState {
        &self.game
    }

    pub fn render_state(&self) -> GameRenderState {
        GameRenderState {
            game: self.game.clone(),
            session_name: self.level.clone(),
            won: self.game.is_won(),
            message: self.message.clone(),
        }
    }

    /// Renders once, then ticks until the session is won or quit.
    pub fn run<C>(&mut self, console: &mut C) -> Result<SessionStatus, SessionError>
    where
        C: InputSource + Renderer + Prompt,
    {
        console.render(&self.render_state())?;
        if self.game.is_won() {
            return Ok(SessionStatus::Won { moves: self.game.moves });
        }

        loop {
            let status = self.tick(console)?;
            if status != SessionStatus::Continue {
                return Ok(status);
            }
        }
    }

    /// Polls once and handles whatever was pressed.
    pub fn tick<C>(&mut self, console: &mut C) -> Result<SessionStatus, SessionError>
    where
        C: InputSource + Renderer + Prompt,
    {
        let Some(input) = console.poll_key()? else {
            return Ok(SessionStatus::Continue);
        };
        self.handle(input, console)
    }

    pub fn handle<C>(&mut self, input: ConsoleInput, console: &mut C) -> Result<SessionStatus, SessionError>
    where
        C: Renderer + Prompt,
    {
        match input {
            ConsoleInput::UserAction(action) => {
                self.message = None;
                match step(&mut self.game, action) {
                    GameUpdate::Moved { moves, change } => debug!(moves, ?change, "moved"),
                    rejected => debug!(?action, ?rejected, "move rejected"),
                }
            }
            ConsoleInput::Quit => return self.quit(console),
            ConsoleInput::Restart => {
                if console.confirm("Restart the level? (y/n)")? {
                    self.restart()?;
                }
            }
            ConsoleInput::Unknown => {}
        }

        let state = self.render_state();
        console.render(&state)?;
        if state.won {
            info!(moves = self.game.moves, "level solved");
            return Ok(SessionStatus::Won { moves: self.game.moves });
        }
        Ok(SessionStatus::Continue)
    }

    /// Replaces the current game with a fresh load of the level file.
    pub fn restart(&mut self) -> Result<(), BoardError> {
        let board = self.persistence.load(&self.level)?;
        self.game = GameState::new(board)?;
        self.message = None;
        info!(level = %self.level.display(), "level restarted");
        Ok(())
    }

    pub fn save_as(&mut self, path: &Path) -> Result<(), BoardError> {
        self.persistence.save(&self.game.board, path)
    }

    fn quit<C>(&mut self, console: &mut C) -> Result<SessionStatus, SessionError>
    where
        C: Renderer + Prompt,
    {
        if !console.confirm("Save your progress? (y/n)")? {
            info!("session abandoned");
            return Ok(SessionStatus::Quit { saved_to: None });
        }

        let default = self.level.display().to_string();
        let Some(name) = console.ask_line("Save as", &default)? else {
            info!("save cancelled");
            return Ok(SessionStatus::Quit { saved_to: None });
        };

        let path = PathBuf::from(name);
        match self.save_as(&path) {
            Ok(()) => Ok(SessionStatus::Quit {
                saved_to: Some(path),
            }),
            Err(err) => {
                warn!(%err, "save failed");
                self.message = Some(format!("Save failed: {}", err));
                console.render(&self.render_state())?;
                Ok(SessionStatus::Continue)
            }
        }
    }
}

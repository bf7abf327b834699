use std::path::PathBuf;

use crate::core::GameState;

/// Snapshot handed to the renderer after every input.
#[derive(Clone, Debug)]
pub struct GameRenderState {
    pub game: GameState,
    pub session_name: PathBuf,
    pub won: bool,
    pub message: Option<String>,
}

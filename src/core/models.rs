use crate::core::bounded_grid::BoundedGrid;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Cell {
    Empty,
    Wall,
    Target,
    Crate,
    CrateOnTarget,
    Player,
    PlayerOnTarget,
}

/// A grid coordinate: `i` is the row, `j` the column.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Vec2 {
    pub i: i32,
    pub j: i32,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum UserAction {
    Move(Direction),
}

pub type Board = BoundedGrid<Cell>;

/// Everything a session mutates: the board, the cached player position and the move counter.
/// `player` always points at the single `Player`/`PlayerOnTarget` cell of `board`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GameState {
    pub board: Board,
    pub player: Vec2,
    pub moves: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameUpdate {
    Moved { moves: u32, change: GameChangeType },
    WallBlocked,
    PushBlocked,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameChangeType {
    PlayerMove,
    PlayerAndCrateMove,
}

use std::ops::Add;

use crate::core::models::{Board, Cell, Direction, GameState, Vec2};
use crate::error::BoardError;

impl Cell {
    /// Maps a level-file glyph to its cell.
    pub fn from_glyph(glyph: u8) -> Option<Cell> {
        Some(match glyph {
            b' ' => Cell::Empty,
            b'#' => Cell::Wall,
            b'.' => Cell::Target,
            b'$' => Cell::Crate,
            b'*' => Cell::CrateOnTarget,
            b'@' => Cell::Player,
            b'+' => Cell::PlayerOnTarget,
            _ => return None,
        })
    }

    pub fn glyph(self) -> char {
        match self {
            Cell::Empty => ' ',
            Cell::Wall => '#',
            Cell::Target => '.',
            Cell::Crate => '$',
            Cell::CrateOnTarget => '*',
            Cell::Player => '@',
            Cell::PlayerOnTarget => '+',
        }
    }

    /// Empty or bare target: something may enter it.
    pub fn is_floor(self) -> bool {
        matches!(self, Cell::Empty | Cell::Target)
    }

    pub fn has_crate(self) -> bool {
        matches!(self, Cell::Crate | Cell::CrateOnTarget)
    }

    pub fn has_player(self) -> bool {
        matches!(self, Cell::Player | Cell::PlayerOnTarget)
    }

    pub fn is_target(self) -> bool {
        matches!(self, Cell::Target | Cell::CrateOnTarget | Cell::PlayerOnTarget)
    }

    /// The cell once whatever stands on it has left.
    pub fn vacated(self) -> Cell {
        if self.is_target() { Cell::Target } else { Cell::Empty }
    }

    pub fn with_player(self) -> Cell {
        if self.is_target() { Cell::PlayerOnTarget } else { Cell::Player }
    }

    pub fn with_crate(self) -> Cell {
        if self.is_target() { Cell::CrateOnTarget } else { Cell::Crate }
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2 {
            i: self.i + rhs.i,
            j: self.j + rhs.j,
        }
    }
}

impl Direction {
    pub fn delta(self) -> Vec2 {
        match self {
            Direction::Up => Vec2 { i: -1, j: 0 },
            Direction::Down => Vec2 { i: 1, j: 0 },
            Direction::Left => Vec2 { i: 0, j: -1 },
            Direction::Right => Vec2 { i: 0, j: 1 },
        }
    }
}

/// Scans row-major and returns the last player cell seen.
/// Only ambiguous on boards with several players, which well-formed levels never have.
pub fn locate_player(board: &Board) -> Option<Vec2> {
    board
        .iter_positions()
        .filter(|(_, cell)| cell.has_player())
        .map(|(pos, _)| pos)
        .last()
}

/// Won once no crate stands off a target. Spare targets do not matter.
pub fn is_won(board: &Board) -> bool {
    !board.iter().any(|&c| c == Cell::Crate)
}

impl GameState {
    pub fn new(board: Board) -> Result<GameState, BoardError> {
        let player = locate_player(&board).ok_or(BoardError::NoPlayer)?;
        Ok(GameState {
            board,
            player,
            moves: 0,
        })
    }

    pub fn is_won(&self) -> bool {
        is_won(&self.board)
    }
}

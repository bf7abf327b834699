use crate::core::consts::{BOARD_COLS, BOARD_ROWS};
use crate::core::models::Vec2;

/// A bounding box with one corner fixed at 0,0 and assumed to have positive extent.
/// `extent.i` is the row count, `extent.j` the column count.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BoundsOriginRoot {
    pub extent: Vec2,
}

impl BoundsOriginRoot {
    pub fn new(rows: i32, cols: i32) -> BoundsOriginRoot {
        BoundsOriginRoot {
            extent: Vec2 { i: rows, j: cols },
        }
    }

    pub fn rows(&self) -> i32 {
        self.extent.i
    }

    pub fn cols(&self) -> i32 {
        self.extent.j
    }

    pub fn contains(&self, pos: &Vec2) -> bool {
        pos.i >= 0 && pos.i < self.extent.i && pos.j >= 0 && pos.j < self.extent.j
    }

    pub fn area(&self) -> i32 {
        self.extent.i * self.extent.j
    }
}

impl Default for BoundsOriginRoot {
    fn default() -> Self {
        BoundsOriginRoot::new(BOARD_ROWS, BOARD_COLS)
    }
}

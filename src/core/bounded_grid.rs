use crate::core::bounds::BoundsOriginRoot;
use crate::core::models::Vec2;

/// Row-major grid whose every cell lies inside `bounds`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BoundedGrid<T> {
    bounds: BoundsOriginRoot,
    cells: Vec<T>,
}

impl<T> BoundedGrid<T> {
    /// Builds a grid from cells already laid out row by row.
    /// Returns `None` when the cell count does not fill `bounds` exactly.
    pub fn from_cells(bounds: BoundsOriginRoot, cells: Vec<T>) -> Option<Self> {
        if cells.len() != bounds.area() as usize {
            return None;
        }
        Some(BoundedGrid { bounds, cells })
    }

    pub fn size(&self) -> BoundsOriginRoot {
        self.bounds
    }

    pub fn get(&self, pos: &Vec2) -> Option<&T> {
        if !self.bounds.contains(pos) {
            return None;
        }
        Some(&self[pos])
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.cells.iter()
    }

    /// Cells paired with their position, in row-major order.
    pub fn iter_positions(&self) -> impl Iterator<Item = (Vec2, &T)> {
        let cols = self.bounds.cols();
        self.cells.iter().enumerate().map(move |(index, cell)| {
            let index = index as i32;
            (Vec2 { i: index / cols, j: index % cols }, cell)
        })
    }

    pub fn rows(&self) -> impl Iterator<Item = &[T]> {
        self.cells.chunks(self.bounds.cols() as usize)
    }
}

impl<T> std::ops::Index<&Vec2> for BoundedGrid<T> {
    type Output = T;

    fn index(&self, index: &Vec2) -> &Self::Output {
        &self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

impl<T> std::ops::IndexMut<&Vec2> for BoundedGrid<T> {
    fn index_mut(&mut self, index: &Vec2) -> &mut Self::Output {
        &mut self.cells[(index.i * self.bounds.extent.j + index.j) as usize]
    }
}

use std::fmt;

use crate::error::{MazeError, Result};
use crate::maze::{Coord, Direction, cell::GridCell};

/// Wall-inclusive maze storage.
///
/// A maze of `R x C` logical cells is stored as `(2R + 1) x (2C + 1)` positions.
/// Positions with both coordinates odd are cells, positions with exactly one
/// even coordinate are walls between two cells, and positions with both
/// coordinates even are corners, which are never opened.
///
/// Positions are `(row, col)` pairs in grid space; logical cell `(r, c)` lives
/// at `(2r + 1, 2c + 1)`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    data: Box<[GridCell]>,
    height: usize,
    width: usize,
}

impl Grid {
    /// Creates an all-closed grid for `rows x cols` logical cells.
    pub fn new(rows: usize, cols: usize) -> Result<Self> {
        let invalid = MazeError::InvalidDimensions { rows, cols };
        if rows == 0 || cols == 0 {
            return Err(invalid);
        }
        let wall_inclusive = |n: usize| n.checked_mul(2).and_then(|n| n.checked_add(1));
        let (Some(height), Some(width)) = (wall_inclusive(rows), wall_inclusive(cols)) else {
            return Err(invalid);
        };
        let size = height.checked_mul(width).ok_or(invalid)?;
        let data = vec![GridCell::Wall; size].into_boxed_slice();
        Ok(Grid {
            data,
            height,
            width,
        })
    }

    /// Builds a grid from an external open-predicate over grid positions.
    /// Corners stay closed whatever the predicate says.
    pub fn from_open_fn<F>(rows: usize, cols: usize, mut is_open: F) -> Result<Self>
    where
        F: FnMut(usize, usize) -> bool,
    {
        let mut grid = Grid::new(rows, cols)?;
        for x in 0..grid.height {
            for y in 0..grid.width {
                if !is_corner((x, y)) && is_open(x, y) {
                    grid.set_open(x, y);
                }
            }
        }
        Ok(grid)
    }

    /// Number of rows including walls.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Number of columns including walls.
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn logical_rows(&self) -> usize {
        self.height / 2
    }

    pub fn logical_cols(&self) -> usize {
        self.width / 2
    }

    pub fn in_bounds(&self, x: usize, y: usize) -> bool {
        x < self.height && y < self.width
    }

    /// Checks whether a logical cell coordinate lies inside the maze.
    pub fn contains(&self, coord: Coord) -> bool {
        coord.0 < self.logical_rows() && coord.1 < self.logical_cols()
    }

    /// Out-of-bounds positions read as closed.
    pub fn is_open(&self, x: usize, y: usize) -> bool {
        self.in_bounds(x, y) && self.data[self.ravel_index(x, y)].is_open()
    }

    /// Opens a position.
    ///
    /// # Panics
    /// If `(x, y)` is out of bounds.
    pub fn set_open(&mut self, x: usize, y: usize) {
        debug_assert!(!is_corner((x, y)), "corner ({x}, {y}) must stay closed");
        let idx = self.ravel_index(x, y);
        self.data[idx] = GridCell::Passage;
    }

    fn ravel_index(&self, x: usize, y: usize) -> usize {
        assert!(
            self.in_bounds(x, y),
            "position ({x}, {y}) is outside a {}x{} grid",
            self.height,
            self.width
        );
        x * self.width + y
    }

    /// Single step from `pos` towards `dir`, if it stays inside the grid.
    pub fn step(&self, pos: (usize, usize), dir: Direction) -> Option<(usize, usize)> {
        dir.apply(pos, 1).filter(|&(x, y)| self.in_bounds(x, y))
    }

    /// Double step from cell `pos` towards `dir`.
    /// Returns the neighboring cell and the wall between them.
    pub fn leap(
        &self,
        pos: (usize, usize),
        dir: Direction,
    ) -> Option<((usize, usize), (usize, usize))> {
        let target = dir.apply(pos, 2).filter(|&(x, y)| self.in_bounds(x, y))?;
        let wall = dir.apply(pos, 1)?;
        Some((target, wall))
    }

    /// Opens the wall towards `dir` and the cell behind it, returning that cell.
    ///
    /// # Panics
    /// If there is no cell in that direction.
    pub fn carve(&mut self, pos: (usize, usize), dir: Direction) -> (usize, usize) {
        let (target, wall) = self
            .leap(pos, dir)
            .unwrap_or_else(|| panic!("no cell {dir:?} of {pos:?}"));
        self.set_open(wall.0, wall.1);
        self.set_open(target.0, target.1);
        target
    }

    /// Grid positions of all logical cells, row by row.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize)> + use<> {
        let (rows, cols) = (self.logical_rows(), self.logical_cols());
        (0..rows).flat_map(move |r| (0..cols).map(move |c| to_grid((r, c))))
    }

    /// Number of open walls joining two cells.
    pub fn open_edges(&self) -> usize {
        self.cells()
            .flat_map(|pos| [Direction::Down, Direction::Right].map(|dir| (pos, dir)))
            .filter_map(|(pos, dir)| self.leap(pos, dir))
            .filter(|&(_, wall)| self.is_open(wall.0, wall.1))
            .count()
    }

    /// Checks the perfect-maze property: every cell open, exactly
    /// `rows * cols - 1` open walls, and one connected component.
    pub fn is_perfect(&self) -> bool {
        let total = self.logical_rows() * self.logical_cols();
        if !self.cells().all(|(x, y)| self.is_open(x, y)) || self.open_edges() != total - 1 {
            return false;
        }

        let mut seen = vec![false; self.data.len()];
        let mut stack = vec![(1, 1)];
        seen[self.ravel_index(1, 1)] = true;
        let mut reached = 0;
        while let Some(pos) = stack.pop() {
            reached += 1;
            for dir in Direction::ALL {
                let Some((next, wall)) = self.leap(pos, dir) else {
                    continue;
                };
                let idx = self.ravel_index(next.0, next.1);
                if self.is_open(wall.0, wall.1) && !seen[idx] {
                    seen[idx] = true;
                    stack.push(next);
                }
            }
        }
        reached == total
    }
}

impl std::ops::Index<(usize, usize)> for Grid {
    type Output = GridCell;

    fn index(&self, index: (usize, usize)) -> &Self::Output {
        &self.data[self.ravel_index(index.0, index.1)]
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for x in 0..self.height {
            for y in 0..self.width {
                write!(f, "{}", self[(x, y)])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Logical cell coordinate to grid position.
pub fn to_grid(coord: Coord) -> (usize, usize) {
    (coord.0 * 2 + 1, coord.1 * 2 + 1)
}

/// Grid position of a cell to its logical coordinate.
pub fn to_logical(pos: (usize, usize)) -> Coord {
    (pos.0 / 2, pos.1 / 2)
}

fn is_corner(pos: (usize, usize)) -> bool {
    pos.0 % 2 == 0 && pos.1 % 2 == 0
}

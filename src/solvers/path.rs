use crate::maze::{Coord, Grid, grid::to_grid};

/// Ordered cells of a route through the maze, in logical coordinates.
///
/// Consecutive cells are always one step apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    cells: Vec<Coord>,
}

impl Path {
    pub(crate) fn new(cells: Vec<Coord>) -> Self {
        debug_assert!(!cells.is_empty(), "a path holds at least its start cell");
        Path { cells }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn start(&self) -> Option<Coord> {
        self.cells.first().copied()
    }

    pub fn end(&self) -> Option<Coord> {
        self.cells.last().copied()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Coord> {
        self.cells.iter()
    }

    /// The route in grid space: every cell plus the wall crossed between
    /// each pair of consecutive cells.
    pub fn grid_positions(&self) -> Vec<(usize, usize)> {
        let mut positions = Vec::with_capacity(self.cells.len() * 2);
        for (i, &cell) in self.cells.iter().enumerate() {
            let pos = to_grid(cell);
            if i > 0 {
                let prev = to_grid(self.cells[i - 1]);
                positions.push(((prev.0 + pos.0) / 2, (prev.1 + pos.1) / 2));
            }
            positions.push(pos);
        }
        positions
    }

    /// Checks that every cell is inside `grid` and each step crosses an open wall.
    pub fn is_valid_in(&self, grid: &Grid) -> bool {
        self.cells.iter().all(|&c| grid.contains(c))
            && self.cells.windows(2).all(|pair| {
                let (a, b) = (pair[0], pair[1]);
                a.0.abs_diff(b.0) + a.1.abs_diff(b.1) == 1
            })
            && self
                .grid_positions()
                .iter()
                .all(|&(x, y)| grid.is_open(x, y))
    }
}

impl From<Path> for Vec<Coord> {
    fn from(path: Path) -> Self {
        path.cells
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Coord;
    type IntoIter = std::slice::Iter<'a, Coord>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

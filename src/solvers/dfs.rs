use super::{Path, Unvisited};
use crate::{
    error::{MazeError, Result},
    maze::{Direction, Grid, grid::to_logical},
};

/// Iterative depth-first search. The stack always holds the route from
/// `start` to the cell being explored, so it is the answer once `end` shows up.
pub fn solve_dfs(grid: &Grid, start: (usize, usize), end: (usize, usize)) -> Result<Path> {
    let mut unvisited = Unvisited::new(grid);
    unvisited.visit(start);

    let mut stack = Vec::new();
    let mut current = Some(start);

    while let Some(mut cell) = current {
        loop {
            stack.push(cell);
            if cell == end {
                tracing::trace!("[dfs] reached {:?} with stack depth {}", end, stack.len());
                return Ok(Path::new(stack.into_iter().map(to_logical).collect()));
            }
            // Descend into the first open, unvisited neighbor
            match Direction::ALL
                .into_iter()
                .find_map(|dir| unvisited.cross(grid, cell, dir))
            {
                Some(next) => cell = next,
                None => break,
            }
        }

        // Dead end: back up to the nearest cell with somewhere left to go
        current = None;
        while let Some(cell) = stack.pop() {
            if Direction::ALL
                .into_iter()
                .any(|dir| unvisited.reachable(grid, cell, dir).is_some())
            {
                current = Some(cell);
                break;
            }
        }
    }

    Err(MazeError::NoSolutionFound)
}

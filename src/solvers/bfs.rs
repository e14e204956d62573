use std::{collections::VecDeque, rc::Rc};

use super::{Path, Unvisited};
use crate::{
    error::{MazeError, Result},
    maze::{Direction, Grid, grid::to_logical},
};

/// A queued cell together with the route that reached it.
///
/// Routes share their common prefix through the `parent` links, so enqueuing
/// a cell never copies the path behind it.
struct TrackedCell {
    /// Grid position of the cell
    pos: (usize, usize),
    /// The cell from which this cell was reached
    parent: Option<Rc<TrackedCell>>,
}

impl TrackedCell {
    /// Walks the parent links back to the start and returns the route in order.
    fn into_path(self: Rc<Self>) -> Path {
        let mut cells = Vec::new();
        let mut node = Some(self);
        while let Some(current) = node {
            cells.push(to_logical(current.pos));
            node = current.parent.clone();
        }
        cells.reverse();
        Path::new(cells)
    }
}

pub fn solve_bfs(grid: &Grid, start: (usize, usize), end: (usize, usize)) -> Result<Path> {
    let mut unvisited = Unvisited::new(grid);
    unvisited.visit(start);

    let root = Rc::new(TrackedCell {
        pos: start,
        parent: None,
    });
    if start == end {
        return Ok(root.into_path());
    }

    let mut queue = VecDeque::from([root]);
    let mut expanded = 0usize;

    while let Some(current) = queue.pop_front() {
        expanded += 1;
        for dir in Direction::ALL {
            let Some(next) = unvisited.cross(grid, current.pos, dir) else {
                continue;
            };
            let tracked = Rc::new(TrackedCell {
                pos: next,
                parent: Some(current.clone()),
            });
            if next == end {
                tracing::trace!("[bfs] reached {:?} after expanding {} cells", end, expanded);
                return Ok(tracked.into_path());
            }
            queue.push_back(tracked);
        }
    }

    Err(MazeError::NoSolutionFound)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::grid::to_grid;

    #[test]
    fn test_bfs_finds_shortest_route_with_loops() {
        // Fully open 3x3 grid: many routes, BFS must return a shortest one
        let grid = Grid::from_open_fn(3, 3, |_, _| true).unwrap();
        let path = solve_bfs(&grid, to_grid((0, 0)), to_grid((2, 2))).unwrap();
        assert_eq!(path.len(), 5);
        assert!(path.is_valid_in(&grid));
    }

    #[test]
    fn test_shared_prefixes() {
        let root = Rc::new(TrackedCell {
            pos: (1, 1),
            parent: None,
        });
        let mid = Rc::new(TrackedCell {
            pos: (1, 3),
            parent: Some(root.clone()),
        });
        let left = Rc::new(TrackedCell {
            pos: (3, 3),
            parent: Some(mid.clone()),
        });
        let right = Rc::new(TrackedCell {
            pos: (1, 5),
            parent: Some(mid.clone()),
        });
        assert_eq!(Rc::strong_count(&mid), 3);
        assert_eq!(left.into_path().cells(), &[(0, 0), (0, 1), (1, 1)]);
        assert_eq!(right.into_path().cells(), &[(0, 0), (0, 1), (0, 2)]);
    }
}

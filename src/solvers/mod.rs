use std::str::FromStr;

mod bfs;
mod dfs;
mod path;

use bfs::solve_bfs;
use dfs::solve_dfs;
pub use path::Path;

use crate::{
    error::{Endpoint, MazeError, Result},
    maze::{Coord, Direction, Grid, grid::to_grid},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Solver {
    Dfs,
    Bfs,
}

impl Solver {
    pub const ALL: [Solver; 2] = [Solver::Dfs, Solver::Bfs];
}

impl std::fmt::Display for Solver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Solver::Dfs => write!(f, "Depth-First Search (DFS)"),
            Solver::Bfs => write!(f, "Breadth-First Search (BFS)"),
        }
    }
}

impl FromStr for Solver {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "depth" | "dfs" | "depth-first" => Ok(Solver::Dfs),
            "breadth" | "bfs" | "breadth-first" => Ok(Solver::Bfs),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Finds the route from `start` to `end`, both logical cell coordinates.
///
/// The grid is only read; each call works on its own scratch copy.
/// Whether the start cell is open is never checked, so `start == end` always
/// yields the one-cell path.
pub fn solve(grid: &Grid, start: Coord, end: Coord, solver: Solver) -> Result<Path> {
    if !grid.contains(start) {
        return Err(MazeError::OutOfRange {
            endpoint: Endpoint::Start,
            coord: start,
        });
    }
    if !grid.contains(end) {
        return Err(MazeError::OutOfRange {
            endpoint: Endpoint::End,
            coord: end,
        });
    }

    tracing::debug!("[solve] {} from {:?} to {:?}", solver, start, end);
    let path = match solver {
        Solver::Dfs => solve_dfs(grid, to_grid(start), to_grid(end)),
        Solver::Bfs => solve_bfs(grid, to_grid(start), to_grid(end)),
    }?;
    tracing::debug!("[solve] {} found a path of {} cells", solver, path.len());
    Ok(path)
}

/// Private "unvisited" copy of a grid's open positions.
///
/// Crossing from one cell to the next marks both the wall and the target cell
/// as visited in one go.
struct Unvisited {
    open: Vec<bool>,
    width: usize,
}

impl Unvisited {
    fn new(grid: &Grid) -> Self {
        let open = (0..grid.height())
            .flat_map(|x| (0..grid.width()).map(move |y| (x, y)))
            .map(|(x, y)| grid.is_open(x, y))
            .collect();
        Unvisited {
            open,
            width: grid.width(),
        }
    }

    fn is_unvisited(&self, pos: (usize, usize)) -> bool {
        self.open[pos.0 * self.width + pos.1]
    }

    fn visit(&mut self, pos: (usize, usize)) {
        self.open[pos.0 * self.width + pos.1] = false;
    }

    /// The cell reachable from `pos` towards `dir` through an unvisited wall.
    fn reachable(
        &self,
        grid: &Grid,
        pos: (usize, usize),
        dir: Direction,
    ) -> Option<(usize, usize)> {
        grid.leap(pos, dir)
            .filter(|&(next, wall)| self.is_unvisited(wall) && self.is_unvisited(next))
            .map(|(next, _)| next)
    }

    /// Crosses from `pos` towards `dir` if possible, marking the way visited.
    fn cross(
        &mut self,
        grid: &Grid,
        pos: (usize, usize),
        dir: Direction,
    ) -> Option<(usize, usize)> {
        let next = self.reachable(grid, pos, dir)?;
        if let Some(wall) = grid.step(pos, dir) {
            self.visit(wall);
        }
        self.visit(next);
        Some(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, generate, get_rng};

    #[test]
    fn test_parse_solver() {
        assert_eq!("depth".parse::<Solver>(), Ok(Solver::Dfs));
        assert_eq!("BFS".parse::<Solver>(), Ok(Solver::Bfs));
        assert_eq!(
            "dijkstra".parse::<Solver>(),
            Err(MazeError::UnknownAlgorithm("dijkstra".to_string()))
        );
    }

    #[test]
    fn test_out_of_range() {
        let grid = generate(3, 4, Generator::Prim, &mut get_rng(Some(0))).unwrap();
        for solver in Solver::ALL {
            assert_eq!(
                solve(&grid, (3, 0), (0, 0), solver),
                Err(MazeError::OutOfRange {
                    endpoint: Endpoint::Start,
                    coord: (3, 0)
                })
            );
            assert_eq!(
                solve(&grid, (0, 0), (0, 4), solver),
                Err(MazeError::OutOfRange {
                    endpoint: Endpoint::End,
                    coord: (0, 4)
                })
            );
        }
    }

    #[test]
    fn test_dfs_and_bfs_agree_on_every_generator() {
        for (seed, generator) in Generator::ALL.into_iter().enumerate() {
            let grid = generate(9, 13, generator, &mut get_rng(Some(seed as u64))).unwrap();
            let pairs = [((0, 0), (8, 12)), ((4, 6), (0, 12)), ((8, 0), (2, 3))];
            for (start, end) in pairs {
                let dfs = solve(&grid, start, end, Solver::Dfs).unwrap();
                let bfs = solve(&grid, start, end, Solver::Bfs).unwrap();
                assert_eq!(dfs, bfs, "{generator} {start:?} -> {end:?}");
                assert_eq!(dfs.start(), Some(start));
                assert_eq!(dfs.end(), Some(end));
                assert!(dfs.is_valid_in(&grid));
                let manhattan = start.0.abs_diff(end.0) + start.1.abs_diff(end.1);
                assert!(dfs.len() > manhattan);
            }
        }
    }

    #[test]
    fn test_kruskal_three_by_three_scenario() {
        for seed in 0..10 {
            let grid = generate(3, 3, Generator::Kruskal, &mut get_rng(Some(seed))).unwrap();
            let path = solve(&grid, (0, 0), (2, 2), Solver::Bfs).unwrap();
            assert!((5..=9).contains(&path.len()));
            assert_eq!(path.start(), Some((0, 0)));
            assert_eq!(path.end(), Some((2, 2)));
            assert!(path.is_valid_in(&grid));
        }
    }

    #[test]
    fn test_single_cell_path() {
        let grid = generate(1, 1, Generator::RecurBacktrack, &mut get_rng(Some(0))).unwrap();
        for solver in Solver::ALL {
            let path = solve(&grid, (0, 0), (0, 0), solver).unwrap();
            assert_eq!(path.cells(), &[(0, 0)]);
        }
    }

    #[test]
    fn test_solve_leaves_grid_untouched() {
        let grid = generate(6, 6, Generator::Eller, &mut get_rng(Some(4))).unwrap();
        let before = grid.clone();
        for solver in Solver::ALL {
            solve(&grid, (0, 0), (5, 5), solver).unwrap();
        }
        assert_eq!(grid, before);
    }

    #[test]
    fn test_no_solution_on_split_grid() {
        // Two corridors with no wall opened between the rows
        let grid = Grid::from_open_fn(2, 3, |x, y| x % 2 == 1 && y > 0 && y < 6).unwrap();
        for solver in Solver::ALL {
            assert_eq!(
                solve(&grid, (0, 0), (1, 2), solver),
                Err(MazeError::NoSolutionFound)
            );
            assert!(solve(&grid, (1, 0), (1, 2), solver).is_ok());
        }
    }

    #[test]
    fn test_closed_start_cell_is_not_checked() {
        let grid = Grid::from_open_fn(1, 2, |_, y| y > 2).unwrap();
        assert!(!grid.is_open(1, 1));
        for solver in Solver::ALL {
            let path = solve(&grid, (0, 0), (0, 0), solver).unwrap();
            assert_eq!(path.cells(), &[(0, 0)]);
            assert_eq!(
                solve(&grid, (0, 0), (0, 1), solver),
                Err(MazeError::NoSolutionFound)
            );
        }
    }

    #[test]
    fn test_open_border_is_not_an_exit() {
        let grid = Grid::from_open_fn(1, 2, |_, _| true).unwrap();
        for solver in Solver::ALL {
            let path = solve(&grid, (0, 0), (0, 1), solver).unwrap();
            assert_eq!(path.cells(), &[(0, 0), (0, 1)]);
        }
    }
}

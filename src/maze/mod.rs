pub mod cell;
mod direction;
pub mod grid;

use rand::rngs::StdRng;

pub use cell::GridCell;
pub use direction::Direction;
pub use grid::Grid;

use crate::{
    error::{MazeError, Result},
    generators::{Generator, generate, get_rng},
    solvers::{Path, Solver, solve},
};

/// Logical cell coordinate `(row, col)`.
pub type Coord = (usize, usize);

/// A maze session: the current grid, its last solution, and the random
/// source every generation draws from.
pub struct Maze {
    grid: Option<Grid>,
    solution: Option<Path>,
    rng: StdRng,
}

impl Default for Maze {
    fn default() -> Self {
        Maze::new(None)
    }
}

impl Maze {
    /// Creates an empty session. A seed makes every generation reproducible.
    pub fn new(seed: Option<u64>) -> Self {
        Maze::with_rng(get_rng(seed))
    }

    pub fn with_rng(rng: StdRng) -> Self {
        Maze {
            grid: None,
            solution: None,
            rng,
        }
    }

    pub fn grid(&self) -> Option<&Grid> {
        self.grid.as_ref()
    }

    pub fn solution(&self) -> Option<&Path> {
        self.solution.as_ref()
    }

    /// Generates a fresh `rows x cols` maze, replacing the current one.
    pub fn create(&mut self, rows: usize, cols: usize, generator: Generator) -> Result<&Grid> {
        let grid = generate(rows, cols, generator, &mut self.rng)?;
        self.solution = None;
        Ok(self.grid.insert(grid))
    }

    /// Replaces the current maze with an externally built grid.
    pub fn load(&mut self, grid: Grid) {
        self.solution = None;
        self.grid = Some(grid);
    }

    /// Solves the current maze. `start` defaults to the top-left cell and
    /// `end` to the bottom-right one.
    pub fn solve(
        &mut self,
        start: Option<Coord>,
        end: Option<Coord>,
        solver: Solver,
    ) -> Result<&Path> {
        let grid = self.grid.as_ref().ok_or(MazeError::MazeNotAssigned)?;
        let start = start.unwrap_or((0, 0));
        let end = end.unwrap_or((grid.logical_rows() - 1, grid.logical_cols() - 1));
        let path = solve(grid, start, end, solver)?;
        Ok(self.solution.insert(path))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solve_before_create() {
        let mut maze = Maze::new(Some(0));
        assert_eq!(
            maze.solve(None, None, Solver::Dfs),
            Err(MazeError::MazeNotAssigned)
        );
        assert!(maze.grid().is_none());
        assert!(maze.solution().is_none());
    }

    #[test]
    fn test_create_then_solve_with_defaults() {
        let mut maze = Maze::new(Some(7));
        maze.create(6, 9, Generator::HuntAndKill).unwrap();
        let path = maze.solve(None, None, Solver::Bfs).unwrap().clone();
        assert_eq!(path.start(), Some((0, 0)));
        assert_eq!(path.end(), Some((5, 8)));
        assert_eq!(maze.solution(), Some(&path));
        assert!(path.is_valid_in(maze.grid().unwrap()));
    }

    #[test]
    fn test_single_cell_session() {
        let mut maze = Maze::new(Some(1));
        let grid = maze.create(1, 1, Generator::RecurBacktrack).unwrap();
        assert!(grid.is_open(1, 1));
        assert_eq!(grid.open_edges(), 0);
        let path = maze.solve(Some((0, 0)), Some((0, 0)), Solver::Dfs).unwrap();
        assert_eq!(path.cells(), &[(0, 0)]);
    }

    #[test]
    fn test_create_invalid_keeps_previous_maze() {
        let mut maze = Maze::new(Some(2));
        maze.create(3, 3, Generator::Sidewinder).unwrap();
        assert_eq!(
            maze.create(0, 3, Generator::Sidewinder).err(),
            Some(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(maze.grid().map(Grid::logical_rows), Some(3));
    }

    #[test]
    fn test_new_maze_clears_solution() {
        let mut maze = Maze::new(Some(3));
        maze.create(4, 4, Generator::Prim).unwrap();
        maze.solve(None, None, Solver::Dfs).unwrap();
        assert!(maze.solution().is_some());
        maze.create(4, 4, Generator::Kruskal).unwrap();
        assert!(maze.solution().is_none());
    }

    #[test]
    fn test_load_external_grid() {
        let mut maze = Maze::default();
        maze.load(Grid::from_open_fn(1, 3, |x, _| x == 1).unwrap());
        let path = maze.solve(None, None, Solver::Dfs).unwrap();
        assert_eq!(path.cells(), &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(
            maze.solve(None, Some((1, 0)), Solver::Dfs).err(),
            Some(MazeError::OutOfRange {
                endpoint: crate::error::Endpoint::End,
                coord: (1, 0)
            })
        );
    }

    #[test]
    fn test_seeded_sessions_match() {
        let mut a = Maze::new(Some(11));
        let mut b = Maze::new(Some(11));
        for generator in Generator::ALL {
            assert_eq!(
                a.create(7, 5, generator).unwrap(),
                b.create(7, 5, generator).unwrap()
            );
        }
    }
}

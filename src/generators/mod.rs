use std::str::FromStr;

use rand::{Rng, SeedableRng, rngs::StdRng};

mod eller;
mod hunt_and_kill;
mod kruskal;
pub mod partition;
mod prim;
mod recur_backtrack;
mod sidewinder;

use eller::eller;
use hunt_and_kill::hunt_and_kill;
use kruskal::randomized_kruskal;
use prim::randomized_prim;
use recur_backtrack::recursive_backtrack;
use sidewinder::sidewinder;

use crate::{
    error::{MazeError, Result},
    maze::{Direction, Grid, grid::to_grid},
};

/// Get a random number generator, optionally seeded for reproducibility.
pub fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Generator {
    RecurBacktrack,
    HuntAndKill,
    Eller,
    Sidewinder,
    Prim,
    Kruskal,
}

impl Generator {
    pub const ALL: [Generator; 6] = [
        Generator::RecurBacktrack,
        Generator::HuntAndKill,
        Generator::Eller,
        Generator::Sidewinder,
        Generator::Prim,
        Generator::Kruskal,
    ];
}

impl std::fmt::Display for Generator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Generator::RecurBacktrack => write!(f, "Recursive Backtracking"),
            Generator::HuntAndKill => write!(f, "Hunt and Kill"),
            Generator::Eller => write!(f, "Eller's Algorithm"),
            Generator::Sidewinder => write!(f, "Sidewinder"),
            Generator::Prim => write!(f, "Prim's Algorithm"),
            Generator::Kruskal => write!(f, "Kruskal's Algorithm"),
        }
    }
}

impl FromStr for Generator {
    type Err = MazeError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "backtracking" | "recursive-backtracking" => Ok(Generator::RecurBacktrack),
            "hunt" | "hunt-and-kill" => Ok(Generator::HuntAndKill),
            "eller" => Ok(Generator::Eller),
            "sidewinder" => Ok(Generator::Sidewinder),
            "prim" => Ok(Generator::Prim),
            "kruskal" => Ok(Generator::Kruskal),
            _ => Err(MazeError::UnknownAlgorithm(s.to_string())),
        }
    }
}

/// Carves a spanning tree into an all-closed `grid`.
pub fn generate_maze<R: Rng + ?Sized>(grid: &mut Grid, generator: Generator, rng: &mut R) {
    tracing::debug!(
        "[generate] {} on {}x{} cells",
        generator,
        grid.logical_rows(),
        grid.logical_cols()
    );
    match generator {
        Generator::RecurBacktrack => recursive_backtrack(grid, rng),
        Generator::HuntAndKill => hunt_and_kill(grid, rng),
        Generator::Eller => eller(grid, rng),
        Generator::Sidewinder => sidewinder(grid, rng),
        Generator::Prim => randomized_prim(grid, rng),
        Generator::Kruskal => randomized_kruskal(grid, rng),
    }
    tracing::debug!("[generate] {} done, {} open walls", generator, grid.open_edges());
}

/// Builds a new `rows x cols` maze with the given algorithm.
pub fn generate<R: Rng + ?Sized>(
    rows: usize,
    cols: usize,
    generator: Generator,
    rng: &mut R,
) -> Result<Grid> {
    let mut grid = Grid::new(rows, cols)?;
    generate_maze(&mut grid, generator, rng);
    Ok(grid)
}

/// Grid position of a uniformly random cell.
fn random_cell<R: Rng + ?Sized>(grid: &Grid, rng: &mut R) -> (usize, usize) {
    to_grid((
        rng.random_range(0..grid.logical_rows()),
        rng.random_range(0..grid.logical_cols()),
    ))
}

/// The four directions in a freshly shuffled order.
fn shuffled_directions<R: Rng + ?Sized>(rng: &mut R) -> [Direction; 4] {
    use rand::seq::SliceRandom;

    let mut dirs = Direction::ALL;
    dirs.shuffle(rng);
    dirs
}

/// Takes one step of a random walk from `pos` into an unvisited neighbor,
/// carving the wall on the way. Returns `None` at a dead end.
fn walk<R: Rng + ?Sized>(
    grid: &mut Grid,
    pos: (usize, usize),
    rng: &mut R,
) -> Option<(usize, usize)> {
    let dir = shuffled_directions(rng).into_iter().find(|&dir| {
        grid.leap(pos, dir)
            .is_some_and(|(next, _)| !grid.is_open(next.0, next.1))
    })?;
    Some(grid.carve(pos, dir))
}

/// Whether the cell at `pos` has a neighbor for which `pred` holds.
fn has_neighbor(grid: &Grid, pos: (usize, usize), pred: impl Fn(bool) -> bool) -> bool {
    Direction::ALL.into_iter().any(|dir| {
        grid.leap(pos, dir)
            .is_some_and(|(next, _)| pred(grid.is_open(next.0, next.1)))
    })
}

#[cfg(test)]
pub(crate) mod tests_support {
    use super::*;

    pub const SIZES: [(usize, usize); 7] =
        [(1, 1), (1, 7), (7, 1), (2, 2), (3, 3), (8, 5), (20, 31)];

    pub fn assert_perfect(grid: &Grid) {
        let total = grid.logical_rows() * grid.logical_cols();
        assert!(
            grid.cells().all(|(x, y)| grid.is_open(x, y)),
            "every cell must be carved"
        );
        assert_eq!(grid.open_edges(), total - 1, "a spanning tree has cells - 1 edges");
        assert!(grid.is_perfect(), "maze must be connected");
        // Corners never open
        for x in (0..grid.height()).step_by(2) {
            for y in (0..grid.width()).step_by(2) {
                assert!(!grid.is_open(x, y));
            }
        }
    }

    pub fn check_generator(generator: Generator) {
        for (seed, &(rows, cols)) in SIZES.iter().enumerate() {
            let mut rng = get_rng(Some(seed as u64));
            let grid = generate(rows, cols, generator, &mut rng).unwrap();
            assert_perfect(&grid);
        }
    }

    pub fn check_deterministic(generator: Generator) {
        let first = generate(12, 9, generator, &mut get_rng(Some(42))).unwrap();
        let second = generate(12, 9, generator, &mut get_rng(Some(42))).unwrap();
        assert_eq!(first, second);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_generator() {
        assert_eq!("kruskal".parse::<Generator>(), Ok(Generator::Kruskal));
        assert_eq!("Hunt-And-Kill".parse::<Generator>(), Ok(Generator::HuntAndKill));
        assert_eq!(
            "backtracking".parse::<Generator>(),
            Ok(Generator::RecurBacktrack)
        );
        assert_eq!(
            "division".parse::<Generator>(),
            Err(MazeError::UnknownAlgorithm("division".to_string()))
        );
    }

    #[test]
    fn test_generate_invalid_dimensions() {
        let mut rng = get_rng(Some(0));
        assert_eq!(
            generate(0, 3, Generator::Prim, &mut rng),
            Err(MazeError::InvalidDimensions { rows: 0, cols: 3 })
        );
        assert_eq!(
            generate(usize::MAX, 1, Generator::Prim, &mut rng),
            Err(MazeError::InvalidDimensions { rows: usize::MAX, cols: 1 })
        );
    }

    #[test]
    fn test_single_cell_maze() {
        for generator in Generator::ALL {
            let grid = generate(1, 1, generator, &mut get_rng(Some(1))).unwrap();
            assert!(grid.is_open(1, 1));
            assert_eq!(grid.open_edges(), 0);
            tests_support::assert_perfect(&grid);
        }
    }

    #[test]
    fn test_different_seeds_differ() {
        let a = generate(15, 15, Generator::RecurBacktrack, &mut get_rng(Some(1))).unwrap();
        let b = generate(15, 15, Generator::RecurBacktrack, &mut get_rng(Some(2))).unwrap();
        assert_ne!(a, b);
    }
}

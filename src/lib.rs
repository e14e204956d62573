//! Perfect maze generation and solving.
//!
//! A maze is a [`Grid`] of `R x C` cells stored together with the walls between
//! them. Any of the six [`Generator`]s carves a spanning tree into an all-closed
//! grid, so there is exactly one route between any two cells, and either
//! [`Solver`] recovers that route as a [`Path`].
//!
//! ```
//! use mazegen::{Generator, Solver, generators, solvers};
//!
//! let mut rng = generators::get_rng(Some(7));
//! let grid = generators::generate(3, 3, Generator::Kruskal, &mut rng).unwrap();
//! let path = solvers::solve(&grid, (0, 0), (2, 2), Solver::Bfs).unwrap();
//! assert_eq!(path.start(), Some((0, 0)));
//! assert_eq!(path.end(), Some((2, 2)));
//! ```

pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;

pub use error::{MazeError, Result};
pub use generators::Generator;
pub use maze::{Coord, Grid, Maze};
pub use solvers::{Path, Solver};

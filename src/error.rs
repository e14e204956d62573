use std::fmt;

use thiserror::Error;

use crate::maze::Coord;

/// Which end of a route a coordinate was given for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Start,
    End,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::End => write!(f, "end"),
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    #[error("row and column counts must be positive, got {rows}x{cols}")]
    InvalidDimensions { rows: usize, cols: usize },
    #[error("unknown algorithm <{0}>")]
    UnknownAlgorithm(String),
    #[error("maze is not assigned, create or load a maze first")]
    MazeNotAssigned,
    #[error("{endpoint} point {coord:?} is out of range")]
    OutOfRange { endpoint: Endpoint, coord: Coord },
    #[error("no solution found")]
    NoSolutionFound,
}

pub type Result<T> = std::result::Result<T, MazeError>;

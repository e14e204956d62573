use rand::Rng;

use crate::{
    generators::{has_neighbor, random_cell, walk},
    maze::Grid,
};

pub fn recursive_backtrack<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = random_cell(grid, rng);
    grid.set_open(start.0, start.1);

    // The stack keeps every cell of the current walk so we can back up to it
    let mut stack = Vec::new();
    let mut current = Some(start);

    while let Some(mut cell) = current {
        stack.push(cell);
        while let Some(next) = walk(grid, cell, rng) {
            stack.push(next);
            cell = next;
        }
        current = backtrack(grid, &mut stack);
    }
}

/// Pops cells until one still has an unvisited neighbor.
fn backtrack(grid: &Grid, stack: &mut Vec<(usize, usize)>) -> Option<(usize, usize)> {
    while let Some(cell) = stack.pop() {
        if has_neighbor(grid, cell, |open| !open) {
            return Some(cell);
        }
    }
    None
}

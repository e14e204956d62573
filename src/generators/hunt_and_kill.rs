use rand::Rng;

use crate::{
    generators::{has_neighbor, random_cell, shuffled_directions, walk},
    maze::Grid,
};

pub fn hunt_and_kill<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = random_cell(grid, rng);
    grid.set_open(start.0, start.1);

    // Grid rows that may still hold unvisited cells
    let mut unfinished_rows = (1..grid.height()).step_by(2).collect::<Vec<_>>();
    let mut current = Some(start);

    while let Some(mut cell) = current {
        // Kill: random walk until we hit a dead end
        while let Some(next) = walk(grid, cell, rng) {
            cell = next;
        }
        current = hunt(grid, &mut unfinished_rows, rng);
    }
}

/// Scans the unfinished rows in order for the first unvisited cell next to the
/// visited region, joins it to a random visited neighbor and returns it.
fn hunt<R: Rng + ?Sized>(
    grid: &mut Grid,
    unfinished_rows: &mut Vec<usize>,
    rng: &mut R,
) -> Option<(usize, usize)> {
    let mut i = 0;
    while i < unfinished_rows.len() {
        let x = unfinished_rows[i];
        let mut finished = true;

        for y in (1..grid.width()).step_by(2) {
            if grid.is_open(x, y) {
                continue;
            }
            finished = false;
            if !has_neighbor(grid, (x, y), |open| open) {
                continue;
            }

            let dir = shuffled_directions(rng).into_iter().find(|&dir| {
                grid.leap((x, y), dir)
                    .is_some_and(|(next, _)| grid.is_open(next.0, next.1))
            })?;
            let (neighbor, _) = grid.leap((x, y), dir)?;
            return Some(grid.carve(neighbor, dir.opposite()));
        }

        if finished {
            unfinished_rows.remove(i);
        } else {
            i += 1;
        }
    }
    None
}

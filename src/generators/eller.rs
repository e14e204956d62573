use rand::Rng;

use crate::{generators::partition::RowSets, maze::Grid};

/// Eller's algorithm: builds the maze one row at a time while tracking which
/// cells of the current row are already connected through earlier rows.
pub fn eller<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let rows = grid.logical_rows();
    let cols = grid.logical_cols();
    let mut row_sets = RowSets::new(cols);

    for r in 0..rows {
        let x = r * 2 + 1;

        row_sets.ensure(0);
        grid.set_open(x, 1);
        for c in 1..cols {
            let y = c * 2 + 1;
            grid.set_open(x, y);
            if rng.random_bool(0.5) {
                // Join with the left neighbor unless that would close a loop
                if !row_sets.same(c - 1, c) {
                    row_sets.merge(c - 1, c);
                    grid.set_open(x, y - 1);
                }
            } else {
                row_sets.ensure(c);
            }
        }

        if r + 1 == rows {
            // No row below to join the remaining sets, so join them here
            for c in 1..cols {
                if !row_sets.same(c - 1, c) {
                    row_sets.merge(c - 1, c);
                    grid.set_open(x, c * 2);
                }
            }
            break;
        }

        let groups = row_sets.groups();
        row_sets.clear();
        for (id, members) in groups {
            // Every set must reach the next row at least once
            let mut linked = false;
            while !linked {
                for &c in &members {
                    if rng.random_bool(0.5) {
                        linked = true;
                        row_sets.set(c, id);
                        grid.set_open(x + 1, c * 2 + 1);
                    }
                }
            }
        }
    }
}

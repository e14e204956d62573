use rand::Rng;

use crate::maze::Grid;

/// Sidewinder: the first row is one long corridor. Every later row is cut
/// into runs going right, and each run gets exactly one opening to the row above.
pub fn sidewinder<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let width = grid.width();

    // First row is fully open
    (1..width - 1).for_each(|y| grid.set_open(1, y));

    for x in (3..grid.height()).step_by(2) {
        let mut run = Vec::new();

        for y in (1..width).step_by(2) {
            grid.set_open(x, y);
            run.push(y);

            let at_row_end = y + 2 >= width;
            if at_row_end || rng.random_bool(0.5) {
                // Close the run off with a link upwards from one of its cells
                let member = run[rng.random_range(0..run.len())];
                grid.set_open(x - 1, member);
                run.clear();
            } else {
                grid.set_open(x, y + 1);
            }
        }
    }
}

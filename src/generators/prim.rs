use rand::Rng;

use crate::{
    generators::{random_cell, shuffled_directions},
    maze::{Direction, Grid},
};

/// Unvisited cells bordering the carved region.
///
/// Backed by a vector plus a per-position slot table, so insertion, removal
/// and uniform random picks are all constant time.
struct Frontier {
    cells: Vec<(usize, usize)>,
    slots: Vec<Option<usize>>,
    width: usize,
}

impl Frontier {
    fn new(grid: &Grid) -> Self {
        Frontier {
            cells: Vec::new(),
            slots: vec![None; grid.height() * grid.width()],
            width: grid.width(),
        }
    }

    fn slot(&self, pos: (usize, usize)) -> usize {
        pos.0 * self.width + pos.1
    }

    fn len(&self) -> usize {
        self.cells.len()
    }

    fn contains(&self, pos: (usize, usize)) -> bool {
        self.slots[self.slot(pos)].is_some()
    }

    /// Returns `false` if `pos` was already in the frontier.
    fn insert(&mut self, pos: (usize, usize)) -> bool {
        if self.contains(pos) {
            return false;
        }
        let slot = self.slot(pos);
        self.slots[slot] = Some(self.cells.len());
        self.cells.push(pos);
        true
    }

    fn remove(&mut self, pos: (usize, usize)) -> bool {
        let slot = self.slot(pos);
        let Some(idx) = self.slots[slot].take() else {
            return false;
        };
        self.cells.swap_remove(idx);
        if let Some(&moved) = self.cells.get(idx) {
            let moved_slot = self.slot(moved);
            self.slots[moved_slot] = Some(idx);
        }
        true
    }

    fn pop_random<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<(usize, usize)> {
        if self.cells.is_empty() {
            return None;
        }
        let pos = self.cells[rng.random_range(0..self.len())];
        self.remove(pos);
        Some(pos)
    }
}

pub fn randomized_prim<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let start = random_cell(grid, rng);
    grid.set_open(start.0, start.1);

    let mut frontier = Frontier::new(grid);
    add_unvisited_neighbors(grid, start, &mut frontier);

    while let Some(cell) = frontier.pop_random(rng) {
        // Attach the cell to a random part of the carved region
        let joint = shuffled_directions(rng).into_iter().find_map(|dir| {
            grid.leap(cell, dir)
                .filter(|&(next, _)| grid.is_open(next.0, next.1))
                .map(|(next, _)| (next, dir))
        });
        if let Some((neighbor, dir)) = joint {
            grid.carve(neighbor, dir.opposite());
        }

        add_unvisited_neighbors(grid, cell, &mut frontier);
    }
}

fn add_unvisited_neighbors(grid: &Grid, pos: (usize, usize), frontier: &mut Frontier) {
    Direction::ALL
        .into_iter()
        .filter_map(|dir| grid.leap(pos, dir))
        .filter(|&(next, _)| !grid.is_open(next.0, next.1))
        .for_each(|(next, _)| {
            frontier.insert(next);
        });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::generators::{Generator, get_rng, tests_support};

    #[test]
    fn test_randomized_prim() {
        tests_support::check_generator(Generator::Prim);
    }

    #[test]
    fn test_deterministic() {
        tests_support::check_deterministic(Generator::Prim);
    }

    #[test]
    fn test_frontier_set_operations() {
        let grid = Grid::new(3, 3).unwrap();
        let mut frontier = Frontier::new(&grid);
        assert!(frontier.insert((1, 1)));
        assert!(frontier.insert((1, 3)));
        assert!(frontier.insert((3, 3)));
        assert!(!frontier.insert((1, 3)));
        assert_eq!(frontier.len(), 3);

        assert!(frontier.remove((1, 1)));
        assert!(!frontier.remove((1, 1)));
        assert!(frontier.contains((3, 3)));
        assert!(frontier.contains((1, 3)));
        assert_eq!(frontier.len(), 2);

        let mut rng = get_rng(Some(0));
        let mut popped = vec![
            frontier.pop_random(&mut rng).unwrap(),
            frontier.pop_random(&mut rng).unwrap(),
        ];
        popped.sort();
        assert_eq!(popped, vec![(1, 3), (3, 3)]);
        assert_eq!(frontier.pop_random(&mut rng), None);
    }
}

use rand::{Rng, seq::SliceRandom};

use crate::{
    generators::partition::UnionFind,
    maze::{Direction, Grid, grid::to_logical},
};

/// Wall between two adjacent cells, all in grid space
#[derive(Clone, Copy)]
struct Edge {
    cell1: (usize, usize),
    cell2: (usize, usize),
    wall: (usize, usize),
}

pub fn randomized_kruskal<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) {
    let cols = grid.logical_cols();

    // Every cell starts out as its own single-cell tree
    let cells = grid.cells().collect::<Vec<_>>();
    cells.iter().for_each(|&(x, y)| grid.set_open(x, y));
    let mut uf = UnionFind::new(cells.len());

    // Collect all possible edges (walls between adjacent cells)
    let mut edges = cells
        .iter()
        .flat_map(|&cell| {
            [Direction::Down, Direction::Right].map(|dir| {
                grid.leap(cell, dir).map(|(cell2, wall)| Edge {
                    cell1: cell,
                    cell2,
                    wall,
                })
            })
        })
        .flatten()
        .collect::<Vec<_>>();

    // Shuffle edges randomly
    edges.shuffle(rng);

    let index = |pos: (usize, usize)| {
        let (r, c) = to_logical(pos);
        r * cols + c
    };

    let mut joined = 0;
    for edge in edges {
        // If cells are not yet connected, remove the wall between them
        if uf.unite(index(edge.cell1), index(edge.cell2)) {
            grid.set_open(edge.wall.0, edge.wall.1);
            joined += 1;
        }
    }
    tracing::trace!("[kruskal] joined {} trees", joined);
}

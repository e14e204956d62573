//! Disjoint-set helpers used to keep generated mazes acyclic.

/// Union-find over `0..size` with path compression and union by rank.
pub struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u8>,
}

impl UnionFind {
    pub fn new(size: usize) -> Self {
        UnionFind {
            parent: (0..size).collect(),
            rank: vec![0; size],
        }
    }

    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        // Point every node on the walked chain straight at the root
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merges the sets of `x` and `y`. Returns `false` if they were already joined.
    pub fn unite(&mut self, x: usize, y: usize) -> bool {
        let root_x = self.find(x);
        let root_y = self.find(y);

        if root_x == root_y {
            return false; // Already in same set
        }

        match self.rank[root_x].cmp(&self.rank[root_y]) {
            std::cmp::Ordering::Greater => {
                self.parent[root_y] = root_x;
            }
            std::cmp::Ordering::Less => {
                self.parent[root_x] = root_y;
            }
            std::cmp::Ordering::Equal => {
                self.parent[root_y] = root_x;
                self.rank[root_x] += 1;
            }
        }
        true
    }
}

/// Set membership of the cells in the row Eller's algorithm is working on.
///
/// Merging rewrites every column holding the absorbed id, which is linear in
/// the row width but keeps the ids directly comparable.
pub struct RowSets {
    sets: Vec<Option<usize>>,
    next_id: usize,
}

impl RowSets {
    pub fn new(cols: usize) -> Self {
        RowSets {
            sets: vec![None; cols],
            next_id: 0,
        }
    }

    pub fn set(&mut self, col: usize, id: usize) {
        self.sets[col] = Some(id);
    }

    /// Puts `col` into a brand new set unless it already belongs to one.
    pub fn ensure(&mut self, col: usize) -> usize {
        match self.sets[col] {
            Some(id) => id,
            None => {
                let id = self.next_id;
                self.next_id += 1;
                self.sets[col] = Some(id);
                id
            }
        }
    }

    pub fn same(&self, a: usize, b: usize) -> bool {
        self.sets[a].is_some() && self.sets[a] == self.sets[b]
    }

    /// Moves every column of `absorb`'s set into `keep`'s set.
    pub fn merge(&mut self, keep: usize, absorb: usize) {
        let Some(new_id) = self.sets[keep] else {
            return;
        };
        match self.sets[absorb] {
            Some(old_id) => self
                .sets
                .iter_mut()
                .filter(|id| **id == Some(old_id))
                .for_each(|id| *id = Some(new_id)),
            None => self.sets[absorb] = Some(new_id),
        }
    }

    /// Distinct sets in order of first appearance, each with its columns.
    pub fn groups(&self) -> Vec<(usize, Vec<usize>)> {
        let mut groups: Vec<(usize, Vec<usize>)> = Vec::new();
        for (col, id) in self.sets.iter().enumerate() {
            let Some(id) = *id else { continue };
            match groups.iter_mut().find(|(g, _)| *g == id) {
                Some((_, cols)) => cols.push(col),
                None => groups.push((id, vec![col])),
            }
        }
        groups
    }

    /// Forgets the current row; fresh ids keep counting up.
    pub fn clear(&mut self) {
        self.sets.iter_mut().for_each(|id| *id = None);
    }
}

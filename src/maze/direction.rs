/// The four cardinal directions in wall-inclusive grid space.
///
/// Rows grow downwards and columns grow to the right. The order of
/// [`Direction::ALL`] is the natural order used wherever no shuffle is applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Down,
    Up,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Down,
        Direction::Up,
        Direction::Left,
        Direction::Right,
    ];

    /// Single-stride `(row, col)` offset: from a cell to the wall next to it.
    pub const fn offset(self) -> (isize, isize) {
        match self {
            Direction::Down => (1, 0),
            Direction::Up => (-1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
        }
    }

    pub const fn opposite(self) -> Direction {
        match self {
            Direction::Down => Direction::Up,
            Direction::Up => Direction::Down,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// Applies `offset * stride` to `pos`, returning `None` on underflow.
    /// Upper bounds are left to the caller.
    pub fn apply(self, pos: (usize, usize), stride: isize) -> Option<(usize, usize)> {
        let (dr, dc) = self.offset();
        Some((
            pos.0.checked_add_signed(dr * stride)?,
            pos.1.checked_add_signed(dc * stride)?,
        ))
    }
}

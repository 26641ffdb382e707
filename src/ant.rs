use crate::heading::Heading;

/// Ant position (signed, may leave the grid) and heading
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    pub row: isize,
    pub col: isize,
    pub heading: Heading,
}

impl Ant {
    /// Create a new ant at the given cell
    pub fn new(row: isize, col: isize, heading: Heading) -> Self {
        Self { row, col, heading }
    }

    /// Create an ant at the center of a `size` x `size` grid
    pub fn centered(size: usize, heading: Heading) -> Self {
        let mid = (size / 2) as isize;
        Self::new(mid, mid, heading)
    }

    /// Advance one cell along the heading. Rows count downwards, so a
    /// positive `y` decreases the row index.
    #[inline]
    pub fn advance(&mut self) {
        let (dx, dy) = self.heading.vector();
        self.row -= dy as isize;
        self.col += dx as isize;
    }

    /// Cell indices if the ant is inside a `size` x `size` grid
    #[inline]
    pub fn cell(&self, size: usize) -> Option<(usize, usize)> {
        let in_range = |v: isize| v >= 0 && (v as usize) < size;
        (in_range(self.row) && in_range(self.col)).then(|| (self.row as usize, self.col as usize))
    }

    #[inline]
    pub fn position(&self) -> (isize, isize) {
        (self.row, self.col)
    }
}

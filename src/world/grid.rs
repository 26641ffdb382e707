use crate::error::{LangtonError, Result};
use crate::world::cell::Color;

/// Square color grid stored row-major in one flat vector
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Color>,
}

impl Grid {
    /// Create an all-white `size` x `size` grid
    pub fn new(size: usize) -> Result<Self> {
        let len = size
            .checked_mul(size)
            .filter(|&len| len > 0)
            .ok_or(LangtonError::InvalidGridSize(size))?;

        let mut cells = Vec::new();
        cells
            .try_reserve_exact(len)
            .map_err(|_| LangtonError::InvalidGridSize(size))?;
        cells.resize(len, Color::White);

        Ok(Self { size, cells })
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.size && col < self.size).then(|| row * self.size + col)
    }

    /// Color at a cell
    #[inline]
    pub fn get(&self, row: usize, col: usize) -> Option<Color> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Overwrite a cell, returning the previous color
    #[inline]
    pub fn set(&mut self, row: usize, col: usize, color: Color) -> Option<Color> {
        let i = self.index(row, col)?;
        Some(std::mem::replace(&mut self.cells[i], color))
    }

    /// Flip a cell, returning the color it had before
    #[inline]
    pub fn flip(&mut self, row: usize, col: usize) -> Option<Color> {
        let i = self.index(row, col)?;
        let old = self.cells[i];
        self.cells[i] = old.flipped();
        Some(old)
    }

    /// Rows as slices, top to bottom
    pub fn rows(&self) -> std::slice::Chunks<'_, Color> {
        self.cells.chunks(self.size)
    }

    /// Count cells of the given color
    pub fn count(&self, color: Color) -> usize {
        self.cells.iter().filter(|&&c| c == color).count()
    }
}

use crate::world::{Grid, Symbol};
use std::fmt;

/// Borrowed view of the grid with the ant overlaid at its cell.
///
/// Nothing is computed up front: `rows()` builds a fresh lazy iterator on
/// every call, so a snapshot can be walked as often as needed.
#[derive(Clone, Copy, Debug)]
pub struct Snapshot<'a> {
    grid: &'a Grid,
    ant: Option<(usize, usize)>,
}

impl<'a> Snapshot<'a> {
    pub fn new(grid: &'a Grid, ant: Option<(usize, usize)>) -> Self {
        Self { grid, ant }
    }

    /// Rows top to bottom, each a sequence of symbols left to right
    pub fn rows(&self) -> impl Iterator<Item = impl Iterator<Item = Symbol> + 'a> + 'a {
        let grid: &'a Grid = self.grid;
        let ant = self.ant;
        grid.rows().enumerate().map(move |(r, row)| {
            row.iter().enumerate().map(move |(c, &color)| {
                if ant == Some((r, c)) {
                    Symbol::Ant
                } else {
                    Symbol::from(color)
                }
            })
        })
    }
}

impl fmt::Display for Snapshot<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            if r > 0 {
                f.write_str("\n")?;
            }
            for (c, symbol) in row.enumerate() {
                if c > 0 {
                    f.write_str(" ")?;
                }
                write!(f, "{}", symbol.as_char())?;
            }
        }
        Ok(())
    }
}

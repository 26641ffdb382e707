use crate::ant::Ant;
use crate::error::Result;
use crate::heading::{Heading, HeadingSource};
use crate::simulation::snapshot::Snapshot;
use crate::world::{Color, Grid};

/// What a single tick did
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    /// The ant turned, flipped its cell and moved on
    Moved,
    /// The ant was off the grid and got recentered with a fresh heading
    Reinitialized,
}

/// Owns the grid and the ant, and advances them one tick at a time
pub struct SimulationEngine<R = fastrand::Rng> {
    grid: Grid,
    ant: Ant,
    headings: R,
    steps: u64,
    resets: u64,
}

impl<R: HeadingSource> SimulationEngine<R> {
    /// Blank `size` x `size` grid with a centered ant facing a heading drawn
    /// from `headings`
    pub fn new(size: usize, mut headings: R) -> Result<Self> {
        let grid = Grid::new(size)?;
        let ant = Ant::centered(size, headings.next_heading());
        Ok(Self {
            grid,
            ant,
            headings,
            steps: 0,
            resets: 0,
        })
    }

    /// Blank grid with the ant placed as given. `headings` is only consulted
    /// on resets.
    pub fn with_ant(size: usize, ant: Ant, headings: R) -> Result<Self> {
        Ok(Self {
            grid: Grid::new(size)?,
            ant,
            headings,
            steps: 0,
            resets: 0,
        })
    }

    /// Advance the simulation by one tick
    pub fn step(&mut self) -> StepOutcome {
        self.steps += 1;

        let Some((row, col)) = self.ant.cell(self.grid.size()) else {
            self.reinitialize();
            return StepOutcome::Reinitialized;
        };

        // cell() guarantees the indices are in range
        let turn: fn(Heading) -> Heading = match self.grid.flip(row, col) {
            Some(Color::White) => Heading::counterclockwise,
            _ => Heading::clockwise,
        };
        self.ant.heading = turn(self.ant.heading);
        self.ant.advance();

        StepOutcome::Moved
    }

    /// Recenter the ant with a fresh heading. The grid keeps its trail.
    fn reinitialize(&mut self) {
        self.resets += 1;
        self.ant = Ant::centered(self.grid.size(), self.headings.next_heading());
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.grid.size()
    }

    #[inline]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    #[inline]
    pub fn ant(&self) -> &Ant {
        &self.ant
    }

    /// Ticks taken so far, resets included
    #[inline]
    pub fn steps(&self) -> u64 {
        self.steps
    }

    /// Number of out-of-bounds resets so far
    #[inline]
    pub fn resets(&self) -> u64 {
        self.resets
    }

    /// Read-only view of the grid with the ant drawn on top
    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot::new(&self.grid, self.ant.cell(self.grid.size()))
    }
}

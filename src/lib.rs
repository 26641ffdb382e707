//! # Langton's Ant
//!
//! A two-color grid automaton: the ant turns left on white, right on black,
//! flips the cell it leaves and steps forward.
//!
//! This library provides the stepping engine, a read-only rendering snapshot
//! and a small epoch driver that prints frames to any writer.

pub mod ant;
pub mod cli;
pub mod error;
pub mod heading;
pub mod simulation;
pub mod world;

pub use ant::Ant;
pub use cli::Args;
pub use error::{LangtonError, Result};
pub use heading::{Heading, HeadingSource};
pub use simulation::{Runner, SimulationEngine, StepOutcome};
pub use world::{Color, Grid};

/// Re-export commonly used types
pub mod prelude {
    pub use crate::{
        Ant, Args, Color, Grid, Heading, HeadingSource, LangtonError, Result, Runner,
        SimulationEngine, StepOutcome,
    };
}

pub mod engine;
pub mod runner;
pub mod snapshot;

pub use engine::{SimulationEngine, StepOutcome};
pub use runner::{RunSummary, Runner};
pub use snapshot::Snapshot;

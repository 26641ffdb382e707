use crate::cli::Args;
use crate::error::Result;
use crate::heading::HeadingSource;
use crate::simulation::engine::{SimulationEngine, StepOutcome};
use crate::world::Color;
use colored::Colorize;
use std::io::Write;
use std::time::{Duration, Instant};

const SEPARATOR: &str = "========================================";

/// Totals reported after a run
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    pub epochs: u64,
    pub resets: u64,
    pub black_cells: usize,
    pub elapsed: Duration,
}

/// Drives an engine for a fixed number of epochs: render, step, pause.
/// The frame for an epoch always shows the ant where it stood before the
/// tick.
#[derive(Clone, Debug)]
pub struct Runner {
    pub epochs: u64,
    pub delay: Duration,
    pub suppress_events: bool,
}

impl Runner {
    pub fn new(epochs: u64, delay: Duration, suppress_events: bool) -> Self {
        Self {
            epochs,
            delay,
            suppress_events,
        }
    }

    pub fn from_args(args: &Args) -> Self {
        Self::new(args.epochs, Duration::from_millis(args.delay_ms), args.suppress_events)
    }

    /// Run all epochs, writing frames to `out`, then the final state
    pub fn run<R: HeadingSource, W: Write>(
        &self,
        engine: &mut SimulationEngine<R>,
        out: &mut W,
    ) -> Result<RunSummary> {
        let start = Instant::now();
        self.log_start(out, engine)?;

        for epoch in 0..self.epochs {
            writeln!(out, "{} {}", "Epoch ==>".bright_blue().bold(), epoch)?;
            writeln!(out, "{}", SEPARATOR)?;
            writeln!(out, "{}", engine.snapshot())?;

            if engine.step() == StepOutcome::Reinitialized {
                self.log_reset(out, engine)?;
            }

            if !self.delay.is_zero() {
                out.flush()?;
                std::thread::sleep(self.delay);
            }
            writeln!(out, "{}", SEPARATOR)?;
        }

        writeln!(out, "{}", "Final state...".green().bold())?;
        writeln!(out, "{}", SEPARATOR)?;
        writeln!(out, "{}", engine.snapshot())?;
        out.flush()?;

        Ok(RunSummary {
            epochs: self.epochs,
            resets: engine.resets(),
            black_cells: engine.grid().count(Color::Black),
            elapsed: start.elapsed(),
        })
    }

    /// Log where the ant starts and which way it faces
    fn log_start<R, W: Write>(&self, out: &mut W, engine: &SimulationEngine<R>) -> Result<()>
    where
        R: HeadingSource,
    {
        if self.suppress_events {
            return Ok(());
        }
        let (row, col) = engine.ant().position();
        writeln!(
            out,
            "{} {} {}",
            "🐜".yellow(),
            format!("Ant starts at ({}, {}) facing", row, col).yellow(),
            engine.ant().heading.as_str().bright_yellow()
        )?;
        Ok(())
    }

    /// Log an out-of-bounds reset
    #[inline]
    fn log_reset<R, W: Write>(&self, out: &mut W, engine: &SimulationEngine<R>) -> Result<()>
    where
        R: HeadingSource,
    {
        if self.suppress_events {
            return Ok(());
        }
        writeln!(
            out,
            "{} {} {}",
            "↩".yellow(),
            "Ant is out of bounds! Resetting position, now facing".yellow(),
            engine.ant().heading.as_str().bright_yellow()
        )?;
        Ok(())
    }

    /// Print the run summary
    pub fn print_summary<W: Write>(&self, out: &mut W, size: usize, summary: &RunSummary) -> Result<()> {
        writeln!(
            out,
            "\n{}\n{} {:.3} ms {} {} {} {}",
            "===".bright_blue().bold(),
            "⏱️  Simulation Latency:".green().bold(),
            summary.elapsed.as_secs_f64() * 1000.0,
            "|".dimmed(),
            format!("size={} epochs={}", size, summary.epochs).cyan(),
            format!("resets={}", summary.resets).cyan(),
            format!("black_cells={}", summary.black_cells).cyan(),
        )?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ant::Ant;
    use crate::heading::{FixedHeading, Heading};

    fn render(runner: &Runner, engine: &mut SimulationEngine<FixedHeading>) -> (String, RunSummary) {
        colored::control::set_override(false);
        let mut out = Vec::new();
        let summary = runner.run(engine, &mut out).unwrap();
        (String::from_utf8(out).unwrap(), summary)
    }

    #[test]
    fn test_zero_epochs_renders_initial_state_only() {
        let mut engine = SimulationEngine::new(3, FixedHeading(Heading::Up)).unwrap();
        let (text, summary) = render(&Runner::new(0, Duration::ZERO, false), &mut engine);

        assert_eq!(
            text,
            format!("🐜 Ant starts at (1, 1) facing up\nFinal state...\n{}\nO O O\nO * O\nO O O\n", SEPARATOR)
        );
        assert_eq!(engine.steps(), 0);
        assert_eq!(summary.black_cells, 0);
    }

    #[test]
    fn test_frames_render_before_step() {
        let ant = Ant::new(1, 1, Heading::Right);
        let mut engine = SimulationEngine::with_ant(3, ant, FixedHeading(Heading::Up)).unwrap();
        let (text, summary) = render(&Runner::new(2, Duration::ZERO, false), &mut engine);

        let expected = [
            "🐜 Ant starts at (1, 1) facing right",
            "Epoch ==> 0",
            SEPARATOR,
            "O O O\nO * O\nO O O",
            SEPARATOR,
            "Epoch ==> 1",
            SEPARATOR,
            "O * O\nO X O\nO O O",
            SEPARATOR,
            "Final state...",
            SEPARATOR,
            "* X O\nO X O\nO O O",
        ]
        .join("\n");
        assert_eq!(text, expected + "\n");
        assert_eq!(summary.epochs, 2);
        assert_eq!(summary.black_cells, 2);
        assert_eq!(summary.resets, 0);
    }

    #[test]
    fn test_reset_is_logged_unless_suppressed() {
        // on a 1x1 grid the ant leaves on tick 1 and is reset on tick 2
        let mut engine = SimulationEngine::new(1, FixedHeading(Heading::Down)).unwrap();
        let (text, summary) = render(&Runner::new(2, Duration::ZERO, false), &mut engine);
        assert!(text.contains("Ant is out of bounds! Resetting position, now facing down"));
        assert_eq!(summary.resets, 1);

        let mut engine = SimulationEngine::new(1, FixedHeading(Heading::Down)).unwrap();
        let (text, summary) = render(&Runner::new(2, Duration::ZERO, true), &mut engine);
        assert!(!text.contains("out of bounds"));
        assert_eq!(summary.resets, 1);
    }

    #[test]
    fn test_start_heading_is_logged_unless_suppressed() {
        let mut engine = SimulationEngine::new(5, FixedHeading(Heading::Left)).unwrap();
        let (text, _) = render(&Runner::new(1, Duration::ZERO, false), &mut engine);
        assert!(text.starts_with("🐜 Ant starts at (2, 2) facing left\nEpoch ==> 0\n"));

        let mut engine = SimulationEngine::new(5, FixedHeading(Heading::Left)).unwrap();
        let (text, _) = render(&Runner::new(1, Duration::ZERO, true), &mut engine);
        assert!(text.starts_with("Epoch ==> 0\n"));
        assert!(!text.contains("Ant starts"));
    }

    #[test]
    fn test_summary_line() {
        colored::control::set_override(false);
        let runner = Runner::new(4, Duration::ZERO, true);
        let summary = RunSummary {
            epochs: 4,
            resets: 1,
            black_cells: 3,
            elapsed: Duration::from_millis(2),
        };
        let mut out = Vec::new();
        runner.print_summary(&mut out, 9, &summary).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.contains("Simulation Latency"));
        assert!(text.contains("size=9 epochs=4"));
        assert!(text.contains("resets=1"));
        assert!(text.contains("black_cells=3"));
    }
}

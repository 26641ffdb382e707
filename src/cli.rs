use clap::Parser;

/// CLI arguments for the Langton's ant simulation
#[derive(Parser, Debug)]
#[command(name = "langtons_ant", about = "🐜 Langton's ant on a square grid")]
pub struct Args {
    /// Side length of the square grid
    #[arg(short = 's', long = "size", default_value_t = 50)]
    pub size: usize,

    /// Number of epochs to run
    #[arg(short = 'e', long = "epochs", default_value_t = 500)]
    pub epochs: u64,

    /// Random seed for heading selection
    #[arg(long)]
    pub seed: Option<u64>,

    /// Pause between epochs in milliseconds
    #[arg(long, default_value_t = 100)]
    pub delay_ms: u64,

    /// Suppress out-of-bounds reset logs
    #[arg(long, default_value_t = false)]
    pub suppress_events: bool,
}

use clap::Parser;
use langtons_ant::prelude::*;
use std::io::BufWriter;

fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let rng = if let Some(seed) = args.seed {
        fastrand::Rng::with_seed(seed)
    } else {
        fastrand::Rng::new()
    };

    let mut engine = SimulationEngine::new(args.size, rng)?;
    let runner = Runner::from_args(&args);

    let stdout = std::io::stdout();
    let mut out = BufWriter::new(stdout.lock());
    let summary = runner.run(&mut engine, &mut out)?;
    runner.print_summary(&mut out, engine.size(), &summary)?;

    Ok(())
}

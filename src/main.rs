//! Kingdom Chronicle - Entry Point
//!
//! Generates a kingdom history and prints the chronicle as it unfolds.

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use tokio::runtime::Runtime;
use tokio::sync::mpsc;
use tracing_subscriber::EnvFilter;

use kingdom_chronicle::core::config::KingdomConfig;
use kingdom_chronicle::core::error::Result;
use kingdom_chronicle::kingdom::{GenerationEvent, Simulation, YearReport, YearUpdate};

/// Generate the history of a fantasy kingdom
#[derive(Parser, Debug)]
#[command(name = "kingdom_chronicle")]
#[command(about = "Simulate centuries of noble houses, rulers, wars and monuments")]
struct Args {
    /// TOML configuration file (defaults are used when omitted)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Years to simulate
    #[arg(long)]
    years: Option<u32>,

    /// Random seed for deterministic runs
    #[arg(long)]
    seed: Option<u64>,

    /// Founding nobles per house
    #[arg(long)]
    house_size: Option<u32>,

    /// Write the full output as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Only print the final summary
    #[arg(long, short = 'q')]
    quiet: bool,

    /// Milliseconds to pause between years
    #[arg(long)]
    pace_ms: Option<u64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("kingdom_chronicle=info")),
        )
        .init();

    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => KingdomConfig::load(path)?,
        None => KingdomConfig::default(),
    };
    if let Some(years) = args.years {
        config.years_to_simulate = years;
    }
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }
    if let Some(house_size) = args.house_size {
        config.house_size = house_size;
    }

    let mut sim = Simulation::new(config)?;

    match args.pace_ms {
        Some(ms) => run_paced(&mut sim, Duration::from_millis(ms), args.quiet)?,
        None => {
            let quiet = args.quiet;
            sim.generate_kingdom_with(&mut |report: YearReport<'_>| {
                if !quiet {
                    print_events(report.events);
                }
            })?;
        }
    }

    let output = sim.output()?;
    println!();
    println!("{}", output.summary());

    if let Some(path) = &args.json {
        std::fs::write(path, output.to_json()?)?;
        println!("\nFull output written to {}", path.display());
    }

    Ok(())
}

/// Drive the run on a tokio runtime, printing updates as they arrive
fn run_paced(sim: &mut Simulation, pace: Duration, quiet: bool) -> Result<()> {
    let rt = Runtime::new()?;
    rt.block_on(async {
        let (tx, mut rx) = mpsc::channel::<YearUpdate>(16);
        let printer = async move {
            while let Some(update) = rx.recv().await {
                if !quiet {
                    print_events(&update.events);
                }
            }
        };
        let (result, ()) = tokio::join!(sim.generate_kingdom_async(tx, Some(pace)), printer);
        result
    })
}

fn print_events(events: &[GenerationEvent]) {
    for event in events {
        println!("[Year {:>4}] {:<10} {}", event.year, event.kind.to_string(), event.message.trim_end());
    }
}

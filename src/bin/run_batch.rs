//! Run comparisons for a batch of households from CSV
//!
//! Outputs one headline row per household

use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;

use savings_compare::household::load_households;
use savings_compare::{RecommendationKind, ScenarioRunner};

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Compare a batch of households")]
struct Args {
    /// Households CSV, one household per row
    #[arg(short, long, default_value = "data/households.csv")]
    input: PathBuf,

    /// Output CSV path
    #[arg(short, long, default_value = "batch_comparison_output.csv")]
    output: PathBuf,

    /// Assumption overrides as `key,value` CSV
    #[arg(short, long)]
    assumptions: Option<PathBuf>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading households from {}...", args.input.display());

    let households = load_households(&args.input)
        .with_context(|| format!("failed to load households from {}", args.input.display()))?;
    println!("Loaded {} households in {:?}", households.len(), start.elapsed());

    let runner = match &args.assumptions {
        Some(path) => ScenarioRunner::from_csv_path(path)
            .with_context(|| format!("failed to load assumptions from {}", path.display()))?,
        None => ScenarioRunner::new(),
    };

    println!("Running comparisons...");
    let run_start = Instant::now();
    let results = runner.run_batch(&households);
    println!("Comparisons complete in {:?}", run_start.elapsed());

    let mut writer = csv::Writer::from_path(&args.output)
        .with_context(|| format!("failed to create {}", args.output.display()))?;
    for result in &results {
        writer.serialize(result.summary())?;
    }
    writer.flush()?;

    let mut counts = [0usize; 3];
    for result in &results {
        match result.recommendation.recommendation {
            RecommendationKind::Plan529Primary => counts[0] += 1,
            RecommendationKind::IulConsideration => counts[1] += 1,
            RecommendationKind::Hybrid => counts[2] += 1,
        }
    }

    println!("\nResults written to: {}", args.output.display());
    println!("\nRecommendations:");
    println!("  529 primary: {}", counts[0]);
    println!("  IUL consideration: {}", counts[1]);
    println!("  Hybrid: {}", counts[2]);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}

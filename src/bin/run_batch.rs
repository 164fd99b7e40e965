//! Run insights for every goal in a CSV file
//!
//! Outputs one summary row per goal; goals that fail validation are logged
//! and skipped.

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use goal_projection::export::write_insights_csv;
use goal_projection::goal::load_goals;
use goal_projection::{EngineConfig, GoalPlanner};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "run_batch", about = "Compute insights for a CSV of goals")]
struct Args {
    /// Goals CSV (Name,Description,TargetAmount,CurrentAmount,MonthlyContribution,TimeHorizonMonths,ExpectedReturnRate,InflationRate,TargetDate)
    goals: PathBuf,

    /// Summary CSV to write
    #[arg(short, long, default_value = "goal_insights.csv")]
    output: PathBuf,

    /// Engine config (JSON)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Base seed; goal i uses seed + i
    #[arg(long)]
    seed: Option<u64>,
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading goals from {}...", args.goals.display());

    let goals = load_goals(&args.goals)
        .map_err(|e| anyhow!("loading {}: {}", args.goals.display(), e))?;
    println!("Loaded {} goals in {:?}", goals.len(), start.elapsed());

    let mut config = match &args.config {
        Some(path) => EngineConfig::from_json_path(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => EngineConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    let planner = GoalPlanner::new(config)?;

    println!("Running projections...");
    let run_start = Instant::now();
    let results = planner.run_batch(&goals);
    println!("Projections complete in {:?}", run_start.elapsed());

    let mut analyses = Vec::with_capacity(results.len());
    for (goal, result) in goals.iter().zip(results) {
        match result {
            Ok(analysis) => analyses.push(analysis),
            Err(e) => log::error!("goal '{}' skipped: {}", goal.name, e),
        }
    }

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_insights_csv(
        BufWriter::new(file),
        analyses.iter().map(|a| (a.goal.name.as_str(), &a.insights)),
    )?;

    println!("\nResults written to: {}", args.output.display());
    println!("\nSummary:");
    println!("  Goals analyzed: {}", analyses.len());
    println!("  Goals skipped:  {}", goals.len() - analyses.len());
    let on_track = analyses.iter().filter(|a| a.insights.on_track(&a.goal)).count();
    println!("  On track:       {}", on_track);
    println!("\nTotal time: {:?}", start.elapsed());

    Ok(())
}

//! Goal Projection CLI
//!
//! Command-line interface for projecting a single goal

use anyhow::{anyhow, Context, Result};
use chrono::NaiveDate;
use clap::{Args, Parser, Subcommand};
use goal_projection::export::{render_report, write_projection_csv};
use goal_projection::goal::load_goal_json;
use goal_projection::{EngineConfig, GoalPlanner};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "goal_projection", version, about = "Project financial goals and estimate their completion")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the month-by-month projection table
    Project(CommonArgs),
    /// Print insights as JSON
    Insights(CommonArgs),
    /// Write the projection as CSV
    Export(CommonArgs),
    /// Write a paginated text report
    Report(CommonArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// Goal definition (JSON)
    #[arg(short, long)]
    goal: PathBuf,

    /// Engine config (JSON); defaults apply when absent
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Seed for the Monte Carlo estimate
    #[arg(long)]
    seed: Option<u64>,

    /// Date of month 0 (YYYY-MM-DD); today when absent
    #[arg(long)]
    start_date: Option<NaiveDate>,

    /// Output file; stdout when absent
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl CommonArgs {
    fn engine_config(&self) -> Result<EngineConfig> {
        let mut config = match &self.config {
            Some(path) => EngineConfig::from_json_path(path)
                .with_context(|| format!("loading config {}", path.display()))?,
            None => EngineConfig::default(),
        };
        if self.seed.is_some() {
            config.seed = self.seed;
        }
        if self.start_date.is_some() {
            config.start_date = self.start_date;
        }
        Ok(config)
    }

    fn output(&self) -> Result<Box<dyn Write>> {
        Ok(match &self.output {
            Some(path) => Box::new(BufWriter::new(
                File::create(path).with_context(|| format!("creating {}", path.display()))?,
            )),
            None => Box::new(io::stdout().lock()),
        })
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let args = match &cli.command {
        Command::Project(a) | Command::Insights(a) | Command::Export(a) | Command::Report(a) => a,
    };

    let goal = load_goal_json(&args.goal)
        .map_err(|e| anyhow!("loading goal {}: {}", args.goal.display(), e))?;
    let planner = GoalPlanner::new(args.engine_config()?)?;
    let mut out = args.output()?;

    match &cli.command {
        Command::Project(_) => {
            let projection = planner.project(&goal)?;
            writeln!(out, "Projection for '{}' ({} months):", goal.name, goal.time_horizon_months)?;
            writeln!(out, "{:>5} {:>12} {:>15} {:>15} {:>15} {:>15}",
                "Month", "Date", "Projected", "Real", "Contributed", "Interest")?;
            writeln!(out, "{}", "-".repeat(82))?;
            for p in &projection.points {
                writeln!(out, "{:>5} {:>12} {:>15} {:>15} {:>15} {:>15}",
                    p.month_index,
                    p.date.to_string(),
                    p.projected_value.to_string(),
                    p.inflation_adjusted_value.to_string(),
                    p.cumulative_contribution.to_string(),
                    p.interest_earned.to_string(),
                )?;
            }
        }
        Command::Insights(_) => {
            let analysis = planner.analyze(&goal)?;
            serde_json::to_writer_pretty(&mut out, &analysis.insights)?;
            writeln!(out)?;
        }
        Command::Export(_) => {
            let projection = planner.project(&goal)?;
            write_projection_csv(&mut out, &projection)?;
        }
        Command::Report(_) => {
            let analysis = planner.analyze(&goal)?;
            let report = render_report(&analysis.goal, &analysis.projection, &analysis.insights);
            out.write_all(report.as_bytes())?;
        }
    }

    out.flush()?;
    Ok(())
}

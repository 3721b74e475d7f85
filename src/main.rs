//! Command-line runner for the shift scheduler.
//!
//! Loads a roster and forecast (JSON files, or the built-in demo data),
//! generates a schedule and prints it as JSON. Progress is logged to
//! stderr; set `RUST_LOG=u_shift=debug` to see individual swaps.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use u_shift::config::SchedulerConfig;
use u_shift::demo;
use u_shift::models::{Employee, ForecastEntry};
use u_shift::scheduler::ShiftScheduler;
use u_shift::validation::validate_input;

#[derive(Parser, Debug)]
#[command(name = "u-shift", version, about = "Weekly shift schedule generator")]
struct Cli {
    /// TOML scheduler configuration (defaults apply when omitted)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a schedule and print it as JSON
    Generate {
        /// Roster JSON (array of employees); demo roster when omitted
        #[arg(long)]
        roster: Option<PathBuf>,

        /// Forecast JSON (array of hourly entries); demo forecast when omitted
        #[arg(long)]
        forecast: Option<PathBuf>,

        /// Print the full report (unfilled slots, optimizer stats)
        #[arg(long)]
        report: bool,

        /// Fixed week id for reproducible output
        #[arg(long)]
        week_id: Option<String>,
    },

    /// Validate a roster and forecast without scheduling
    Check {
        #[arg(long)]
        roster: PathBuf,

        #[arg(long)]
        forecast: PathBuf,
    },

    /// Run on seeded random data and report timing
    Bench {
        /// Number of employees
        #[arg(long, default_value_t = 50)]
        employees: usize,

        /// RNG seed
        #[arg(long, default_value_t = 42)]
        seed: u64,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = match &cli.config {
        Some(path) => SchedulerConfig::load(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => SchedulerConfig::default(),
    };
    let scheduler = ShiftScheduler::new().with_config(config);

    match cli.command {
        Command::Generate {
            roster,
            forecast,
            report,
            week_id,
        } => {
            let employees: Vec<Employee> = match roster {
                Some(path) => read_json(&path)?,
                None => demo::sample_roster(),
            };
            let forecast: Vec<ForecastEntry> = match forecast {
                Some(path) => read_json(&path)?,
                None => demo::sample_forecast(),
            };
            info!(employees = employees.len(), forecast_entries = forecast.len(), "loaded input");

            let result = match week_id {
                Some(id) => scheduler.generate_with_week_id(&employees, &forecast, id)?,
                None => scheduler.generate_report(&employees, &forecast)?,
            };
            if result.schedule.shifts.is_empty() {
                warn!("no shifts generated");
            }

            let out = if report {
                serde_json::to_string_pretty(&result)?
            } else {
                serde_json::to_string_pretty(&result.schedule)?
            };
            println!("{out}");
        }

        Command::Check { roster, forecast } => {
            let employees: Vec<Employee> = read_json(&roster)?;
            let forecast: Vec<ForecastEntry> = read_json(&forecast)?;
            match validate_input(&employees, &forecast) {
                Ok(()) => println!("ok: {} employees, {} forecast entries", employees.len(), forecast.len()),
                Err(errors) => {
                    for e in &errors {
                        println!("error: {e}");
                    }
                    anyhow::bail!("{} validation error(s)", errors.len());
                }
            }
        }

        Command::Bench { employees, seed } => {
            let roster = demo::random_roster(seed, employees);
            let forecast = demo::random_forecast(seed);
            let started = std::time::Instant::now();
            let report = scheduler.generate_report(&roster, &forecast)?;
            println!(
                "{} employees, {} shifts, coverage {}%, cost {:.2} (greedy {:.2}), {} swaps in {} passes, {:.2} ms",
                roster.len(),
                report.schedule.shift_count(),
                report.schedule.coverage_score,
                report.schedule.total_labor_cost,
                report.greedy_labor_cost,
                report.optimizer.swaps,
                report.optimizer.passes,
                started.elapsed().as_secs_f64() * 1000.0,
            );
        }
    }

    Ok(())
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let contents = fs::read_to_string(path).with_context(|| format!("reading {}", path.display()))?;
    serde_json::from_str(&contents).with_context(|| format!("parsing {}", path.display()))
}

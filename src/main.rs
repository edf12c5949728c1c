//! Compounding Calculator CLI
//!
//! Command-line host for the projection engine: single projections, CSV
//! batches, rate sweeps and growth schedules.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};

use compounding_calculator::params::load_scenarios;
use compounding_calculator::{
    compute, validate, CompoundingFrequency, ContributionFrequency, FutureValueProjector,
    GrowthMilestone, InvestmentParameters, OutcomeRecord, ProjectionResult, ScenarioRunner,
};

#[derive(Debug, Parser)]
#[command(name = "compounding", version, about = "Project the future value of an investment")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Project one set of parameters
    Project {
        #[command(flatten)]
        params: ParamArgs,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Project every scenario in a CSV file
    Batch {
        /// Scenario CSV file
        input: PathBuf,

        #[arg(long)]
        json: bool,
    },

    /// Recompute the same parameters at several annual rates
    Sweep {
        /// Comma-separated annual rates in percent, e.g. 1,2.5,4
        #[arg(long, value_delimiter = ',', required = true, allow_negative_numbers = true)]
        rates: Vec<f64>,

        #[command(flatten)]
        params: ParamArgs,

        #[arg(long)]
        json: bool,
    },

    /// Value of the investment at regular points over the horizon
    Schedule {
        /// Months between points
        #[arg(long, default_value_t = 12)]
        step: u32,

        #[command(flatten)]
        params: ParamArgs,

        #[arg(long)]
        json: bool,
    },
}

/// Form fields; anything omitted takes the calculator's initial value
#[derive(Debug, Args)]
struct ParamArgs {
    /// Initial investment
    #[arg(long, allow_negative_numbers = true)]
    initial: Option<f64>,

    /// Annual interest rate in percent
    #[arg(long, allow_negative_numbers = true)]
    rate: Option<f64>,

    /// yearly, monthly or weekly
    #[arg(long)]
    compounding: Option<CompoundingFrequency>,

    /// Amount of each recurring contribution
    #[arg(long, allow_negative_numbers = true)]
    contribution: Option<f64>,

    /// none, yearly, monthly or weekly
    #[arg(long)]
    contribution_frequency: Option<ContributionFrequency>,

    /// Number of months to project
    #[arg(long, allow_negative_numbers = true)]
    months: Option<f64>,
}

impl ParamArgs {
    fn to_params(&self) -> InvestmentParameters {
        let defaults = InvestmentParameters::default();
        InvestmentParameters {
            initial_investment: self.initial.unwrap_or(defaults.initial_investment),
            annual_interest_rate_percent: self.rate.unwrap_or(defaults.annual_interest_rate_percent),
            compounding_frequency: self.compounding.unwrap_or(defaults.compounding_frequency),
            contribution_amount: self.contribution.unwrap_or(defaults.contribution_amount),
            contribution_frequency: self
                .contribution_frequency
                .unwrap_or(defaults.contribution_frequency),
            duration_months: self.months.unwrap_or(defaults.duration_months),
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    match cli.command {
        Command::Project { params, json } => run_project(&params, json),
        Command::Batch { input, json } => run_batch(&input, json),
        Command::Sweep { rates, params, json } => run_sweep(&rates, &params, json),
        Command::Schedule { step, params, json } => run_schedule(step, &params, json),
    }
}

fn run_project(args: &ParamArgs, json: bool) -> Result<()> {
    let result = compute(args.to_params())?;
    write_result(io::stdout().lock(), &result, json)
}

fn run_batch(input: &Path, json: bool) -> Result<()> {
    let scenarios = load_scenarios(input)
        .with_context(|| format!("Failed to load scenarios from {}", input.display()))?;

    let records: Vec<OutcomeRecord> = ScenarioRunner::new()
        .run_batch(&scenarios)
        .iter()
        .map(|o| o.to_record())
        .collect();

    write_records(io::stdout().lock(), &records, json)
}

fn run_sweep(rates: &[f64], args: &ParamArgs, json: bool) -> Result<()> {
    let records: Vec<OutcomeRecord> = ScenarioRunner::new()
        .rate_sweep(args.to_params(), rates)
        .iter()
        .map(|o| o.to_record())
        .collect();

    write_records(io::stdout().lock(), &records, json)
}

fn run_schedule(step: u32, args: &ParamArgs, json: bool) -> Result<()> {
    let params = validate(args.to_params())?;
    let milestones = FutureValueProjector::new().milestones(&params, step);
    write_schedule(io::stdout().lock(), &milestones, json)
}

fn write_result<W: Write>(mut out: W, result: &ProjectionResult, json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, result)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "Principal:          {:.2}", result.principal)?;
    writeln!(out, "Interest component: {:.2}", result.interest_component)?;
    writeln!(out, "Investment value:   {:.2}", result.future_value)?;
    Ok(())
}

fn write_schedule<W: Write>(mut out: W, milestones: &[GrowthMilestone], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, milestones)?;
        writeln!(out)?;
        return Ok(());
    }

    writeln!(out, "{:>8} {:>16} {:>16} {:>16}", "Month", "Principal", "Interest", "Value")?;
    writeln!(out, "{}", "-".repeat(59))?;
    for point in milestones {
        writeln!(
            out,
            "{:>8} {:>16.2} {:>16.2} {:>16.2}",
            point.month,
            point.result.principal,
            point.result.interest_component,
            point.result.future_value,
        )?;
    }
    Ok(())
}

fn write_records<W: Write>(mut out: W, records: &[OutcomeRecord], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut out, records)?;
        writeln!(out)?;
        return Ok(());
    }

    let mut writer = csv::Writer::from_writer(out);
    writer.write_record(["id", "status", "principal", "future_value", "interest_component", "error"])?;
    for r in records {
        writer.write_record([
            r.id.clone(),
            r.status.to_string(),
            fmt_amount(r.principal),
            fmt_amount(r.future_value),
            fmt_amount(r.interest_component),
            r.error.clone().unwrap_or_default(),
        ])?;
    }
    writer.flush().context("Failed to write results")?;
    Ok(())
}

fn fmt_amount(value: Option<f64>) -> String {
    value.map(|v| format!("{:.2}", v)).unwrap_or_default()
}

//! Run a single growth projection and print the yearly comparison
//!
//! Form values can come from flags, a JSON params file, or both (flags win).

use anyhow::{Context, Result};
use clap::Parser;
use halal_projection::config::{load_checkpoints, load_params, parse_amount, parse_years, CheckpointParams};
use halal_projection::projection::export::write_samples_csv;
use halal_projection::{project, ContributionFrequency, ProjectionParams};
use std::fs::File;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "project", about = "Project conventional vs halal investment growth", allow_negative_numbers = true)]
struct Args {
    /// JSON file with calculator parameters
    #[arg(long)]
    params: Option<PathBuf>,

    /// Initial investment, e.g. "10,000"
    #[arg(long, value_parser = amount_arg)]
    initial: Option<f64>,

    /// Contribution per period
    #[arg(long, value_parser = amount_arg)]
    contribution: Option<f64>,

    /// weekly, biweekly, monthly or annually
    #[arg(long)]
    frequency: Option<ContributionFrequency>,

    /// Annual return in percent
    #[arg(long = "return-rate", value_parser = amount_arg)]
    return_rate: Option<f64>,

    /// Investment period in years
    #[arg(long, value_parser = years_arg)]
    years: Option<u32>,

    /// CSV of checkpoints (start_year,amount,frequency) for variable mode
    #[arg(long)]
    checkpoints: Option<PathBuf>,

    /// Write yearly samples to this CSV file
    #[arg(long)]
    output: Option<PathBuf>,
}

fn amount_arg(text: &str) -> Result<f64, String> {
    Ok(parse_amount(text))
}

fn years_arg(text: &str) -> Result<u32, String> {
    Ok(parse_years(text))
}

fn build_params(args: &Args) -> Result<ProjectionParams> {
    let mut params = match &args.params {
        Some(path) => load_params(path)
            .with_context(|| format!("loading params from {}", path.display()))?,
        None => ProjectionParams::default(),
    };

    if let Some(initial) = args.initial {
        params.initial_amount = initial;
    }
    if let Some(contribution) = args.contribution {
        params.contribution_amount = contribution;
    }
    if let Some(frequency) = args.frequency {
        params.contribution_frequency = frequency;
    }
    if let Some(return_rate) = args.return_rate {
        params.annual_return = return_rate;
    }
    if let Some(years) = args.years {
        params.years = years;
    }
    if let Some(path) = &args.checkpoints {
        let segments = load_checkpoints(path)
            .with_context(|| format!("loading checkpoints from {}", path.display()))?;
        params.checkpoints = segments.into_iter().map(CheckpointParams::from).collect();
    }

    Ok(params)
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let params = build_params(&args)?;
    let input = params.to_input().context("building projection input")?;
    let result = project(&input);

    println!("{:<10} {:>16} {:>16} {:>16}", "Year", "Contributions", "Conventional", "Halal growth");
    for sample in &result.samples {
        println!(
            "{:<10} {:>16.2} {:>16.2} {:>16.2}",
            sample.label(),
            sample.contributions,
            sample.conventional_value,
            sample.growth_only
        );
    }

    if let Some(summary) = result.summary() {
        println!("\nSummary after {} years:", params.years);
        println!("  Total invested:   ${:.2}", summary.total_invested);
        println!("  Halal growth:     ${:.2}", summary.total_growth);
        println!("  Investment total: ${:.2}", summary.investment_total);
    }

    if let Some(path) = &args.output {
        let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
        write_samples_csv(&result, file).context("writing samples CSV")?;
        println!("\nOutput written to {}", path.display());
    }

    Ok(())
}

//! Sweep the annual return over a range and record final-year totals
//!
//! Each rate is an independent projection, run in parallel.

use anyhow::{bail, Context, Result};
use clap::Parser;
use halal_projection::config::load_params;
use halal_projection::projection::export::write_summaries_csv;
use halal_projection::{project, ProjectionParams, ProjectionSummary};
use rayon::prelude::*;
use std::fs::File;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Debug, Parser)]
#[command(name = "sweep_returns", about = "Project final values across a range of annual returns", allow_negative_numbers = true)]
struct Args {
    /// JSON file with calculator parameters (annualReturn is overridden)
    #[arg(long)]
    params: Option<PathBuf>,

    /// First annual return in percent
    #[arg(long, default_value_t = 0.0)]
    from: f64,

    /// Last annual return in percent (inclusive)
    #[arg(long, default_value_t = 12.0)]
    to: f64,

    #[arg(long, default_value_t = 0.5)]
    step: f64,

    #[arg(long, default_value = "return_sweep.csv")]
    output: PathBuf,
}

/// Upper bound on projections in one sweep
const MAX_GRID_POINTS: usize = 100_000;

/// Rates from `from` to `to` inclusive in increments of `step`
fn rate_grid(from: f64, to: f64, step: f64) -> Result<Vec<f64>> {
    if !from.is_finite() || !to.is_finite() {
        bail!("--from and --to must be finite, got {} and {}", from, to);
    }
    if !step.is_finite() || step <= 0.0 || to < from {
        bail!("need a finite --step > 0 and --to >= --from");
    }

    let intervals = ((to - from) / step + 1e-9).floor();
    if !intervals.is_finite() || intervals >= MAX_GRID_POINTS as f64 {
        bail!(
            "sweep from {} to {} by {} exceeds {} projections",
            from, to, step, MAX_GRID_POINTS
        );
    }

    let count = intervals as usize + 1;
    Ok((0..count).map(|i| from + step * i as f64).collect())
}

fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();
    let rates = rate_grid(args.from, args.to, args.step)?;

    let base = match &args.params {
        Some(path) => load_params(path)
            .with_context(|| format!("loading params from {}", path.display()))?,
        None => ProjectionParams::default(),
    };
    // Validate the schedule once before fanning out
    base.to_input().context("building projection input")?;

    println!("Running {} projections...", rates.len());
    let start = Instant::now();

    let rows: Vec<(f64, ProjectionSummary)> = rates
        .par_iter()
        .map(|&rate| -> Result<Option<(f64, ProjectionSummary)>> {
            let params = ProjectionParams { annual_return: rate, ..base.clone() };
            let input = params.to_input()?;
            Ok(project(&input).summary().map(|summary| (rate, summary)))
        })
        .collect::<Result<Vec<_>>>()?
        .into_iter()
        .flatten()
        .collect();

    println!("Projections complete in {:?}", start.elapsed());

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_summaries_csv(&rows, file).context("writing sweep CSV")?;
    println!("Output written to {}", args.output.display());

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_grid_inclusive() {
        let rates = rate_grid(0.0, 12.0, 0.5).unwrap();
        assert_eq!(rates.len(), 25);
        assert_eq!(rates[0], 0.0);
        assert_eq!(rates[24], 12.0);

        assert_eq!(rate_grid(4.0, 4.0, 1.0).unwrap(), vec![4.0]);
        assert_eq!(rate_grid(-2.0, 2.0, 2.0).unwrap(), vec![-2.0, 0.0, 2.0]);
    }

    #[test]
    fn test_rate_grid_rejects_bad_bounds() {
        assert!(rate_grid(5.0, 1.0, 1.0).is_err());
        assert!(rate_grid(0.0, 1.0, 0.0).is_err());
        assert!(rate_grid(0.0, 1.0, -1.0).is_err());
        assert!(rate_grid(0.0, 1.0, f64::NAN).is_err());
        assert!(rate_grid(f64::NAN, 1.0, 1.0).is_err());
        assert!(rate_grid(0.0, f64::NAN, 1.0).is_err());
        assert!(rate_grid(0.0, f64::INFINITY, 1.0).is_err());
    }

    #[test]
    fn test_rate_grid_rejects_oversized_sweep() {
        assert!(rate_grid(0.0, 12.0, 1e-300).is_err());
        assert!(rate_grid(0.0, MAX_GRID_POINTS as f64, 1.0).is_err());
        assert_eq!(rate_grid(0.0, (MAX_GRID_POINTS - 1) as f64, 1.0).unwrap().len(), MAX_GRID_POINTS);
    }
}

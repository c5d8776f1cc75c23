//! CSV export of yearly samples

use super::{ProjectionResult, ProjectionSummary};
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Serialize)]
struct SampleRecord {
    year: u32,
    label: String,
    contributions: f64,
    conventional_value: f64,
    growth_only: f64,
}

/// Write one row per sampled year
pub fn write_samples_csv<W: Write>(result: &ProjectionResult, writer: W) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for sample in &result.samples {
        wtr.serialize(SampleRecord {
            year: sample.year,
            label: sample.label(),
            contributions: sample.contributions,
            conventional_value: sample.conventional_value,
            growth_only: sample.growth_only,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

#[derive(Debug, Serialize)]
struct SummaryRecord {
    annual_return: f64,
    total_invested: f64,
    total_growth: f64,
    investment_total: f64,
}

/// Write one summary row per annual return, as produced by a rate sweep
pub fn write_summaries_csv<W: Write>(
    rows: &[(f64, ProjectionSummary)],
    writer: W,
) -> Result<(), csv::Error> {
    let mut wtr = csv::Writer::from_writer(writer);
    for (annual_return, summary) in rows {
        wtr.serialize(SummaryRecord {
            annual_return: *annual_return,
            total_invested: summary.total_invested,
            total_growth: summary.total_growth,
            investment_total: summary.investment_total,
        })?;
    }
    wtr.flush()?;
    Ok(())
}

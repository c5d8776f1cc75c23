//! Yearly samples emitted for charting

use serde::{Deserialize, Serialize};

/// One observation of both tracks at a whole-year boundary
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlySample {
    /// Elapsed whole years
    pub year: u32,
    /// Cumulative principal on the conventional track
    pub contributions: f64,
    /// Compounded value on the conventional track
    pub conventional_value: f64,
    /// Halal track value minus its cumulative principal
    pub growth_only: f64,
}

impl YearlySample {
    /// Chart axis label, e.g. "Year 5"
    pub fn label(&self) -> String {
        format!("Year {}", self.year)
    }
}

/// Headline figures shown beside the chart
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub total_invested: f64,
    pub total_growth: f64,
    pub investment_total: f64,
}

/// Complete output of one projection
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProjectionResult {
    pub samples: Vec<YearlySample>,
}

impl ProjectionResult {
    pub fn final_sample(&self) -> Option<&YearlySample> {
        self.samples.last()
    }

    /// Final-year totals, `None` only for an empty result
    pub fn summary(&self) -> Option<ProjectionSummary> {
        self.final_sample().map(|s| ProjectionSummary {
            total_invested: s.contributions,
            total_growth: s.growth_only,
            investment_total: s.conventional_value,
        })
    }

    pub fn labels(&self) -> Vec<String> {
        self.samples.iter().map(YearlySample::label).collect()
    }

    pub fn contributions(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.contributions).collect()
    }

    pub fn conventional_values(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.conventional_value).collect()
    }

    pub fn growth_only(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.growth_only).collect()
    }
}

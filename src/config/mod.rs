//! Calculator parameters, file loading and input normalisation

mod input;
pub mod loader;

pub use input::{parse_amount, parse_years};
pub use loader::{load_checkpoints, load_checkpoints_from_reader};

use crate::projection::ProjectionInput;
use crate::schedule::{ContributionFrequency, ContributionSchedule, ContributionSegment, ScheduleError};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parameters JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid checkpoint CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Schedule(#[from] ScheduleError),
}

/// Parameters as entered on the calculator form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectionParams {
    #[serde(default = "default_initial_amount")]
    pub initial_amount: f64,

    /// Used in simple mode, ignored when checkpoints are present
    #[serde(default = "default_contribution_amount")]
    pub contribution_amount: f64,

    #[serde(default)]
    pub contribution_frequency: ContributionFrequency,

    /// Annual return in percent
    #[serde(default = "default_annual_return")]
    pub annual_return: f64,

    #[serde(default = "default_years")]
    pub years: u32,

    /// Non-empty switches the projection to variable mode
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub checkpoints: Vec<CheckpointParams>,
}

/// One checkpoint row of the variable-mode form
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckpointParams {
    pub start_year: f64,
    pub amount: f64,
    #[serde(default)]
    pub frequency: ContributionFrequency,
}

fn default_initial_amount() -> f64 { 10_000.0 }
fn default_contribution_amount() -> f64 { 500.0 }
fn default_annual_return() -> f64 { 4.0 }
fn default_years() -> u32 { 20 }

impl Default for ProjectionParams {
    fn default() -> Self {
        Self {
            initial_amount: 10_000.0,
            contribution_amount: 500.0,
            contribution_frequency: ContributionFrequency::Monthly,
            annual_return: 4.0,
            years: 20,
            checkpoints: Vec::new(),
        }
    }
}

impl From<ContributionSegment> for CheckpointParams {
    fn from(segment: ContributionSegment) -> Self {
        Self {
            start_year: segment.start_year,
            amount: segment.amount,
            frequency: segment.frequency,
        }
    }
}

impl From<&CheckpointParams> for ContributionSegment {
    fn from(params: &CheckpointParams) -> Self {
        ContributionSegment::new(params.start_year, params.amount, params.frequency)
    }
}

impl ProjectionParams {
    pub fn from_json_reader<R: Read>(reader: R) -> Result<Self, ConfigError> {
        let params: Self = serde_json::from_reader(reader)?;
        log::debug!(
            "Loaded params: years={}, return={}%, checkpoints={}",
            params.years,
            params.annual_return,
            params.checkpoints.len()
        );
        Ok(params)
    }

    pub fn is_variable_mode(&self) -> bool {
        !self.checkpoints.is_empty()
    }

    /// Build the engine input, validating any checkpoint schedule
    pub fn to_input(&self) -> Result<ProjectionInput, ConfigError> {
        if self.is_variable_mode() {
            let segments = self.checkpoints.iter().map(ContributionSegment::from).collect();
            let schedule = ContributionSchedule::new(segments)?;
            Ok(ProjectionInput::scheduled(
                self.initial_amount,
                schedule,
                self.annual_return,
                self.years,
            ))
        } else {
            Ok(ProjectionInput::flat(
                self.initial_amount,
                self.contribution_amount,
                self.contribution_frequency,
                self.annual_return,
                self.years,
            ))
        }
    }
}

/// Load parameters from a JSON file
pub fn load_params<P: AsRef<Path>>(path: P) -> Result<ProjectionParams, ConfigError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| ConfigError::Io {
        path: path.display().to_string(),
        source,
    })?;
    ProjectionParams::from_json_reader(file)
}

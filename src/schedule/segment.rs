//! Contribution segments ("checkpoints") and the ordered schedule built from them

use super::ContributionFrequency;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised while building a contribution schedule
#[derive(Debug, Error, PartialEq)]
pub enum ScheduleError {
    #[error("contribution schedule needs at least one segment")]
    Empty,

    #[error("segment start year must be a finite value >= 0, got {0}")]
    InvalidStartYear(f64),
}

/// A span of the horizon with constant contribution behaviour.
///
/// Active from `start_year` until the next segment in the schedule begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContributionSegment {
    /// Elapsed years at which this segment takes over (may be fractional)
    pub start_year: f64,
    /// Deposit per period of `frequency`
    pub amount: f64,
    #[serde(default)]
    pub frequency: ContributionFrequency,
}

impl ContributionSegment {
    pub fn new(start_year: f64, amount: f64, frequency: ContributionFrequency) -> Self {
        Self { start_year, amount, frequency }
    }

    /// Deposit added once per simulated month while this segment is active
    pub fn monthly_contribution(&self) -> f64 {
        self.frequency.monthly_equivalent(self.amount)
    }
}

/// Ordered, deduplicated set of segments.
///
/// Sorting happens once here so lookups during a projection stay cheap.
#[derive(Debug, Clone, PartialEq)]
pub struct ContributionSchedule {
    segments: Vec<ContributionSegment>,
}

impl ContributionSchedule {
    /// Build a schedule, sorting by start year.
    ///
    /// When two segments share a start year the one supplied last wins. A
    /// schedule holding a single segment applies it from month 0, even if its
    /// start year is later (see [`ContributionSchedule::active_at`]).
    pub fn new(segments: Vec<ContributionSegment>) -> Result<Self, ScheduleError> {
        if segments.is_empty() {
            return Err(ScheduleError::Empty);
        }
        if let Some(bad) = segments
            .iter()
            .find(|s| !s.start_year.is_finite() || s.start_year < 0.0)
        {
            return Err(ScheduleError::InvalidStartYear(bad.start_year));
        }

        let supplied = segments.len();
        let mut indexed: Vec<(usize, ContributionSegment)> = segments.into_iter().enumerate().collect();
        // Stable on start year, later input position last within a tie
        indexed.sort_by(|(ia, a), (ib, b)| {
            a.start_year.total_cmp(&b.start_year).then(ia.cmp(ib))
        });

        let mut sorted: Vec<ContributionSegment> = Vec::with_capacity(indexed.len());
        for (_, segment) in indexed {
            match sorted.last_mut() {
                Some(last) if last.start_year == segment.start_year => *last = segment,
                _ => sorted.push(segment),
            }
        }

        if sorted.len() < supplied {
            log::warn!(
                "Collapsed {} checkpoint(s) sharing a start year",
                supplied - sorted.len()
            );
        }

        Ok(Self { segments: sorted })
    }

    /// Single segment active from month 0, equivalent to a flat contribution
    pub fn flat(amount: f64, frequency: ContributionFrequency) -> Self {
        Self {
            segments: vec![ContributionSegment::new(0.0, amount, frequency)],
        }
    }

    pub fn segments(&self) -> &[ContributionSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Segment governing deposits in the given elapsed month.
    ///
    /// Picks the latest segment whose start year is at or before `month / 12`.
    /// Returns `None` before the first segment starts. A schedule with a single
    /// segment applies it from month 0 regardless of its start year.
    pub fn active_at(&self, month: u32) -> Option<&ContributionSegment> {
        if let [only] = self.segments.as_slice() {
            return Some(only);
        }

        let elapsed_years = month as f64 / 12.0;
        let idx = self.segments.partition_point(|s| s.start_year <= elapsed_years);
        idx.checked_sub(1).map(|i| &self.segments[i])
    }

    /// Monthly-equivalent deposit for the given month (0 if nothing is active)
    pub fn contribution_for_month(&self, month: u32) -> f64 {
        self.active_at(month)
            .map(ContributionSegment::monthly_contribution)
            .unwrap_or(0.0)
    }
}

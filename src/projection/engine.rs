//! Dual-track monthly compounding simulation

use super::{monthly_rate, ProjectionResult, TrackState, YearlySample, HALAL_RETURN_FACTOR, MONTHS_PER_YEAR};
use crate::schedule::{ContributionFrequency, ContributionPlan, ContributionSchedule};

/// Everything one projection needs, rebuilt from user input on every recompute
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectionInput {
    /// Seed principal, counted as contributed at month 0
    pub initial_amount: f64,
    /// Annual return in percent (4.0 = 4%/year), may be negative
    pub annual_return: f64,
    /// Horizon in whole years
    pub years: u32,
    pub plan: ContributionPlan,
}

impl ProjectionInput {
    /// Simple mode: one amount and frequency for the whole horizon
    pub fn flat(
        initial_amount: f64,
        amount: f64,
        frequency: ContributionFrequency,
        annual_return: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_amount,
            annual_return,
            years,
            plan: ContributionPlan::Flat { amount, frequency },
        }
    }

    /// Variable mode: deposits follow a checkpoint schedule
    pub fn scheduled(
        initial_amount: f64,
        schedule: ContributionSchedule,
        annual_return: f64,
        years: u32,
    ) -> Self {
        Self {
            initial_amount,
            annual_return,
            years,
            plan: ContributionPlan::Scheduled(schedule),
        }
    }

    /// Months simulated, saturating for horizons past `MAX_PROJECTION_YEARS`
    pub fn total_months(&self) -> u32 {
        self.years.saturating_mul(MONTHS_PER_YEAR)
    }
}

/// Runs the conventional and halal tracks side by side.
///
/// Both tracks share one deposit stream; only their monthly rates differ.
pub struct ProjectionEngine<'a> {
    input: &'a ProjectionInput,
    conventional_rate: f64,
    halal_rate: f64,
}

impl<'a> ProjectionEngine<'a> {
    pub fn new(input: &'a ProjectionInput) -> Self {
        Self {
            input,
            conventional_rate: monthly_rate(input.annual_return),
            halal_rate: monthly_rate(input.annual_return * HALAL_RETURN_FACTOR),
        }
    }

    pub fn conventional_rate(&self) -> f64 {
        self.conventional_rate
    }

    pub fn halal_rate(&self) -> f64 {
        self.halal_rate
    }

    /// Simulate the full horizon, sampling at every 12-month boundary
    pub fn project(&self) -> ProjectionResult {
        let total_months = self.input.total_months();
        log::debug!(
            "Projecting {} months: initial={:.2}, return={}%, scheduled={}",
            total_months,
            self.input.initial_amount,
            self.input.annual_return,
            self.input.plan.is_scheduled()
        );

        let mut samples = Vec::with_capacity((total_months / MONTHS_PER_YEAR) as usize + 1);
        self.simulate(|month, conventional, halal| {
            if month % MONTHS_PER_YEAR == 0 {
                let sample = YearlySample {
                    year: month / MONTHS_PER_YEAR,
                    contributions: conventional.contributed,
                    conventional_value: conventional.value,
                    growth_only: halal.growth(),
                };
                log::trace!(
                    "{}: contributions={:.2} conventional={:.2} growth_only={:.2}",
                    sample.label(),
                    sample.contributions,
                    sample.conventional_value,
                    sample.growth_only
                );
                samples.push(sample);
            }
        });

        if let Some(last) = samples.last() {
            log::debug!(
                "Projection complete: invested={:.2}, conventional={:.2}, halal growth={:.2}",
                last.contributions,
                last.conventional_value,
                last.growth_only
            );
        }

        ProjectionResult { samples }
    }

    /// Step month by month, handing both tracks to `observe` after month 0 and
    /// after each completed month.
    fn simulate<F>(&self, mut observe: F)
    where
        F: FnMut(u32, &TrackState, &TrackState),
    {
        let mut conventional = TrackState::new(self.input.initial_amount);
        let mut halal = TrackState::new(self.input.initial_amount);
        observe(0, &conventional, &halal);

        for month in 0..self.input.total_months() {
            let deposit = self.input.plan.contribution_for_month(month);
            conventional.advance(self.conventional_rate, deposit);
            halal.advance(self.halal_rate, deposit);
            observe(month + 1, &conventional, &halal);
        }
    }
}

/// Run a projection for `input`
pub fn project(input: &ProjectionInput) -> ProjectionResult {
    ProjectionEngine::new(input).project()
}

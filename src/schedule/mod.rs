//! Contribution cadence, checkpoints and the per-month schedule resolver

mod frequency;
mod segment;

pub use frequency::{ContributionFrequency, BIWEEKLY_PER_MONTH, WEEKLY_PER_MONTH};
pub use segment::{ContributionSchedule, ContributionSegment, ScheduleError};

/// How deposits are scheduled across the horizon
#[derive(Debug, Clone, PartialEq)]
pub enum ContributionPlan {
    /// One amount and cadence for the whole horizon
    Flat {
        amount: f64,
        frequency: ContributionFrequency,
    },
    /// Checkpoints that change the deposit at given years
    Scheduled(ContributionSchedule),
}

impl ContributionPlan {
    /// Monthly-equivalent deposit for an elapsed month
    pub fn contribution_for_month(&self, month: u32) -> f64 {
        match self {
            ContributionPlan::Flat { amount, frequency } => frequency.monthly_equivalent(*amount),
            ContributionPlan::Scheduled(schedule) => schedule.contribution_for_month(month),
        }
    }

    pub fn is_scheduled(&self) -> bool {
        matches!(self, ContributionPlan::Scheduled(_))
    }
}

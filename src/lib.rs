//! Investment growth projections comparing a conventional compounding track
//! with a halal (profit-sharing, discounted return) track.
//!
//! ```
//! use halal_projection::{project, ContributionFrequency, ProjectionInput};
//!
//! let input = ProjectionInput::flat(10_000.0, 500.0, ContributionFrequency::Monthly, 4.0, 20);
//! let result = project(&input);
//! assert_eq!(result.samples.len(), 21);
//! ```

pub mod config;
pub mod projection;
pub mod schedule;

pub use config::{ConfigError, ProjectionParams};
pub use projection::{project, ProjectionEngine, ProjectionInput, ProjectionResult, ProjectionSummary, YearlySample};
pub use schedule::{ContributionFrequency, ContributionPlan, ContributionSchedule, ContributionSegment, ScheduleError};

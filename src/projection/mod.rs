//! Projection engine for conventional vs halal growth comparisons

mod state;
mod engine;
mod samples;
pub mod export;

pub use state::TrackState;
pub use engine::{project, ProjectionEngine, ProjectionInput};
pub use samples::{ProjectionResult, ProjectionSummary, YearlySample};

// ============================================================================
// Return Assumptions
// ============================================================================
// Both tracks compound monthly. The halal track applies a fixed haircut to
// the annual rate before converting it to a monthly rate.

/// Fraction of the stated annual return credited on the halal track (85%)
pub const HALAL_RETURN_FACTOR: f64 = 0.85;

/// Months simulated per sampled year
pub const MONTHS_PER_YEAR: u32 = 12;

/// Longest horizon whose month count still fits in a `u32`
pub const MAX_PROJECTION_YEARS: u32 = u32::MAX / MONTHS_PER_YEAR;

/// Convert an annual return given in percent to a monthly decimal rate
pub fn monthly_rate(annual_return_pct: f64) -> f64 {
    annual_return_pct / 100.0 / 12.0
}

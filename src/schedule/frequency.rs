//! Contribution cadence and its monthly-equivalent normalisation

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Average weeks per month used to normalise weekly deposits
pub const WEEKLY_PER_MONTH: f64 = 4.33;

/// Average biweekly periods per month
pub const BIWEEKLY_PER_MONTH: f64 = 2.17;

/// How often the user pays into the investment.
///
/// Compounding is always monthly; the frequency only decides how a deposit
/// is spread into a per-month amount.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", from = "String")]
pub enum ContributionFrequency {
    Weekly,
    Biweekly,
    #[default]
    Monthly,
    Annually,
}

impl ContributionFrequency {
    pub const ALL: [ContributionFrequency; 4] = [
        ContributionFrequency::Weekly,
        ContributionFrequency::Biweekly,
        ContributionFrequency::Monthly,
        ContributionFrequency::Annually,
    ];

    /// Convert a per-period deposit into the amount added once per simulated month
    pub fn monthly_equivalent(&self, amount: f64) -> f64 {
        match self {
            ContributionFrequency::Weekly => amount * WEEKLY_PER_MONTH,
            ContributionFrequency::Biweekly => amount * BIWEEKLY_PER_MONTH,
            ContributionFrequency::Monthly => amount,
            ContributionFrequency::Annually => amount / 12.0,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContributionFrequency::Weekly => "weekly",
            ContributionFrequency::Biweekly => "biweekly",
            ContributionFrequency::Monthly => "monthly",
            ContributionFrequency::Annually => "annually",
        }
    }

    /// Parse a frequency name, falling back to monthly for anything unknown
    pub fn parse_lenient(name: &str) -> Self {
        match name.trim().to_ascii_lowercase().as_str() {
            "weekly" => ContributionFrequency::Weekly,
            "biweekly" => ContributionFrequency::Biweekly,
            "annually" => ContributionFrequency::Annually,
            _ => ContributionFrequency::Monthly,
        }
    }
}

impl From<String> for ContributionFrequency {
    fn from(name: String) -> Self {
        Self::parse_lenient(&name)
    }
}

impl FromStr for ContributionFrequency {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse_lenient(s))
    }
}

impl fmt::Display for ContributionFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

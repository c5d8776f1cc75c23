//! Running state of a single compounding track

/// Market value and cumulative principal of one track.
///
/// The seed amount counts as already contributed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackState {
    /// Compounded market value
    pub value: f64,
    /// Principal paid in so far (seed plus deposits)
    pub contributed: f64,
}

impl TrackState {
    pub fn new(initial_amount: f64) -> Self {
        Self {
            value: initial_amount,
            contributed: initial_amount,
        }
    }

    /// Advance one month: grow at `monthly_rate`, then add the deposit
    pub fn advance(&mut self, monthly_rate: f64, deposit: f64) {
        self.value = self.value * (1.0 + monthly_rate) + deposit;
        self.contributed += deposit;
    }

    /// Value attributable to growth rather than principal
    pub fn growth(&self) -> f64 {
        self.value - self.contributed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_growth_before_deposit() {
        let mut track = TrackState::new(1000.0);
        track.advance(0.01, 100.0);

        // 1000 * 1.01 + 100, the deposit itself earns nothing this month
        assert!((track.value - 1110.0).abs() < 1e-9);
        assert_eq!(track.contributed, 1100.0);
        assert!((track.growth() - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_negative_rate_shrinks_value() {
        let mut track = TrackState::new(1000.0);
        track.advance(-0.01, 0.0);
        assert!((track.value - 990.0).abs() < 1e-9);
        assert!(track.growth() < 0.0);
    }
}

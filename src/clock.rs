use crate::time::week_rollover;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Satellite Vehicle Clock state, as broadcast.
/// Not involved in orbit resolution.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ClockState {
    /// Clock bias [s]
    pub bias: f64,
    /// Clock drift [s/s]
    pub drift: f64,
    /// Clock drift rate [s/s^2]
    pub drift_rate: f64,
}

impl ClockState {
    /// Onboard clock correction [s] at instant `t` [s of week],
    /// referenced to `toe` [s of week]. Accounts for a possible
    /// week rollover between both instants.
    pub fn correction(&self, t: f64, toe: f64) -> f64 {
        let dt = week_rollover(t - toe);
        self.bias + self.drift * dt + self.drift_rate * dt.powi(2)
    }
}

#[cfg(test)]
mod test {
    use super::ClockState;

    #[test]
    fn polynomial_correction() {
        let clock = ClockState {
            bias: 1.0E-4,
            drift: 1.0E-11,
            drift_rate: 0.0,
        };
        assert_eq!(clock.correction(3_600.0, 3_600.0), 1.0E-4);
        assert_eq!(clock.correction(7_200.0, 3_600.0), 1.0E-4 + 3.6E-8);
    }

    #[test]
    fn correction_wraps_week() {
        let clock = ClockState {
            bias: 0.0,
            drift: 1.0E-9,
            drift_rate: 0.0,
        };
        // toe at end of week, t at beginning of next
        let dt = clock.correction(10.0, 604_790.0);
        assert!((dt - 20.0E-9).abs() < 1.0E-15);
    }
}

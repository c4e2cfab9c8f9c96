//! Batch resolution settings
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Solver configuration: time grid to resolve orbital
/// states on, and staleness tolerance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Config {
    /// First grid instant [s of constellation week]
    pub start: f64,
    /// Last grid instant [s of constellation week], inclusive
    pub end: f64,
    /// Grid period [s]
    pub step: f64,
    /// Tolerated age of a selected element set [s]: older
    /// selections are reported but still resolved.
    pub max_dt_toe: f64,
}

impl Default for Config {
    /// One day, one instant every 5', 2 hours of element set validity.
    fn default() -> Self {
        Self {
            start: 0.0,
            end: 86_400.0,
            step: 300.0,
            max_dt_toe: 7_200.0,
        }
    }
}

impl Config {
    /// Grid instants, in ascending order, bounds included
    pub(crate) fn epochs(&self) -> impl Iterator<Item = f64> + '_ {
        (0..)
            .map(|k| self.start + (k as f64) * self.step)
            .take_while(|t| *t <= self.end)
    }
}

#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

extern crate gnss_rs as gnss;

// private modules
mod cfg;
mod clock;
mod constellation;
mod ephemeris;
mod kepler;
mod orbit;
mod select;
mod solver;
mod time;

pub mod report;


// prelude
pub mod prelude {
    pub use crate::cfg::Config;
    pub use crate::clock::ClockState;
    pub use crate::ephemeris::{EphemerisRecord, EphemerisStore, ParsingError};
    pub use crate::kepler::{Keplerian, Perturbations};
    pub use crate::orbit::Orbit;
    pub use crate::solver::Solver;
    pub use crate::time::seconds_of_week;
    // re-export
    pub use gnss::prelude::{Constellation, SV};
    pub use hifitime::{Duration, Epoch, TimeScale};
    pub use nalgebra::Vector3;
}

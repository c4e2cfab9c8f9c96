#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Keplerian parameters, as broadcast
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Keplerian {
    /// Square root of the semi major axis [m^0.5]
    pub sqrt_a: f64,
    /// Eccentricity (n.a)
    pub e: f64,
    /// Inclination angle at reference time [rad]
    pub i_0: f64,
    /// Longitude of ascending node at reference time [rad]
    pub omega_0: f64,
    /// Mean anomaly at reference time [rad]
    pub m_0: f64,
    /// Argument of perigee [rad]
    pub omega: f64,
    /// Time of ephemeris: reference time of this element set,
    /// in seconds elapsed within the constellation week.
    pub toe: f64,
}

/// Keplerian perturbations
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Perturbations {
    /// Mean motion difference from computed value [rad.s-1]
    pub dn: f64,
    /// Inclination rate of change [rad.s-1]
    pub i_dot: f64,
    /// Right ascension rate of change [rad.s-1]
    pub omega_dot: f64,
    /// Amplitude of sine harmonic correction term of the argument
    /// of latitude [rad]
    pub cus: f64,
    /// Amplitude of cosine harmonic correction term of the argument
    /// of latitude [rad]
    pub cuc: f64,
    /// Amplitude of sine harmonic correction term of the angle of inclination [rad]
    pub cis: f64,
    /// Amplitude of cosine harmonic correction term of the angle of inclination [rad]
    pub cic: f64,
    /// Amplitude of sine harmonic correction term of the orbit radius [m]
    pub crs: f64,
    /// Amplitude of cosine harmonic correction term of the orbit radius [m]
    pub crc: f64,
}

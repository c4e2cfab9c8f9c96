use crate::{
    constellation::time_frame_offset,
    ephemeris::EphemerisRecord,
    time::week_rollover,
};

use gnss::prelude::SV;
use nalgebra::Vector3;

/// Solves Kepler's equation E = M + e sin(E) by fixed point
/// iteration: exactly 10 rounds, no convergence test.
pub(crate) fn eccentric_anomaly(m: f64, e: f64) -> f64 {
    let mut e_k = m;
    for _ in 0..10 {
        e_k = m + e * e_k.sin();
    }
    e_k
}

/// Satellite Vehicle Orbital state, resolved
/// from one broadcast element set.
#[derive(Debug, Clone)]
pub struct Orbit {
    /// Satellite Vehicle
    pub sv: SV,
    /// Instant of this state snapshot [s of constellation week]
    pub t: f64,
    /// 3D position in ECEF frame [m]
    pub position: Vector3<f64>,
    /// Age of the element set used: |toe - t| [s].
    /// Broadcast elements degrade away from their reference time,
    /// this is an applicability indicator, not an error term.
    pub dt_toe: f64,
}

impl Orbit {
    /// Earth gravitational constant (GM) [m^3/s^2]
    pub(crate) const EARTH_GM_CONSTANT: f64 = 3.986005E14;
    /// Earth rotation rate in WGS84 frame [rad/s]
    pub(crate) const EARTH_OMEGA_E_WGS84: f64 = 7.2921151467E-5;
    /// Nominal validity period of a broadcast element set [s]
    pub const BRDC_VALIDITY_PERIOD: f64 = 7_200.0;

    /// Resolves the orbital state broadcast by `record`, at instant
    /// `t` [s of constellation week]. Purely analytical, always
    /// produces: degenerate element sets (null `sqrt_a`..) resolve
    /// to non finite coordinates.
    pub fn kepler(record: &EphemerisRecord, t: f64) -> Self {
        let kep = &record.keplerian;
        let per = &record.perturbations;

        // elapsed time since reference, in the GPS time frame,
        // remapped into the +/- half week window (week rollover)
        let offset = time_frame_offset(record.sv.constellation);
        let t_k = week_rollover(t - kep.toe - offset);

        let n0 = Self::EARTH_GM_CONSTANT.sqrt() / kep.sqrt_a.powi(3);
        let n = n0 + per.dn;
        let m_k = kep.m_0 + n * t_k;

        let e_k = eccentric_anomaly(m_k, kep.e);

        let nu_k = ((1.0 - kep.e.powi(2)).sqrt() * e_k.sin()).atan2(e_k.cos() - kep.e);
        let phi_k = nu_k + kep.omega;
        let r0_k = kep.sqrt_a.powi(2) * (1.0 - kep.e * e_k.cos());

        // second harmonic perturbations
        let du_k = per.cuc * (2.0 * phi_k).cos() + per.cus * (2.0 * phi_k).sin();
        let dr_k = per.crc * (2.0 * phi_k).cos() + per.crs * (2.0 * phi_k).sin();
        let di_k = per.cic * (2.0 * phi_k).cos() + per.cis * (2.0 * phi_k).sin();

        let u_k = phi_k + du_k;
        let r_k = r0_k + dr_k;
        let i_k = kep.i_0 + per.i_dot * t_k + di_k;

        let xp_k = r_k * u_k.cos();
        let yp_k = r_k * u_k.sin();

        // longitude of ascending node, in rotating ECEF frame
        let omega_k = kep.omega_0 + (per.omega_dot - Self::EARTH_OMEGA_E_WGS84) * t_k
            - Self::EARTH_OMEGA_E_WGS84 * kep.toe;

        let x_k = xp_k * omega_k.cos() - yp_k * omega_k.sin() * i_k.cos();
        let y_k = xp_k * omega_k.sin() + yp_k * omega_k.cos() * i_k.cos();
        let z_k = yp_k * i_k.sin();

        Self {
            sv: record.sv,
            t,
            position: Vector3::new(x_k, y_k, z_k),
            dt_toe: (kep.toe - t).abs(),
        }
    }

    /// True if the element set used was past its
    /// nominal validity period at instant `t`.
    pub fn is_stale(&self) -> bool {
        self.dt_toe > Self::BRDC_VALIDITY_PERIOD
    }
}

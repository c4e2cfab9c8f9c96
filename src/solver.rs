//! Batch orbital state solver
use log::{debug, info, warn};

use crate::{
    cfg::Config,
    constellation::is_supported,
    ephemeris::EphemerisStore,
    orbit::Orbit,
    select::select,
};

/// Resolves orbital states over satellites x time grid,
/// from an immutable [EphemerisStore].
#[derive(Debug)]
pub struct Solver {
    /// Solver configuration
    cfg: Config,
    /// Collected broadcast ephemeris
    store: EphemerisStore,
}

impl Solver {
    /// Builds a new [Solver] working with given configuration
    /// and ephemeris collection. The collection is complete at this
    /// point: records collected afterwards cannot contribute.
    pub fn new(cfg: Config, store: EphemerisStore) -> Self {
        Self { cfg, store }
    }

    /// Resolves one [Orbit] per (satellite, grid instant), in
    /// reproducible order: satellites sorted, grid ascending.
    /// Satellites of unsupported constellations are discarded.
    /// A satellite with no usable element set simply does not
    /// contribute. Stale selections are reported but resolved.
    pub fn run(&self) -> Vec<Orbit> {
        let mut orbits = Vec::<Orbit>::new();

        for sv in self.store.satellites() {
            if !is_supported(sv.constellation) {
                debug!("{}: unsupported constellation", sv);
                continue;
            }

            let Some(records) = self.store.records(sv) else {
                continue;
            };

            info!("resolving {} ({} element sets)", sv, records.len());

            for t in self.cfg.epochs() {
                let Some((record, dt_toe)) = select(records, t) else {
                    continue;
                };

                if dt_toe > self.cfg.max_dt_toe {
                    warn!(
                        "{} t={}: element set is {}s away from its reference time",
                        sv, t, dt_toe
                    );
                }

                orbits.push(Orbit::kepler(record, t));
            }
        }

        orbits
    }
}

#[cfg(test)]
mod test {
    use super::Solver;
    use crate::prelude::{
        ClockState, Config, EphemerisRecord, EphemerisStore, Keplerian, Perturbations, SV,
    };
    use hifitime::Epoch;
    use std::str::FromStr;

    fn record(sv: &str, toe: f64) -> EphemerisRecord {
        EphemerisRecord {
            sv: SV::from_str(sv).unwrap(),
            toc: Epoch::from_gregorian_utc_at_midnight(2019, 12, 1),
            clock: ClockState {
                bias: 0.0,
                drift: 0.0,
                drift_rate: 0.0,
            },
            iode: 1.0,
            keplerian: Keplerian {
                sqrt_a: 5_153.0,
                e: 0.0,
                i_0: 0.97,
                omega_0: 0.0,
                m_0: 0.0,
                omega: 0.0,
                toe,
            },
            perturbations: Perturbations {
                dn: 0.0,
                i_dot: 0.0,
                omega_dot: 0.0,
                cus: 0.0,
                cuc: 0.0,
                cis: 0.0,
                cic: 0.0,
                crs: 0.0,
                crc: 0.0,
            },
        }
    }

    #[test]
    fn empty_store() {
        let solver = Solver::new(Config::default(), EphemerisStore::default());
        assert!(solver.run().is_empty());
    }

    #[test]
    fn grid_coverage() {
        let mut store = EphemerisStore::default();
        store.insert(record("G08", 0.0));
        store.insert(record("G01", 43_200.0));

        let solver = Solver::new(Config::default(), store);
        let orbits = solver.run();

        // 289 instants per satellite, sorted satellites
        assert_eq!(orbits.len(), 2 * 289);
        assert_eq!(orbits[0].sv, SV::from_str("G01").unwrap());
        assert_eq!(orbits[0].t, 0.0);
        assert_eq!(orbits[288].t, 86_400.0);
        assert_eq!(orbits[289].sv, SV::from_str("G08").unwrap());
    }

    #[test]
    fn unsupported_constellations_are_discarded() {
        let mut store = EphemerisStore::default();
        store.insert(record("E01", 0.0));

        let solver = Solver::new(Config::default(), store);
        assert!(solver.run().is_empty());
    }
}

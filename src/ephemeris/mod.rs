//! Broadcast ephemeris: one orbital element set per message
use std::collections::HashMap;

use crate::{
    clock::ClockState,
    kepler::{Keplerian, Perturbations},
    time::seconds_of_week,
};

use gnss::prelude::SV;
use hifitime::Epoch;
use itertools::Itertools;

mod formatting;
mod parsing;

pub use parsing::ParsingError;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// One broadcast navigation message: clock and orbital
/// element sets of one satellite, referenced to one epoch.
/// Built once at parsing time, never modified.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EphemerisRecord {
    /// Satellite Vehicle broadcasting this message
    pub sv: SV,
    /// Time of clock: epoch the onboard clock states refer to
    pub toc: Epoch,
    /// Onboard clock states
    pub clock: ClockState,
    /// Issue of data (ephemeris), set index within the day
    pub iode: f64,
    /// Keplerian elements
    pub keplerian: Keplerian,
    /// Keplerian perturbations
    pub perturbations: Perturbations,
}

impl EphemerisRecord {
    /// Time of ephemeris [s of constellation week]
    pub fn toe(&self) -> f64 {
        self.keplerian.toe
    }

    /// Time of clock converted to [s of constellation week]
    pub fn toc_seconds_of_week(&self) -> f64 {
        seconds_of_week(self.toc)
    }

    /// Onboard clock correction [s] at instant `t` [s of week]
    pub fn clock_correction(&self, t: f64) -> f64 {
        self.clock.correction(t, self.toe())
    }
}

/// Broadcast ephemeris collected from one navigation file.
/// Records are grouped per satellite and kept in order of
/// appearance; redundant element sets (identical TOE) are
/// all retained, selection disambiguates them later on.
#[derive(Debug, Default)]
pub struct EphemerisStore {
    records: HashMap<SV, Vec<EphemerisRecord>>,
}

impl EphemerisStore {
    /// Appends one [EphemerisRecord] to its satellite's collection.
    pub fn insert(&mut self, record: EphemerisRecord) {
        self.records.entry(record.sv).or_default().push(record);
    }

    /// All satellites we have ephemeris for, in a reproducible order.
    pub fn satellites(&self) -> Vec<SV> {
        self.records
            .keys()
            .copied()
            .sorted_by_key(|sv| sv.to_string())
            .collect()
    }

    /// Records collected for given satellite, in order of appearance.
    pub fn records(&self, sv: SV) -> Option<&[EphemerisRecord]> {
        self.records.get(&sv).map(|r| r.as_slice())
    }

    /// Total number of records, all satellites
    pub fn len(&self) -> usize {
        self.records.values().map(|r| r.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod test {
    use super::{EphemerisRecord, EphemerisStore};
    use crate::prelude::{ClockState, Keplerian, Perturbations, SV};
    use hifitime::Epoch;
    use std::str::FromStr;

    pub(crate) fn record(sv: &str, toc: Epoch, toe: f64, iode: f64) -> EphemerisRecord {
        EphemerisRecord {
            sv: SV::from_str(sv).unwrap(),
            toc,
            clock: ClockState {
                bias: 0.0,
                drift: 0.0,
                drift_rate: 0.0,
            },
            iode,
            keplerian: Keplerian {
                sqrt_a: 5_153.0,
                e: 0.0,
                i_0: 0.9,
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
    fn insertion_order_is_preserved() {
        let mut store = EphemerisStore::default();
        let toc = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        for iode in [3.0, 1.0, 2.0] {
            store.insert(record("G08", toc, 7_200.0, iode));
        }
        let records = store.records(SV::from_str("G08").unwrap()).unwrap();
        assert_eq!(records.len(), 3);
        assert_eq!(records[0].iode, 3.0);
        assert_eq!(records[1].iode, 1.0);
        assert_eq!(records[2].iode, 2.0);
    }

    #[test]
    fn duplicates_are_retained() {
        let mut store = EphemerisStore::default();
        let toc = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        store.insert(record("C05", toc, 0.0, 1.0));
        store.insert(record("C05", toc, 0.0, 1.0));
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn satellites_are_sorted() {
        let mut store = EphemerisStore::default();
        let toc = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        for sv in ["G12", "C05", "G01", "C36"] {
            store.insert(record(sv, toc, 0.0, 1.0));
        }
        let svnn: Vec<String> = store
            .satellites()
            .iter()
            .map(|sv| sv.to_string())
            .collect();
        assert_eq!(svnn, ["C05", "C36", "G01", "G12"]);
    }
}

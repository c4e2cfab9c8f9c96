//! Element set selection
use crate::{
    ephemeris::{EphemerisRecord, EphemerisStore},
    time::{HALF_WEEK_SECONDS, WEEK_SECONDS},
};

use gnss::prelude::SV;

/// Time distance [s] between a record's time of clock and its own
/// time of ephemeris, accounting for a possible week rollover.
/// Both instants agree in a healthy broadcast message: this
/// disambiguates redundant element sets.
fn toc_toe_distance(record: &EphemerisRecord) -> f64 {
    let distance = (record.toc_seconds_of_week() - record.toe()).abs();
    if distance > HALF_WEEK_SECONDS {
        WEEK_SECONDS - distance
    } else {
        distance
    }
}

/// Selects, among given element sets, the one that applies best to
/// instant `t` [s of constellation week]: closest time of ephemeris
/// first, best time of clock self consistency in case of a tie.
/// Returns the selected record and its time distance |toe - t| [s],
/// or None if `records` is empty.
pub(crate) fn select(records: &[EphemerisRecord], t: f64) -> Option<(&EphemerisRecord, f64)> {
    let mut best: Option<(&EphemerisRecord, f64, f64)> = None;

    for record in records {
        let time_diff = (record.toe() - t).abs();
        let toc_toe = toc_toe_distance(record);
        match best {
            None => best = Some((record, time_diff, toc_toe)),
            Some((_, best_diff, best_toc_toe)) => {
                if time_diff < best_diff || (time_diff == best_diff && toc_toe < best_toc_toe) {
                    best = Some((record, time_diff, toc_toe));
                }
            },
        }
    }

    best.map(|(record, time_diff, _)| (record, time_diff))
}

impl EphemerisStore {
    /// Selects the element set that applies best to instant `t`
    /// [s of constellation week] for given satellite. Returns the
    /// record and its time distance |toe - t| [s]. The time distance
    /// is never a rejection criterion: a single record always gets
    /// selected, however stale.
    pub fn select(&self, sv: SV, t: f64) -> Option<(&EphemerisRecord, f64)> {
        select(self.records(sv)?, t)
    }
}

#[cfg(test)]
mod test {
    use super::select;
    use crate::orbit::Orbit;
    use crate::prelude::{
        ClockState, EphemerisRecord, EphemerisStore, Keplerian, Perturbations, SV,
    };
    use hifitime::Epoch;
    use std::str::FromStr;

    fn record(toc: Epoch, toe: f64, iode: f64) -> EphemerisRecord {
        EphemerisRecord {
            sv: SV::from_str("G08").unwrap(),
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
    fn empty_collection() {
        assert!(select(&[], 0.0).is_none());

        let store = EphemerisStore::default();
        assert!(store.select(SV::from_str("G08").unwrap(), 0.0).is_none());
    }

    #[test]
    fn closest_toe_wins() {
        // 2019-12-01 is a sunday: midnight is 0 [s of week]
        let day = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        let records = [
            record(day, 0.0, 1.0),
            record(day, 7_200.0, 2.0),
            record(day, 14_400.0, 3.0),
        ];

        let (selected, dt) = select(&records, 8_000.0).unwrap();
        assert_eq!(selected.iode, 2.0);
        assert_eq!(dt, 800.0);

        let (selected, dt) = select(&records, 100.0).unwrap();
        assert_eq!(selected.iode, 1.0);
        assert_eq!(dt, 100.0);
    }

    #[test]
    fn tie_breaks_on_toc_consistency() {
        // identical |toe - t|: the record whose toc agrees
        // with its own toe is preferred
        let sunday = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        let monday = Epoch::from_gregorian_utc_at_midnight(2019, 12, 2);
        let records = [
            record(monday, 7_200.0, 1.0), // |toc - toe| = 79200
            record(sunday, 7_200.0, 2.0), // |toc - toe| = 7200
        ];

        let (selected, dt) = select(&records, 7_200.0).unwrap();
        assert_eq!(selected.iode, 2.0);
        assert_eq!(dt, 0.0);
    }

    #[test]
    fn tie_break_wraps_week() {
        // toc right before the week rollover, toe right after:
        // self consistency is evaluated across the rollover
        let saturday = Epoch::from_gregorian_utc(2019, 11, 30, 23, 59, 0, 0);
        let sunday = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        let records = [
            record(sunday, 0.0, 1.0),   // |toc - toe| = 0
            record(saturday, 0.0, 2.0), // wrapped |toc - toe| = 60
        ];

        let (selected, _) = select(&records, 0.0).unwrap();
        assert_eq!(selected.iode, 1.0);

        let records = [
            record(Epoch::from_gregorian_utc_at_midnight(2019, 12, 3), 0.0, 1.0),
            record(saturday, 0.0, 2.0),
        ];
        let (selected, _) = select(&records, 0.0).unwrap();
        assert_eq!(selected.iode, 2.0);
    }

    #[test]
    fn single_record_however_stale() {
        let day = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        let records = [record(day, 0.0, 1.0)];

        let (selected, dt) = select(&records, 86_400.0).unwrap();
        assert_eq!(selected.iode, 1.0);
        assert_eq!(dt, 86_400.0);
        assert!(Orbit::kepler(selected, 86_400.0).is_stale());
    }

    #[test]
    fn first_of_identical_records_wins() {
        let day = Epoch::from_gregorian_utc_at_midnight(2019, 12, 1);
        let records = [record(day, 3_600.0, 1.0), record(day, 3_600.0, 2.0)];

        // strict comparisons: complete duplicates resolve
        // to the record received first
        let (selected, _) = select(&records, 0.0).unwrap();
        assert_eq!(selected.iode, 1.0);
    }
}

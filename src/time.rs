//! GNSS week arithmetic
use hifitime::Epoch;

/// Total duration of a GNSS week [s]
pub const WEEK_SECONDS: f64 = 604_800.0;

/// Half a GNSS week [s]
pub const HALF_WEEK_SECONDS: f64 = 302_400.0;

/// Remaps an elapsed time [s] into the ±half-week window,
/// to account for a possible week rollover between both instants.
pub(crate) fn week_rollover(dt: f64) -> f64 {
    if dt > HALF_WEEK_SECONDS {
        dt - WEEK_SECONDS
    } else if dt < -HALF_WEEK_SECONDS {
        dt + WEEK_SECONDS
    } else {
        dt
    }
}

/// Day of week (0: Sunday .. 6: Saturday) for given calendar date,
/// from Zeller's congruence.
fn day_of_week(year: i32, month: u8, day: u8) -> u8 {
    let (mut y, mut m) = (year, month as i32);
    if m < 3 {
        m += 12;
        y -= 1;
    }
    let k = y % 100;
    let j = y / 100;
    let zeller = (day as i32 + (13 * (m + 1)) / 5 + k + k / 4 + j / 4 - 2 * j).rem_euclid(7);
    // Zeller counts from Saturday
    ((zeller + 6) % 7) as u8
}

/// Converts a calendar timestamp to elapsed seconds within its GNSS week.
pub fn seconds_of_week(t: Epoch) -> f64 {
    let (y, m, d, hh, mm, ss, nanos) = t.to_gregorian_utc();
    let dow = day_of_week(y, m, d) as f64;
    dow * 86_400.0 + (hh as f64) * 3_600.0 + (mm as f64) * 60.0 + (ss as f64) + (nanos as f64) * 1E-9
}

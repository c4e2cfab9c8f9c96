//! Per-constellation broadcast settings
use gnss::prelude::Constellation;

/// Broadcast settings of one supported [Constellation].
pub(crate) struct ConstellationEntry {
    /// Constellation label in navigation messages
    pub label: char,
    /// [Constellation]
    pub constellation: Constellation,
    /// Offset [s] between this constellation's internal
    /// time frame and the GPS time frame.
    pub time_frame_offset: f64,
}

/// Constellations we resolve broadcast orbits for.
pub(crate) const SUPPORTED: &[ConstellationEntry] = &[
    ConstellationEntry {
        label: 'G',
        constellation: Constellation::GPS,
        time_frame_offset: 0.0,
    },
    ConstellationEntry {
        label: 'C',
        constellation: Constellation::BeiDou,
        // BDT is 14s behind GPST
        time_frame_offset: 14.0,
    },
];

pub(crate) fn is_supported(constellation: Constellation) -> bool {
    SUPPORTED.iter().any(|e| e.constellation == constellation)
}

/// Offset [s] to align given constellation's time frame with GPS time.
pub(crate) fn time_frame_offset(constellation: Constellation) -> f64 {
    SUPPORTED
        .iter()
        .find(|e| e.constellation == constellation)
        .map(|e| e.time_frame_offset)
        .unwrap_or(0.0)
}

/// True if this navigation message line introduces a record
/// of a supported constellation.
pub(crate) fn is_supported_label(line: &str) -> bool {
    match line.chars().next() {
        Some(c) => SUPPORTED.iter().any(|e| e.label == c),
        None => false,
    }
}

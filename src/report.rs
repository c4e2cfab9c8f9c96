//! Results table formatting
use crate::orbit::Orbit;

use std::io::{BufWriter, Write};

/// Formats resolved orbital states as an aligned plain text table,
/// one row per (satellite, instant), positions in meters fixed
/// to 8 decimal places.
pub fn format_orbits<W: Write>(
    writer: &mut BufWriter<W>,
    orbits: &[Orbit],
) -> Result<(), std::io::Error> {
    writeln!(
        writer,
        "{:<10}{:>20}{:>20}{:>20}{:>20}{:>20}",
        "PRN", "t(GNSS TIME)/s", "X/m", "Y/m", "Z/m", "toe/s"
    )?;

    for orbit in orbits {
        writeln!(
            writer,
            "{:<10}{:>20.8}{:>20.8}{:>20.8}{:>20.8}{:>20.8}",
            orbit.sv.to_string(),
            orbit.t,
            orbit.position[0],
            orbit.position[1],
            orbit.position[2],
            orbit.dt_toe,
        )?;
    }

    Ok(())
}

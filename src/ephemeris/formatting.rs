use crate::ephemeris::EphemerisRecord;

use std::io::{BufWriter, Write};

/// Formats one value in the 19 character broadcast field
/// layout (Fortran exponent convention).
pub(crate) fn format_field(value: f64) -> String {
    let formatted = format!("{:.12E}", value);
    let mut parts = formatted.split('E');
    let mantissa = parts.next().unwrap_or(&formatted);
    let exponent = parts.next().unwrap_or("0").parse::<i32>().unwrap_or(0);
    let sign = if exponent < 0 { '-' } else { '+' };
    format!("{:>19}", format!("{}D{}{:02}", mantissa, sign, exponent.abs()))
}

impl EphemerisRecord {
    /// Formats this record in the broadcast navigation message layout,
    /// symmetric to the parser. Fields this parser does not retain
    /// (week counter, health and accuracy indicators..) are zero filled.
    pub fn format<W: Write>(&self, writer: &mut BufWriter<W>) -> Result<(), std::io::Error> {
        let (y, m, d, hh, mm, ss, _) = self.toc.to_gregorian_utc();

        writeln!(
            writer,
            "{} {:04} {:02} {:02} {:02} {:02} {:02}{}{}{}",
            self.sv,
            y,
            m,
            d,
            hh,
            mm,
            ss,
            format_field(self.clock.bias),
            format_field(self.clock.drift),
            format_field(self.clock.drift_rate),
        )?;

        let kep = &self.keplerian;
        let per = &self.perturbations;

        #[rustfmt::skip]
        let fields = [
            self.iode, per.crs, per.dn, kep.m_0,
            per.cuc, kep.e, per.cus, kep.sqrt_a,
            kep.toe, per.cic, kep.omega_0, per.cis,
            kep.i_0, per.crc, kep.omega, per.omega_dot,
            per.i_dot, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
            0.0, 0.0, 0.0, 0.0,
        ];

        for chunk in fields.chunks(4) {
            write!(writer, "    ")?;
            for value in chunk {
                write!(writer, "{}", format_field(*value))?;
            }
            writeln!(writer)?;
        }

        Ok(())
    }
}

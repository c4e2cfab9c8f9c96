use crate::{
    clock::ClockState,
    constellation::is_supported_label,
    ephemeris::{EphemerisRecord, EphemerisStore},
    kepler::{Keplerian, Perturbations},
};

use gnss::prelude::SV;
use hifitime::Epoch;
use log::{debug, error, warn};
use thiserror::Error;

use std::{
    fs::File,
    io::{BufRead, BufReader, Read},
    path::Path,
    str::FromStr,
};

/// Number of continuation lines following a record header line
const CONTINUATION_LINES: usize = 7;

/// Orbital elements a complete record must provide
const ORBITAL_FIELDS: usize = 21;

/// Width of one broadcast numeric field
const FIELD_WIDTH: usize = 19;

/// Left margin of continuation lines
const FIELD_OFFSET: usize = 4;

/// Navigation message parsing errors
#[derive(Debug, Error)]
pub enum ParsingError {
    #[error("i/o error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("invalid numeric field \"{0}\"")]
    NumericFormat(String),
    #[error("invalid epoch description")]
    EpochFormat,
    #[error("truncated record header")]
    TruncatedHeader,
    #[error("sv parsing error: {0}")]
    SvParsing(#[from] gnss::sv::ParsingError),
    #[error("incomplete element set ({0} fields)")]
    IncompleteRecord(usize),
}

/// Slices a fixed-width field out of one message line,
/// clipped to the line length.
fn slice(line: &str, start: usize, width: usize) -> Option<&str> {
    if start >= line.len() {
        return None;
    }
    let end = (start + width).min(line.len());
    line.get(start..end)
}

/// Decodes one broadcast numeric field. Both the standard and the
/// Fortran ("D"/"d") exponent conventions are tolerated. Blank
/// content decodes to 0.0 by convention.
pub(crate) fn decode_field(content: &str) -> Result<f64, ParsingError> {
    let trimmed = content.trim();
    if trimmed.is_empty() {
        return Ok(0.0);
    }
    let standardized = trimmed.replace(['D', 'd'], "E");
    standardized
        .parse::<f64>()
        .or(Err(ParsingError::NumericFormat(trimmed.to_string())))
}

/// Lenient flavor of [decode_field]: a field we fail to interpret is
/// reported and substituted with 0.0, one corrupt field must not
/// discard an entire navigation file.
pub(crate) fn decode_field_lenient(content: &str) -> f64 {
    match decode_field(content) {
        Ok(value) => value,
        Err(e) => {
            error!("{}", e);
            0.0
        },
    }
}

/// Integer epoch field of the record header line
fn epoch_field(line: &str, start: usize, width: usize) -> Result<i32, ParsingError> {
    let content = slice(line, start, width).ok_or(ParsingError::TruncatedHeader)?;
    content
        .trim()
        .parse::<i32>()
        .or(Err(ParsingError::EpochFormat))
}

impl EphemerisRecord {
    /// Parses one [EphemerisRecord] from its header line
    /// and the continuation lines that followed it.
    pub fn parse(header: &str, lines: &[String]) -> Result<Self, ParsingError> {
        let svnn = slice(header, 0, 3).ok_or(ParsingError::TruncatedHeader)?;
        let sv = SV::from_str(svnn.trim())?;

        let year = epoch_field(header, 4, 4)?;
        let month = epoch_field(header, 9, 2)? as u8;
        let day = epoch_field(header, 12, 2)? as u8;
        let hour = epoch_field(header, 15, 2)? as u8;
        let minute = epoch_field(header, 18, 2)? as u8;
        let second = decode_field_lenient(slice(header, 21, 2).unwrap_or(""));

        let toc = Epoch::maybe_from_gregorian_utc(
            year,
            month,
            day,
            hour,
            minute,
            second as u8,
            (second.fract() * 1.0E9) as u32,
        )
        .or(Err(ParsingError::EpochFormat))?;

        let clock = ClockState {
            bias: decode_field_lenient(slice(header, 23, FIELD_WIDTH).unwrap_or("")),
            drift: decode_field_lenient(slice(header, 42, FIELD_WIDTH).unwrap_or("")),
            drift_rate: decode_field_lenient(slice(header, 61, FIELD_WIDTH).unwrap_or("")),
        };

        // Continuation lines carry up to 4 fields each.
        // A short line contributes fewer fields, never zero padding.
        let mut fields = Vec::with_capacity(CONTINUATION_LINES * 4);
        for line in lines {
            for j in 0..4 {
                match slice(line, FIELD_OFFSET + j * FIELD_WIDTH, FIELD_WIDTH) {
                    Some(content) => fields.push(decode_field_lenient(content)),
                    None => break,
                }
            }
        }

        if fields.len() < ORBITAL_FIELDS {
            return Err(ParsingError::IncompleteRecord(fields.len()));
        }

        let [iode, crs, dn, m_0, cuc, e, cus, sqrt_a, toe, cic, omega_0, cis, i_0, crc, omega, omega_dot, i_dot, ..] =
            fields.as_slice()
        else {
            return Err(ParsingError::IncompleteRecord(fields.len()));
        };

        Ok(Self {
            sv,
            toc,
            clock,
            iode: *iode,
            keplerian: Keplerian {
                sqrt_a: *sqrt_a,
                e: *e,
                i_0: *i_0,
                omega_0: *omega_0,
                m_0: *m_0,
                omega: *omega,
                toe: *toe,
            },
            perturbations: Perturbations {
                dn: *dn,
                i_dot: *i_dot,
                omega_dot: *omega_dot,
                cus: *cus,
                cuc: *cuc,
                cis: *cis,
                cic: *cic,
                crs: *crs,
                crc: *crc,
            },
        })
    }
}

impl EphemerisStore {
    /// Parses [EphemerisStore] from any [Read]able navigation message stream.
    /// Records of unsupported constellations are silently discarded.
    /// Structurally incomplete records are reported and discarded,
    /// the rest of the stream is still interpreted.
    pub fn parse<R: Read>(reader: R) -> Result<Self, ParsingError> {
        let mut lines = BufReader::new(reader).lines();

        // skip the file header section
        for line in lines.by_ref() {
            if line?.contains("END OF HEADER") {
                break;
            }
        }

        let mut store = Self::default();

        while let Some(line) = lines.next() {
            let header = line?;
            if !is_supported_label(&header) {
                continue;
            }
            let mut block = Vec::with_capacity(CONTINUATION_LINES);
            for _ in 0..CONTINUATION_LINES {
                match lines.next() {
                    Some(line) => block.push(line?),
                    None => break,
                }
            }
            match EphemerisRecord::parse(&header, &block) {
                Ok(record) => store.insert(record),
                Err(e) => warn!("rejected \"{}\": {}", header.trim_end(), e),
            }
        }

        debug!(
            "collected {} ephemeris ({} satellites)",
            store.len(),
            store.satellites().len()
        );

        Ok(store)
    }

    /// Parses [EphemerisStore] from a local navigation file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ParsingError> {
        let file = File::open(path)?;
        Self::parse(file)
    }
}

//! KNMI daily meteorological station files.
//!
//! Reads the `etmgeg_*.txt` daily records published by The Royal Netherlands
//! Meteorological Institute (KNMI), extracting daily precipitation (`RH`)
//! and reference evapotranspiration (`EV24`). Files can be downloaded from
//! <https://www.knmi.nl/nederland-nu/klimatologie/daggegevens>.
//!
//! Raw values are in tenths of millimetres; they are divided by 10 here so
//! the rest of the crate works in mm. Empty fields become NaN and are never
//! filled.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use chrono::NaiveDate;

use crate::error::{Result, SpamsError};
use crate::forcing::MeteoSeries;

/// Column offsets in a KNMI daily record.
const STATION_COL: usize = 0;
const DATE_COL: usize = 1;
const PRECIP_COL: usize = 22;
const EVAPO_COL: usize = 40;

/// Raw source unit is tenths of millimetres.
const TENTHS_MM: f64 = 10.0;

/// One parsed daily row, before merging and sorting.
#[derive(Debug, Clone, Copy)]
struct DailyRecord {
    date: NaiveDate,
    precip: f64,
    evapo: f64,
}

/// Read a single KNMI daily file into a date-sorted series [mm].
pub fn read_knmi<P: AsRef<Path>>(path: P) -> Result<MeteoSeries> {
    let file = File::open(path)?;
    let records = parse_knmi(BufReader::new(file))?;
    build_series(records)
}

/// Read and concatenate several KNMI station files.
///
/// Rows are sorted by date and de-duplicated (the first occurrence of a
/// date wins), yielding one continuous series.
pub fn read_knmi_files<P: AsRef<Path>>(paths: &[P]) -> Result<MeteoSeries> {
    let mut records = Vec::new();
    for path in paths {
        let file = File::open(path)?;
        records.extend(parse_knmi(BufReader::new(file))?);
    }
    build_series(records)
}

fn build_series(mut records: Vec<DailyRecord>) -> Result<MeteoSeries> {
    records.sort_by_key(|r| r.date);
    records.dedup_by_key(|r| r.date);

    MeteoSeries::new(
        records.iter().map(|r| r.date).collect(),
        records.iter().map(|r| r.precip).collect(),
        records.iter().map(|r| r.evapo).collect(),
    )
}

/// Parse the daily rows out of a KNMI file.
///
/// The free-text header (and the `# STN,YYYYMMDD,...` column legend) is
/// skipped by ignoring blank lines, `#` lines, and any line whose first
/// field is not an integer station id.
fn parse_knmi<R: BufRead>(reader: R) -> Result<Vec<DailyRecord>> {
    let mut records = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line?;
        let trimmed = line.trim();
        if trimmed.is_empty() || trimmed.starts_with('#') {
            continue;
        }

        let fields: Vec<&str> = trimmed.split(',').map(str::trim).collect();
        if fields[STATION_COL].parse::<u32>().is_err() {
            // Header prose without a leading '#'.
            continue;
        }
        if fields.len() <= EVAPO_COL {
            return Err(SpamsError::Malformed {
                line: idx + 1,
                reason: format!("expected at least {} fields, got {}", EVAPO_COL + 1, fields.len()),
            });
        }

        let date = NaiveDate::parse_from_str(fields[DATE_COL], "%Y%m%d").map_err(|e| {
            SpamsError::Malformed {
                line: idx + 1,
                reason: format!("bad date {:?}: {e}", fields[DATE_COL]),
            }
        })?;

        records.push(DailyRecord {
            date,
            precip: parse_tenths(fields[PRECIP_COL], idx + 1)?,
            evapo: parse_tenths(fields[EVAPO_COL], idx + 1)?,
        });
    }

    Ok(records)
}

/// Parse a value in tenths of mm; an empty field is a missing value.
fn parse_tenths(field: &str, line: usize) -> Result<f64> {
    if field.is_empty() {
        return Ok(f64::NAN);
    }
    let raw: f64 = field.parse().map_err(|_| SpamsError::Malformed {
        line,
        reason: format!("unreadable numeric field {field:?}"),
    })?;
    Ok(raw / TENTHS_MM)
}

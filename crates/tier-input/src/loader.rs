//! CSV sector table loader.
//!
//! # CSV format
//!
//! One row per sector.  Column order is free and extra columns are ignored.
//!
//! ```csv
//! Site ID,Sector,Latitude,Longitude,Dir,tilt
//! JKT001,A,-6.200000,106.816600,30,4
//! JKT001,B,-6.200000,106.816600,150,4
//! JKT002,A,-6.215000,106.830000,0,
//! ```
//!
//! Header names are matched after trimming, case-insensitively, with these
//! synonyms:
//!
//! | Canonical   | Accepted                              | Required |
//! |-------------|---------------------------------------|----------|
//! | `Site ID`   | `site id`, `siteid`, `site_id`        | yes      |
//! | `Sector`    | `sector`                              | yes      |
//! | `Latitude`  | `latitude`, `lat`                     | yes      |
//! | `Longitude` | `longitude`, `lon`, `lng`             | yes      |
//! | `Dir`       | `dir`, `direction`, `azimuth`         | yes      |
//! | `tilt`      | `tilt`                                | no       |
//!
//! Value ranges: latitude `[-90, 90]`, longitude `[-180, 180]`, azimuth
//! `[0, 360]`.  A blank or non-numeric tilt is treated as absent.

use std::io::Read;
use std::path::Path;

use csv::StringRecord;
use serde::Deserialize;

use tier_core::{Sector, SectorTable};

use crate::{InputError, InputResult};

// ── Header handling ───────────────────────────────────────────────────────────

const SITE_ID: &str = "Site ID";
const SECTOR: &str = "Sector";
const LATITUDE: &str = "Latitude";
const LONGITUDE: &str = "Longitude";
const DIR: &str = "Dir";
const TILT: &str = "tilt";

const REQUIRED: [&str; 5] = [SITE_ID, SECTOR, LATITUDE, LONGITUDE, DIR];

fn canonical_header(raw: &str) -> Option<&'static str> {
    match raw.trim().to_lowercase().as_str() {
        "site id" | "siteid" | "site_id" => Some(SITE_ID),
        "sector" => Some(SECTOR),
        "latitude" | "lat" => Some(LATITUDE),
        "longitude" | "lon" | "lng" => Some(LONGITUDE),
        "dir" | "direction" | "azimuth" => Some(DIR),
        "tilt" => Some(TILT),
        _ => None,
    }
}

/// Rewrite recognised headers to their canonical names; others pass
/// through trimmed.  Two columns mapping to the same canonical name are
/// rejected.
fn normalize_headers(headers: &StringRecord) -> InputResult<StringRecord> {
    for column in REQUIRED.iter().copied().chain([TILT]) {
        let sources: Vec<String> = headers
            .iter()
            .filter(|h| canonical_header(h) == Some(column))
            .map(|h| h.trim().to_owned())
            .collect();
        if sources.len() > 1 {
            return Err(InputError::DuplicateColumn { column, headers: sources });
        }
    }

    let normalized: StringRecord = headers
        .iter()
        .map(|h| canonical_header(h).map_or_else(|| h.trim().to_owned(), str::to_owned))
        .collect();

    let missing: Vec<String> = REQUIRED
        .iter()
        .filter(|req| !normalized.iter().any(|h| h == **req))
        .map(|req| req.to_string())
        .collect();
    if !missing.is_empty() {
        return Err(InputError::MissingColumns(missing));
    }
    Ok(normalized)
}

// ── CSV record ────────────────────────────────────────────────────────────────

#[derive(Deserialize)]
struct SectorRecord {
    #[serde(rename = "Site ID")]
    site_id:   String,
    #[serde(rename = "Sector")]
    sector:    String,
    #[serde(rename = "Latitude")]
    latitude:  String,
    #[serde(rename = "Longitude")]
    longitude: String,
    #[serde(rename = "Dir")]
    dir:       String,
    #[serde(default)]
    tilt:      Option<String>,
}

impl SectorRecord {
    fn into_sector(self, row: u64) -> InputResult<Sector> {
        let site_id = required_text(row, SITE_ID, self.site_id)?;
        let sector_id = required_text(row, SECTOR, self.sector)?;
        let lat = number_in(row, LATITUDE, &self.latitude, -90.0, 90.0)?;
        let lon = number_in(row, LONGITUDE, &self.longitude, -180.0, 180.0)?;
        let dir = number_in(row, DIR, &self.dir, 0.0, 360.0)?;

        let sector = Sector::new(site_id, sector_id, lat, lon, dir);
        Ok(match self.tilt.as_deref().map(str::trim).and_then(|t| t.parse::<f64>().ok()) {
            Some(t) if t.is_finite() => sector.with_tilt(t),
            _ => sector,
        })
    }
}

fn required_text(row: u64, column: &'static str, value: String) -> InputResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(InputError::InvalidField { row, column, reason: "value is empty".into() });
    }
    Ok(trimmed.to_owned())
}

fn number_in(row: u64, column: &'static str, raw: &str, min: f64, max: f64) -> InputResult<f64> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Err(InputError::InvalidField { row, column, reason: "value is empty".into() });
    }
    let v: f64 = raw.parse().map_err(|_| InputError::InvalidField {
        row,
        column,
        reason: format!("{raw:?} is not a number"),
    })?;
    if !(min..=max).contains(&v) {
        return Err(InputError::InvalidField {
            row,
            column,
            reason: format!("{v} is outside [{min}, {max}]"),
        });
    }
    Ok(v)
}

// ── Public API ────────────────────────────────────────────────────────────────

/// What to do with a row that fails validation.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum ValidationMode {
    /// The first bad row aborts the load.
    #[default]
    Strict,
    /// Bad rows are logged and skipped.
    Lenient,
}

/// Row accounting for one load.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Data rows seen (header excluded).
    pub rows_read:    usize,
    /// Rows skipped in lenient mode.
    pub rows_dropped: usize,
}

/// A loaded table plus its [`LoadReport`].
#[derive(Clone, Debug)]
pub struct Loaded {
    pub table:  SectorTable,
    pub report: LoadReport,
}

/// Load a sector table from a CSV file.
pub fn load_sectors_csv(path: &Path, mode: ValidationMode) -> InputResult<Loaded> {
    let file = std::fs::File::open(path)?;
    tracing::debug!(path = %path.display(), ?mode, "loading sector table");
    load_sectors_reader(file, mode)
}

/// Like [`load_sectors_csv`] but accepts any `Read` source.
pub fn load_sectors_reader<R: Read>(reader: R, mode: ValidationMode) -> InputResult<Loaded> {
    let mut csv_reader = csv::ReaderBuilder::new().trim(csv::Trim::Headers).from_reader(reader);

    let headers = normalize_headers(csv_reader.headers()?)?;
    csv_reader.set_headers(headers);

    let mut sectors = Vec::new();
    let mut report = LoadReport::default();

    for (i, result) in csv_reader.deserialize::<SectorRecord>().enumerate() {
        // Line 1 is the header.
        let row = i as u64 + 2;
        report.rows_read += 1;

        let parsed = result.map_err(InputError::from).and_then(|r| r.into_sector(row));
        match (parsed, mode) {
            (Ok(sector), _) => sectors.push(sector),
            (Err(e), ValidationMode::Strict) => return Err(e),
            (Err(e), ValidationMode::Lenient) => {
                tracing::warn!(row, error = %e, "dropping invalid row");
                report.rows_dropped += 1;
            }
        }
    }

    if sectors.is_empty() {
        return Err(InputError::Empty);
    }

    let table = SectorTable::new(sectors);
    tracing::info!(
        rows = report.rows_read,
        dropped = report.rows_dropped,
        sectors = table.len(),
        sites = table.site_count(),
        "sector table loaded"
    );
    Ok(Loaded { table, report })
}

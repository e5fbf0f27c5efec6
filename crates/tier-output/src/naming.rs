//! Result file naming and location.

use std::path::PathBuf;

use chrono::{DateTime, TimeZone};

use tier_analysis::MethodKind;

/// Directory under `~/Documents` that results go to by default.
pub const OUTPUT_DIR_NAME: &str = "1st_tier_generator_HD";

/// `<prefix>_<YYYYMMDD>_<HHMMSS>.csv`, e.g. `Sector_BallTree_20240131_235959.csv`.
pub fn output_file_name<Tz: TimeZone>(kind: MethodKind, now: &DateTime<Tz>) -> String
where
    Tz::Offset: std::fmt::Display,
{
    format!("{}_{}.csv", kind.label(), now.format("%Y%m%d_%H%M%S"))
}

/// `<Documents>/1st_tier_generator_HD`, using the platform's Documents
/// folder (XDG user dirs, Windows known folders).  Falls back to
/// `<home>/Documents` when no Documents folder is configured; `None`
/// without a home directory.
pub fn default_output_dir() -> Option<PathBuf> {
    dirs::document_dir()
        .or_else(|| dirs::home_dir().map(|home| home.join("Documents")))
        .map(|docs| docs.join(OUTPUT_DIR_NAME))
}

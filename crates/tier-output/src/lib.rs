//! `tier-output` — turning analysis records into result files.
//!
//! | Item                  | Purpose                                                  |
//! |-----------------------|----------------------------------------------------------|
//! | [`TierRow`]           | Flat, method-agnostic row built from a `TierRecord`      |
//! | [`OutputWriter`]      | Backend trait                                            |
//! | [`CsvWriter`]         | CSV backend (UTF-8 with BOM, spreadsheet friendly)       |
//! | [`write_results`]     | One-shot: timestamped file in a directory                |
//! | [`write_sectors_csv`] | Sector table export in the loader's own format          |
//!
//! # Usage
//!
//! ```rust,ignore
//! use tier_output::{default_output_dir, write_results};
//!
//! let dir = default_output_dir().unwrap_or_else(|| PathBuf::from("."));
//! let path = write_results(&dir, MethodKind::Facing, &out.records, chrono::Local::now())?;
//! ```

pub mod csv;
pub mod error;
pub mod naming;
pub mod row;
pub mod sectors;
pub mod writer;

#[cfg(test)]
mod tests;

pub use crate::csv::{CsvWriter, write_results};
pub use error::{OutputError, OutputResult};
pub use naming::{OUTPUT_DIR_NAME, default_output_dir, output_file_name};
pub use row::{TierRow, headers};
pub use sectors::write_sectors_csv;
pub use writer::OutputWriter;

//! CSV output backend.
//!
//! Files are UTF-8 with a leading byte-order mark so spreadsheet tools pick
//! the encoding up correctly.

use std::fs::File;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, TimeZone};
use csv::Writer;

use tier_analysis::{MethodKind, TierRecord};

use crate::writer::OutputWriter;
use crate::{OutputError, OutputResult, TierRow, headers, output_file_name};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes result rows for one method to a single CSV file.
pub struct CsvWriter {
    writer:   Writer<File>,
    kind:     MethodKind,
    rows:     usize,
    finished: bool,
}

impl CsvWriter {
    /// Create (truncate) `path` and write the BOM and header row.
    pub fn create(path: &Path, kind: MethodKind) -> OutputResult<Self> {
        let mut file = File::create(path)?;
        file.write_all(UTF8_BOM)?;
        let mut writer = Writer::from_writer(file);
        writer.write_record(headers(kind))?;
        Ok(Self { writer, kind, rows: 0, finished: false })
    }

    /// Data rows written so far.
    pub fn rows_written(&self) -> usize {
        self.rows
    }
}

impl OutputWriter for CsvWriter {
    fn write_rows(&mut self, rows: &[TierRow]) -> OutputResult<()> {
        for row in rows {
            self.writer.write_record(row.fields(self.kind))?;
        }
        self.rows += rows.len();
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.writer.flush()?;
        Ok(())
    }
}

/// Write `records` to a new timestamped file in `dir` (created if needed)
/// and return its path.
///
/// An empty `records` slice is [`OutputError::Empty`] and creates nothing.
pub fn write_results<Tz: TimeZone>(
    dir: &Path,
    kind: MethodKind,
    records: &[TierRecord],
    now: &DateTime<Tz>,
) -> OutputResult<PathBuf>
where
    Tz::Offset: std::fmt::Display,
{
    if records.is_empty() {
        return Err(OutputError::Empty);
    }
    std::fs::create_dir_all(dir)?;
    let path = dir.join(output_file_name(kind, now));

    let rows: Vec<TierRow> = records.iter().map(TierRow::from).collect();
    let mut writer = CsvWriter::create(&path, kind)?;
    writer.write_rows(&rows)?;
    writer.finish()?;

    tracing::info!(path = %path.display(), rows = writer.rows_written(), "results written");
    Ok(path)
}

//! The `OutputWriter` trait implemented by result backends.

use crate::{OutputResult, TierRow};

pub trait OutputWriter {
    /// Append a batch of rows.
    fn write_rows(&mut self, rows: &[TierRow]) -> OutputResult<()>;

    /// Flush and close the underlying handle.
    ///
    /// Idempotent; safe to call more than once.
    fn finish(&mut self) -> OutputResult<()>;
}

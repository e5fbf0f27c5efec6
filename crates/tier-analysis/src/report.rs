//! Head-to-Head summary over a facing run.

use std::fmt;

use crate::TierRecord;

/// Counts of H2H versus non-H2H rows in a facing result set.
///
/// Every facing row counts toward the total, including not-found rows and
/// indoor rows (both are non-H2H).
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct H2hReport {
    pub total_sectors:   usize,
    pub h2h_sectors:     usize,
    pub non_h2h_sectors: usize,
    /// `h2h / total * 100`, rounded to two decimals; `0.0` for no rows.
    pub h2h_percentage:  f64,
}

impl H2hReport {
    fn from_counts(total: usize, h2h: usize) -> Self {
        let h2h_percentage = if total == 0 {
            0.0
        } else {
            crate::round2(h2h as f64 / total as f64 * 100.0)
        };
        Self {
            total_sectors:   total,
            h2h_sectors:     h2h,
            non_h2h_sectors: total - h2h,
            h2h_percentage,
        }
    }

    /// Only facing rows (and facing indoor rows) are counted; anything else
    /// in `records` is ignored.
    pub fn from_records(records: &[TierRecord]) -> Self {
        let mut total = 0;
        let mut h2h = 0;
        for r in records {
            match r {
                TierRecord::Facing(f) => {
                    total += 1;
                    if f.is_head_to_head() {
                        h2h += 1;
                    }
                }
                TierRecord::Indoor(i) if i.facing => total += 1,
                _ => {}
            }
        }
        Self::from_counts(total, h2h)
    }
}

impl fmt::Display for H2hReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} sectors, {} H2H ({:.2}%), {} non-H2H",
            self.total_sectors, self.h2h_sectors, self.h2h_percentage, self.non_h2h_sectors
        )
    }
}

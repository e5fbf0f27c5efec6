//! Target site id list handling.

use tier_core::SectorTable;

/// Split a comma-separated id list.  Entries are trimmed; empty entries are
/// dropped.  Order and duplicates are kept.
pub fn parse_site_ids(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_owned)
        .collect()
}

/// Split `ids` into `(present, missing)` with respect to `table`, each in
/// input order.
pub fn validate_site_ids<S: AsRef<str>>(table: &SectorTable, ids: &[S]) -> (Vec<String>, Vec<String>) {
    ids.iter()
        .map(|id| id.as_ref().to_owned())
        .partition(|id| table.site_idx(id).is_some())
}

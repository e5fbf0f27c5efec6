//! `tier-input` — getting a sector table into memory.
//!
//! | Module       | Contents                                                  |
//! |--------------|-----------------------------------------------------------|
//! | [`loader`]   | CSV loading with header synonyms, strict / lenient checks |
//! | [`validate`] | Parsing and checking the user's target site id list       |
//! | [`summary`]  | [`DataSummary`] of a loaded table                         |
//! | [`error`]    | [`InputError`], [`InputResult`]                           |

pub mod error;
pub mod loader;
pub mod summary;
pub mod validate;


pub use error::{InputError, InputResult};
pub use loader::{LoadReport, Loaded, ValidationMode, load_sectors_csv, load_sectors_reader};
pub use summary::{AzimuthStats, DataSummary};
pub use validate::{parse_site_ids, validate_site_ids};

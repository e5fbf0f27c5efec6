//! Toolkit error type.
//!
//! "No neighbor found" is never an error: it travels as data in the
//! analysis records.  Loading and writing have their own error enums in
//! `tier-input` and `tier-output`.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TierError {
    /// A method parameter is out of range.
    #[error("configuration error: {0}")]
    Config(String),
}

/// Shorthand result type for `tier-core` and the analysis methods.
pub type TierResult<T> = Result<T, TierError>;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum InputError {
    #[error("missing required column(s): {}", .0.join(", "))]
    MissingColumns(Vec<String>),

    #[error("columns {} all map to {column}", .headers.join(", "))]
    DuplicateColumn {
        column:  &'static str,
        headers: Vec<String>,
    },

    #[error("row {row}, column {column}: {reason}")]
    InvalidField {
        row:    u64,
        column: &'static str,
        reason: String,
    },

    #[error("input contains no usable rows")]
    Empty,

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type InputResult<T> = Result<T, InputError>;

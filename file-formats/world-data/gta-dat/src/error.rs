use thiserror::Error;

/// Result type for data table parsing.
pub type Result<T> = std::result::Result<T, DatError>;

/// Errors raised while parsing one of the data tables.
#[derive(Error, Debug)]
pub enum DatError {
    /// A record line with too few fields or an unparseable mandatory field.
    #[error("malformed record: {0}")]
    MalformedRecord(String),

    /// Failed to open or read the table file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

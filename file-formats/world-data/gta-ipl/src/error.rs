use thiserror::Error;

/// Result type for placement parsing.
pub type Result<T> = std::result::Result<T, IplError>;

/// Errors raised while parsing a placement list.
#[derive(Error, Debug)]
pub enum IplError {
    /// An `inst` line with too few fields or an unparseable mandatory field.
    #[error("malformed inst record: {0}")]
    MalformedRecord(String),

    /// Failed to open or read the placement file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

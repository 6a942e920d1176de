use thiserror::Error;

/// Result type for definition parsing.
pub type Result<T> = std::result::Result<T, IdeError>;

/// Errors raised while parsing an object definition table.
#[derive(Error, Debug)]
pub enum IdeError {
    /// An `objs` line with too few fields or an unparseable mandatory field.
    #[error("malformed objs record: {0}")]
    MalformedRecord(String),

    /// Failed to open or read the definition file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

/// Result type for DFF parsing.
pub type Result<T> = std::result::Result<T, DffError>;

/// Errors that abort a DFF model parse.
///
/// Structural problems below the root (a malformed geometry or material
/// sub-tree) are recovered locally and reported as diagnostics instead.
#[derive(Error, Debug)]
pub enum DffError {
    /// Chunk stream error: truncation, wrong root kind, missing DATA chunk.
    #[error(transparent)]
    Chunk(#[from] gta_rw::RwError),

    /// Failed to open or read the model file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

use thiserror::Error;

/// Result type for TXD parsing.
pub type Result<T> = std::result::Result<T, TxdError>;

/// Errors raised while parsing a texture dictionary.
///
/// At the dictionary level only root failures surface; a TEXNATIVE child
/// failing with any of these is skipped with a diagnostic.
#[derive(Error, Debug)]
pub enum TxdError {
    /// Chunk stream error: truncation, wrong root kind, missing DATA chunk.
    #[error(transparent)]
    Chunk(#[from] gta_rw::RwError),

    /// The texture was built for a platform this parser does not support.
    #[error("unsupported platform id {0}")]
    UnsupportedPlatform(u32),

    /// Recognized-but-unimplemented compression code.
    #[error("unsupported compression code {0}")]
    UnsupportedCompression(u8),

    /// Failed to open or read the dictionary file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

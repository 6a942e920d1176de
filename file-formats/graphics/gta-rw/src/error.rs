use crate::chunk::ChunkKind;
use thiserror::Error;

/// Result type for RenderWare stream operations.
pub type Result<T> = std::result::Result<T, RwError>;

/// Errors raised while walking a RenderWare chunk stream.
#[derive(Error, Debug)]
pub enum RwError {
    /// Fewer bytes remain in the bounded region than a read requires.
    #[error("truncated stream: needed {needed} bytes, {remaining} remaining")]
    Truncated {
        /// Bytes the read required.
        needed: usize,
        /// Bytes left before the bound.
        remaining: usize,
    },

    /// The top-level chunk of a file was not the expected kind.
    #[error("unexpected root chunk: expected {expected}, found {found}")]
    UnexpectedRootChunk {
        /// Kind the format requires at the root.
        expected: ChunkKind,
        /// Kind actually present.
        found: ChunkKind,
    },

    /// A container chunk is missing its mandatory leading DATA sub-chunk.
    #[error("expected DATA chunk inside {parent}")]
    ExpectedDataChunk {
        /// The container being parsed.
        parent: ChunkKind,
    },

    /// Underlying I/O failure while opening or reading a source.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_includes_context() {
        let err = RwError::UnexpectedRootChunk {
            expected: ChunkKind::CLUMP,
            found: ChunkKind::TEXDICTIONARY,
        };
        let text = format!("{err}");
        assert!(text.contains("0x10"));
        assert!(text.contains("0x16"));
    }

    #[test]
    fn io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        assert!(matches!(RwError::from(io), RwError::Io(_)));
    }
}

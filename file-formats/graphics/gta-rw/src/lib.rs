//! Reader for RenderWare binary chunk streams.
//!
//! The RenderWare formats used by the classic GTA titles (DFF models, TXD
//! texture dictionaries) are self-describing trees of chunks. Every chunk
//! opens with a 12-byte little-endian header (kind, byte length, format
//! version) where the length *includes* the header itself, and a chunk's
//! payload may contain further chunks to unknown depth.
//!
//! This crate provides the two pieces the format parsers share:
//!
//! - [`ByteCursor`]: a bounded, position-tracking reader over a byte slice
//!   with explicit little-endian primitive reads.
//! - [`ChunkHeader`]: the chunk header record, plus the bounded-payload
//!   operation that makes unknown chunk kinds safe to skip: a child cursor
//!   never extends past its parent's bound regardless of the size the file
//!   declares, and detaching the payload always leaves the parent at the
//!   chunk's end.
//!
//! # Examples
//!
//! ```
//! use gta_rw::{ByteCursor, ChunkHeader, ChunkKind};
//!
//! // A CLUMP chunk with a 4-byte payload.
//! let mut bytes = Vec::new();
//! bytes.extend_from_slice(&0x10u32.to_le_bytes());
//! bytes.extend_from_slice(&16u32.to_le_bytes());
//! bytes.extend_from_slice(&0x1803FFFFu32.to_le_bytes());
//! bytes.extend_from_slice(&7u32.to_le_bytes());
//!
//! let mut cursor = ByteCursor::new(&bytes);
//! let header = ChunkHeader::read(&mut cursor).unwrap();
//! assert_eq!(header.kind, ChunkKind::CLUMP);
//! let mut payload = header.payload(&mut cursor);
//! assert_eq!(payload.read_u32_le().unwrap(), 7);
//! assert!(cursor.is_empty());
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod chunk;
mod cursor;
mod error;

pub use chunk::{ChunkHeader, ChunkKind};
pub use cursor::ByteCursor;
pub use error::{Result, RwError};

// Re-exported so the format crates share one diagnostics type.
pub use gta_utils::Diagnostics;

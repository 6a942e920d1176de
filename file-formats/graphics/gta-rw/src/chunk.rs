use std::fmt;

use log::trace;

use crate::cursor::ByteCursor;
use crate::error::{Result, RwError};

/// A RenderWare chunk kind tag.
///
/// Kinds are numeric, not four-character codes; unknown values are kept
/// as-is so foreign chunks can be reported and skipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChunkKind(pub u32);

impl ChunkKind {
    /// Container payload record; first child of every structured chunk.
    pub const DATA: ChunkKind = ChunkKind(0x01);
    /// Null-terminated string payload.
    pub const STRING: ChunkKind = ChunkKind(0x02);
    /// Plugin extension container.
    pub const EXTENSION: ChunkKind = ChunkKind(0x03);
    /// Texture reference inside a material.
    pub const TEXTURE: ChunkKind = ChunkKind(0x06);
    /// A single material.
    pub const MATERIAL: ChunkKind = ChunkKind(0x07);
    /// The material collection of a geometry.
    pub const MATERIALLIST: ChunkKind = ChunkKind(0x08);
    /// Frame (node) hierarchy of a clump.
    pub const FRAMELIST: ChunkKind = ChunkKind(0x0E);
    /// A single mesh.
    pub const GEOMETRY: ChunkKind = ChunkKind(0x0F);
    /// A whole model.
    pub const CLUMP: ChunkKind = ChunkKind(0x10);
    /// Binding of a geometry to a frame.
    pub const ATOMIC: ChunkKind = ChunkKind(0x14);
    /// A single platform-native texture.
    pub const TEXNATIVE: ChunkKind = ChunkKind(0x15);
    /// A texture collection.
    pub const TEXDICTIONARY: ChunkKind = ChunkKind(0x16);
    /// The mesh collection of a clump.
    pub const GEOMETRYLIST: ChunkKind = ChunkKind(0x1A);
}

impl fmt::Display for ChunkKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#04x}", self.0)
    }
}

impl From<u32> for ChunkKind {
    fn from(value: u32) -> Self {
        ChunkKind(value)
    }
}

/// The 12-byte header opening every RenderWare chunk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChunkHeader {
    /// Kind tag.
    pub kind: ChunkKind,
    /// Declared chunk length in bytes, *including* this header.
    pub size: u32,
    /// RenderWare library version stamp.
    pub version: u32,
}

impl ChunkHeader {
    /// Encoded size of a chunk header.
    pub const SIZE: usize = 12;

    /// Read a header from the cursor.
    ///
    /// Fails with [`RwError::Truncated`] when fewer than 12 bytes remain.
    pub fn read(cursor: &mut ByteCursor<'_>) -> Result<Self> {
        if cursor.remaining() < Self::SIZE {
            return Err(RwError::Truncated {
                needed: Self::SIZE,
                remaining: cursor.remaining(),
            });
        }
        let kind = ChunkKind(cursor.read_u32_le()?);
        let size = cursor.read_u32_le()?;
        let version = cursor.read_u32_le()?;
        trace!("chunk {kind}, size {size}, version {version:#010x}");
        Ok(Self {
            kind,
            size,
            version,
        })
    }

    /// Declared payload length (the header's 12 bytes excluded).
    pub fn payload_len(&self) -> usize {
        (self.size as usize).saturating_sub(Self::SIZE)
    }

    /// Detach this chunk's payload as a bounded child cursor.
    ///
    /// The parent cursor advances to the chunk's declared end, clamped to
    /// the parent's own bound: a child never extends past its parent no
    /// matter what length the file declares, and the parent ends up at the
    /// next sibling whether or not the child is ever consumed. Skipping an
    /// unknown chunk is simply dropping the returned cursor.
    pub fn payload<'a>(&self, cursor: &mut ByteCursor<'a>) -> ByteCursor<'a> {
        let declared = self.payload_len();
        let len = declared.min(cursor.remaining());
        if len < declared {
            trace!(
                "chunk {} declares {declared} payload bytes, {len} available",
                self.kind
            );
        }
        // Bounds were just clamped, the take cannot fail.
        cursor.take(len).unwrap_or_else(|_| ByteCursor::new(&[]))
    }

    /// Discard this chunk's payload.
    pub fn skip(&self, cursor: &mut ByteCursor<'_>) {
        let _ = self.payload(cursor);
    }
}

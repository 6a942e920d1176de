use std::path::Path;

use log::{debug, trace};

use gta_rw::{ByteCursor, ChunkHeader, ChunkKind, Diagnostics, RwError};

use crate::dxt;
use crate::error::{Result, TxdError};
use crate::types::{Compression, RasterFormat, Texture, platform};

/// Length of the fixed name and mask-name fields in a TEXNATIVE record.
const NAME_FIELD_LEN: usize = 32;

/// A best-effort parse result: every texture that decoded cleanly plus the
/// non-fatal problems encountered on the way.
#[derive(Debug, Clone)]
pub struct ParsedDictionary {
    /// The decoded textures, in file order.
    pub textures: Vec<Texture>,
    /// Textures that were dropped or degraded, one entry each.
    pub diagnostics: Diagnostics,
}

/// Parse a TXD texture dictionary from an in-memory byte buffer.
///
/// The root chunk must be TEXDICTIONARY; anything else fails with
/// [`RwError::UnexpectedRootChunk`]. A TEXNATIVE child that is truncated,
/// targets an unsupported platform, or carries an unknown compression code
/// is skipped with a diagnostic; the rest of the dictionary still parses.
pub fn parse_texture_dictionary(bytes: &[u8]) -> Result<ParsedDictionary> {
    let mut cursor = ByteCursor::new(bytes);
    let root = ChunkHeader::read(&mut cursor)?;
    if root.kind != ChunkKind::TEXDICTIONARY {
        return Err(RwError::UnexpectedRootChunk {
            expected: ChunkKind::TEXDICTIONARY,
            found: root.kind,
        }
        .into());
    }

    let mut payload = root.payload(&mut cursor);
    let mut data = expect_data(&mut payload, ChunkKind::TEXDICTIONARY)?;
    // Declared count is informational; the chunk walk decides what exists.
    let declared = data.read_u16_le()?;
    debug!("dictionary declares {declared} textures");

    let mut textures = Vec::new();
    let mut diagnostics = Diagnostics::new();
    while payload.remaining() >= ChunkHeader::SIZE {
        let header = ChunkHeader::read(&mut payload)?;
        let mut child = header.payload(&mut payload);
        match header.kind {
            ChunkKind::TEXNATIVE => {
                match parse_texture_native(&mut child, &mut diagnostics) {
                    Ok(texture) => textures.push(texture),
                    Err(e) => {
                        diagnostics.warn(format!("dropped texture {}: {e}", textures.len()));
                    }
                }
            }
            kind => trace!("skipping {kind} chunk in dictionary"),
        }
    }

    Ok(ParsedDictionary {
        textures,
        diagnostics,
    })
}

/// Parse a TXD file from disk.
pub fn parse_texture_dictionary_file<P: AsRef<Path>>(path: P) -> Result<ParsedDictionary> {
    let path = path.as_ref();
    let bytes = std::fs::read(path)?;
    let parsed = parse_texture_dictionary(&bytes)?;
    debug!(
        "parsed {} with {} textures",
        path.display(),
        parsed.textures.len()
    );
    Ok(parsed)
}

fn expect_data<'a>(cursor: &mut ByteCursor<'a>, parent: ChunkKind) -> Result<ByteCursor<'a>> {
    let header = ChunkHeader::read(cursor)?;
    if header.kind != ChunkKind::DATA {
        return Err(RwError::ExpectedDataChunk { parent }.into());
    }
    Ok(header.payload(cursor))
}

/// Read a fixed-width, null-padded name field.
fn read_name(cursor: &mut ByteCursor<'_>) -> Result<String> {
    let bytes = cursor.read_bytes(NAME_FIELD_LEN)?;
    let end = bytes.iter().position(|&b| b == 0).unwrap_or(bytes.len());
    Ok(String::from_utf8_lossy(&bytes[..end]).into_owned())
}

/// Level-0 payload size implied by the raster metadata.
fn level0_len(width: u32, height: u32, depth: u32, compression: Compression) -> usize {
    match compression.block_bytes() {
        Some(block) => {
            let blocks_wide = (width as usize).div_ceil(dxt::BLOCK_DIM).max(1);
            let blocks_high = (height as usize).div_ceil(dxt::BLOCK_DIM).max(1);
            blocks_wide * blocks_high * block
        }
        None => (width as usize) * (height as usize) * (depth as usize) / 8,
    }
}

fn parse_texture_native(
    cursor: &mut ByteCursor<'_>,
    diagnostics: &mut Diagnostics,
) -> Result<Texture> {
    let mut data = expect_data(cursor, ChunkKind::TEXNATIVE)?;

    let platform_id = data.read_u32_le()?;
    if !platform::is_supported(platform_id) {
        return Err(TxdError::UnsupportedPlatform(platform_id));
    }
    let _filter_flags = data.read_u32_le()?;
    let _u_addressing = data.read_u32_le()?;
    let _v_addressing = data.read_u32_le()?;
    let name = read_name(&mut data)?;
    let mask_name = read_name(&mut data)?;

    let raster_format = data.read_u32_le()?;
    let _d3d_format = data.read_u32_le()?;
    let width = u32::from(data.read_u16_le()?);
    let height = u32::from(data.read_u16_le()?);
    let depth = u32::from(data.read_u8()?);
    let mipmap_count = u32::from(data.read_u8()?);
    let _raster_type = data.read_u8()?;
    let compression = Compression::try_from(data.read_u8()?)?;

    let format = RasterFormat::from_code(raster_format);
    trace!(
        "texture {name}: {width}x{height}x{depth} {format} {compression:?}, {mipmap_count} mips"
    );

    let needed = level0_len(width, height, depth, compression);
    if needed > data.remaining() {
        return Err(RwError::Truncated {
            needed,
            remaining: data.remaining(),
        }
        .into());
    }
    let level0 = data.read_bytes(needed)?;
    // Higher mip levels are left unread; the bounded cursor drops them.

    let pixels = match compression {
        Compression::Dxt1 => dxt::decode_dxt1(level0, width, height),
        Compression::Dxt3 => dxt::decode_dxt3(level0, width, height),
        Compression::Dxt5 => dxt::decode_dxt5(level0, width, height),
        Compression::None => {
            if !matches!(
                format,
                RasterFormat::C8888 | RasterFormat::C888 | RasterFormat::C565
            ) {
                diagnostics.warn(format!(
                    "texture {name}: no decoder for uncompressed layout {format}, \
                     substituting opaque white"
                ));
            }
            dxt::decode_raster(level0, width, height, format)
        }
    };

    Ok(Texture {
        name,
        mask_name,
        width,
        height,
        depth,
        raster_format,
        mipmap_count,
        has_alpha: format.has_alpha(),
        pixels,
    })
}

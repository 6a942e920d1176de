use std::fmt;

use crate::error::TxdError;

/// Platform ids a TEXNATIVE chunk may carry. Anything else is rejected.
pub mod platform {
    /// Xbox console target.
    pub const XBOX: u32 = 5;
    /// PC (Direct3D) target.
    pub const PC: u32 = 8;
    /// PlayStation 2 console target.
    pub const PS2: u32 = 9;

    /// True for the platform ids this parser understands.
    pub fn is_supported(id: u32) -> bool {
        matches!(id, XBOX | PC | PS2)
    }
}

/// Pixel layout selected by the high nibble-pair of the raster format code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RasterFormat {
    /// 16-bit, 1-bit alpha, 5:5:5 color.
    C1555,
    /// 16-bit, 5:6:5 color, no alpha.
    C565,
    /// 16-bit, 4:4:4:4 color and alpha.
    C4444,
    /// 8-bit luminance.
    Lum8,
    /// 32-bit color and alpha.
    C8888,
    /// 24-bit color, no alpha.
    C888,
    /// 16-bit depth raster.
    D16,
    /// 24-bit depth raster.
    D24,
    /// 32-bit depth raster.
    D32,
    /// 16-bit, 5:5:5 color, no alpha.
    C555,
    /// Code not in the published table; kept for reporting.
    Unknown(u32),
}

impl RasterFormat {
    /// Decode the layout from a full raster format code.
    pub fn from_code(code: u32) -> Self {
        match code & 0x0F00 {
            0x0100 => Self::C1555,
            0x0200 => Self::C565,
            0x0300 => Self::C4444,
            0x0400 => Self::Lum8,
            0x0500 => Self::C8888,
            0x0600 => Self::C888,
            0x0700 => Self::D16,
            0x0800 => Self::D24,
            0x0900 => Self::D32,
            0x0A00 => Self::C555,
            other => Self::Unknown(other),
        }
    }

    /// Whether the layout carries an alpha channel.
    pub fn has_alpha(&self) -> bool {
        matches!(self, Self::C1555 | Self::C4444 | Self::C8888)
    }
}

impl fmt::Display for RasterFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Unknown(code) => write!(f, "unknown({code:#06x})"),
            other => write!(f, "{other:?}"),
        }
    }
}

/// Block compression applied to the pixel payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Compression {
    /// Uncompressed raster.
    None,
    /// 8-byte blocks, 1-bit alpha via the hidden-color convention.
    Dxt1,
    /// 16-byte blocks, explicit 4-bit alpha.
    Dxt3,
    /// 16-byte blocks, interpolated alpha.
    Dxt5,
}

impl Compression {
    /// Bytes per 4x4 block, for the compressed variants.
    pub fn block_bytes(&self) -> Option<usize> {
        match self {
            Self::None => None,
            Self::Dxt1 => Some(8),
            Self::Dxt3 | Self::Dxt5 => Some(16),
        }
    }
}

impl TryFrom<u8> for Compression {
    type Error = TxdError;

    fn try_from(code: u8) -> std::result::Result<Self, TxdError> {
        match code {
            0 => Ok(Self::None),
            1 => Ok(Self::Dxt1),
            3 => Ok(Self::Dxt3),
            5 => Ok(Self::Dxt5),
            other => Err(TxdError::UnsupportedCompression(other)),
        }
    }
}

/// One decoded texture of a dictionary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Texture {
    /// Texture name (trimmed, from the fixed 32-byte field).
    pub name: String,
    /// Alpha mask name, often empty.
    pub mask_name: String,
    /// Width of mip level 0 in pixels.
    pub width: u32,
    /// Height of mip level 0 in pixels.
    pub height: u32,
    /// Source bit depth.
    pub depth: u32,
    /// Raw raster format code as stored in the file.
    pub raster_format: u32,
    /// Number of mip levels the file declared (only level 0 is decoded).
    pub mipmap_count: u32,
    /// Whether the raster format is an alpha-carrying layout.
    pub has_alpha: bool,
    /// Decoded RGBA8 pixels, `width * height * 4` bytes, row-major.
    pub pixels: Vec<u8>,
}

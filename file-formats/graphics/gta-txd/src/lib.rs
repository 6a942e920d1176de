//! Parser for RenderWare TXD texture dictionaries.
//!
//! A TXD file is a TEXDICTIONARY chunk tree whose TEXNATIVE children each
//! hold one platform-native raster. This crate decodes every supported
//! texture to a plain RGBA8 pixel buffer: DXT1/DXT3/DXT5 block-compressed
//! rasters through the [`dxt`] codec, and the common uncompressed layouts
//! (8888, 888, 565) through [`dxt::decode_raster`]. Only mip level 0 is
//! retained.
//!
//! Textures on unsupported platforms or with unknown compression codes are
//! skipped with a diagnostic; the rest of the dictionary still parses.
//!
//! # Examples
//!
//! ```no_run
//! let parsed = gta_txd::parse_texture_dictionary_file("models/gta3.txd")?;
//! for texture in &parsed.textures {
//!     println!("{}: {}x{}", texture.name, texture.width, texture.height);
//! }
//! # Ok::<(), gta_txd::TxdError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

pub mod dxt;
mod error;
mod parser;
mod types;

pub use error::{Result, TxdError};
pub use parser::{ParsedDictionary, parse_texture_dictionary, parse_texture_dictionary_file};
pub use types::{Compression, RasterFormat, Texture, platform};

//! Shared plumbing for the `gta-formats` parser crates.
//!
//! The game data files handled by this workspace come in two flavours: the
//! RenderWare chunk containers (DFF models, TXD texture dictionaries) and a
//! family of line-oriented tables (IPL placement lists, IDE object
//! definitions, the various `.dat` tables). This crate holds what the
//! line-oriented parsers share:
//!
//! - [`Diagnostics`]: non-fatal warnings accumulated during a parse, so a
//!   single corrupt record degrades the result instead of voiding it.
//! - [`text`]: comment stripping and quote-aware tokenization.
//! - [`section`]: the `keyword ... end` section grammar used by IPL and IDE.
//! - [`sniff`]: binary-versus-text classification of a byte source.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod diag;
pub mod section;
pub mod sniff;
pub mod text;

pub use diag::Diagnostics;
pub use section::SectionScanner;
pub use sniff::{DataEncoding, sniff_bytes, sniff_reader};

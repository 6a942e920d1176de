//! Parser for GTA item placement lists (IPL).
//!
//! Placement lists position object instances in the world. The format comes
//! in two variants: a line-oriented text form made of `keyword ... end`
//! sections, and a binary form opening with the `IPLB` signature. This
//! crate sniffs the variant apart and materializes the `inst` records of
//! either into [`PlacementInstance`] values; other sections are lexed and
//! discarded.
//!
//! Malformed lines and truncated binary tails are reported as diagnostics
//! on the result rather than failing the whole file.
//!
//! # Examples
//!
//! ```no_run
//! let parsed = gta_ipl::parse_placements_file("data/maps/industNE.ipl")?;
//! for instance in &parsed.instances {
//!     println!("{} at {}", instance.model_name, instance.position);
//! }
//! # Ok::<(), gta_ipl::IplError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod parser;
mod types;

pub use error::{IplError, Result};
pub use parser::{ParsedPlacements, parse_inst_line, parse_placements, parse_placements_file};
pub use types::PlacementInstance;

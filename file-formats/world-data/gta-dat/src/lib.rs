//! Parsers for the GTA `.dat` data tables.
//!
//! Three tables share this crate:
//!
//! - [`path`]: road and pedestrian path nodes, in a text form and a
//!   binary record form sniffed apart automatically.
//! - [`handling`]: the per-vehicle physics tuning table.
//! - [`water`]: rectangular water surface patches.
//!
//! Each parser returns the recovered records together with diagnostics for
//! the lines it had to drop; a corrupt row never voids the whole file.
//!
//! # Examples
//!
//! ```no_run
//! let parsed = gta_dat::parse_handling_file("data/handling.cfg")?;
//! for record in &parsed.records {
//!     println!("{}: {} kg", record.identifier, record.mass);
//! }
//! # Ok::<(), gta_dat::DatError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
pub mod handling;
pub mod path;
mod types;
pub mod water;

pub use error::{DatError, Result};
pub use handling::{ParsedHandling, parse_handling, parse_handling_file, parse_handling_line};
pub use path::{ParsedPaths, parse_path_line, parse_path_nodes, parse_path_nodes_file};
pub use types::{PathNode, VehicleHandlingRecord, WaterPlane};
pub use water::{ParsedWater, parse_water_line, parse_water_planes, parse_water_planes_file};

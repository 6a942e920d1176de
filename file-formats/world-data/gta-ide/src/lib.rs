//! Parser for GTA item definition tables (IDE).
//!
//! Definition tables bind object ids to model and texture dictionary names,
//! with per-object draw distances and rendering flags. The format is the
//! same `keyword ... end` section grammar the placement lists use; this
//! crate materializes the `objs` records into [`ObjectDefinition`] values
//! and discards the rest.
//!
//! Malformed lines are reported as diagnostics on the result rather than
//! failing the whole file.
//!
//! # Examples
//!
//! ```no_run
//! let parsed = gta_ide::parse_object_definitions_file("data/maps/generic.ide")?;
//! for definition in &parsed.definitions {
//!     println!("{} -> {}.dff", definition.id, definition.model_name);
//! }
//! # Ok::<(), gta_ide::IdeError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod parser;
mod types;

pub use error::{IdeError, Result};
pub use parser::{
    ParsedDefinitions, parse_object_definitions, parse_object_definitions_file, parse_objs_line,
};
pub use types::{ObjectDefinition, ObjectFlags};

//! Parser for RenderWare DFF model files.
//!
//! A DFF file is a CLUMP chunk tree: the clump owns a frame hierarchy, a
//! geometry list and a set of atomics binding geometries to frames. This
//! crate materializes the part an editor needs, the geometry list, as a
//! [`Model`] of [`Mesh`]es with vertices, triangle indices, the first
//! material of each geometry and axis-aligned bounding boxes. Frames and
//! atomics are recognized and skipped.
//!
//! Parsing is best-effort below the root: a malformed GEOMETRY sub-tree is
//! dropped with a diagnostic while its siblings are kept, so one bad mesh
//! does not void the file. A wrong root chunk or an unreadable root header
//! aborts the parse.
//!
//! # Examples
//!
//! ```no_run
//! let parsed = gta_dff::parse_model_file("maps/infernus.dff")?;
//! for mesh in &parsed.model.meshes {
//!     println!("{}: {} vertices", mesh.name, mesh.vertices.len());
//! }
//! # Ok::<(), gta_dff::DffError>(())
//! ```

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod error;
mod parser;
mod types;

pub use error::{DffError, Result};
pub use parser::{ParsedModel, parse_model, parse_model_file};
pub use types::{BoundingBox, GeometryFlags, Material, Mesh, Model, Vertex};

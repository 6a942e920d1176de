use bitflags::bitflags;
use glam::{Vec2, Vec3};

bitflags! {
    /// Field-presence flags of a GEOMETRY chunk's DATA record.
    ///
    /// Each set bit means the corresponding tightly packed vertex array is
    /// present in the payload, in the fixed order positions, normals,
    /// prelit colors, texture coordinates.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GeometryFlags: u32 {
        /// Vertex positions are present.
        const POSITIONS = 0x02;
        /// One texture coordinate set is present.
        const TEXTURED = 0x04;
        /// Per-vertex prelit colors are present.
        const PRELIT = 0x08;
        /// Vertex normals are present.
        const NORMALS = 0x10;
        /// Geometry participates in lighting.
        const LIGHT = 0x20;
        /// Material color modulates vertex colors.
        const MODULATE_MATERIAL_COLOR = 0x40;
        /// A second texture coordinate set is present.
        const TEXTURED2 = 0x80;
    }
}

/// One vertex of a mesh. Fields the geometry did not carry stay at their
/// defaults (zero vectors, zero color).
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Vertex {
    /// Object-space position.
    pub position: Vec3,
    /// Unit normal, if the geometry carried normals.
    pub normal: Vec3,
    /// Texture coordinates, if the geometry was textured.
    pub uv: Vec2,
    /// Packed RGBA prelit color.
    pub color: u32,
}

/// Surface material of a mesh.
#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    /// Display name (`Material_<n>` by position in the material list).
    pub name: String,
    /// Name of the texture referenced from the texture dictionary, empty
    /// when the material is untextured.
    pub texture_name: String,
    /// Diffuse color.
    pub diffuse: Vec3,
}

impl Default for Material {
    fn default() -> Self {
        Self {
            name: String::new(),
            texture_name: String::new(),
            diffuse: Vec3::ONE,
        }
    }
}

/// Axis-aligned bounding box. The default value is the degenerate zero box
/// at the origin, used for empty meshes and empty models.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct BoundingBox {
    /// Minimum corner.
    pub min: Vec3,
    /// Maximum corner.
    pub max: Vec3,
}

impl BoundingBox {
    /// Tightest box around the given points; the zero box when there are
    /// none.
    pub fn from_points<I: IntoIterator<Item = Vec3>>(points: I) -> Self {
        let mut iter = points.into_iter();
        let Some(first) = iter.next() else {
            return Self::default();
        };
        let mut bounds = Self {
            min: first,
            max: first,
        };
        for p in iter {
            bounds.min = bounds.min.min(p);
            bounds.max = bounds.max.max(p);
        }
        bounds
    }

    /// Smallest box containing both boxes.
    pub fn union(&self, other: &BoundingBox) -> BoundingBox {
        BoundingBox {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Center point of the box.
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Extent of the box along each axis.
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }
}

/// One mesh of a model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Mesh {
    /// Display name (`Mesh_<n>` by position in the geometry list).
    pub name: String,
    /// Vertex data.
    pub vertices: Vec<Vertex>,
    /// Triangle list indices into `vertices`; length is a multiple of 3.
    pub indices: Vec<u32>,
    /// First material of the geometry's material list; materials beyond the
    /// first are discarded.
    pub material: Material,
    /// Tight box around the vertex positions.
    pub bounding_box: BoundingBox,
}

/// A parsed model: the geometry list of one CLUMP.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Model {
    /// Model name; [`parse_model_file`](crate::parse_model_file) uses the
    /// file stem, in-memory parses leave it empty.
    pub name: String,
    /// The meshes, in geometry-list order.
    pub meshes: Vec<Mesh>,
    /// Union of all mesh boxes; the zero box when there are no meshes.
    pub bounding_box: BoundingBox,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn box_from_no_points_is_zero() {
        let bounds = BoundingBox::from_points(std::iter::empty());
        assert_eq!(bounds.min, Vec3::ZERO);
        assert_eq!(bounds.max, Vec3::ZERO);
    }

    #[test]
    fn box_from_points_is_tight() {
        let bounds = BoundingBox::from_points([
            Vec3::new(1.0, -2.0, 3.0),
            Vec3::new(-1.0, 5.0, 0.0),
        ]);
        assert_eq!(bounds.min, Vec3::new(-1.0, -2.0, 0.0));
        assert_eq!(bounds.max, Vec3::new(1.0, 5.0, 3.0));
        assert_eq!(bounds.center(), Vec3::new(0.0, 1.5, 1.5));
    }

    #[test]
    fn union_covers_both() {
        let a = BoundingBox::from_points([Vec3::ZERO, Vec3::ONE]);
        let b = BoundingBox::from_points([Vec3::splat(-2.0)]);
        let u = a.union(&b);
        assert_eq!(u.min, Vec3::splat(-2.0));
        assert_eq!(u.max, Vec3::ONE);
    }

    #[test]
    fn geometry_flags_round_trip_known_bits() {
        let flags = GeometryFlags::from_bits_retain(0x16);
        assert!(flags.contains(GeometryFlags::POSITIONS));
        assert!(flags.contains(GeometryFlags::TEXTURED));
        assert!(flags.contains(GeometryFlags::NORMALS));
        assert!(!flags.contains(GeometryFlags::PRELIT));
    }
}

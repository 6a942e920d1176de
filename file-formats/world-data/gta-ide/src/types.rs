use bitflags::bitflags;

bitflags! {
    /// Rendering flags of an object definition.
    ///
    /// Unknown bits are retained as-is; definition tables from different
    /// game generations use bits this list does not name.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct ObjectFlags: u32 {
        /// Object is a road surface.
        const IS_ROAD = 0x01;
        /// Never distance-faded.
        const DO_NOT_FADE = 0x02;
        /// Drawn after opaque geometry.
        const DRAW_LAST = 0x04;
        /// Additive blending.
        const ADDITIVE = 0x08;
        /// Object belongs to the subway tunnels.
        const IS_SUBWAY = 0x10;
        /// Ignores dynamic lighting.
        const IGNORE_LIGHTING = 0x20;
        /// Rendered without depth writes.
        const NO_ZBUFFER_WRITE = 0x40;
    }
}

/// One object definition from an `objs` section.
#[derive(Debug, Clone, PartialEq)]
pub struct ObjectDefinition {
    /// Definition id, referenced by placement instances.
    pub id: u32,
    /// DFF model name, without extension.
    pub model_name: String,
    /// TXD dictionary name the model's textures live in.
    pub texture_name: String,
    /// Number of sub-meshes the model declares.
    pub mesh_count: u32,
    /// Draw distance in world units.
    pub draw_distance: f32,
    /// Rendering flags; empty when the line omits them.
    pub flags: ObjectFlags,
}

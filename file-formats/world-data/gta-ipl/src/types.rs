use glam::{Quat, Vec3};

/// One placed object instance from an `inst` section or a binary record.
#[derive(Debug, Clone, PartialEq)]
pub struct PlacementInstance {
    /// Object definition id this instance refers to.
    pub id: u32,
    /// Model name; synthesized as `Model_<id>` for binary records.
    pub model_name: String,
    /// Interior number, 0 for the outside world.
    pub interior: u32,
    /// World position.
    pub position: Vec3,
    /// World rotation.
    pub rotation: Quat,
    /// LOD companion index, 0 when the file omits it.
    pub lod: u32,
}

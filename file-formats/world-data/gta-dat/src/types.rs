use glam::Vec3;

/// One node of a path network, from the text or binary table.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    /// Node id.
    pub id: u32,
    /// World position.
    pub position: Vec3,
    /// Travel direction; zero for binary records, which omit it.
    pub direction: Vec3,
    /// Path width in metres.
    pub width: f32,
    /// Node type discriminator.
    pub node_type: u32,
    /// Id of the linked next node.
    pub next_node: u32,
    /// Cross-road marker; 0 when absent.
    pub cross_road: u32,
    /// Synthesized display name, `PathNode_<id>`.
    pub name: String,
}

/// One vehicle's tuning record from the handling table.
///
/// The first eighteen columns after the identifier are read from the line;
/// the trailing tuning columns vary too much between game generations to
/// parse reliably and receive fixed defaults instead (see
/// [`VehicleHandlingRecord::default`]).
#[derive(Debug, Clone, PartialEq)]
pub struct VehicleHandlingRecord {
    /// Vehicle identifier, matches the model name.
    pub identifier: String,
    /// Mass in kilograms.
    pub mass: f32,
    /// Air resistance multiplier.
    pub drag_mult: f32,
    /// Centre of mass offset.
    pub center_of_mass: Vec3,
    /// Buoyancy: percentage of the body submerged before floating.
    pub percent_submerged: u32,
    /// Traction multiplier.
    pub traction_mult: f32,
    /// Traction loss on surfaces.
    pub traction_loss: f32,
    /// Front/rear traction bias.
    pub traction_bias: f32,
    /// Packed gear count and transmission type.
    pub transmission_data: u32,
    /// Engine acceleration.
    pub engine_acceleration: f32,
    /// Engine inertia.
    pub engine_inertia: f32,
    /// Drive type code (front/rear/four-wheel).
    pub drive_type: u32,
    /// Engine type code (petrol/diesel/electric).
    pub engine_type: u32,
    /// Brake deceleration.
    pub brake_deceleration: f32,
    /// Front/rear brake bias.
    pub brake_bias: f32,
    /// Anti-lock brakes fitted.
    pub abs: bool,
    /// Steering lock in degrees.
    pub steering_lock: f32,
    /// Suspension force level.
    pub suspension_force_level: f32,
    /// Suspension damping level.
    pub suspension_damping_level: f32,
    /// High-speed centre-of-mass damping.
    pub suspension_high_speed_com_damp: f32,
    /// Suspension upper travel limit.
    pub suspension_upper_limit: f32,
    /// Suspension lower travel limit.
    pub suspension_lower_limit: f32,
    /// Front/rear suspension bias.
    pub suspension_bias: f32,
    /// Anti-dive multiplier.
    pub suspension_anti_dive_multiplier: f32,
    /// Seat offset distance.
    pub seat_offset_distance: f32,
    /// Collision damage multiplier.
    pub collision_damage_multiplier: f32,
    /// Monetary value used by the damage economy.
    pub monetary_value: u32,
    /// Model flags bitfield.
    pub model_flags: u32,
    /// Handling flags bitfield.
    pub handling_flags: u32,
    /// Front light type.
    pub front_lights: u32,
    /// Rear light type.
    pub rear_lights: u32,
    /// Animation group index.
    pub anim_group: u32,
}

impl Default for VehicleHandlingRecord {
    fn default() -> Self {
        Self {
            identifier: String::new(),
            mass: 0.0,
            drag_mult: 0.0,
            center_of_mass: Vec3::ZERO,
            percent_submerged: 0,
            traction_mult: 0.0,
            traction_loss: 0.0,
            traction_bias: 0.0,
            transmission_data: 0,
            engine_acceleration: 0.0,
            engine_inertia: 0.0,
            drive_type: 0,
            engine_type: 0,
            brake_deceleration: 0.0,
            brake_bias: 0.0,
            abs: false,
            steering_lock: 0.0,
            suspension_force_level: 1.0,
            suspension_damping_level: 0.1,
            suspension_high_speed_com_damp: 0.0,
            suspension_upper_limit: 0.3,
            suspension_lower_limit: -0.15,
            suspension_bias: 0.5,
            suspension_anti_dive_multiplier: 0.0,
            seat_offset_distance: 0.2,
            collision_damage_multiplier: 0.2,
            monetary_value: 10_000,
            model_flags: 0,
            handling_flags: 0,
            front_lights: 0,
            rear_lights: 1,
            anim_group: 0,
        }
    }
}

/// One rectangular water surface patch.
#[derive(Debug, Clone, PartialEq)]
pub struct WaterPlane {
    /// First corner.
    pub corner1: Vec3,
    /// Second corner.
    pub corner2: Vec3,
    /// Third corner.
    pub corner3: Vec3,
    /// Fourth corner.
    pub corner4: Vec3,
    /// Water level height.
    pub level: f32,
    /// Surface type code; 0 when the line omits it.
    pub surface_type: u32,
}

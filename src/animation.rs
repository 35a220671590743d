//! Per-frame animation state.
//!
//! One instance of [`AnimationState`] lives in the scene. The rotation
//! accumulators are plain unbounded floats: a rotation of 7000 radians
//! renders the same as 7000 mod 2π, so there is nothing to gain from
//! wrapping them.

use cgmath::Vector2;

/// Sea roll per frame, in radians.
pub const SEA_SPIN_RATE: f32 = 0.005;
/// Cloud ring roll per frame, in radians.
pub const SKY_SPIN_RATE: f32 = 0.01;
/// Propeller spin per frame, in radians.
pub const PROPELLER_SPIN_RATE: f32 = 0.3;

/// Horizontal band the airplane moves in, mapped from pointer x.
pub const PLANE_RANGE_X: (f32, f32) = (-100.0, 100.0);
/// Vertical band the airplane moves in, mapped from pointer y.
pub const PLANE_RANGE_Y: (f32, f32) = (25.0, 175.0);

/// Mutable state advanced once per frame by [`Scene::update`](crate::scene::Scene::update).
pub struct AnimationState {
    /// Last pointer position in normalized device coordinates. Stays at the
    /// center until the first pointer event arrives, which parks the
    /// airplane at the middle of its vertical band.
    pub pointer: Vector2<f32>,
    pub sea_rotation: f32,
    pub sky_rotation: f32,
    pub propeller_rotation: f32,
}

impl AnimationState {
    pub fn new() -> Self {
        Self {
            pointer: Vector2::new(0.0, 0.0),
            sea_rotation: 0.0,
            sky_rotation: 0.0,
            propeller_rotation: 0.0,
        }
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new()
    }
}

use crate::config::{SimulationConfig, DEFAULT_FRICTION_FACTOR, DEFAULT_GRAVITY};

/// Coefficients of the only forces acting on a body: constant weight and
/// linear (Stokes) drag. The vectors themselves come from
/// [`Body::total_force`](crate::core::body::Body::total_force).
///
/// Bodies do not attract or repel each other; contact is handled by the
/// collision pass.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ForceModel {
    pub gravity: f32,
    pub friction_factor: f32,
}

impl Default for ForceModel {
    fn default() -> Self {
        Self::new(DEFAULT_GRAVITY, DEFAULT_FRICTION_FACTOR)
    }
}

impl ForceModel {
    pub fn new(gravity: f32, friction_factor: f32) -> Self {
        Self {
            gravity,
            friction_factor,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.gravity, config.friction_factor)
    }
}

use glam::Vec3;
use serde::{Deserialize, Serialize};

use super::types::SurfaceColors;
use crate::{
    config::MASS_COEFFICIENT,
    dynamics::forces::ForceModel,
    error::{Result, SimulationError},
    utils::math::{add, norm},
};

/// Mass of a uniform-density sphere: `0.3 * r³ * π`.
pub fn mass_for_radius(radius: f32) -> f32 {
    MASS_COEFFICIENT * radius.powi(3) * std::f32::consts::PI
}

/// A simulated sphere: kinematic state, fixed size/mass, and its material colors.
///
/// Deserialization goes through [`Body::new`]: the mass is never read from the
/// payload, it is derived from the radius.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "BodyData")]
pub struct Body {
    pub position: Vec3,
    pub velocity: Vec3,
    radius: f32,
    mass: f32,
    pub colors: SurfaceColors,
}

/// Serialized shape accepted when reading a [`Body`].
#[derive(Deserialize)]
struct BodyData {
    position: Vec3,
    velocity: Vec3,
    radius: f32,
    #[serde(default)]
    colors: SurfaceColors,
}

impl TryFrom<BodyData> for Body {
    type Error = SimulationError;

    fn try_from(data: BodyData) -> Result<Self> {
        Body::new(data.position, data.velocity, data.radius, data.colors)
    }
}

impl Body {
    /// Builds a body, deriving mass from `radius`.
    ///
    /// Fails when the radius is not a positive finite number or when the
    /// derived mass would not be positive (`radius³` underflowing).
    pub fn new(position: Vec3, velocity: Vec3, radius: f32, colors: SurfaceColors) -> Result<Self> {
        if !(radius.is_finite() && radius > 0.0) {
            return Err(SimulationError::InvalidRadius(radius));
        }
        let mass = mass_for_radius(radius);
        if !(mass.is_finite() && mass > 0.0) {
            return Err(SimulationError::InvalidMass(mass));
        }

        Ok(Self {
            position,
            velocity,
            radius,
            mass,
            colors,
        })
    }

    /// Builds a body from a radius already known to yield a positive mass.
    pub(crate) fn from_valid_radius(
        position: Vec3,
        velocity: Vec3,
        radius: f32,
        colors: SurfaceColors,
    ) -> Self {
        let mass = mass_for_radius(radius);
        debug_assert!(radius > 0.0 && mass > 0.0, "radius {radius} gives mass {mass}");
        Self {
            position,
            velocity,
            radius,
            mass,
            colors,
        }
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn mass(&self) -> f32 {
        self.mass
    }

    /// Weight: `(0, -g * m, 0)`.
    pub fn gravity(&self, forces: &ForceModel) -> Vec3 {
        Vec3::new(0.0, -forces.gravity * self.mass, 0.0)
    }

    /// Linear drag: `-k * v`.
    pub fn friction(&self, forces: &ForceModel) -> Vec3 {
        -forces.friction_factor * self.velocity
    }

    /// The net force the integrator applies to this body.
    pub fn total_force(&self, forces: &ForceModel) -> Vec3 {
        add(self.gravity(forces), self.friction(forces))
    }

    pub fn speed(&self) -> f32 {
        norm(self.velocity)
    }

    pub fn kinetic_energy(&self) -> f32 {
        0.5 * self.mass * self.velocity.length_squared()
    }
}

//! Global configuration constants and the tunable [`SimulationConfig`].

use serde::{Deserialize, Serialize};

use crate::{
    core::body::mass_for_radius,
    error::{Result, SimulationError},
};

/// Half extent of the cubic domain on every axis.
pub const DEFAULT_BOX_BOUND: f32 = 30.0;

/// Gravitational acceleration (Y-up, applied downwards).
pub const DEFAULT_GRAVITY: f32 = 9.8;

/// Linear drag coefficient: `friction = -k * velocity`.
pub const DEFAULT_FRICTION_FACTOR: f32 = 0.35;

/// Upper bound applied to each velocity component after integration.
pub const DEFAULT_MAX_SPEED: f32 = 50.0;

/// Speed under which a body resting exactly at `y == 0` is stopped.
pub const DEFAULT_SETTLE_SPEED: f32 = 1.0;

/// Added under the square root of every norm so it never sees zero.
pub const NORM_EPSILON: f32 = 1e-6;

/// `mass = MASS_COEFFICIENT * radius^3 * PI`.
pub const MASS_COEFFICIENT: f32 = 0.3;

/// Smallest radius the spawner draws. Drag on lighter bodies diverges under
/// explicit Euler at ordinary frame times (dt around 0.02).
pub const DEFAULT_MIN_RADIUS: f32 = 0.2;

/// Exclusive upper bound of spawned radii.
pub const DEFAULT_MAX_RADIUS: f32 = 4.0;

/// Distance kept between spawn positions and the walls.
pub const DEFAULT_SPAWN_MARGIN: f32 = 2.0;

/// Spawned velocity components are uniform in `[-speed, speed)`.
pub const DEFAULT_INITIAL_SPEED: f32 = 20.0;

/// Milliseconds of wall-clock time per simulated time unit.
pub const DEFAULT_TIME_SCALE: f64 = 900.0;

/// Spawn requests are refused once this many bodies are live.
pub const DEFAULT_MAX_BODIES: usize = 500;

/// Population created by [`crate::driver::Simulation::startup`].
pub const DEFAULT_INITIAL_BODIES: usize = 30;

/// Physics budget per frame before a warning is logged (ms).
pub const DEFAULT_FRAME_BUDGET_MS: f32 = 8.0;

/// Tunable parameters of a simulation run.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    pub box_bound: f32,
    pub gravity: f32,
    pub friction_factor: f32,
    pub max_speed: f32,
    pub settle_speed: f32,
    pub min_radius: f32,
    pub max_radius: f32,
    pub spawn_margin: f32,
    pub initial_speed: f32,
    pub time_scale: f64,
    pub max_bodies: usize,
    pub initial_bodies: usize,
    pub frame_budget_ms: f32,
    /// Fixed RNG seed for reproducible spawns; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            box_bound: DEFAULT_BOX_BOUND,
            gravity: DEFAULT_GRAVITY,
            friction_factor: DEFAULT_FRICTION_FACTOR,
            max_speed: DEFAULT_MAX_SPEED,
            settle_speed: DEFAULT_SETTLE_SPEED,
            min_radius: DEFAULT_MIN_RADIUS,
            max_radius: DEFAULT_MAX_RADIUS,
            spawn_margin: DEFAULT_SPAWN_MARGIN,
            initial_speed: DEFAULT_INITIAL_SPEED,
            time_scale: DEFAULT_TIME_SCALE,
            max_bodies: DEFAULT_MAX_BODIES,
            initial_bodies: DEFAULT_INITIAL_BODIES,
            frame_budget_ms: DEFAULT_FRAME_BUDGET_MS,
            seed: None,
        }
    }
}

impl SimulationConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_box_bound(mut self, box_bound: f32) -> Self {
        self.box_bound = box_bound;
        self
    }

    pub fn with_max_bodies(mut self, max_bodies: usize) -> Self {
        self.max_bodies = max_bodies;
        self
    }

    pub fn with_initial_bodies(mut self, initial_bodies: usize) -> Self {
        self.initial_bodies = initial_bodies;
        self
    }

    pub fn with_radius_range(mut self, min_radius: f32, max_radius: f32) -> Self {
        self.min_radius = min_radius;
        self.max_radius = max_radius;
        self
    }

    /// Half extent of the region new bodies are placed in.
    pub fn spawn_extent(&self) -> f32 {
        self.box_bound - self.spawn_margin
    }

    /// Checks that every parameter describes a usable simulation.
    pub fn validate(&self) -> Result<()> {
        fn positive(name: &str, value: f32) -> Result<()> {
            if value.is_finite() && value > 0.0 {
                Ok(())
            } else {
                Err(SimulationError::InvalidConfig(format!(
                    "{name} must be positive and finite, got {value}"
                )))
            }
        }

        positive("box_bound", self.box_bound)?;
        positive("max_speed", self.max_speed)?;
        positive("min_radius", self.min_radius)?;
        positive("max_radius", self.max_radius)?;
        positive("initial_speed", self.initial_speed)?;

        if !(self.time_scale.is_finite() && self.time_scale > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "time_scale must be positive and finite, got {}",
                self.time_scale
            )));
        }
        let min_mass = mass_for_radius(self.min_radius);
        if !(min_mass.is_finite() && min_mass > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "min_radius {} gives a non-positive mass",
                self.min_radius
            )));
        }
        if self.min_radius >= self.max_radius {
            return Err(SimulationError::InvalidConfig(format!(
                "min_radius {} must be below max_radius {}",
                self.min_radius, self.max_radius
            )));
        }
        if !(self.gravity.is_finite() && self.friction_factor.is_finite())
            || self.friction_factor < 0.0
        {
            return Err(SimulationError::InvalidConfig(
                "gravity must be finite and friction_factor finite and non-negative".into(),
            ));
        }
        if !(self.settle_speed.is_finite() && self.settle_speed >= 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "settle_speed must be non-negative, got {}",
                self.settle_speed
            )));
        }
        if !(self.spawn_margin.is_finite() && self.spawn_extent() > 0.0) {
            return Err(SimulationError::InvalidConfig(format!(
                "spawn_margin {} leaves no room inside box_bound {}",
                self.spawn_margin, self.box_bound
            )));
        }
        Ok(())
    }
}

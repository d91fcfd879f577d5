use glam::Vec3;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::{
    config::{SimulationConfig, DEFAULT_BOX_BOUND, DEFAULT_MAX_SPEED, DEFAULT_SETTLE_SPEED},
    core::body::Body,
    dynamics::forces::ForceModel,
    utils::math::norm,
};

/// Explicit Euler integrator with wall reflection, settling and a velocity cap.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Integrator {
    pub box_bound: f32,
    pub max_speed: f32,
    pub settle_speed: f32,
    parallel: bool,
}

impl Default for Integrator {
    fn default() -> Self {
        Self::new(DEFAULT_BOX_BOUND, DEFAULT_MAX_SPEED, DEFAULT_SETTLE_SPEED)
    }
}

impl Integrator {
    pub fn new(box_bound: f32, max_speed: f32, settle_speed: f32) -> Self {
        Self {
            box_bound,
            max_speed,
            settle_speed,
            parallel: false,
        }
    }

    pub fn from_config(config: &SimulationConfig) -> Self {
        Self::new(config.box_bound, config.max_speed, config.settle_speed)
    }

    pub fn set_parallel(&mut self, enabled: bool) {
        self.parallel = enabled;
    }

    pub fn parallel(&self) -> bool {
        self.parallel
    }

    /// Moves the body with its current (start-of-step) velocity.
    pub fn integrate_position(&self, body: &mut Body, dt: f32) {
        body.position += body.velocity * dt;
    }

    /// Flips each velocity component whose position coordinate touches or
    /// passes a wall. The position itself is left where it is.
    pub fn reflect_at_walls(&self, body: &mut Body) {
        for axis in 0..3 {
            let p = body.position[axis];
            if p >= self.box_bound || p <= -self.box_bound {
                body.velocity[axis] = -body.velocity[axis];
            }
        }
    }

    pub fn integrate_velocity(&self, body: &mut Body, force: Vec3, dt: f32) {
        let acceleration = force / body.mass();
        body.velocity += acceleration * dt;
    }

    /// Stops a slow body sitting exactly on the `y == 0` plane.
    pub fn settle(&self, body: &mut Body) {
        if norm(body.velocity) < self.settle_speed && body.position.y == 0.0 {
            body.velocity = Vec3::ZERO;
        }
    }

    /// Caps each component at `max_speed`. Only the upper bound is enforced.
    pub fn clamp_velocity(&self, body: &mut Body) {
        for axis in 0..3 {
            if body.velocity[axis] >= self.max_speed {
                body.velocity[axis] = self.max_speed;
            }
        }
    }

    /// Advances one body by `dt` under the net `force`.
    pub fn integrate(&self, body: &mut Body, force: Vec3, dt: f32) {
        self.integrate_position(body, dt);
        self.reflect_at_walls(body);
        self.integrate_velocity(body, force, dt);
        self.settle(body);
        self.clamp_velocity(body);
    }

    /// Computes each body's force from its pre-step state and integrates it.
    pub fn step(&self, forces: &ForceModel, bodies: &mut [Body], dt: f32) {
        if self.parallel {
            self.step_parallel(forces, bodies, dt);
        } else {
            self.step_sequential(forces, bodies, dt);
        }
    }

    fn step_sequential(&self, forces: &ForceModel, bodies: &mut [Body], dt: f32) {
        for body in bodies.iter_mut() {
            let force = body.total_force(forces);
            self.integrate(body, force, dt);
        }
    }

    #[cfg(feature = "parallel")]
    fn step_parallel(&self, forces: &ForceModel, bodies: &mut [Body], dt: f32) {
        bodies.par_iter_mut().for_each(|body| {
            let force = body.total_force(forces);
            self.integrate(body, force, dt);
        });
    }

    #[cfg(not(feature = "parallel"))]
    fn step_parallel(&self, forces: &ForceModel, bodies: &mut [Body], dt: f32) {
        self.step_sequential(forces, bodies, dt);
    }
}

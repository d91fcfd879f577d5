//! The simulated world: the live body collection, the bounded domain, and the step pipeline.

mod spawner;

pub use spawner::BodySpawner;

use glam::Vec3;
use log::{debug, warn};

use crate::{
    collision::{CollisionResolver, OverlapPair},
    config::SimulationConfig,
    core::body::Body,
    dynamics::{forces::ForceModel, integrator::Integrator},
    error::{Result, SimulationError},
    utils::{
        logging::ScopedTimer,
        profiling::{ProfileTimer, StepProfile},
    },
};

/// Central simulation container. Sole owner and writer of the bodies.
pub struct World {
    bodies: Vec<Body>,
    config: SimulationConfig,
    forces: ForceModel,
    integrator: Integrator,
    resolver: CollisionResolver,
    spawner: BodySpawner,
    profile: StepProfile,
}

impl Default for World {
    fn default() -> Self {
        Self::build(SimulationConfig::default())
    }
}

impl World {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    /// A world holding `bodies` in the given order.
    pub fn with_bodies(config: SimulationConfig, bodies: Vec<Body>) -> Result<Self> {
        let mut world = Self::new(config)?;
        world.bodies = bodies;
        Ok(world)
    }

    fn build(config: SimulationConfig) -> Self {
        Self {
            bodies: Vec::new(),
            forces: ForceModel::from_config(&config),
            integrator: Integrator::from_config(&config),
            resolver: CollisionResolver::new(),
            spawner: BodySpawner::from_config(&config),
            profile: StepProfile::default(),
            config,
        }
    }

    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    pub fn box_bound(&self) -> f32 {
        self.config.box_bound
    }

    pub fn set_parallel_enabled(&mut self, enabled: bool) {
        if enabled && !cfg!(feature = "parallel") {
            warn!("parallel integration requested but the `parallel` feature is disabled");
        }
        self.integrator.set_parallel(enabled);
    }

    pub fn parallel_enabled(&self) -> bool {
        self.integrator.parallel()
    }

    /// Appends a randomized body and returns its index.
    pub fn spawn(&mut self) -> usize {
        let body = self.spawner.spawn();
        debug!(
            "spawned body #{} (radius {:.2}) at {:?}",
            self.bodies.len(),
            body.radius(),
            body.position
        );
        self.insert(body)
    }

    /// Spawns `count` randomized bodies.
    pub fn populate(&mut self, count: usize) {
        self.bodies.reserve(count);
        for _ in 0..count {
            self.spawn();
        }
    }

    /// Appends an explicitly constructed body and returns its index.
    pub fn insert(&mut self, body: Body) -> usize {
        self.bodies.push(body);
        self.bodies.len() - 1
    }

    /// Removes every body. Calling it on an empty world is a no-op.
    pub fn clear(&mut self) {
        if !self.bodies.is_empty() {
            debug!("clearing {} bodies", self.bodies.len());
        }
        self.bodies.clear();
    }

    pub fn count(&self) -> usize {
        self.bodies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bodies.is_empty()
    }

    /// Read-only view of the live bodies, in insertion order.
    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    pub fn body(&self, index: usize) -> Option<&Body> {
        self.bodies.get(index)
    }

    pub fn forces(&self) -> &ForceModel {
        &self.forces
    }

    /// Net force the next step will apply to the body at `index`.
    pub fn force_on(&self, index: usize) -> Option<Vec3> {
        self.bodies
            .get(index)
            .map(|body| body.total_force(&self.forces))
    }

    pub fn last_profile(&self) -> &StepProfile {
        &self.profile
    }

    pub fn total_kinetic_energy(&self) -> f32 {
        self.bodies.iter().map(Body::kinetic_energy).sum()
    }

    /// Overlapping pairs in the current state, without resolving them.
    pub fn overlapping_pairs(&self) -> Vec<OverlapPair> {
        self.resolver.find_overlaps(&self.bodies)
    }

    /// Advances the simulation by `dt`, rejecting negative or non-finite input.
    pub fn try_step(&mut self, dt: f32) -> Result<()> {
        if !(dt.is_finite() && dt >= 0.0) {
            return Err(SimulationError::InvalidTimestep(dt));
        }
        self.advance(dt);
        Ok(())
    }

    /// Advances the simulation by `dt`. Invalid input is logged and treated as zero.
    pub fn step(&mut self, dt: f32) {
        if let Err(err) = self.try_step(dt) {
            warn!("{err}; skipping step");
        }
    }

    fn advance(&mut self, dt: f32) {
        self.profile.reset();
        self.profile.body_count = self.bodies.len();
        if dt == 0.0 {
            return;
        }

        let _step_timer = ScopedTimer::new("world::step");
        let mut total = std::time::Duration::ZERO;
        {
            let _total = ProfileTimer::new(&mut total);
            {
                let _trace = ScopedTimer::new("integrate");
                let _timer = ProfileTimer::new(&mut self.profile.integration_time);
                self.integrator.step(&self.forces, &mut self.bodies, dt);
            }
            {
                let _trace = ScopedTimer::new("collide");
                let _timer = ProfileTimer::new(&mut self.profile.collision_time);
                self.profile.collision_count = self.resolver.resolve(&mut self.bodies);
            }
        }
        self.profile.total_time = total;
        self.profile.report();
    }
}

//! Sphere Box – a real-time particle simulation core for Rust.
//!
//! Spheres fall under gravity and linear drag inside a cube, bounce off its
//! walls and exchange velocities when they overlap. The crate owns the physics
//! and the frame driver; drawing is left to a [`render::RenderTarget`].

pub mod collision;
pub mod config;
pub mod core;
pub mod driver;
pub mod dynamics;
pub mod error;
pub mod render;
pub mod shared;
pub mod utils;
pub mod world;

pub use glam::Vec3;

pub use collision::{CollisionResolver, OverlapPair};
pub use config::SimulationConfig;
pub use crate::core::{body::mass_for_radius, body::Body, types::SurfaceColors};
pub use driver::{FrameClock, FrameReport, InputEvent, InputState, Simulation, SPACE_KEY};
pub use dynamics::{forces::ForceModel, integrator::Integrator};
pub use error::{Result, SimulationError};
pub use render::{Camera, Lighting, NoopRenderer, RenderInstance, RenderSnapshot, RenderTarget};
pub use shared::SharedWorld;
pub use utils::profiling::StepProfile;
pub use world::World;

/// High-level convenience wrapper pairing a [`Simulation`] with a renderer.
pub struct SphereBox<R: RenderTarget> {
    simulation: Simulation,
    renderer: R,
    snapshot: RenderSnapshot,
    camera: Camera,
    lighting: Lighting,
}

impl<R: RenderTarget> SphereBox<R> {
    /// Creates the simulation and seeds its initial population.
    pub fn new(config: SimulationConfig, renderer: R) -> Result<Self> {
        let mut simulation = Simulation::new(config)?;
        simulation.startup();
        Ok(Self {
            simulation,
            renderer,
            snapshot: RenderSnapshot::new(),
            camera: Camera::default(),
            lighting: Lighting::default(),
        })
    }

    pub fn handle(&mut self, event: InputEvent) {
        self.simulation.handle(event);
    }

    /// One display refresh: draw the current state, then advance it.
    pub fn tick(&mut self, now_ms: f64) -> FrameReport {
        self.snapshot.sync(self.simulation.world());
        self.renderer
            .draw(&self.snapshot, &self.camera, &self.lighting);
        self.simulation.frame(now_ms)
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    pub fn lighting_mut(&mut self) -> &mut Lighting {
        &mut self.lighting
    }
}

//! Frame-driven simulation driver: turns timestamps and user input into world steps.

pub mod clock;
pub mod input;

pub use clock::FrameClock;
pub use input::{InputEvent, InputState, SPACE_KEY};

use std::time::Instant;

use log::{debug, info, warn};

use crate::{
    config::SimulationConfig, error::Result, utils::logging::warn_if_frame_budget_exceeded,
    world::World,
};

/// Outcome of one [`Simulation::frame`].
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FrameReport {
    /// Simulated time advanced this frame.
    pub dt: f32,
    pub spawned: usize,
    /// Spawn requests turned away because the world was full.
    pub refused: usize,
    pub cleared: bool,
    pub body_count: usize,
    pub over_budget: bool,
}

/// Owns the world, the frame clock and pending input. Call [`Simulation::frame`]
/// once per display refresh.
pub struct Simulation {
    world: World,
    clock: FrameClock,
    input: InputState,
}

impl Simulation {
    pub fn new(config: SimulationConfig) -> Result<Self> {
        let world = World::new(config)?;
        Ok(Self::from_world(world))
    }

    pub fn from_world(world: World) -> Self {
        let clock = FrameClock::new(world.config().time_scale);
        Self {
            world,
            clock,
            input: InputState::default(),
        }
    }

    /// Seeds the configured initial population.
    pub fn startup(&mut self) {
        let initial = self.world.config().initial_bodies;
        self.world.populate(initial);
        info!("simulation started with {initial} bodies");
    }

    pub fn world(&self) -> &World {
        &self.world
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn handle(&mut self, event: InputEvent) {
        self.input.handle(event);
    }

    pub fn max_bodies(&self) -> usize {
        self.world.config().max_bodies
    }

    /// Spawns one body unless the world is at capacity.
    pub fn request_spawn(&mut self) -> bool {
        if self.world.count() >= self.max_bodies() {
            debug!(
                "spawn refused: {} bodies live (max {})",
                self.world.count(),
                self.max_bodies()
            );
            return false;
        }
        self.world.spawn();
        true
    }

    pub fn reset(&mut self) {
        self.world.clear();
    }

    /// Applies pending input, then advances the world by the time elapsed since
    /// the previous frame.
    pub fn frame(&mut self, now_ms: f64) -> FrameReport {
        let started = Instant::now();
        let mut report = FrameReport::default();

        if self.input.take_reset() {
            self.reset();
            report.cleared = true;
        }

        let requests = self.input.take_clicks() + usize::from(self.input.spawn_held());
        for _ in 0..requests {
            if self.request_spawn() {
                report.spawned += 1;
            } else {
                report.refused += 1;
            }
        }
        if report.refused > 0 {
            warn!(
                "refused {} spawn request(s): {} body limit reached",
                report.refused,
                self.max_bodies()
            );
        }

        report.dt = self.clock.tick(now_ms);
        self.world.step(report.dt);

        report.body_count = self.world.count();
        report.over_budget =
            warn_if_frame_budget_exceeded(started.elapsed(), self.world.config().frame_budget_ms);
        report
    }

    /// Text shown next to the canvas.
    pub fn count_label(&self) -> String {
        format!("Total Spheres: {}", self.world.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simulation(max_bodies: usize) -> Simulation {
        let config = SimulationConfig::default()
            .with_seed(11)
            .with_max_bodies(max_bodies)
            .with_initial_bodies(3);
        Simulation::new(config).unwrap()
    }

    #[test]
    fn startup_seeds_initial_population() {
        let mut sim = simulation(500);
        sim.startup();
        assert_eq!(sim.world().count(), 3);
        assert_eq!(sim.count_label(), "Total Spheres: 3");
    }

    #[test]
    fn first_frame_has_no_motion() {
        let mut sim = simulation(500);
        sim.startup();
        let before = sim.world().bodies().to_vec();
        let report = sim.frame(16_000.0);
        assert_eq!(report.dt, 0.0);
        assert_eq!(sim.world().bodies(), before.as_slice());
    }

    #[test]
    fn spawn_requests_stop_at_capacity() {
        let mut sim = simulation(4);
        sim.startup();
        sim.handle(InputEvent::PointerClick);
        sim.handle(InputEvent::PointerClick);
        let report = sim.frame(0.0);
        assert_eq!(report.spawned, 1);
        assert_eq!(report.refused, 1);
        assert_eq!(report.body_count, 4);
    }

    #[test]
    fn reset_runs_before_spawns() {
        let mut sim = simulation(500);
        sim.startup();
        sim.handle(InputEvent::Reset);
        sim.handle(InputEvent::PointerClick);
        let report = sim.frame(0.0);
        assert!(report.cleared);
        assert_eq!(report.body_count, 1);
    }
}

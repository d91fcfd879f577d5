use glam::Vec3;
use rand::{rngs::StdRng, Rng, SeedableRng};

use crate::{
    config::SimulationConfig,
    core::{body::Body, types::SurfaceColors},
};

/// Produces randomized bodies inside the spawn volume of a world.
///
/// Radii are drawn from `[min_radius, max_radius)`. The default lower bound is
/// [`DEFAULT_MIN_RADIUS`](crate::config::DEFAULT_MIN_RADIUS) (0.2), not zero:
/// lighter spheres make the drag term diverge under explicit Euler at normal
/// frame times. Configs may lower it to any radius with a positive mass.
#[derive(Debug, Clone)]
pub struct BodySpawner {
    rng: StdRng,
    extent: f32,
    initial_speed: f32,
    min_radius: f32,
    max_radius: f32,
}

impl BodySpawner {
    /// Expects a validated config: positive extent/speed and `min_radius < max_radius`.
    pub fn from_config(config: &SimulationConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            rng,
            extent: config.spawn_extent(),
            initial_speed: config.initial_speed,
            min_radius: config.min_radius,
            max_radius: config.max_radius,
        }
    }

    fn symmetric(&mut self, limit: f32) -> Vec3 {
        Vec3::new(
            self.rng.gen_range(-limit..limit),
            self.rng.gen_range(-limit..limit),
            self.rng.gen_range(-limit..limit),
        )
    }

    pub fn spawn(&mut self) -> Body {
        let position = self.symmetric(self.extent);
        let velocity = self.symmetric(self.initial_speed);
        let radius = self.rng.gen_range(self.min_radius..self.max_radius);
        let colors = SurfaceColors::random(&mut self.rng);
        Body::from_valid_radius(position, velocity, radius, colors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DEFAULT_MIN_RADIUS;

    #[test]
    fn spawned_bodies_respect_ranges() {
        let config = SimulationConfig::default().with_seed(42);
        let mut spawner = BodySpawner::from_config(&config);
        for _ in 0..200 {
            let body = spawner.spawn();
            assert!(body.position.abs().max_element() <= 28.0);
            assert!(body.velocity.abs().max_element() <= 20.0);
            assert!(body.radius() >= config.min_radius && body.radius() < 4.0);
            assert!(body.mass() > 0.0);
        }
    }

    #[test]
    fn lowered_radius_floor_still_gives_positive_mass() {
        let config = SimulationConfig::default()
            .with_seed(5)
            .with_radius_range(1e-3, 4.0);
        assert!(config.validate().is_ok());
        let mut spawner = BodySpawner::from_config(&config);
        let smallest = (0..500)
            .map(|_| spawner.spawn())
            .inspect(|body| assert!(body.mass() > 0.0))
            .map(|body| body.radius())
            .fold(f32::INFINITY, f32::min);
        assert!(smallest < DEFAULT_MIN_RADIUS);
    }

    #[test]
    fn same_seed_same_bodies() {
        let config = SimulationConfig::default().with_seed(9);
        let mut a = BodySpawner::from_config(&config);
        let mut b = BodySpawner::from_config(&config);
        assert_eq!(a.spawn(), b.spawn());
    }
}

use glam::Vec3;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Phong material colors of a body. Rendering-only, fixed for the body's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SurfaceColors {
    pub ambient: Vec3,
    pub diffuse: Vec3,
    pub specular: Vec3,
}

impl Default for SurfaceColors {
    fn default() -> Self {
        Self {
            ambient: Vec3::splat(0.2),
            diffuse: Vec3::splat(0.8),
            specular: Vec3::ONE,
        }
    }
}

impl SurfaceColors {
    pub fn new(ambient: Vec3, diffuse: Vec3, specular: Vec3) -> Self {
        Self {
            ambient,
            diffuse,
            specular,
        }
    }

    /// Every channel uniform in `[0, 1)`.
    pub fn random<R: Rng>(rng: &mut R) -> Self {
        let mut channel = || Vec3::new(rng.gen(), rng.gen(), rng.gen());
        Self {
            ambient: channel(),
            diffuse: channel(),
            specular: channel(),
        }
    }
}

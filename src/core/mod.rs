//! Core types describing the simulated spheres.

pub mod body;
pub mod types;

pub use body::{mass_for_radius, Body};
pub use types::SurfaceColors;

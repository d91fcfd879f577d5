//! Collision handling: all-pairs overlap detection and velocity-swap resolution.

pub mod resolver;

pub use resolver::{CollisionResolver, OverlapPair};

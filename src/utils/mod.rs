//! Utility helpers: vector math with the norm epsilon, scoped timers, and step profiling.

pub mod logging;
pub mod math;
pub mod profiling;

pub use math::*;
pub use profiling::StepProfile;

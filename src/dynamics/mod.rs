//! Simulation dynamics: the per-body force model and the explicit Euler integrator.

pub mod forces;
pub mod integrator;

pub use forces::ForceModel;
pub use integrator::Integrator;

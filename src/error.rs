//! Error types for the simulation core.

use thiserror::Error;

/// Errors raised when a body, config or timestep would break a physics invariant.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimulationError {
    #[error("Body radius must be positive and finite, got {0}")]
    InvalidRadius(f32),
    #[error("Body mass must be positive and finite, got {0}")]
    InvalidMass(f32),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
    #[error("Timestep must be finite and non-negative, got {0}")]
    InvalidTimestep(f32),
}

/// Convenient Result alias for simulation operations.
pub type Result<T> = std::result::Result<T, SimulationError>;

/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for model parameters

use thiserror::Error;

/// Result type for model construction
pub type Result<T> = std::result::Result<T, ModelError>;

/// Error type for invalid model parameters
#[derive(Error, Debug)]
pub enum ModelError {
    /// Electron count must be positive
    #[error("electron count must be positive, got {0}")]
    NonPositiveElectronCount(f64),

    /// Spin component count must be positive
    #[error("number of spin components must be at least 1, got {0}")]
    InvalidSpinComponents(usize),

    /// Temperature must be zero or positive
    #[error("temperature must be non-negative, got {0}")]
    NegativeTemperature(f64),

    /// Per-orbital occupancy must be positive
    #[error("maximum occupancy per orbital must be positive, got {0}")]
    NonPositiveOccupancy(f64),
}

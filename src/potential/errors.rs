/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for local potential construction

use crate::basis::BasisError;
use thiserror::Error;

/// Result type for potential construction
pub type Result<T> = std::result::Result<T, PotentialError>;

/// Error type for potential-related operations
///
/// All variants are construction-time failures: they are deterministic
/// functions of the inputs, so retrying without changing the inputs cannot
/// succeed.
#[derive(Error, Debug)]
pub enum PotentialError {
    /// A species in the position set has no registered form factor
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The built real-space field has a non-negligible imaginary part,
    /// which signals a malformed (non-Hermitian) form factor rather than a
    /// transform bug
    #[error("physics inconsistency: {0}")]
    PhysicsInconsistency(String),

    /// A directly supplied real-space field does not match the basis grid
    #[error("field shape {actual:?} does not match basis grid shape {expected:?}")]
    ShapeMismatch {
        /// The basis's real-space grid shape
        expected: [usize; 3],
        /// The shape of the supplied field
        actual: [usize; 3],
    },

    /// Propagation of error from the basis module
    #[error("basis error: {0}")]
    Basis(#[from] BasisError),
}

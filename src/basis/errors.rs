/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Error types for the plane-wave basis

use thiserror::Error;

/// Result type for basis operations
pub type Result<T> = std::result::Result<T, BasisError>;

/// Error type for basis construction and grid transforms
#[derive(Error, Debug)]
pub enum BasisError {
    /// Lattice vectors do not span a cell of finite volume
    #[error("singular lattice: cell volume {0:.3e} is not positive")]
    SingularLattice(f64),

    /// A real-space mesh dimension is zero
    #[error("invalid real-space grid shape {0:?}: all dimensions must be positive")]
    EmptyGrid([usize; 3]),

    /// A Miller index cannot be represented on the mesh
    #[error("Miller index {index:?} does not fit the {shape:?} grid")]
    MillerOutOfRange {
        /// The offending Miller triple
        index: [i32; 3],
        /// The real-space mesh shape
        shape: [usize; 3],
    },

    /// A coefficient list does not match the reciprocal-vector set
    #[error("expected {expected} reciprocal coefficients, got {actual}")]
    CoefficientCountMismatch {
        /// Number of reciprocal vectors in the basis
        expected: usize,
        /// Number of coefficients supplied
        actual: usize,
    },

    /// A real-space field does not match the mesh shape
    #[error("real-space field shape {actual:?} does not match grid shape {expected:?}")]
    GridShapeMismatch {
        /// The mesh shape owned by the basis
        expected: [usize; 3],
        /// The shape of the supplied field
        actual: [usize; 3],
    },
}

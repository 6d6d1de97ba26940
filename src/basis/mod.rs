/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Plane-wave basis: lattice, reciprocal vectors, and grid transform
//!
//! [`PlaneWaveBasis`] bundles the direct lattice, the finite reciprocal
//! vector set for a real-space mesh, and the reciprocal↔real transform. It
//! is read-only after construction and is shared behind `Arc` by every
//! [`crate::potential::LocalPotential`] built on it: changing the mesh or
//! the cell means constructing a new basis, never mutating a shared one.

mod errors;
mod gvectors;
mod lattice;
mod transform;

pub use errors::{BasisError, Result};
pub use gvectors::GVectorSet;
pub use lattice::Lattice;
pub use transform::GridTransform;

use ndarray::Array3;
use num_complex::Complex64;

/// A truncated plane-wave basis tied to a real-space sampling mesh
#[derive(Debug)]
pub struct PlaneWaveBasis {
    lattice: Lattice,
    gvectors: GVectorSet,
    transform: GridTransform,
}

impl PlaneWaveBasis {
    /// Create a basis for a lattice and real-space mesh shape
    ///
    /// # Arguments
    ///
    /// * `lattice` - The direct lattice of the unit cell
    /// * `grid_shape` - Number of real-space samples along each lattice axis
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::EmptyGrid`] if any mesh dimension is zero.
    pub fn new(lattice: Lattice, grid_shape: [usize; 3]) -> Result<Self> {
        let transform = GridTransform::new(grid_shape)?;
        let gvectors = GVectorSet::new(&lattice, grid_shape);
        Ok(Self {
            lattice,
            gvectors,
            transform,
        })
    }

    /// The direct lattice
    pub fn lattice(&self) -> &Lattice {
        &self.lattice
    }

    /// Unit-cell volume
    pub fn volume(&self) -> f64 {
        self.lattice.volume()
    }

    /// The reciprocal-vector set
    pub fn gvectors(&self) -> &GVectorSet {
        &self.gvectors
    }

    /// Number of reciprocal vectors
    pub fn n_gvectors(&self) -> usize {
        self.gvectors.len()
    }

    /// Index of the zero ("DC") reciprocal vector
    pub fn dc_index(&self) -> usize {
        self.gvectors.dc_index()
    }

    /// Real-space mesh shape
    pub fn grid_shape(&self) -> [usize; 3] {
        self.transform.shape()
    }

    /// Forward reciprocal→real transform over this basis's vector set
    pub fn g_to_r(&self, coefficients: &[Complex64]) -> Result<Array3<Complex64>> {
        self.transform.g_to_r(&self.gvectors, coefficients)
    }

    /// Inverse real→reciprocal transform over this basis's vector set
    pub fn r_to_g(&self, field: &Array3<Complex64>) -> Result<Vec<Complex64>> {
        self.transform.r_to_g(&self.gvectors, field)
    }
}

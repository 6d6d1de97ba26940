/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal ↔ real-space grid transform
//!
//! Maps the 1-D coefficient list over a [`GVectorSet`] onto the 3-D
//! real-space mesh and back. `g_to_r` scatters coefficients to the mesh by
//! wrapped Miller index and applies an unnormalized inverse FFT, so the
//! resulting field is `f(r) = Σ_G c(G) exp(i G·r)`; `r_to_g` applies the
//! forward FFT with 1/N normalization and gathers at the Miller indices.
//! The two directions are mutually inverse on coefficient lists.

use super::errors::{BasisError, Result};
use super::gvectors::GVectorSet;
use ndarray::{Array3, Axis};
use num_complex::Complex64;
use once_cell::sync::Lazy;
use rustfft::{Fft, FftPlanner};
use std::sync::{Arc, Mutex};

// One process-wide planner; rustfft reuses twiddle tables across plans of
// the same length.
static FFT_PLANNER: Lazy<Mutex<FftPlanner<f64>>> = Lazy::new(|| Mutex::new(FftPlanner::new()));

/// Bidirectional transform between reciprocal coefficients and a real-space
/// mesh of fixed shape
pub struct GridTransform {
    shape: [usize; 3],
    forward: [Arc<dyn Fft<f64>>; 3],
    inverse: [Arc<dyn Fft<f64>>; 3],
}

impl std::fmt::Debug for GridTransform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GridTransform").field("shape", &self.shape).finish()
    }
}

impl GridTransform {
    /// Create a transform for a real-space mesh shape
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::EmptyGrid`] if any dimension is zero.
    pub fn new(shape: [usize; 3]) -> Result<Self> {
        if shape.iter().any(|&n| n == 0) {
            return Err(BasisError::EmptyGrid(shape));
        }
        let mut planner = FFT_PLANNER.lock().expect("FFT planner lock poisoned");
        let forward = shape.map(|n| planner.plan_fft_forward(n));
        let inverse = shape.map(|n| planner.plan_fft_inverse(n));
        Ok(Self {
            shape,
            forward,
            inverse,
        })
    }

    /// The real-space mesh shape
    pub fn shape(&self) -> [usize; 3] {
        self.shape
    }

    /// Transform reciprocal coefficients to the real-space mesh
    ///
    /// # Arguments
    ///
    /// * `gvectors` - The reciprocal-vector set the coefficients are indexed by
    /// * `coefficients` - One complex coefficient per reciprocal vector
    ///
    /// # Returns
    ///
    /// The complex field `f(r) = Σ_G c(G) exp(i G·r)` sampled on the mesh
    pub fn g_to_r(
        &self,
        gvectors: &GVectorSet,
        coefficients: &[Complex64],
    ) -> Result<Array3<Complex64>> {
        if coefficients.len() != gvectors.len() {
            return Err(BasisError::CoefficientCountMismatch {
                expected: gvectors.len(),
                actual: coefficients.len(),
            });
        }

        let [n1, n2, n3] = self.shape;
        let mut grid = Array3::<Complex64>::zeros((n1, n2, n3));
        for (miller, value) in gvectors.miller().iter().zip(coefficients) {
            let [i, j, k] = self.grid_index(miller)?;
            grid[[i, j, k]] += *value;
        }

        for axis in 0..3 {
            transform_axis(&mut grid, axis, &self.inverse[axis]);
        }
        Ok(grid)
    }

    /// Transform a real-space field back to reciprocal coefficients
    ///
    /// # Arguments
    ///
    /// * `gvectors` - The reciprocal-vector set to gather coefficients for
    /// * `field` - The complex field sampled on the mesh
    ///
    /// # Returns
    ///
    /// One coefficient per reciprocal vector, in the set's storage order
    pub fn r_to_g(
        &self,
        gvectors: &GVectorSet,
        field: &Array3<Complex64>,
    ) -> Result<Vec<Complex64>> {
        let actual = field.dim();
        let actual = [actual.0, actual.1, actual.2];
        if actual != self.shape {
            return Err(BasisError::GridShapeMismatch {
                expected: self.shape,
                actual,
            });
        }

        let mut work = field.clone();
        for axis in 0..3 {
            transform_axis(&mut work, axis, &self.forward[axis]);
        }
        let normalization = 1.0 / (self.shape.iter().product::<usize>() as f64);

        let mut coefficients = Vec::with_capacity(gvectors.len());
        for miller in gvectors.miller() {
            let [i, j, k] = self.grid_index(miller)?;
            coefficients.push(work[[i, j, k]] * normalization);
        }
        Ok(coefficients)
    }

    /// Mesh index of a Miller triple, wrapping negative frequencies
    fn grid_index(&self, miller: &[i32; 3]) -> Result<[usize; 3]> {
        let mut index = [0usize; 3];
        for d in 0..3 {
            let n = self.shape[d];
            let m = miller[d];
            if m.unsigned_abs() as usize > n / 2 {
                return Err(BasisError::MillerOutOfRange {
                    index: *miller,
                    shape: self.shape,
                });
            }
            index[d] = m.rem_euclid(n as i32) as usize;
        }
        Ok(index)
    }
}

/// Apply a 1-D FFT along one axis of the mesh, lane by lane
fn transform_axis(grid: &mut Array3<Complex64>, axis: usize, fft: &Arc<dyn Fft<f64>>) {
    let len = grid.shape()[axis];
    let mut buffer = vec![Complex64::new(0.0, 0.0); len];
    for mut lane in grid.lanes_mut(Axis(axis)) {
        for (b, v) in buffer.iter_mut().zip(lane.iter()) {
            *b = *v;
        }
        fft.process(&mut buffer);
        for (v, b) in lane.iter_mut().zip(buffer.iter()) {
            *v = *b;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_index_wraps_negative_frequencies() {
        let transform = GridTransform::new([4, 4, 5]).unwrap();
        assert_eq!(transform.grid_index(&[0, 0, 0]).unwrap(), [0, 0, 0]);
        assert_eq!(transform.grid_index(&[1, -1, 2]).unwrap(), [1, 3, 2]);
        assert_eq!(transform.grid_index(&[2, 2, -2]).unwrap(), [2, 2, 3]);
        assert!(matches!(
            transform.grid_index(&[3, 0, 0]),
            Err(BasisError::MillerOutOfRange { .. })
        ));
    }

    #[test]
    fn test_empty_grid_rejected() {
        assert!(matches!(
            GridTransform::new([0, 4, 4]),
            Err(BasisError::EmptyGrid(_))
        ));
    }
}

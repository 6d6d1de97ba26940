/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! The immutable local potential value object

use super::errors::{PotentialError, Result};
use crate::basis::PlaneWaveBasis;
use ndarray::{Array3, Zip};
use std::sync::Arc;

/// A real-valued potential field on the real-space grid of a basis
///
/// Immutable once built: the field and the basis reference are fixed at
/// construction. The basis is shared, not owned, so many potentials and
/// other holders can refer to the same basis concurrently.
#[derive(Debug, Clone)]
pub struct LocalPotential {
    basis: Arc<PlaneWaveBasis>,
    values: Array3<f64>,
}

impl LocalPotential {
    /// Wrap externally supplied real-space values
    ///
    /// # Errors
    ///
    /// Returns [`PotentialError::ShapeMismatch`] if the value array does not
    /// match the basis's real-space grid shape.
    pub fn from_real_values(basis: Arc<PlaneWaveBasis>, values: Array3<f64>) -> Result<Self> {
        let actual = values.dim();
        let actual = [actual.0, actual.1, actual.2];
        let expected = basis.grid_shape();
        if actual != expected {
            return Err(PotentialError::ShapeMismatch { expected, actual });
        }
        Ok(Self::new_unchecked(basis, values))
    }

    /// Wrap values whose shape is already known to match the basis
    pub(super) fn new_unchecked(basis: Arc<PlaneWaveBasis>, values: Array3<f64>) -> Self {
        Self { basis, values }
    }

    /// The basis this potential is tied to
    pub fn basis(&self) -> &Arc<PlaneWaveBasis> {
        &self.basis
    }

    /// The potential values on the real-space grid
    pub fn values(&self) -> &Array3<f64> {
        &self.values
    }

    /// The real-space grid shape
    pub fn shape(&self) -> [usize; 3] {
        self.basis.grid_shape()
    }

    /// Apply the potential pointwise to a real-space field
    ///
    /// Writes `output = values ⊙ input` into the caller-supplied buffer.
    /// This is the eigensolver hot path: no allocation, no complex
    /// arithmetic, no mutation of the potential. All three arrays must
    /// share the grid shape; `Zip` panics on violation.
    pub fn apply(&self, input: &Array3<f64>, output: &mut Array3<f64>) {
        Zip::from(output)
            .and(input)
            .and(&self.values)
            .for_each(|out, &field, &v| *out = v * field);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::basis::Lattice;
    use ndarray::Array3;

    fn small_basis() -> Arc<PlaneWaveBasis> {
        Arc::new(PlaneWaveBasis::new(Lattice::cubic(1.0).unwrap(), [2, 3, 2]).unwrap())
    }

    #[test]
    fn test_shape_mismatch_rejected() {
        let basis = small_basis();
        let result = LocalPotential::from_real_values(basis, Array3::zeros((2, 3, 3)));
        assert!(matches!(
            result,
            Err(PotentialError::ShapeMismatch {
                expected: [2, 3, 2],
                actual: [2, 3, 3],
            })
        ));
    }

    #[test]
    fn test_apply_is_pointwise() {
        let basis = small_basis();
        let values = Array3::from_shape_fn((2, 3, 2), |(i, j, k)| (i + 2 * j + 4 * k) as f64);
        let potential = LocalPotential::from_real_values(basis, values.clone()).unwrap();

        let input = Array3::from_elem((2, 3, 2), 2.0);
        let mut output = Array3::zeros((2, 3, 2));
        potential.apply(&input, &mut output);

        for (out, v) in output.iter().zip(values.iter()) {
            assert_eq!(*out, 2.0 * v);
        }
    }
}

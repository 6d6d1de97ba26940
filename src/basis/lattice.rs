/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Direct lattice: cell vectors, volume, and coordinate conversion

use super::errors::{BasisError, Result};
use crate::atoms::Vector3D;
use crate::utils::constants::TWO_PI;

const VOLUME_TOLERANCE: f64 = 1e-12;

/// The direct lattice of a periodic unit cell
///
/// Holds the three lattice vectors `a1, a2, a3`. The cell volume must be
/// finite; degenerate vector sets are rejected at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct Lattice {
    vectors: [Vector3D; 3],
    volume: f64,
}

impl Lattice {
    /// Create a lattice from its three cell vectors
    ///
    /// # Errors
    ///
    /// Returns [`BasisError::SingularLattice`] if the vectors do not span a
    /// cell of finite volume.
    pub fn new(a1: Vector3D, a2: Vector3D, a3: Vector3D) -> Result<Self> {
        let det = a1.dot(&a2.cross(&a3));
        let volume = det.abs();
        if volume < VOLUME_TOLERANCE {
            return Err(BasisError::SingularLattice(volume));
        }
        Ok(Self {
            vectors: [a1, a2, a3],
            volume,
        })
    }

    /// Simple-cubic lattice with edge length `a`
    pub fn cubic(a: f64) -> Result<Self> {
        Self::new(
            Vector3D::new(a, 0.0, 0.0),
            Vector3D::new(0.0, a, 0.0),
            Vector3D::new(0.0, 0.0, a),
        )
    }

    /// Orthorhombic lattice with edge lengths `a`, `b`, `c`
    pub fn orthorhombic(a: f64, b: f64, c: f64) -> Result<Self> {
        Self::new(
            Vector3D::new(a, 0.0, 0.0),
            Vector3D::new(0.0, b, 0.0),
            Vector3D::new(0.0, 0.0, c),
        )
    }

    /// The three lattice vectors
    pub fn vectors(&self) -> &[Vector3D; 3] {
        &self.vectors
    }

    /// Unit-cell volume
    pub fn volume(&self) -> f64 {
        self.volume
    }

    /// Convert a fractional coordinate to Cartesian
    ///
    /// `cart = a1 * f.x + a2 * f.y + a3 * f.z`, the lattice-vector matrix
    /// applied to the fractional vector.
    pub fn to_cartesian(&self, fractional: &Vector3D) -> Vector3D {
        self.vectors[0] * fractional.x + self.vectors[1] * fractional.y + self.vectors[2] * fractional.z
    }

    /// The reciprocal lattice vectors `b_i`, satisfying `b_i · a_j = 2π δ_ij`
    pub fn reciprocal(&self) -> [Vector3D; 3] {
        let [a1, a2, a3] = self.vectors;
        let det = a1.dot(&a2.cross(&a3));
        let factor = TWO_PI / det;
        [
            a2.cross(&a3) * factor,
            a3.cross(&a1) * factor,
            a1.cross(&a2) * factor,
        ]
    }
}

/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Reciprocal-lattice vector bookkeeping
//!
//! The finite G-vector set is generated from the real-space mesh: one
//! frequency per grid point and axis, in FFT ordering (`0..=n/2` positive,
//! then negative). The set is sorted by ascending |G| and records the index
//! of the zero ("DC") vector explicitly.

use super::lattice::Lattice;
use crate::atoms::Vector3D;

/// Finite ordered set of reciprocal-lattice vectors for a given mesh
#[derive(Debug, Clone)]
pub struct GVectorSet {
    miller: Vec<[i32; 3]>,
    cart: Vec<Vector3D>,
    dc_index: usize,
}

/// FFT frequency for grid index `i` of an axis with `n` points
fn frequency(i: usize, n: usize) -> i32 {
    if i <= n / 2 {
        i as i32
    } else {
        i as i32 - n as i32
    }
}

impl GVectorSet {
    /// Generate the G-vector set for a lattice and real-space mesh shape
    pub fn new(lattice: &Lattice, shape: [usize; 3]) -> Self {
        let [b1, b2, b3] = lattice.reciprocal();
        let [n1, n2, n3] = shape;

        let mut miller = Vec::with_capacity(n1 * n2 * n3);
        for i in 0..n1 {
            for j in 0..n2 {
                for k in 0..n3 {
                    miller.push([frequency(i, n1), frequency(j, n2), frequency(k, n3)]);
                }
            }
        }

        // order by |G|; the stable sort keeps the zero vector first among
        // any norm ties
        let norm_of = |m: &[i32; 3]| -> f64 {
            (b1 * m[0] as f64 + b2 * m[1] as f64 + b3 * m[2] as f64).norm()
        };
        miller.sort_by(|a, b| {
            norm_of(a)
                .partial_cmp(&norm_of(b))
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let cart: Vec<Vector3D> = miller
            .iter()
            .map(|m| b1 * m[0] as f64 + b2 * m[1] as f64 + b3 * m[2] as f64)
            .collect();

        let dc_index = miller
            .iter()
            .position(|m| *m == [0, 0, 0])
            .unwrap_or(0);

        Self {
            miller,
            cart,
            dc_index,
        }
    }

    /// Miller index triples, in storage order
    pub fn miller(&self) -> &[[i32; 3]] {
        &self.miller
    }

    /// Cartesian reciprocal vectors, in storage order
    pub fn cart(&self) -> &[Vector3D] {
        &self.cart
    }

    /// Index of the zero ("DC") reciprocal vector
    pub fn dc_index(&self) -> usize {
        self.dc_index
    }

    /// Number of reciprocal vectors in the set
    pub fn len(&self) -> usize {
        self.miller.len()
    }

    /// Whether the set is empty
    pub fn is_empty(&self) -> bool {
        self.miller.is_empty()
    }
}

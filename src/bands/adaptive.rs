/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Adaptive band-count policy
//!
//! Tracks the occupation cutoff so that every physically occupied state is
//! always converged, and extends the computed set past it: at least the
//! margin of three extra bands, and far enough that a minimum eigenvalue
//! gap separates the converged bands from the first band left out.

use super::fixed::default_n_bands_converge;
use super::{BandCounts, ScfSnapshot, CONVERGE_MARGIN};
use crate::model::Model;
use serde::{Deserialize, Serialize};

/// Default occupation magnitude below which a band counts as empty
pub const DEFAULT_OCCUPATION_THRESHOLD: f64 = 1e-3;

/// Default minimum eigenvalue gap kept past the converged set
pub const DEFAULT_GAP_MIN: f64 = 1e-3;

/// Band-count policy that follows the occupation numbers
///
/// The configured values are a floor, never a ceiling: the returned
/// converged count can only grow past `n_bands_converge` when occupations
/// demand it, and the computed count keeps the gap and margin rules on top
/// of that. The configuration itself is frozen; per-call outputs are
/// derived values.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AdaptiveBands {
    n_bands_converge: usize,
    n_bands_compute: usize,
    occupation_threshold: f64,
    gap_min: f64,
}

impl AdaptiveBands {
    /// Create an adaptive policy with the default thresholds
    ///
    /// The computed count is raised to the converged count if it would
    /// undercut it.
    pub fn new(n_bands_converge: usize, n_bands_compute: usize) -> Self {
        Self {
            n_bands_converge,
            n_bands_compute: n_bands_compute.max(n_bands_converge),
            occupation_threshold: DEFAULT_OCCUPATION_THRESHOLD,
            gap_min: DEFAULT_GAP_MIN,
        }
    }

    /// Default adaptive policy for a model
    ///
    /// Uses the same converged-band default as [`super::FixedBands`], with
    /// three extra computed bands.
    pub fn from_model(model: &Model) -> Self {
        let n_bands_converge =
            default_n_bands_converge(model, super::fixed::DEFAULT_TEMPERATURE_FACTOR);
        Self::new(n_bands_converge, n_bands_converge + CONVERGE_MARGIN)
    }

    /// Set the occupation threshold, a magnitude in (0, 1)
    pub fn with_occupation_threshold(mut self, occupation_threshold: f64) -> Self {
        self.occupation_threshold = occupation_threshold;
        self
    }

    /// Set the minimum eigenvalue gap, strictly positive
    pub fn with_gap_min(mut self, gap_min: f64) -> Self {
        self.gap_min = gap_min;
        self
    }

    /// The configured converged-band floor
    pub fn n_bands_converge(&self) -> usize {
        self.n_bands_converge
    }

    /// The configured computed-band floor
    pub fn n_bands_compute(&self) -> usize {
        self.n_bands_compute
    }

    /// The occupation threshold
    pub fn occupation_threshold(&self) -> f64 {
        self.occupation_threshold
    }

    /// The minimum eigenvalue gap
    pub fn gap_min(&self) -> f64 {
        self.gap_min
    }

    pub(super) fn determine(&self, snapshot: &ScfSnapshot) -> BandCounts {
        match (&snapshot.occupations, &snapshot.eigenvalues) {
            (Some(occupations), Some(eigenvalues)) => {
                self.determine_from_data(occupations, eigenvalues, snapshot.block_sizes.as_deref())
            }
            _ => self.determine_without_data(snapshot.block_sizes.as_deref()),
        }
    }

    /// First-call branch: no occupations or eigenvalues exist yet
    ///
    /// The converged count is widened to the midpoint of the configured
    /// pair for this call only; the widened value is returned, not stored,
    /// so later calls start again from the configured floor.
    fn determine_without_data(&self, block_sizes: Option<&[usize]>) -> BandCounts {
        let n_bands_compute = match block_sizes {
            Some(sizes) => self.n_bands_compute.max(max_or_zero(sizes)),
            None => self.n_bands_compute,
        };
        let n_bands_converge = (self.n_bands_converge + self.n_bands_compute) / 2;
        BandCounts {
            n_bands_converge,
            n_bands_compute,
        }
    }

    fn determine_from_data(
        &self,
        occupations: &[Vec<f64>],
        eigenvalues: &[Vec<f64>],
        block_sizes: Option<&[usize]>,
    ) -> BandCounts {
        // last band (1-based) still occupied above the threshold, maximized
        // over k-points; a k-point with no occupied band at all counts as
        // fully occupied (sentinel len + 1)
        let n_bands_occ = occupations
            .iter()
            .map(|occ_k| {
                occ_k
                    .iter()
                    .rposition(|occ| occ.abs() >= self.occupation_threshold)
                    .map_or(occ_k.len() + 1, |i| i + 1)
            })
            .fold(0, usize::max);
        let n_bands_converge = self.n_bands_converge.max(n_bands_occ);

        // last band within gap_min of the highest converged eigenvalue; a
        // k-point with fewer eigenvalues than the converged count extends
        // to its end (sentinel len + 1)
        let n_bands_compute_gap = eigenvalues
            .iter()
            .map(|eig_k| {
                if n_bands_converge > eig_k.len() {
                    eig_k.len() + 1
                } else {
                    let ceiling = eig_k[n_bands_converge - 1] + self.gap_min;
                    eig_k
                        .iter()
                        .rposition(|eig| *eig <= ceiling)
                        .map_or(eig_k.len() + 1, |i| i + 1)
                }
            })
            .fold(0, usize::max);

        let mut n_bands_compute = self
            .n_bands_compute
            .max(n_bands_compute_gap)
            .max(n_bands_converge + CONVERGE_MARGIN);
        if let Some(sizes) = block_sizes {
            n_bands_compute = n_bands_compute.max(max_or_zero(sizes));
        }

        BandCounts {
            n_bands_converge,
            n_bands_compute,
        }
    }
}

fn max_or_zero(values: &[usize]) -> usize {
    values.iter().copied().fold(0, usize::max)
}

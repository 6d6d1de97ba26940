/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Fixed band-count policy

use super::{BandCounts, CONVERGE_MARGIN};
use crate::model::Model;
use serde::{Deserialize, Serialize};

/// Multiplier applied to the minimum band count at finite temperature
pub const DEFAULT_TEMPERATURE_FACTOR: f64 = 1.20;

/// Band-count policy returning the same pair on every iteration
///
/// The pair is frozen at construction; the SCF snapshot is ignored
/// entirely, so repeated calls are idempotent by construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixedBands {
    n_bands_converge: usize,
    n_bands_compute: usize,
}

impl FixedBands {
    /// Create a fixed policy from an explicit pair
    ///
    /// The computed count is raised to the converged count if it would
    /// undercut it.
    pub fn new(n_bands_converge: usize, n_bands_compute: usize) -> Self {
        Self {
            n_bands_converge,
            n_bands_compute: n_bands_compute.max(n_bands_converge),
        }
    }

    /// Default policy for a model, with the default temperature factor
    ///
    /// `n_bands_converge = ceil(min_bands_required × factor)` where the
    /// factor is 1 at exactly zero temperature and
    /// [`DEFAULT_TEMPERATURE_FACTOR`] otherwise;
    /// `n_bands_compute = n_bands_converge + 3`.
    pub fn from_model(model: &Model) -> Self {
        Self::from_model_with_factor(model, DEFAULT_TEMPERATURE_FACTOR)
    }

    /// Default policy for a model with a custom finite-temperature factor
    pub fn from_model_with_factor(model: &Model, temperature_factor: f64) -> Self {
        let n_bands_converge = default_n_bands_converge(model, temperature_factor);
        Self::new(n_bands_converge, n_bands_converge + CONVERGE_MARGIN)
    }

    /// The frozen converged count
    pub fn n_bands_converge(&self) -> usize {
        self.n_bands_converge
    }

    /// The frozen computed count
    pub fn n_bands_compute(&self) -> usize {
        self.n_bands_compute
    }

    pub(super) fn counts(&self) -> BandCounts {
        BandCounts {
            n_bands_converge: self.n_bands_converge,
            n_bands_compute: self.n_bands_compute,
        }
    }
}

/// Converged-band default shared by both policies
pub(super) fn default_n_bands_converge(model: &Model, temperature_factor: f64) -> usize {
    let factor = if model.temperature() == 0.0 {
        1.0
    } else {
        temperature_factor
    };
    (model.min_bands_required() as f64 * factor).ceil() as usize
}

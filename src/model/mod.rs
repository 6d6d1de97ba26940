/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical model parameters consumed by the band-count policies

mod errors;

pub use errors::{ModelError, Result};

use serde::{Deserialize, Serialize};

/// Electron count, spin treatment and temperature of the modeled system
///
/// Validated at construction and read-only afterwards. The band-count
/// policies derive their default sizes from these parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    n_electrons: f64,
    n_spin_components: usize,
    temperature: f64,
    max_occupancy: f64,
}

impl Model {
    /// Create a model
    ///
    /// The per-orbital maximum occupancy is derived from the spin treatment:
    /// 2 electrons per orbital without spin polarization, 1 with two spin
    /// components. Use [`Model::with_max_occupancy`] to override.
    ///
    /// # Arguments
    ///
    /// * `n_electrons` - Number of electrons in the unit cell
    /// * `n_spin_components` - Number of spin components (1 or 2)
    /// * `temperature` - Smearing temperature, zero or positive
    ///
    /// # Errors
    ///
    /// Returns a [`ModelError`] if any parameter is out of range.
    pub fn new(n_electrons: f64, n_spin_components: usize, temperature: f64) -> Result<Self> {
        if n_electrons <= 0.0 || n_electrons.is_nan() {
            return Err(ModelError::NonPositiveElectronCount(n_electrons));
        }
        if n_spin_components == 0 {
            return Err(ModelError::InvalidSpinComponents(n_spin_components));
        }
        if temperature < 0.0 || temperature.is_nan() {
            return Err(ModelError::NegativeTemperature(temperature));
        }
        let max_occupancy = if n_spin_components >= 2 { 1.0 } else { 2.0 };
        Ok(Self {
            n_electrons,
            n_spin_components,
            temperature,
            max_occupancy,
        })
    }

    /// Override the per-orbital maximum occupancy
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::NonPositiveOccupancy`] if `max_occupancy` is not
    /// positive.
    pub fn with_max_occupancy(mut self, max_occupancy: f64) -> Result<Self> {
        if max_occupancy <= 0.0 || max_occupancy.is_nan() {
            return Err(ModelError::NonPositiveOccupancy(max_occupancy));
        }
        self.max_occupancy = max_occupancy;
        Ok(self)
    }

    /// Number of electrons in the unit cell
    pub fn n_electrons(&self) -> f64 {
        self.n_electrons
    }

    /// Number of spin components
    pub fn n_spin_components(&self) -> usize {
        self.n_spin_components
    }

    /// Smearing temperature
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Maximum occupancy of a single orbital
    pub fn max_occupancy(&self) -> f64 {
        self.max_occupancy
    }

    /// Minimum number of bands able to hold all electrons
    ///
    /// `ceil(n_electrons / (n_spin_components × max_occupancy))`
    pub fn min_bands_required(&self) -> usize {
        let capacity = self.n_spin_components as f64 * self.max_occupancy;
        (self.n_electrons / capacity).ceil() as usize
    }
}

/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Local potential construction
//!
//! Assembles the reciprocal-space potential as a sum of per-species form
//! factors weighted by structure factors over the atomic sites, transforms
//! it to the real-space grid, and validates that the result is real.

use super::errors::{PotentialError, Result};
use super::form_factor::{FormFactor, FormFactorTable, SpeciesParameters};
use super::local::LocalPotential;
use crate::atoms::{AtomicPositions, Vector3D};
use crate::basis::PlaneWaveBasis;
use crate::utils::constants::FOUR_PI;
use log::debug;
use num_complex::Complex64;
use rayon::prelude::*;
use std::sync::Arc;

/// Multiple of machine epsilon tolerated as imaginary residue after the
/// reciprocal→real transform
const REALNESS_TOLERANCE_FACTOR: f64 = 100.0;

/// Builder for [`LocalPotential`] fields
///
/// Positions are taken as fractional coordinates by default and converted
/// through the lattice-vector matrix; the compensating-background switch
/// zeroes the DC coefficient so that charged-species sums stay well-defined
/// under periodic boundary conditions.
#[derive(Debug, Clone)]
pub struct LocalPotentialBuilder {
    coords_are_cartesian: bool,
    compensating_background: bool,
}

impl Default for LocalPotentialBuilder {
    fn default() -> Self {
        Self {
            coords_are_cartesian: false,
            compensating_background: true,
        }
    }
}

impl LocalPotentialBuilder {
    /// Create a builder with the default settings
    pub fn new() -> Self {
        Self::default()
    }

    /// Declare whether positions are already Cartesian
    pub fn set_cartesian_coordinates(&mut self, coords_are_cartesian: bool) -> &mut Self {
        self.coords_are_cartesian = coords_are_cartesian;
        self
    }

    /// Enable or disable the compensating charge background
    pub fn set_compensating_background(&mut self, compensating_background: bool) -> &mut Self {
        self.compensating_background = compensating_background;
        self
    }

    /// Compute the reciprocal-space potential coefficients
    ///
    /// For every reciprocal vector G of the basis:
    ///
    /// `value(G) = Σ_species Σ_R (4π/Ω) × f_species(G, params) × exp(i G·R)`
    ///
    /// with Ω the unit-cell volume. The per-G terms are independent and are
    /// evaluated in parallel. With the compensating background enabled the
    /// coefficient at the DC vector is zeroed, whatever the form factors
    /// returned there.
    ///
    /// # Errors
    ///
    /// Returns [`PotentialError::Configuration`] if any species in
    /// `positions` has no entry in `factors`; no Fourier work is done in
    /// that case.
    pub fn fourier_coefficients(
        &self,
        basis: &PlaneWaveBasis,
        positions: &AtomicPositions,
        factors: &FormFactorTable,
        params: Option<&SpeciesParameters>,
    ) -> Result<Vec<Complex64>> {
        // resolve every species before touching any reciprocal vector
        let mut resolved: Vec<(&dyn FormFactor, Option<&[f64]>, Vec<Vector3D>)> =
            Vec::with_capacity(positions.n_species());
        for (species, sites) in positions.iter() {
            let factor = factors.get(species).ok_or_else(|| {
                PotentialError::Configuration(format!(
                    "no form factor registered for species '{species}'"
                ))
            })?;
            let species_params = params
                .and_then(|table| table.get(species))
                .map(|values| values.as_slice());
            let cartesian: Vec<Vector3D> = if self.coords_are_cartesian {
                sites.to_vec()
            } else {
                sites
                    .iter()
                    .map(|site| basis.lattice().to_cartesian(site))
                    .collect()
            };
            resolved.push((factor, species_params, cartesian));
        }

        let prefactor = FOUR_PI / basis.volume();
        let mut coefficients: Vec<Complex64> = basis
            .gvectors()
            .cart()
            .par_iter()
            .map(|g| {
                let mut total = Complex64::new(0.0, 0.0);
                for (factor, species_params, sites) in &resolved {
                    let form = factor.evaluate(g, *species_params);
                    let structure: Complex64 = sites
                        .iter()
                        .map(|site| Complex64::from_polar(1.0, g.dot(site)))
                        .sum();
                    total += form * structure;
                }
                total * prefactor
            })
            .collect();

        if self.compensating_background {
            coefficients[basis.dc_index()] = Complex64::new(0.0, 0.0);
        }
        Ok(coefficients)
    }

    /// Build the real-space local potential
    ///
    /// Transforms the reciprocal coefficients to the real-space grid,
    /// checks that the imaginary residue stays below
    /// `100 × ε` relative to the field magnitude, discards it, and wraps
    /// the real field with a shared reference to the basis.
    ///
    /// # Errors
    ///
    /// [`PotentialError::Configuration`] for a species without form factor,
    /// [`PotentialError::PhysicsInconsistency`] if the field fails the
    /// realness check.
    pub fn build(
        &self,
        basis: &Arc<PlaneWaveBasis>,
        positions: &AtomicPositions,
        factors: &FormFactorTable,
        params: Option<&SpeciesParameters>,
    ) -> Result<LocalPotential> {
        let coefficients = self.fourier_coefficients(basis, positions, factors, params)?;
        let field = basis.g_to_r(&coefficients)?;

        let max_imag = field.iter().fold(0.0f64, |acc, v| acc.max(v.im.abs()));
        let scale = field
            .iter()
            .fold(0.0f64, |acc, v| acc.max(v.re.abs()))
            .max(1.0);
        let tolerance = REALNESS_TOLERANCE_FACTOR * f64::EPSILON * scale;
        if max_imag > tolerance {
            return Err(PotentialError::PhysicsInconsistency(format!(
                "local potential has imaginary residue {max_imag:.3e} above tolerance \
                 {tolerance:.3e}; form factors are not Hermitian"
            )));
        }
        debug!(
            "local potential built: {} G-vectors, {} sites, imaginary residue {:.3e}",
            coefficients.len(),
            positions.n_sites(),
            max_imag
        );

        let values = field.mapv(|v| v.re);
        Ok(LocalPotential::new_unchecked(basis.clone(), values))
    }
}

/// Build a local potential with the default builder settings
///
/// Fractional coordinates, compensating background enabled.
pub fn build_local_potential(
    basis: &Arc<PlaneWaveBasis>,
    positions: &AtomicPositions,
    factors: &FormFactorTable,
) -> Result<LocalPotential> {
    LocalPotentialBuilder::new().build(basis, positions, factors, None)
}

/// Build a local potential with one form factor shared by all species
///
/// Pure argument reshaping around [`LocalPotentialBuilder::build`]; combined
/// with [`AtomicPositions::single`] this also covers the
/// single-unnamed-species case.
pub fn build_local_potential_shared(
    basis: &Arc<PlaneWaveBasis>,
    positions: &AtomicPositions,
    factor: Arc<dyn FormFactor>,
) -> Result<LocalPotential> {
    let mut table = FormFactorTable::new();
    for species in positions.species() {
        table.insert_shared(species.clone(), factor.clone());
    }
    LocalPotentialBuilder::new().build(basis, positions, &table, None)
}

/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Fourier-space form factors
//!
//! A form factor is the per-species analytic contribution to the local
//! potential, evaluated independently at each reciprocal vector. The
//! builder multiplies it by the structure factor of the species' atomic
//! sites, so a form factor never sees positions.

use crate::atoms::{Species, Vector3D};
use num_complex::Complex64;
use std::collections::HashMap;
use std::sync::Arc;

/// Optional per-species parameter sets passed through to the form factors
pub type SpeciesParameters = HashMap<Species, Vec<f64>>;

/// A pure function from reciprocal vector (and optional parameters) to a
/// complex Fourier coefficient
///
/// For the built real-space potential to be real, the factor must be
/// Hermitian: `evaluate(-G) == conj(evaluate(G))`. Real even functions of
/// |G| satisfy this trivially. Violations are caught by the builder's
/// realness check.
pub trait FormFactor: Send + Sync {
    /// Evaluate the factor at one reciprocal vector
    fn evaluate(&self, g: &Vector3D, params: Option<&[f64]>) -> Complex64;
}

impl<F> FormFactor for F
where
    F: Fn(&Vector3D, Option<&[f64]>) -> Complex64 + Send + Sync,
{
    fn evaluate(&self, g: &Vector3D, params: Option<&[f64]>) -> Complex64 {
        self(g, params)
    }
}

/// Ordered mapping from species to its form factor
///
/// Entries are shared (`Arc`), so one factor can serve several species.
#[derive(Clone, Default)]
pub struct FormFactorTable {
    entries: Vec<(Species, Arc<dyn FormFactor>)>,
}

impl FormFactorTable {
    /// Create an empty table
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a form factor for a species, replacing any existing entry
    pub fn insert<F: FormFactor + 'static>(&mut self, species: Species, factor: F) {
        self.insert_shared(species, Arc::new(factor));
    }

    /// Register an already-shared form factor for a species
    pub fn insert_shared(&mut self, species: Species, factor: Arc<dyn FormFactor>) {
        match self.entries.iter_mut().find(|(sp, _)| *sp == species) {
            Some((_, existing)) => *existing = factor,
            None => self.entries.push((species, factor)),
        }
    }

    /// The form factor registered for a species, if any
    pub fn get(&self, species: &Species) -> Option<&dyn FormFactor> {
        self.entries
            .iter()
            .find(|(sp, _)| sp == species)
            .map(|(_, factor)| factor.as_ref())
    }

    /// Number of registered species
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the table is empty
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl std::fmt::Debug for FormFactorTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let species: Vec<&str> = self.entries.iter().map(|(sp, _)| sp.label()).collect();
        f.debug_struct("FormFactorTable").field("species", &species).finish()
    }
}

/// Bare Coulomb attraction of a point charge `z`
///
/// `f(G) = -z / |G|²`. The G = 0 term diverges; its contribution is
/// cancelled by the compensating charge background, so the factor returns
/// zero there and the builder zeroes the DC coefficient as well.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoulombFormFactor {
    /// Charge of the species in units of e
    pub z: f64,
}

impl CoulombFormFactor {
    /// Create a Coulomb factor for charge `z`
    pub fn new(z: f64) -> Self {
        Self { z }
    }
}

impl FormFactor for CoulombFormFactor {
    fn evaluate(&self, g: &Vector3D, _params: Option<&[f64]>) -> Complex64 {
        let g2 = g.norm_squared();
        if g2 < 1e-14 {
            Complex64::new(0.0, 0.0)
        } else {
            Complex64::new(-self.z / g2, 0.0)
        }
    }
}

/// Gaussian potential well
///
/// `f(G) = amplitude × exp(-|G|² width² / 2)`, a real even function of G
/// and therefore Hermitian by construction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GaussianFormFactor {
    /// Depth of the well
    pub amplitude: f64,
    /// Real-space width of the Gaussian
    pub width: f64,
}

impl GaussianFormFactor {
    /// Create a Gaussian factor
    pub fn new(amplitude: f64, width: f64) -> Self {
        Self { amplitude, width }
    }
}

impl FormFactor for GaussianFormFactor {
    fn evaluate(&self, g: &Vector3D, _params: Option<&[f64]>) -> Complex64 {
        let exponent = -g.norm_squared() * self.width * self.width / 2.0;
        Complex64::new(self.amplitude * exponent.exp(), 0.0)
    }
}

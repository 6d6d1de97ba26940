/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Physical and numerical constants used throughout the crate
//!
//! Quantities are in Hartree atomic units unless noted otherwise.

use std::f64::consts::PI;

/// 2π, the reciprocal-lattice duality constant
pub const TWO_PI: f64 = 2.0 * PI;

/// 4π, the spherical-Hankel-transform normalization shared by all
/// Fourier-space potential contributions
pub const FOUR_PI: f64 = 4.0 * PI;

/// Bohr radius in Angstroms
pub const BOHR_TO_ANGSTROM: f64 = 0.529177210903;

/// Conversion from Hartree to eV
pub const HARTREE_TO_EV: f64 = 27.211386245988;

/// Conversion from eV to Hartree
pub const EV_TO_HARTREE: f64 = 1.0 / HARTREE_TO_EV;

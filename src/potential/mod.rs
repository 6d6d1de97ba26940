/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Local potential construction and application
//!
//! The local potential is assembled once per geometry (or whenever atomic
//! positions change) from per-species Fourier-space form factors summed
//! with structure factors over the atomic sites, then transformed to the
//! real-space grid. The resulting [`LocalPotential`] is immutable and its
//! pointwise [`LocalPotential::apply`] is consumed by the Hamiltonian on
//! every eigensolver matrix-vector product.

mod builder;
mod errors;
mod form_factor;
mod local;

pub use builder::{build_local_potential, build_local_potential_shared, LocalPotentialBuilder};
pub use errors::{PotentialError, Result};
pub use form_factor::{
    CoulombFormFactor, FormFactor, FormFactorTable, GaussianFormFactor, SpeciesParameters,
};
pub use local::LocalPotential;

/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! # pwdft-rs
//!
//! Core numerical components for plane-wave density-functional-theory
//! calculations: adaptive band-count determination for self-consistent-field
//! (SCF) solvers and local potential construction from Fourier-space form
//! factors.
//!
//! The crate is a library surface consumed by an external SCF driver and
//! Hamiltonian assembly. It provides:
//!
//! - [`bands`]: policies that decide, at every SCF iteration, how many
//!   electronic bands to compute and how many to fully converge, from the
//!   latest occupation/eigenvalue snapshot.
//! - [`potential`]: assembly of a real-space local potential from per-species
//!   analytic Fourier-space contributions summed over atomic positions, with
//!   realness validation and a hot-path pointwise application.
//! - [`basis`]: the plane-wave basis collaborator — lattice, reciprocal
//!   vectors and the reciprocal↔real grid transform.
//!
//! The eigensolver, the SCF outer loop, the Hamiltonian builder and all I/O
//! live outside this crate.

pub mod atoms;
pub mod bands;
pub mod basis;
pub mod model;
pub mod potential;
pub mod utils;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

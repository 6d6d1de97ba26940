/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Band-count determination for SCF iterations
//!
//! At every iteration the SCF driver asks a [`BandCountPolicy`] how many
//! bands the eigensolver should compute and how many of them must be fully
//! converged. [`FixedBands`] always answers with the pair frozen at
//! construction; [`AdaptiveBands`] tracks the occupation cutoff and keeps a
//! safety margin of extra bands past it, so near-degenerate states at the
//! edge of the occupied set do not have to be re-converged from scratch on
//! the next iteration.
//!
//! Policies are stateless decision functions: the configured values are
//! frozen, per-iteration outputs are derived from the latest
//! [`ScfSnapshot`], and no call mutates the policy.

mod adaptive;
mod fixed;

pub use adaptive::{AdaptiveBands, DEFAULT_GAP_MIN, DEFAULT_OCCUPATION_THRESHOLD};
pub use fixed::{FixedBands, DEFAULT_TEMPERATURE_FACTOR};

use log::debug;
use serde::{Deserialize, Serialize};

/// Number of extra bands the eigensolver always gets past the converged set
pub(crate) const CONVERGE_MARGIN: usize = 3;

/// The band counts requested from the eigensolver for one SCF iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandCounts {
    /// Number of bands that must be fully converged
    pub n_bands_converge: usize,
    /// Number of bands to compute (≥ `n_bands_converge`)
    pub n_bands_compute: usize,
}

/// Read-only view of the SCF state consumed by the policies
///
/// All fields are optional: on the first SCF call no occupations or
/// eigenvalues exist yet, and wavefunctions may be absent independently.
/// When present, occupations are ordered descending and eigenvalues
/// ascending within each k-point, and the outer vectors run over k-points.
#[derive(Debug, Clone, Default)]
pub struct ScfSnapshot {
    /// Occupation numbers per k-point, descending
    pub occupations: Option<Vec<Vec<f64>>>,
    /// Eigenvalues per k-point, ascending
    pub eigenvalues: Option<Vec<Vec<f64>>>,
    /// Number of wavefunction columns currently held per k-point
    pub block_sizes: Option<Vec<usize>>,
}

impl ScfSnapshot {
    /// Snapshot with no data, as seen on the first SCF call
    pub fn empty() -> Self {
        Self::default()
    }

    /// Attach per-k-point occupation numbers
    pub fn with_occupations(mut self, occupations: Vec<Vec<f64>>) -> Self {
        self.occupations = Some(occupations);
        self
    }

    /// Attach per-k-point eigenvalues
    pub fn with_eigenvalues(mut self, eigenvalues: Vec<Vec<f64>>) -> Self {
        self.eigenvalues = Some(eigenvalues);
        self
    }

    /// Attach per-k-point wavefunction block sizes
    pub fn with_block_sizes(mut self, block_sizes: Vec<usize>) -> Self {
        self.block_sizes = Some(block_sizes);
        self
    }
}

/// Band-count strategy queried once per SCF iteration
///
/// A closed set of two behaviors, selected at configuration time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum BandCountPolicy {
    /// Always return the pair frozen at construction
    Fixed(FixedBands),
    /// Track occupations and eigenvalue gaps
    Adaptive(AdaptiveBands),
}

impl BandCountPolicy {
    /// Decide the band counts for the current iteration
    ///
    /// Defined for every structurally valid snapshot; absent data degrades
    /// to the configured values. Never fails.
    pub fn determine_band_counts(&self, snapshot: &ScfSnapshot) -> BandCounts {
        let counts = match self {
            BandCountPolicy::Fixed(policy) => policy.counts(),
            BandCountPolicy::Adaptive(policy) => policy.determine(snapshot),
        };
        debug!(
            "band counts: converge {} compute {}",
            counts.n_bands_converge, counts.n_bands_compute
        );
        counts
    }
}

impl From<FixedBands> for BandCountPolicy {
    fn from(policy: FixedBands) -> Self {
        BandCountPolicy::Fixed(policy)
    }
}

impl From<AdaptiveBands> for BandCountPolicy {
    fn from(policy: AdaptiveBands) -> Self {
        BandCountPolicy::Adaptive(policy)
    }
}

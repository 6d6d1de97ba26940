/*
MIT License

Copyright (c) 2025 Ameyanagi
*/

//! Species → atomic sites association

use super::{Species, Vector3D};

/// Ordered mapping from species to the positions of its atoms in the unit
/// cell
///
/// Positions may be held in fractional or Cartesian coordinates; the
/// convention is declared to the potential builder, not stored here.
/// Species are iterated in insertion order, so identical inputs produce
/// identical potential builds.
#[derive(Debug, Clone, Default)]
pub struct AtomicPositions {
    entries: Vec<(Species, Vec<Vector3D>)>,
}

impl AtomicPositions {
    /// Create an empty position set
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a position set holding a single anonymous species
    ///
    /// Convenience for systems where every atom shares one form factor.
    pub fn single(sites: Vec<Vector3D>) -> Self {
        let mut positions = Self::new();
        positions.insert(Species::new("X"), sites);
        positions
    }

    /// Add sites for a species, extending any existing entry
    pub fn insert(&mut self, species: Species, sites: Vec<Vector3D>) {
        match self.entries.iter_mut().find(|(sp, _)| *sp == species) {
            Some((_, existing)) => existing.extend(sites),
            None => self.entries.push((species, sites)),
        }
    }

    /// Sites of one species, if present
    pub fn sites(&self, species: &Species) -> Option<&[Vector3D]> {
        self.entries
            .iter()
            .find(|(sp, _)| sp == species)
            .map(|(_, sites)| sites.as_slice())
    }

    /// Iterate species and their sites in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&Species, &[Vector3D])> {
        self.entries.iter().map(|(sp, sites)| (sp, sites.as_slice()))
    }

    /// Iterate the species in insertion order
    pub fn species(&self) -> impl Iterator<Item = &Species> {
        self.entries.iter().map(|(sp, _)| sp)
    }

    /// Number of distinct species
    pub fn n_species(&self) -> usize {
        self.entries.len()
    }

    /// Total number of atomic sites across all species
    pub fn n_sites(&self) -> usize {
        self.entries.iter().map(|(_, sites)| sites.len()).sum()
    }

    /// Whether the set holds no atoms at all
    pub fn is_empty(&self) -> bool {
        self.n_sites() == 0
    }
}

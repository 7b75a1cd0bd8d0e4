use std::collections::HashMap;
use std::fmt;

use super::{lattice_distance, Site, Symmetry};
use crate::error::FoldingError;

/// Why a chain is not a self-avoiding walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Defect {
    /// Monomers `index` and `index + 1` are not lattice neighbours.
    BrokenBond { index: usize },
    /// Two monomers sit on the same site.
    Overlap { first: usize, second: usize },
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Defect::BrokenBond { index } => write!(
                f,
                "monomers {} and {} are not at unit lattice distance",
                index,
                index + 1
            ),
            Defect::Overlap { first, second } => {
                write!(f, "monomers {} and {} occupy the same site", first, second)
            }
        }
    }
}

/// Lattice coordinates of every monomer of a chain, in sequence order.
///
/// A conformation is a value: moves build new conformations rather than
/// editing one in place.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Conformation {
    sites: Vec<Site>,
}

impl Conformation {
    pub fn new(sites: Vec<Site>) -> Self {
        Self { sites }
    }

    /// Straight chain along the x axis starting at the origin.
    pub fn linear(len: usize) -> Self {
        Self {
            sites: (0..len as i32).map(|x| Site::new(x, 0)).collect(),
        }
    }

    pub fn from_pairs(pairs: &[[i32; 2]]) -> Self {
        Self {
            sites: pairs.iter().map(|&[x, y]| Site::new(x, y)).collect(),
        }
    }

    pub fn to_pairs(&self) -> Vec<[i32; 2]> {
        self.sites.iter().map(|s| [s.x, s.y]).collect()
    }

    pub fn len(&self) -> usize {
        self.sites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sites.is_empty()
    }

    pub fn sites(&self) -> &[Site] {
        &self.sites
    }

    pub fn coordinates_of(&self, index: usize) -> Result<Site, FoldingError> {
        self.sites
            .get(index)
            .copied()
            .ok_or(FoldingError::IndexOutOfRange {
                index,
                len: self.sites.len(),
            })
    }

    /// Map from occupied site to monomer index.
    pub fn occupancy(&self) -> HashMap<Site, usize> {
        self.sites.iter().enumerate().map(|(i, s)| (*s, i)).collect()
    }

    /// Check the self-avoiding walk invariants in a single pass.
    pub fn validate(&self) -> Result<(), Defect> {
        let mut seen: HashMap<Site, usize> = HashMap::with_capacity(self.sites.len());
        for (i, site) in self.sites.iter().enumerate() {
            if i > 0 && lattice_distance(&self.sites[i - 1], site) != 1 {
                return Err(Defect::BrokenBond { index: i - 1 });
            }
            if let Some(&first) = seen.get(site) {
                return Err(Defect::Overlap { first, second: i });
            }
            seen.insert(*site, i);
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    pub fn translated(&self, offset: &Site) -> Self {
        Self {
            sites: self.sites.iter().map(|s| s + offset).collect(),
        }
    }

    /// Whole-chain image under a lattice symmetry about the origin.
    pub fn transformed(&self, symmetry: Symmetry) -> Self {
        Self {
            sites: self.sites.iter().map(|s| symmetry.apply(s)).collect(),
        }
    }

    /// Width and height of the bounding box, in lattice sites.
    pub fn bounding_box(&self) -> (i32, i32) {
        let (min_x, max_x) = min_max(self.sites.iter().map(|s| s.x));
        let (min_y, max_y) = min_max(self.sites.iter().map(|s| s.y));
        (max_x - min_x + 1, max_y - min_y + 1)
    }
}

fn min_max(values: impl Iterator<Item = i32>) -> (i32, i32) {
    values.fold((i32::MAX, i32::MIN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

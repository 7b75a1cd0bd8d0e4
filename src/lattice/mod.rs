//! Lattice module - square-lattice geometry of a chain.

mod conformation;
mod symmetry;

pub use conformation::{Conformation, Defect};
pub use symmetry::Symmetry;

use nalgebra::Vector2;

/// A site of the 2D square lattice.
pub type Site = Vector2<i32>;

/// Manhattan distance between two lattice sites.
#[inline]
pub fn lattice_distance(a: &Site, b: &Site) -> i32 {
    (a.x - b.x).abs() + (a.y - b.y).abs()
}

/// The four axis neighbours of a site.
pub fn neighbours(site: &Site) -> [Site; 4] {
    [
        Site::new(site.x + 1, site.y),
        Site::new(site.x - 1, site.y),
        Site::new(site.x, site.y + 1),
        Site::new(site.x, site.y - 1),
    ]
}

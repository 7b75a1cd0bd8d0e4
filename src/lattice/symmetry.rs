//! Point symmetries of the square lattice used by the move set.

use nalgebra::Matrix2;

use super::Site;

/// Rotations and reflections about the origin. Apply them to coordinates
/// taken relative to a pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// (x, y) -> (y, -x)
    Rotate90Clockwise,
    /// (x, y) -> (-y, x)
    Rotate90CounterClockwise,
    /// (x, y) -> (-x, -y)
    Rotate180,
    /// Reflection across the horizontal axis: (x, y) -> (x, -y)
    ReflectHorizontal,
    /// Reflection across the vertical axis: (x, y) -> (-x, y)
    ReflectVertical,
    /// Reflection across y = x: (x, y) -> (y, x)
    ReflectDiagonal,
    /// Reflection across y = -x: (x, y) -> (-y, -x)
    ReflectAntiDiagonal,
}

impl Symmetry {
    pub const ALL: [Symmetry; 7] = [
        Symmetry::Rotate90Clockwise,
        Symmetry::Rotate90CounterClockwise,
        Symmetry::Rotate180,
        Symmetry::ReflectHorizontal,
        Symmetry::ReflectVertical,
        Symmetry::ReflectDiagonal,
        Symmetry::ReflectAntiDiagonal,
    ];

    pub fn matrix(self) -> Matrix2<i32> {
        match self {
            Symmetry::Rotate90Clockwise => Matrix2::new(0, 1, -1, 0),
            Symmetry::Rotate90CounterClockwise => Matrix2::new(0, -1, 1, 0),
            Symmetry::Rotate180 => Matrix2::new(-1, 0, 0, -1),
            Symmetry::ReflectHorizontal => Matrix2::new(1, 0, 0, -1),
            Symmetry::ReflectVertical => Matrix2::new(-1, 0, 0, 1),
            Symmetry::ReflectDiagonal => Matrix2::new(0, 1, 1, 0),
            Symmetry::ReflectAntiDiagonal => Matrix2::new(0, -1, -1, 0),
        }
    }

    #[inline]
    pub fn apply(self, site: &Site) -> Site {
        self.matrix() * site
    }

    /// Apply the operation about `pivot` instead of the origin.
    #[inline]
    pub fn apply_about(self, pivot: &Site, site: &Site) -> Site {
        pivot + self.apply(&(site - pivot))
    }
}

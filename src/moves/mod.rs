//! Moves module - pivot moves on the tail of a lattice chain.
//!
//! A move picks a pivot monomer `p` in `1..=L-2`. Tail moves keep monomers
//! `0..=p` in place and rotate or reflect `p+1..L-1` about the pivot. The
//! diagonal move changes only the pivot, flipping it across the corner formed
//! by its two chain neighbours.

mod generator;

pub use generator::{MoveGenerator, Proposal, DEFAULT_MAX_ATTEMPTS};

use crate::lattice::{lattice_distance, Conformation, Symmetry};

/// The eight elementary moves, numbered 1 to 8.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Move {
    /// Codes 1-7: apply a lattice symmetry to the tail about the pivot.
    Tail(Symmetry),
    /// Code 8: move the pivot to the opposite corner of its bend.
    Diagonal,
}

impl Move {
    pub const COUNT: u8 = 8;

    pub fn from_code(code: u8) -> Option<Move> {
        match code {
            1..=7 => Some(Move::Tail(Symmetry::ALL[code as usize - 1])),
            8 => Some(Move::Diagonal),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Move::Tail(symmetry) => {
                // ALL has exactly seven entries, so the position always exists
                Symmetry::ALL.iter().position(|s| *s == symmetry).unwrap_or(0) as u8 + 1
            }
            Move::Diagonal => 8,
        }
    }

    /// Build the candidate produced by this move at `pivot`.
    ///
    /// Returns `None` when the move cannot change the chain: the pivot is an
    /// end monomer, or the diagonal move is attempted on a straight segment.
    /// The candidate is not checked for self-avoidance.
    pub fn apply(self, conformation: &Conformation, pivot: usize) -> Option<Conformation> {
        let len = conformation.len();
        if pivot == 0 || pivot + 1 >= len {
            return None;
        }
        let sites = conformation.sites();
        let center = sites[pivot];

        match self {
            Move::Tail(symmetry) => {
                let moved = sites[..=pivot]
                    .iter()
                    .copied()
                    .chain(sites[pivot + 1..].iter().map(|s| symmetry.apply_about(&center, s)))
                    .collect();
                Some(Conformation::new(moved))
            }
            Move::Diagonal => {
                let prev = sites[pivot - 1];
                let next = sites[pivot + 1];
                // a bend puts the two neighbours diagonally apart
                if lattice_distance(&prev, &next) != 2 || prev.x == next.x || prev.y == next.y {
                    return None;
                }
                let mut moved = sites.to_vec();
                moved[pivot] = prev + next - center;
                Some(Conformation::new(moved))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::Site;

    fn zigzag() -> Conformation {
        Conformation::from_pairs(&[[0, 0], [1, 0], [1, 1], [2, 1], [2, 2], [3, 2]])
    }

    #[test]
    fn test_codes_round_trip() {
        for code in 1..=Move::COUNT {
            assert_eq!(Move::from_code(code).unwrap().code(), code);
        }
        assert!(Move::from_code(0).is_none());
        assert!(Move::from_code(9).is_none());
    }

    #[test]
    fn test_end_monomers_are_not_pivots() {
        let c = Conformation::linear(5);
        for code in 1..=Move::COUNT {
            let m = Move::from_code(code).unwrap();
            assert!(m.apply(&c, 0).is_none());
            assert!(m.apply(&c, 4).is_none());
        }
    }

    #[test]
    fn test_rotation_of_linear_tail() {
        let c = Conformation::linear(5);
        let cw = Move::from_code(1).unwrap().apply(&c, 2).unwrap();
        assert_eq!(cw.to_pairs(), vec![[0, 0], [1, 0], [2, 0], [2, -1], [2, -2]]);
        let ccw = Move::from_code(2).unwrap().apply(&c, 2).unwrap();
        assert_eq!(ccw.to_pairs(), vec![[0, 0], [1, 0], [2, 0], [2, 1], [2, 2]]);
        assert!(cw.is_valid() && ccw.is_valid());
    }

    #[test]
    fn test_half_turn_folds_back_onto_head() {
        let c = Conformation::linear(5);
        let folded = Move::from_code(3).unwrap().apply(&c, 2).unwrap();
        assert_eq!(folded.coordinates_of(3).unwrap(), Site::new(1, 0));
        assert!(!folded.is_valid());
    }

    #[test]
    fn test_half_turn_twice_is_identity() {
        let c = zigzag();
        let half = Move::from_code(3).unwrap();
        for pivot in 1..c.len() - 1 {
            let once = half.apply(&c, pivot).unwrap();
            let twice = half.apply(&once, pivot).unwrap();
            assert_eq!(twice, c);
        }
    }

    #[test]
    fn test_reflections_about_pivot() {
        let c = Conformation::from_pairs(&[[0, 0], [1, 0], [1, 1], [2, 1]]);
        let expect = |code: u8| Move::from_code(code).unwrap().apply(&c, 1).unwrap().to_pairs();
        assert_eq!(expect(4), vec![[0, 0], [1, 0], [1, -1], [2, -1]]);
        assert_eq!(expect(5), vec![[0, 0], [1, 0], [1, 1], [0, 1]]);
        assert_eq!(expect(6), vec![[0, 0], [1, 0], [2, 0], [2, 1]]);
        assert_eq!(expect(7), vec![[0, 0], [1, 0], [0, 0], [0, -1]]);
    }

    #[test]
    fn test_head_is_never_moved() {
        let c = zigzag();
        for pivot in 1..c.len() - 1 {
            for code in 1..=7 {
                let moved = Move::from_code(code).unwrap().apply(&c, pivot).unwrap();
                assert_eq!(&moved.sites()[..=pivot], &c.sites()[..=pivot]);
            }
        }
    }

    #[test]
    fn test_diagonal_flips_corner() {
        let c = zigzag();
        let flipped = Move::Diagonal.apply(&c, 1).unwrap();
        assert_eq!(flipped.to_pairs(), vec![[0, 0], [0, 1], [1, 1], [2, 1], [2, 2], [3, 2]]);
        assert!(flipped.is_valid());
    }

    #[test]
    fn test_diagonal_on_straight_segment_is_noop() {
        let c = Conformation::linear(6);
        for pivot in 1..5 {
            assert!(Move::Diagonal.apply(&c, pivot).is_none());
        }
    }
}

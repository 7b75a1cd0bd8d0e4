//! Energy module - HP contact energy and compactness of a conformation.
//!
//! Both quantities count *topological contacts*: pairs of monomers that are
//! lattice neighbours without being neighbours along the chain.

use crate::lattice::{neighbours, Conformation};
use crate::sequence::HpSequence;

/// Contact energy unit (ε). Each H-H topological contact contributes -ε.
pub const CONTACT_ENERGY: f64 = 1.0;

/// Visit every topological contact (i, j) with i < j exactly once.
fn for_each_contact(conformation: &Conformation, mut visit: impl FnMut(usize, usize)) {
    let occupancy = conformation.occupancy();
    for (i, site) in conformation.sites().iter().enumerate() {
        for n in neighbours(site) {
            if let Some(&j) = occupancy.get(&n) {
                if j > i + 1 {
                    visit(i, j);
                }
            }
        }
    }
}

/// Free energy of the HP model: minus the number of H-H topological contacts.
/// `sequence` and `conformation` must have the same length.
pub fn hp_energy(sequence: &HpSequence, conformation: &Conformation) -> f64 {
    let residues = sequence.residues();
    let mut count = 0usize;
    for_each_contact(conformation, |i, j| {
        if residues[i].is_hydrophobic() && residues[j].is_hydrophobic() {
            count += 1;
        }
    });
    -CONTACT_ENERGY * count as f64
}

/// Number of topological contacts regardless of residue type.
pub fn contact_count(conformation: &Conformation) -> usize {
    let mut count = 0usize;
    for_each_contact(conformation, |_, _| count += 1);
    count
}

/// Topological contacts normalised by `L + 1`, an upper bound for a
/// self-avoiding walk of `L` monomers on the square lattice (interior
/// monomers have two free neighbours, the ends three). Lies in `[0, 1)`.
pub fn compactness(conformation: &Conformation) -> f64 {
    contact_count(conformation) as f64 / (conformation.len() + 1) as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{Site, Symmetry};
    use approx::assert_relative_eq;

    const SEQ: &str = "HPPHHPHPHPHHP";

    #[rustfmt::skip]
    fn hairpin() -> Conformation {
        Conformation::from_pairs(&[
            [0, 0], [0, 1], [1, 1], [1, 2], [1, 3], [2, 3], [2, 2],
            [2, 1], [2, 0], [2, -1], [1, -1], [0, -1], [-1, -1],
        ])
    }

    #[rustfmt::skip]
    fn open_hairpin() -> Conformation {
        Conformation::from_pairs(&[
            [0, 0], [0, 1], [1, 1], [1, 2], [1, 3], [2, 3], [2, 2],
            [2, 1], [2, 0], [2, -1], [2, -2], [2, -3], [2, -4],
        ])
    }

    #[test]
    fn test_energy_of_known_structures() {
        let seq: HpSequence = SEQ.parse().unwrap();
        assert_relative_eq!(hp_energy(&seq, &hairpin()), -2.0);
        assert_relative_eq!(hp_energy(&seq, &open_hairpin()), -1.0);
    }

    #[test]
    fn test_linear_chain_has_no_contacts() {
        let seq: HpSequence = "HPHPHPHPPPPHHHHPPP".parse().unwrap();
        let linear = Conformation::linear(seq.len());
        assert_relative_eq!(hp_energy(&seq, &linear), 0.0);
        assert_eq!(contact_count(&linear), 0);
        assert_relative_eq!(compactness(&linear), 0.0);
    }

    #[test]
    fn test_all_polar_chain_has_zero_energy() {
        let seq: HpSequence = "PPPPPPPPPPPPP".parse().unwrap();
        assert_relative_eq!(hp_energy(&seq, &hairpin()), 0.0);
        assert!(contact_count(&hairpin()) > 0);
    }

    #[test]
    fn test_square_of_four() {
        // the ends of a U-turn touch
        let seq: HpSequence = "HPPH".parse().unwrap();
        let u = Conformation::from_pairs(&[[0, 0], [1, 0], [1, 1], [0, 1]]);
        assert_relative_eq!(hp_energy(&seq, &u), -1.0);
        assert_eq!(contact_count(&u), 1);
        assert_relative_eq!(compactness(&u), 0.2);
    }

    #[test]
    fn test_energy_invariant_under_global_transforms() {
        let seq: HpSequence = SEQ.parse().unwrap();
        for c in [hairpin(), open_hairpin()] {
            let e = hp_energy(&seq, &c);
            assert_relative_eq!(hp_energy(&seq, &c.translated(&Site::new(13, -4))), e);
            for sym in Symmetry::ALL {
                assert_relative_eq!(hp_energy(&seq, &c.transformed(sym)), e);
                assert_eq!(contact_count(&c.transformed(sym)), contact_count(&c));
            }
        }
    }

    #[test]
    fn test_compactness_orders_folded_above_open() {
        assert!(compactness(&hairpin()) > compactness(&open_hairpin()));
        assert!(compactness(&open_hairpin()) > compactness(&Conformation::linear(13)));
        assert!(compactness(&hairpin()) < 1.0);
    }
}

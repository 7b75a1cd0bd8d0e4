//! HP sequences and the reduction from the 20-letter amino-acid alphabet.

use std::fmt;
use std::str::FromStr;

use crate::error::FoldingError;

const POLAR: &str = "RNDQEHKST";
const HYDROPHOBIC: &str = "ACGILMFPWYV";

/// Monomer type of the HP model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Residue {
    H,
    P,
}

impl Residue {
    pub fn is_hydrophobic(self) -> bool {
        self == Residue::H
    }

    pub fn symbol(self) -> char {
        match self {
            Residue::H => 'H',
            Residue::P => 'P',
        }
    }
}

/// Immutable H/P sequence. Index `i` is the type of monomer `i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HpSequence {
    residues: Vec<Residue>,
}

impl HpSequence {
    /// Reduce a sequence of the 20 standard amino acids (upper case) to H/P.
    pub fn from_amino_acids(seq: &str) -> Result<Self, FoldingError> {
        let residues = seq
            .chars()
            .enumerate()
            .map(|(i, aa)| {
                if POLAR.contains(aa) {
                    Ok(Residue::P)
                } else if HYDROPHOBIC.contains(aa) {
                    Ok(Residue::H)
                } else {
                    Err(FoldingError::config(format!(
                        "amino acid '{}' at position {} not recognized",
                        aa, i
                    )))
                }
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }

    /// A string made only of `H` and `P` is taken as is; anything else goes
    /// through the amino-acid reduction.
    pub fn parse_or_reduce(seq: &str) -> Result<Self, FoldingError> {
        seq.parse().or_else(|_| Self::from_amino_acids(seq))
    }

    pub fn len(&self) -> usize {
        self.residues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.residues.is_empty()
    }

    pub fn residues(&self) -> &[Residue] {
        &self.residues
    }

    pub fn hydrophobic_count(&self) -> usize {
        self.residues.iter().filter(|r| r.is_hydrophobic()).count()
    }
}

impl FromStr for HpSequence {
    type Err = FoldingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let residues = s
            .chars()
            .enumerate()
            .map(|(i, c)| match c {
                'H' => Ok(Residue::H),
                'P' => Ok(Residue::P),
                other => Err(FoldingError::config(format!(
                    "character '{}' at position {} is not H or P",
                    other, i
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { residues })
    }
}

impl fmt::Display for HpSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for r in &self.residues {
            write!(f, "{}", r.symbol())?;
        }
        Ok(())
    }
}

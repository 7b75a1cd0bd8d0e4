use rand::Rng;
use tracing::trace;

use super::Move;
use crate::lattice::Conformation;

pub const DEFAULT_MAX_ATTEMPTS: usize = 100_000;

/// A valid candidate together with how it was produced.
#[derive(Debug, Clone)]
pub struct Proposal {
    pub pivot: usize,
    pub kind: Move,
    pub conformation: Conformation,
    /// Number of draws it took, including the successful one.
    pub attempts: usize,
}

/// Random pivot-move proposals with a bounded retry loop.
#[derive(Debug, Clone, Copy)]
pub struct MoveGenerator {
    pub max_attempts: usize,
}

impl Default for MoveGenerator {
    fn default() -> Self {
        Self { max_attempts: DEFAULT_MAX_ATTEMPTS }
    }
}

impl MoveGenerator {
    pub fn new(max_attempts: usize) -> Self {
        Self { max_attempts }
    }

    /// Draw a pivot uniformly from `1..=L-2` and a move uniformly from the
    /// eight codes, both afresh on every attempt, until the candidate is a
    /// self-avoiding walk. `None` once `max_attempts` draws have failed.
    ///
    /// The chain must have at least three monomers.
    pub fn propose<R: Rng + ?Sized>(
        &self,
        conformation: &Conformation,
        rng: &mut R,
    ) -> Option<Proposal> {
        let len = conformation.len();
        if len < 3 {
            return None;
        }
        for attempt in 1..=self.max_attempts {
            let pivot = rng.gen_range(1..=len - 2);
            let code = rng.gen_range(1..=Move::COUNT);
            let Some(kind) = Move::from_code(code) else {
                continue;
            };
            match kind.apply(conformation, pivot) {
                Some(candidate) if candidate.is_valid() => {
                    return Some(Proposal {
                        pivot,
                        kind,
                        conformation: candidate,
                        attempts: attempt,
                    });
                }
                _ => trace!(pivot, code, "rejected move"),
            }
        }
        None
    }
}

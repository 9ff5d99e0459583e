//! Core type definitions for the GA engine.
//!
//! [`Genome`] is the candidate-solution representation, [`Encoding`]
//! describes its shape, and [`GaProblem`] is the contract between the
//! generic engine and a domain-specific objective.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::error::{Error, Result};

/// A candidate solution.
///
/// Genomes hash and compare by content, which lets the engine memoize
/// objective evaluations: identical genomes recur often once a population
/// partially converges.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Genome {
    /// Fixed-length selection vector, one flag per selectable item.
    Bits(Vec<bool>),

    /// Ordering of `[0, N)`, each index exactly once.
    ///
    /// Every operator the engine admits for this encoding preserves the
    /// bijection, so a `Permutation` genome is valid at all times, not just
    /// at creation.
    Permutation(Vec<usize>),
}

impl Genome {
    /// Number of genes.
    pub fn len(&self) -> usize {
        match self {
            Genome::Bits(bits) => bits.len(),
            Genome::Permutation(perm) => perm.len(),
        }
    }

    /// True when the genome holds no genes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Bit view, when this is a bit-vector genome.
    pub fn as_bits(&self) -> Option<&[bool]> {
        match self {
            Genome::Bits(bits) => Some(bits),
            Genome::Permutation(_) => None,
        }
    }

    /// Permutation view, when this is a permutation genome.
    pub fn as_permutation(&self) -> Option<&[usize]> {
        match self {
            Genome::Permutation(perm) => Some(perm),
            Genome::Bits(_) => None,
        }
    }
}

/// Genome shape for one problem.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Encoding {
    /// Bit vectors of `length` genes, initialized by independent Bernoulli
    /// draws with probability `inclusion_prob` per bit.
    Bits { length: usize, inclusion_prob: f64 },

    /// Permutations of `[0, length)`, initialized by uniform shuffle.
    Permutation { length: usize },
}

impl Encoding {
    /// Genome length for this encoding.
    pub fn length(&self) -> usize {
        match self {
            Encoding::Bits { length, .. } => *length,
            Encoding::Permutation { length } => *length,
        }
    }

    /// Validates the encoding parameters.
    pub fn validate(&self) -> Result<()> {
        if self.length() == 0 {
            return Err(Error::Config("genome length must be at least 1".into()));
        }
        if let Encoding::Bits { inclusion_prob, .. } = self {
            if !(0.0..=1.0).contains(inclusion_prob) || !inclusion_prob.is_finite() {
                return Err(Error::Config(format!(
                    "inclusion_prob must be in [0, 1], got {inclusion_prob}"
                )));
            }
        }
        Ok(())
    }

    /// Draws a uniformly random genome within the encoding's validity
    /// constraints.
    pub fn random_genome<R: Rng>(&self, rng: &mut R) -> Genome {
        match *self {
            Encoding::Bits {
                length,
                inclusion_prob,
            } => Genome::Bits((0..length).map(|_| rng.random_bool(inclusion_prob)).collect()),
            Encoding::Permutation { length } => {
                let mut perm: Vec<usize> = (0..length).collect();
                perm.shuffle(rng);
                Genome::Permutation(perm)
            }
        }
    }
}

/// Defines a GA optimization problem.
///
/// This is the only trait users implement to plug a domain into the engine:
///
/// 1. **Encoding**: the genome shape the engine should generate and vary
/// 2. **Objective**: a non-negative cost per genome; lower is better
/// 3. **Repair** (optional): a local greedy nudge toward feasibility, applied
///    by [`MutationKind::Repair`](crate::ga::MutationKind)
///
/// # Thread Safety
///
/// `GaProblem` must be `Send + Sync` because the engine may evaluate genomes
/// in parallel using rayon.
///
/// # Panics
///
/// If `cost` panics, the panic propagates to the caller unmodified; the
/// engine performs no suppression.
pub trait GaProblem: Send + Sync {
    /// The genome shape for this problem. Must be stable across a run.
    fn encoding(&self) -> Encoding;

    /// Evaluates a genome. Typically the most expensive operation; the
    /// engine memoizes results by genome content and may call this in
    /// parallel across the population.
    fn cost(&self, genome: &Genome) -> f64;

    /// Nudges a genome toward feasibility after mutation.
    ///
    /// The default implementation is a no-op. Implementations must be local
    /// and greedy (bounded work), not a search.
    fn repair<R: Rng>(&self, _genome: &mut Genome, _rng: &mut R) {}
}

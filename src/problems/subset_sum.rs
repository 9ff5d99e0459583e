//! Subset-sum as a GA problem.

use rand::seq::IteratorRandom;
use rand::Rng;

use crate::error::{Error, Result};
use crate::ga::{Encoding, GaProblem, Genome};

/// Pick a subset of values whose sum is as close to a target as possible,
/// with going over worse than falling short.
///
/// Genomes are bit vectors, one flag per value. The cost is the shortfall
/// `target - sum` when the selection fits, and `overshoot_penalty × (sum -
/// target)` when it overshoots; an exact hit costs zero.
#[derive(Debug, Clone)]
pub struct SubsetSumProblem {
    values: Vec<u64>,
    target: u64,
    inclusion_prob: f64,
    overshoot_penalty: f64,
}

impl SubsetSumProblem {
    /// Creates a problem instance with the default initialization bias (0.5)
    /// and overshoot penalty (1.5).
    pub fn new(values: Vec<u64>, target: u64) -> Result<Self> {
        if values.is_empty() {
            return Err(Error::Config("subset-sum needs at least one value".into()));
        }
        Ok(Self {
            values,
            target,
            inclusion_prob: 0.5,
            overshoot_penalty: 1.5,
        })
    }

    /// Sets the per-value inclusion probability used when generating the
    /// initial population.
    pub fn with_inclusion_prob(mut self, prob: f64) -> Self {
        self.inclusion_prob = prob.clamp(0.0, 1.0);
        self
    }

    /// Sets the multiplier applied to sums that exceed the target.
    pub fn with_overshoot_penalty(mut self, penalty: f64) -> Self {
        self.overshoot_penalty = penalty.max(1.0);
        self
    }

    /// The candidate values.
    pub fn values(&self) -> &[u64] {
        &self.values
    }

    /// The target sum.
    pub fn target(&self) -> u64 {
        self.target
    }

    /// Sum of the selected values.
    pub fn selected_sum(&self, bits: &[bool]) -> u64 {
        self.values
            .iter()
            .zip(bits)
            .filter(|&(_, &b)| b)
            .map(|(&v, _)| v)
            .sum()
    }
}

impl GaProblem for SubsetSumProblem {
    fn encoding(&self) -> Encoding {
        Encoding::Bits {
            length: self.values.len(),
            inclusion_prob: self.inclusion_prob,
        }
    }

    fn cost(&self, genome: &Genome) -> f64 {
        let bits = match genome.as_bits() {
            Some(bits) => bits,
            None => return f64::INFINITY,
        };
        let sum = self.selected_sum(bits);
        if sum <= self.target {
            (self.target - sum) as f64
        } else {
            self.overshoot_penalty * (sum - self.target) as f64
        }
    }

    /// Greedy two-phase repair: drop random selections until the sum fits,
    /// then add any still-fitting values in one random-order pass. Bounded
    /// work, no search.
    fn repair<R: Rng>(&self, genome: &mut Genome, rng: &mut R) {
        let bits = match genome {
            Genome::Bits(bits) => bits,
            Genome::Permutation(_) => return,
        };

        let mut sum = self.selected_sum(bits);
        while sum > self.target {
            let Some(drop) = (0..bits.len()).filter(|&i| bits[i]).choose(rng) else {
                break;
            };
            bits[drop] = false;
            sum -= self.values[drop];
        }

        let order = rand::seq::index::sample(rng, bits.len(), bits.len());
        for i in order {
            if !bits[i] && sum + self.values[i] <= self.target {
                bits[i] = true;
                sum += self.values[i];
            }
        }
    }
}

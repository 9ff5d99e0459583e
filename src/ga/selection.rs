//! Parent selection strategies.
//!
//! All strategies read a slice of per-genome costs (parallel to the
//! population, lower = better) and return an index. Ties break toward the
//! first-seen candidate, so selection is deterministic given a fixed seed.

use rand::Rng;

use crate::error::{Error, Result};

/// How many resamples to attempt before falling back to a deterministic
/// second parent.
const DISTINCT_PARENT_RETRIES: usize = 16;

/// Selection strategy for choosing parents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Selection {
    /// Draw `k` distinct genomes uniformly without replacement and keep the
    /// lowest-cost one. Higher `k` means stronger selection pressure.
    Tournament(usize),

    /// Cumulative-probability draw weighted by inverse cost, so low-cost
    /// genomes are proportionally more likely. A small epsilon floors
    /// zero-cost entries.
    Roulette,

    /// Cumulative-probability draw weighted by inverse rank: the best genome
    /// gets weight `n`, the worst gets weight 1. Insensitive to the cost
    /// scale, unlike roulette.
    Rank,
}

impl Default for Selection {
    fn default() -> Self {
        Selection::Tournament(3)
    }
}

impl Selection {
    /// Selects one parent index from a scored population.
    ///
    /// # Panics
    /// Panics if `costs` is empty.
    pub fn select<R: Rng>(&self, costs: &[f64], rng: &mut R) -> usize {
        assert!(!costs.is_empty(), "cannot select from empty population");
        match *self {
            Selection::Tournament(k) => tournament(costs, k, rng),
            Selection::Roulette => roulette(costs, rng),
            Selection::Rank => rank(costs, rng),
        }
    }

    /// Selects two distinct parent indices for crossover.
    ///
    /// Resamples the second parent on collision; after a bounded number of
    /// attempts (possible when selection pressure is extreme) it falls back
    /// to the next index, which keeps a fully converged population from
    /// livelocking the breeding loop.
    pub fn select_parents<R: Rng>(&self, costs: &[f64], rng: &mut R) -> (usize, usize) {
        let first = self.select(costs, rng);
        for _ in 0..DISTINCT_PARENT_RETRIES {
            let second = self.select(costs, rng);
            if second != first {
                return (first, second);
            }
        }
        (first, (first + 1) % costs.len())
    }

    /// Validates strategy parameters against the population size.
    pub fn validate(&self, population_size: usize) -> Result<()> {
        if let Selection::Tournament(k) = *self {
            if k == 0 {
                return Err(Error::Config("tournament size must be at least 1".into()));
            }
            if k > population_size {
                return Err(Error::Config(format!(
                    "tournament size {k} exceeds population size {population_size}"
                )));
            }
        }
        Ok(())
    }
}

/// Tournament: sample k indices without replacement, return the best.
fn tournament<R: Rng>(costs: &[f64], k: usize, rng: &mut R) -> usize {
    let k = k.clamp(1, costs.len());
    let candidates = rand::seq::index::sample(rng, costs.len(), k);
    let mut best = candidates.index(0);
    for idx in candidates.iter().skip(1) {
        if costs[idx] < costs[best] {
            best = idx;
        }
    }
    best
}

/// Roulette wheel over inverse costs.
fn roulette<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    let n = costs.len();
    if n == 1 {
        return 0;
    }

    let epsilon = 1e-10;
    let weights: Vec<f64> = costs.iter().map(|&c| 1.0 / (c + epsilon)).collect();
    let total: f64 = weights.iter().sum();
    if !total.is_finite() || total <= 0.0 {
        return rng.random_range(0..n);
    }

    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (i, &w) in weights.iter().enumerate() {
        cumulative += w;
        if cumulative > threshold {
            return i;
        }
    }
    n - 1 // floating-point fallback
}

/// Linear rank weighting: best rank gets weight n, worst gets 1.
fn rank<R: Rng>(costs: &[f64], rng: &mut R) -> usize {
    let n = costs.len();
    if n == 1 {
        return 0;
    }

    let mut order: Vec<usize> = (0..n).collect();
    order.sort_by(|&a, &b| costs[a].partial_cmp(&costs[b]).unwrap_or(std::cmp::Ordering::Equal));

    let total = (n * (n + 1)) as f64 / 2.0;
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    for (position, &idx) in order.iter().enumerate() {
        cumulative += (n - position) as f64;
        if cumulative > threshold {
            return idx;
        }
    }
    order[n - 1] // floating-point fallback
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_tournament_favors_best() {
        let costs = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);

        let mut counts = [0u32; 4];
        let n = 10_000;
        for _ in 0..n {
            counts[Selection::Tournament(3).select(&costs, &mut rng)] += 1;
        }
        // Index 2 (cost 1.0) should dominate.
        assert!(
            counts[2] > counts[0] && counts[2] > counts[1] && counts[2] > counts[3],
            "best should win most tournaments: {counts:?}"
        );
    }

    #[test]
    fn test_tournament_full_size_always_picks_best() {
        let costs = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);
        // Sampling without replacement with k = n always includes the best.
        for _ in 0..200 {
            assert_eq!(Selection::Tournament(4).select(&costs, &mut rng), 2);
        }
    }

    #[test]
    fn test_tournament_size_1_is_uniform() {
        let costs = [10.0, 5.0, 1.0, 8.0];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Tournament(1).select(&costs, &mut rng)] += 1;
        }
        for &c in &counts {
            assert!(c > 1500, "expected roughly uniform, got {counts:?}");
        }
    }

    #[test]
    fn test_roulette_favors_best() {
        let costs = [100.0, 50.0, 1.0, 80.0];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Roulette.select(&costs, &mut rng)] += 1;
        }
        assert!(
            counts[2] > counts[0],
            "lowest cost should be picked more often: {counts:?}"
        );
    }

    #[test]
    fn test_roulette_zero_cost_does_not_divide_by_zero() {
        let costs = [0.0, 10.0, 20.0];
        let mut rng = create_rng(42);
        let mut zero_picks = 0;
        for _ in 0..1000 {
            if Selection::Roulette.select(&costs, &mut rng) == 0 {
                zero_picks += 1;
            }
        }
        // Epsilon-floored inverse weight makes the exact hit overwhelmingly likely.
        assert!(zero_picks > 900, "got {zero_picks}");
    }

    #[test]
    fn test_rank_favors_best() {
        let costs = [100.0, 50.0, 1.0, 80.0];
        let mut rng = create_rng(42);
        let mut counts = [0u32; 4];
        for _ in 0..10_000 {
            counts[Selection::Rank.select(&costs, &mut rng)] += 1;
        }
        assert!(counts[2] > counts[0], "best should be picked more: {counts:?}");
        // Rank weights 4:3:2:1 — the worst still gets drawn sometimes.
        assert!(counts[0] > 0);
    }

    #[test]
    fn test_single_candidate() {
        let costs = [5.0];
        let mut rng = create_rng(42);
        assert_eq!(Selection::Tournament(1).select(&costs, &mut rng), 0);
        assert_eq!(Selection::Roulette.select(&costs, &mut rng), 0);
        assert_eq!(Selection::Rank.select(&costs, &mut rng), 0);
    }

    #[test]
    fn test_select_parents_distinct() {
        let costs = [3.0, 2.0, 1.0, 4.0, 5.0];
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (a, b) = Selection::Tournament(2).select_parents(&costs, &mut rng);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_select_parents_distinct_on_converged_population() {
        // Equal costs everywhere: the deterministic fallback must still
        // produce two different indices.
        let costs = [7.0; 10];
        let mut rng = create_rng(42);
        for _ in 0..500 {
            let (a, b) = Selection::Rank.select_parents(&costs, &mut rng);
            assert_ne!(a, b);
        }
    }

    #[test]
    fn test_validate_tournament_bounds() {
        assert!(Selection::Tournament(3).validate(10).is_ok());
        assert!(Selection::Tournament(0).validate(10).is_err());
        assert!(Selection::Tournament(11).validate(10).is_err());
        assert!(Selection::Roulette.validate(10).is_ok());
    }

    #[test]
    #[should_panic(expected = "cannot select from empty population")]
    fn test_empty_population_panics() {
        let mut rng = create_rng(42);
        Selection::Tournament(3).select(&[], &mut rng);
    }
}

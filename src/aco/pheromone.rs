//! Symmetric pheromone storage.

use crate::error::{Error, Result};

/// Lower bound applied after evaporation so every edge keeps a nonzero
/// selection probability.
pub const MIN_PHEROMONE: f64 = 1e-12;

/// Pheromone levels for every undirected city pair.
///
/// The matrix is symmetric by construction: `(i, j)` and `(j, i)` share one
/// slot, so a deposit on either order is visible from both.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pheromones {
    n: usize,
    // Upper triangle, row-major, diagonal excluded.
    values: Vec<f64>,
}

impl Pheromones {
    /// Creates a matrix for `n` cities with every edge at `initial`.
    pub fn new(n: usize, initial: f64) -> Result<Self> {
        if n < 2 {
            return Err(Error::Matrix(format!(
                "pheromone matrix needs at least 2 cities, got {n}"
            )));
        }
        if !initial.is_finite() || initial <= 0.0 {
            return Err(Error::Config(format!(
                "initial pheromone must be finite and positive, got {initial}"
            )));
        }
        Ok(Self {
            n,
            values: vec![initial; n * (n - 1) / 2],
        })
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// True when the matrix covers no cities. Never the case after
    /// construction.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Slot for the unordered pair `{i, j}`.
    #[inline]
    fn index(&self, i: usize, j: usize) -> usize {
        debug_assert!(i != j, "no pheromone on the diagonal");
        let (lo, hi) = if i < j { (i, j) } else { (j, i) };
        lo * self.n - lo * (lo + 1) / 2 + (hi - lo - 1)
    }

    /// Pheromone level on edge `{i, j}`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[self.index(i, j)]
    }

    /// Adds `amount` to edge `{i, j}`.
    pub fn deposit(&mut self, i: usize, j: usize, amount: f64) {
        let idx = self.index(i, j);
        self.values[idx] += amount;
    }

    /// Deposits `amount` on every edge of a cyclic tour, including the
    /// closing edge.
    pub fn deposit_tour(&mut self, tour: &[usize], amount: f64) {
        let n = tour.len();
        for i in 0..n {
            self.deposit(tour[i], tour[(i + 1) % n], amount);
        }
    }

    /// Scales every edge by `1 - rho`, flooring at [`MIN_PHEROMONE`] so
    /// levels stay strictly positive however long the run.
    pub fn evaporate(&mut self, rho: f64) {
        let keep = 1.0 - rho;
        for v in &mut self.values {
            *v = (*v * keep).max(MIN_PHEROMONE);
        }
    }
}

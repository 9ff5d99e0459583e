//! ACO iteration loop execution.
//!
//! Each iteration forks one tour construction per ant (optionally across the
//! rayon pool), joins the results, and applies a best-so-far pheromone
//! update: evaporation everywhere, reinforcement only along the best tour
//! found since the start of the run.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use rayon::prelude::*;

use super::config::AcoConfig;
use super::pheromone::Pheromones;
use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::progress::{ProgressObserver, TerminationReason};
use crate::rng::{create_rng, spawn_seeds};

/// Floor for distances inside the heuristic weight, so coincident cities do
/// not produce infinite attractiveness.
const MIN_HEURISTIC_DISTANCE: f64 = 1e-12;

/// Result of an ACO optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoResult {
    /// The best tour found during the entire run.
    ///
    /// Empty only when the run was cancelled before its first iteration
    /// completed.
    pub best_tour: Vec<usize>,

    /// Cyclic length of the best tour. Infinite when `best_tour` is empty.
    pub best_cost: f64,

    /// Total number of iterations executed.
    pub iterations: usize,

    /// Why the run stopped.
    pub reason: TerminationReason,

    /// Best tour length after each iteration.
    pub cost_history: Vec<f64>,
}

/// Executes the ACO loop to completion.
///
/// # Usage
///
/// ```ignore
/// let matrix = DistanceMatrix::from_points(&cities);
/// let config = AcoConfig::default().with_seed(42);
/// let result = AcoRunner::run(&matrix, &config)?;
/// println!("best tour length: {}", result.best_cost);
/// ```
pub struct AcoRunner;

impl AcoRunner {
    /// Runs the ACO optimization.
    pub fn run(matrix: &DistanceMatrix, config: &AcoConfig) -> Result<AcoResult> {
        Self::run_inner(matrix, config, None, &mut |_: usize, _: &[usize], _: f64| {})
    }

    /// Runs the ACO with a cancellation token.
    ///
    /// When the flag is set the run stops at the next iteration boundary and
    /// returns the best tour found so far.
    pub fn run_with_cancel(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Arc<AtomicBool>,
    ) -> Result<AcoResult> {
        Self::run_inner(
            matrix,
            config,
            Some(cancel),
            &mut |_: usize, _: &[usize], _: f64| {},
        )
    }

    /// Runs the ACO, reporting the best-so-far after every iteration.
    pub fn run_with_observer<O: ProgressObserver<[usize]>>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> Result<AcoResult> {
        Self::run_inner(matrix, config, cancel, observer)
    }

    fn run_inner<O: ProgressObserver<[usize]>>(
        matrix: &DistanceMatrix,
        config: &AcoConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> Result<AcoResult> {
        config.validate()?;
        if matrix.len() < 2 {
            return Err(Error::Matrix(format!(
                "a tour needs at least 2 cities, got {}",
                matrix.len()
            )));
        }

        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);
        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };
        let mut pheromones = Pheromones::new(matrix.len(), config.initial_pheromone)?;
        log::debug!(
            "aco: {} ants over {} cities for up to {} iterations",
            config.num_ants,
            matrix.len(),
            config.max_iterations
        );

        let mut best_tour: Vec<usize> = Vec::new();
        let mut best_cost = f64::INFINITY;
        let mut history = Vec::with_capacity(config.max_iterations);
        let mut iteration = 0;

        let reason = loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    break TerminationReason::Cancelled;
                }
            }
            if let Some(limit) = deadline {
                if start.elapsed() >= limit {
                    break TerminationReason::BudgetExhausted;
                }
            }
            if iteration >= config.max_iterations {
                break TerminationReason::BudgetExhausted;
            }

            // Fork: every ant gets its own seed drawn from the master RNG,
            // so the tours are identical whether construction runs serially
            // or on the pool.
            let seeds = spawn_seeds(&mut rng, config.num_ants);
            let build = |seed: u64| {
                let mut ant_rng = create_rng(seed);
                let tour = construct_tour(matrix, &pheromones, config, &mut ant_rng);
                let cost = matrix.tour_length(&tour);
                (tour, cost)
            };
            let tours: Vec<(Vec<usize>, f64)> = if config.parallel {
                seeds.into_par_iter().map(build).collect()
            } else {
                seeds.into_iter().map(build).collect()
            };

            // Join: keep the best tour of the whole run. Ties keep the
            // earlier tour.
            for (tour, cost) in tours {
                if cost < best_cost {
                    best_cost = cost;
                    best_tour = tour;
                }
            }

            pheromones.evaporate(config.evaporation);
            if best_cost.is_finite() && best_cost > 0.0 {
                pheromones.deposit_tour(&best_tour, 1.0 / best_cost);
            }

            iteration += 1;
            history.push(best_cost);
            observer.on_round(iteration, &best_tour, best_cost);

            if matches!(config.target_cost, Some(target) if best_cost <= target) {
                break TerminationReason::TargetReached;
            }
        };

        Ok(AcoResult {
            best_tour,
            best_cost,
            iterations: iteration,
            reason,
            cost_history: history,
        })
    }
}

/// Builds one tour by stochastic proportional selection.
///
/// From a random start city, each step weighs every unvisited city by
/// `τ^α · (1/d)^β` and draws proportionally. Degenerate weight rows (all
/// zero, or non-finite totals) fall back to a uniform draw over the
/// unvisited cities.
fn construct_tour<R: Rng>(
    matrix: &DistanceMatrix,
    pheromones: &Pheromones,
    config: &AcoConfig,
    rng: &mut R,
) -> Vec<usize> {
    let n = matrix.len();
    let mut tour = Vec::with_capacity(n);
    let mut visited = vec![false; n];

    let start = rng.random_range(0..n);
    tour.push(start);
    visited[start] = true;

    let mut current = start;
    let mut weights = vec![0.0; n];
    for _ in 1..n {
        let mut total = 0.0;
        for (city, weight) in weights.iter_mut().enumerate() {
            if visited[city] {
                *weight = 0.0;
                continue;
            }
            let tau = pheromones.get(current, city);
            let dist = matrix.get(current, city).max(MIN_HEURISTIC_DISTANCE);
            *weight = tau.powf(config.alpha) * (1.0 / dist).powf(config.beta);
            total += *weight;
        }

        let next = if total.is_finite() && total > 0.0 {
            pick_weighted(&weights, total, rng)
        } else {
            pick_uniform(&visited, rng)
        };
        tour.push(next);
        visited[next] = true;
        current = next;
    }
    tour
}

/// Cumulative-scan draw over non-negative weights summing to `total`.
fn pick_weighted<R: Rng>(weights: &[f64], total: f64, rng: &mut R) -> usize {
    let threshold = rng.random_range(0.0..total);
    let mut cumulative = 0.0;
    let mut last_positive = 0;
    for (city, &w) in weights.iter().enumerate() {
        if w <= 0.0 {
            continue;
        }
        cumulative += w;
        last_positive = city;
        if cumulative > threshold {
            return city;
        }
    }
    last_positive // floating-point fallback
}

/// Uniform draw over the unvisited cities.
fn pick_uniform<R: Rng>(visited: &[bool], rng: &mut R) -> usize {
    let remaining = visited.iter().filter(|&&v| !v).count();
    let mut skip = rng.random_range(0..remaining);
    for (city, &v) in visited.iter().enumerate() {
        if !v {
            if skip == 0 {
                return city;
            }
            skip -= 1;
        }
    }
    unreachable!("at least one city is unvisited")
}

// ============================================================================
// Tests
// ============================================================================

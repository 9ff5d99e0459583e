//! GA evolutionary loop execution.
//!
//! [`GaEngine`] owns one run's state and advances it a round at a time;
//! [`GaRunner`] drives an engine to completion: initialization → evaluation →
//! selection → crossover → mutation → repeat.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;

use super::config::{CrossoverKind, GaConfig, MutationKind};
use super::operators;
use super::types::{GaProblem, Genome};
use crate::progress::{ProgressObserver, TerminationReason};
use crate::rng::create_rng;

/// Result of a GA optimization run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaResult {
    /// The best genome found during the entire run.
    pub best: Genome,

    /// Cost of the best genome.
    pub best_cost: f64,

    /// Total number of rounds executed.
    pub rounds: usize,

    /// Why the run stopped.
    pub reason: TerminationReason,

    /// Best cost after initialization and after each round.
    pub cost_history: Vec<f64>,
}

/// Round-by-round GA driver.
///
/// Most callers want [`GaRunner::run`]; the engine exists for callers that
/// pace the loop themselves, interleaving rounds with their own work:
///
/// ```ignore
/// let mut engine = GaEngine::new(&problem, config)?;
/// while engine.round() < 100 {
///     if let Some(reason) = engine.step() {
///         break;
///     }
/// }
/// println!("best cost: {}", engine.best_cost());
/// ```
pub struct GaEngine<'a, P: GaProblem> {
    problem: &'a P,
    config: GaConfig,
    rng: ChaCha8Rng,
    population: Vec<Genome>,
    costs: Vec<f64>,
    cache: HashMap<Genome, f64>,
    best: Genome,
    best_cost: f64,
    round: usize,
    rounds_since_improvement: usize,
    injected: bool,
    history: Vec<f64>,
}

impl<'a, P: GaProblem> GaEngine<'a, P> {
    /// Creates an engine with a freshly initialized, evaluated population.
    ///
    /// Fails when the configuration is invalid or incompatible with the
    /// problem's encoding.
    pub fn new(problem: &'a P, config: GaConfig) -> crate::Result<Self> {
        let encoding = problem.encoding();
        config.validate_for(&encoding)?;

        let mut rng = match config.seed {
            Some(seed) => create_rng(seed),
            None => create_rng(rand::random()),
        };

        let population: Vec<Genome> = (0..config.population_size)
            .map(|_| encoding.random_genome(&mut rng))
            .collect();

        let mut engine = Self {
            problem,
            config,
            rng,
            population,
            costs: Vec::new(),
            cache: HashMap::new(),
            best: Genome::Bits(Vec::new()),
            best_cost: f64::INFINITY,
            round: 0,
            rounds_since_improvement: 0,
            injected: false,
            history: Vec::new(),
        };
        engine.evaluate_population();
        let (idx, cost) = engine.current_best();
        engine.best = engine.population[idx].clone();
        engine.best_cost = cost;
        engine.history.push(cost);
        Ok(engine)
    }

    /// Best genome found so far.
    pub fn best(&self) -> &Genome {
        &self.best
    }

    /// Cost of the best genome found so far.
    pub fn best_cost(&self) -> f64 {
        self.best_cost
    }

    /// Number of rounds executed so far.
    pub fn round(&self) -> usize {
        self.round
    }

    /// Best cost after initialization and after each executed round.
    pub fn cost_history(&self) -> &[f64] {
        &self.history
    }

    /// True when the configured target cost has been reached.
    pub fn target_reached(&self) -> bool {
        matches!(self.config.target_cost, Some(target) if self.best_cost <= target)
    }

    /// Advances one round: breed, evaluate, update the best-so-far and the
    /// stagnation state.
    ///
    /// Returns `Some(reason)` when an engine-internal stop condition fired
    /// this round; budget and cancellation checks belong to the caller.
    pub fn step(&mut self) -> Option<TerminationReason> {
        self.breed();
        self.evaluate_population();
        self.round += 1;

        let (idx, round_best) = self.current_best();
        if round_best < self.best_cost {
            self.best = self.population[idx].clone();
            self.best_cost = round_best;
            self.rounds_since_improvement = 0;
            self.injected = false;
        } else {
            self.rounds_since_improvement += 1;
        }
        self.history.push(self.best_cost);

        if self.target_reached() {
            return Some(TerminationReason::TargetReached);
        }

        if self.config.stagnation_limit > 0
            && self.rounds_since_improvement >= self.config.stagnation_limit
        {
            if self.injected || !self.config.inject_on_stagnation {
                // Fresh blood didn't help either, or injection is off.
                return Some(TerminationReason::Stagnation);
            }
            self.inject_fresh_genomes();
        }
        None
    }

    /// Consumes the engine into a result with the given reason.
    pub fn into_result(self, reason: TerminationReason) -> GaResult {
        GaResult {
            best: self.best,
            best_cost: self.best_cost,
            rounds: self.round,
            reason,
            cost_history: self.history,
        }
    }

    /// Index and cost of the best genome in the current population.
    fn current_best(&self) -> (usize, f64) {
        let mut best_idx = 0;
        for (i, &c) in self.costs.iter().enumerate() {
            if c < self.costs[best_idx] {
                best_idx = i;
            }
        }
        (best_idx, self.costs[best_idx])
    }

    /// Scores the population, memoizing by genome content.
    ///
    /// Only cache misses hit the objective; duplicates within a round are
    /// evaluated once. Misses run in parallel when configured.
    fn evaluate_population(&mut self) {
        let mut misses: Vec<Genome> = Vec::new();
        for genome in &self.population {
            if !self.cache.contains_key(genome) && !misses.contains(genome) {
                misses.push(genome.clone());
            }
        }

        let problem = self.problem;
        let evaluated: Vec<(Genome, f64)> = if self.config.parallel {
            misses
                .into_par_iter()
                .map(|g| {
                    let c = problem.cost(&g);
                    (g, c)
                })
                .collect()
        } else {
            misses
                .into_iter()
                .map(|g| {
                    let c = problem.cost(&g);
                    (g, c)
                })
                .collect()
        };
        self.cache.extend(evaluated);

        self.costs = self
            .population
            .iter()
            .map(|g| *self.cache.get(g).expect("every genome scored this round"))
            .collect();
    }

    /// Builds the next generation: elites carried over unchanged, the rest
    /// bred by selection, crossover, and mutation.
    fn breed(&mut self) {
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by(|&a, &b| {
            self.costs[a]
                .partial_cmp(&self.costs[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let mut next_gen: Vec<Genome> = order[..self.config.elitism]
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();

        let mutation_rate = self.config.mutation_schedule.rate(self.round);
        while next_gen.len() < self.config.population_size {
            let (p1, p2) = self.config.selection.select_parents(&self.costs, &mut self.rng);
            let parent1 = self.population[p1].clone();
            let parent2 = self.population[p2].clone();
            let (mut c1, mut c2) = if self.rng.random_bool(self.config.crossover_rate) {
                self.crossover(&parent1, &parent2)
            } else {
                (parent1, parent2)
            };

            self.mutate(&mut c1, mutation_rate);
            next_gen.push(c1);
            if next_gen.len() < self.config.population_size {
                self.mutate(&mut c2, mutation_rate);
                next_gen.push(c2);
            }
        }
        self.population = next_gen;
    }

    fn crossover(&mut self, p1: &Genome, p2: &Genome) -> (Genome, Genome) {
        match (self.config.crossover, p1, p2) {
            (CrossoverKind::Uniform, Genome::Bits(a), Genome::Bits(b)) => {
                let (c1, c2) = operators::uniform_crossover(a, b, &mut self.rng);
                (Genome::Bits(c1), Genome::Bits(c2))
            }
            (CrossoverKind::MultiPoint { points }, Genome::Bits(a), Genome::Bits(b)) => {
                let (c1, c2) = operators::multi_point_crossover(a, b, points, &mut self.rng);
                (Genome::Bits(c1), Genome::Bits(c2))
            }
            (CrossoverKind::Order, Genome::Permutation(a), Genome::Permutation(b)) => {
                let (c1, c2) = operators::order_crossover(a, b, &mut self.rng);
                (Genome::Permutation(c1), Genome::Permutation(c2))
            }
            // validate_for rejects every other combination up front.
            _ => (p1.clone(), p2.clone()),
        }
    }

    fn mutate(&mut self, genome: &mut Genome, rate: f64) {
        if self.config.mutation == MutationKind::Repair {
            if let Genome::Bits(bits) = &mut *genome {
                operators::bit_flip_mutation(bits, rate, &mut self.rng);
            }
            self.problem.repair(genome, &mut self.rng);
            return;
        }
        match (self.config.mutation, genome) {
            (MutationKind::BitFlip, Genome::Bits(bits)) => {
                operators::bit_flip_mutation(bits, rate, &mut self.rng);
            }
            (MutationKind::Swap, Genome::Permutation(perm)) => {
                if self.rng.random_bool(rate) {
                    operators::swap_mutation(perm, &mut self.rng);
                }
            }
            (MutationKind::Swap, Genome::Bits(bits)) => {
                let n = bits.len();
                if n >= 2 && self.rng.random_bool(rate) {
                    let i = self.rng.random_range(0..n);
                    let j = self.rng.random_range(0..n);
                    bits.swap(i, j);
                }
            }
            _ => {}
        }
    }

    /// Replaces everything but the elites with fresh random genomes.
    ///
    /// Keeps the best genomes so the monotone best-cost guarantee survives
    /// the shake-up.
    fn inject_fresh_genomes(&mut self) {
        let mut order: Vec<usize> = (0..self.population.len()).collect();
        order.sort_by(|&a, &b| {
            self.costs[a]
                .partial_cmp(&self.costs[b])
                .unwrap_or(std::cmp::Ordering::Equal)
        });
        let elites: Vec<Genome> = order[..self.config.elitism.max(1)]
            .iter()
            .map(|&i| self.population[i].clone())
            .collect();

        let encoding = self.problem.encoding();
        let fresh = self.config.population_size - elites.len();
        self.population = elites;
        for _ in 0..fresh {
            self.population.push(encoding.random_genome(&mut self.rng));
        }
        self.evaluate_population();

        self.rounds_since_improvement = 0;
        self.injected = true;
        log::debug!(
            "round {}: stagnation triggered, injected {fresh} fresh genomes",
            self.round
        );
    }
}

/// Executes the GA loop to completion.
///
/// # Usage
///
/// ```ignore
/// let problem = MyProblem::new();
/// let config = GaConfig::default().with_seed(42);
/// let result = GaRunner::run(&problem, &config)?;
/// println!("best cost: {}", result.best_cost);
/// ```
pub struct GaRunner;

impl GaRunner {
    /// Runs the GA optimization.
    pub fn run<P: GaProblem>(problem: &P, config: &GaConfig) -> crate::Result<GaResult> {
        Self::run_inner(problem, config, None, &mut |_: usize, _: &Genome, _: f64| {})
    }

    /// Runs the GA with a cancellation token.
    ///
    /// When the flag is set the run stops at the next round boundary and
    /// returns the best solution found so far.
    pub fn run_with_cancel<P: GaProblem>(
        problem: &P,
        config: &GaConfig,
        cancel: Arc<AtomicBool>,
    ) -> crate::Result<GaResult> {
        Self::run_inner(
            problem,
            config,
            Some(cancel),
            &mut |_: usize, _: &Genome, _: f64| {},
        )
    }

    /// Runs the GA, reporting the best-so-far after every round.
    pub fn run_with_observer<P: GaProblem, O: ProgressObserver<Genome>>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> crate::Result<GaResult> {
        Self::run_inner(problem, config, cancel, observer)
    }

    fn run_inner<P: GaProblem, O: ProgressObserver<Genome>>(
        problem: &P,
        config: &GaConfig,
        cancel: Option<Arc<AtomicBool>>,
        observer: &mut O,
    ) -> crate::Result<GaResult> {
        let start = Instant::now();
        let deadline = config.time_limit_ms.map(Duration::from_millis);
        let mut engine = GaEngine::new(problem, config.clone())?;
        log::debug!(
            "ga: population {} for up to {} rounds",
            config.population_size,
            config.max_rounds
        );

        if engine.target_reached() {
            return Ok(engine.into_result(TerminationReason::TargetReached));
        }

        loop {
            if let Some(ref flag) = cancel {
                if flag.load(Ordering::Relaxed) {
                    return Ok(engine.into_result(TerminationReason::Cancelled));
                }
            }
            if let Some(limit) = deadline {
                if start.elapsed() >= limit {
                    return Ok(engine.into_result(TerminationReason::BudgetExhausted));
                }
            }
            if engine.round() >= config.max_rounds {
                return Ok(engine.into_result(TerminationReason::BudgetExhausted));
            }

            let stop = engine.step();
            observer.on_round(engine.round(), engine.best(), engine.best_cost());
            if let Some(reason) = stop {
                return Ok(engine.into_result(reason));
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ga::{Encoding, GaConfig, MutationSchedule, Selection};
    use std::sync::atomic::AtomicUsize;

    // ---- OneMax: minimize the number of unset bits ----

    struct OneMax {
        n: usize,
    }

    impl GaProblem for OneMax {
        fn encoding(&self) -> Encoding {
            Encoding::Bits {
                length: self.n,
                inclusion_prob: 0.5,
            }
        }

        fn cost(&self, genome: &Genome) -> f64 {
            match genome {
                Genome::Bits(bits) => bits.iter().filter(|&&b| !b).count() as f64,
                Genome::Permutation(_) => unreachable!(),
            }
        }
    }

    // ---- Sorting: minimize displacement from the identity permutation ----

    struct SortToIdentity {
        n: usize,
    }

    impl GaProblem for SortToIdentity {
        fn encoding(&self) -> Encoding {
            Encoding::Permutation { length: self.n }
        }

        fn cost(&self, genome: &Genome) -> f64 {
            match genome {
                Genome::Permutation(perm) => perm
                    .iter()
                    .enumerate()
                    .map(|(i, &v)| (v as f64 - i as f64).abs())
                    .sum(),
                Genome::Bits(_) => unreachable!(),
            }
        }
    }

    #[test]
    fn test_onemax_reaches_target() {
        let problem = OneMax { n: 16 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_rounds(500)
            .with_target_cost(0.0)
            .with_mutation_schedule(MutationSchedule::Constant(0.05))
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.reason, TerminationReason::TargetReached);
        assert_eq!(result.best_cost, 0.0);
        assert!(result.best.as_bits().unwrap().iter().all(|&b| b));
        assert!(result.rounds < 500);
    }

    #[test]
    fn test_cost_history_is_monotone() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_population_size(30)
            .with_max_rounds(60)
            .with_elitism(2)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();
        for window in result.cost_history.windows(2) {
            assert!(
                window[1] <= window[0],
                "best cost must not regress: {} > {}",
                window[1],
                window[0]
            );
        }
    }

    #[test]
    fn test_elitism_keeps_population_best_monotone() {
        // The history above tracks the run-wide best, which cannot regress
        // by definition. The elitism guarantee is stronger: the best genome
        // *inside the population* survives every round, so the per-round
        // population best is non-increasing too. A heavy mutation rate makes
        // that survival depend entirely on the elite copies.
        let problem = OneMax { n: 20 };
        let base = GaConfig::default()
            .with_population_size(30)
            .with_mutation_schedule(MutationSchedule::Constant(0.5))
            .with_seed(42)
            .with_parallel(false);

        let mut engine = GaEngine::new(&problem, base.clone().with_elitism(2)).unwrap();
        let mut prev = engine.current_best().1;
        for _ in 0..50 {
            let _ = engine.step();
            let now = engine.current_best().1;
            assert!(
                now <= prev,
                "population best regressed despite elites: {now} > {prev}"
            );
            prev = now;
        }

        // Without elites the same setup loses its best genomes to mutation.
        let mut engine = GaEngine::new(&problem, base.with_elitism(0)).unwrap();
        let mut prev = engine.current_best().1;
        let mut regressed = false;
        for _ in 0..50 {
            let _ = engine.step();
            let now = engine.current_best().1;
            if now > prev {
                regressed = true;
            }
            prev = now;
        }
        assert!(
            regressed,
            "expected the population best to regress at least once with elitism 0"
        );
    }

    #[test]
    fn test_budget_exhausted_history_length() {
        let problem = OneMax { n: 30 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_rounds(25)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(result.reason, TerminationReason::BudgetExhausted);
        assert_eq!(result.rounds, 25);
        // Initial entry plus one per round.
        assert_eq!(result.cost_history.len(), 26);
    }

    #[test]
    fn test_cancellation_pre_set_flag() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_rounds(10_000)
            .with_seed(42)
            .with_parallel(false);

        let cancel = Arc::new(AtomicBool::new(true));
        let result = GaRunner::run_with_cancel(&problem, &config, cancel).unwrap();

        assert_eq!(result.reason, TerminationReason::Cancelled);
        assert_eq!(result.rounds, 0);
        // Initialization still produced a valid best.
        assert!(result.best_cost.is_finite());
    }

    #[test]
    fn test_cancellation_mid_run() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_rounds(1_000_000)
            .with_seed(42)
            .with_parallel(false);

        let cancel = Arc::new(AtomicBool::new(false));
        let cancel_clone = cancel.clone();
        std::thread::spawn(move || {
            std::thread::sleep(Duration::from_millis(10));
            cancel_clone.store(true, Ordering::Relaxed);
        });

        let result = GaRunner::run_with_cancel(&problem, &config, cancel).unwrap();
        assert_eq!(result.reason, TerminationReason::Cancelled);
        assert!(result.rounds < 1_000_000);
    }

    #[test]
    fn test_stagnation_injects_then_stops() {
        // Constant objective: no improvement is ever possible, so the first
        // stagnation window injects fresh genomes and the second stops.
        struct Flat;
        impl GaProblem for Flat {
            fn encoding(&self) -> Encoding {
                Encoding::Bits {
                    length: 8,
                    inclusion_prob: 0.5,
                }
            }
            fn cost(&self, _genome: &Genome) -> f64 {
                5.0
            }
        }

        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_rounds(1000)
            .with_stagnation_limit(5)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&Flat, &config).unwrap();
        assert_eq!(result.reason, TerminationReason::Stagnation);
        // One window to inject, one to give up.
        assert_eq!(result.rounds, 10);
        assert_eq!(result.best_cost, 5.0);

        // With injection disabled, the first window terminates directly.
        let config = config.with_inject_on_stagnation(false);
        let result = GaRunner::run(&Flat, &config).unwrap();
        assert_eq!(result.reason, TerminationReason::Stagnation);
        assert_eq!(result.rounds, 5);
    }

    #[test]
    fn test_memoization_skips_repeat_genomes() {
        // A one-bit genome has two possible values, so the objective can be
        // called at most twice regardless of population size or round count.
        struct Counted {
            calls: AtomicUsize,
        }
        impl GaProblem for Counted {
            fn encoding(&self) -> Encoding {
                Encoding::Bits {
                    length: 1,
                    inclusion_prob: 0.5,
                }
            }
            fn cost(&self, genome: &Genome) -> f64 {
                self.calls.fetch_add(1, Ordering::Relaxed);
                match genome {
                    Genome::Bits(bits) => {
                        if bits[0] {
                            0.0
                        } else {
                            1.0
                        }
                    }
                    Genome::Permutation(_) => unreachable!(),
                }
            }
        }

        let problem = Counted {
            calls: AtomicUsize::new(0),
        };
        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_rounds(20)
            .with_seed(42)
            .with_parallel(false);

        GaRunner::run(&problem, &config).unwrap();
        assert!(
            problem.calls.load(Ordering::Relaxed) <= 2,
            "memoization should cap objective calls at the number of distinct genomes"
        );
    }

    #[test]
    fn test_permutation_run_improves() {
        let problem = SortToIdentity { n: 8 };
        let config = GaConfig::permutation()
            .with_population_size(60)
            .with_max_rounds(300)
            .with_target_cost(0.0)
            .with_mutation_schedule(MutationSchedule::Constant(0.4))
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&problem, &config).unwrap();
        // All-permutation operators keep genomes valid throughout.
        let perm = result.best.as_permutation().unwrap();
        let mut seen = vec![false; 8];
        for &v in perm {
            assert!(!seen[v]);
            seen[v] = true;
        }
        assert!(
            result.best_cost <= 6.0,
            "expected substantial improvement, got {}",
            result.best_cost
        );
    }

    #[test]
    fn test_all_selection_strategies() {
        let problem = OneMax { n: 12 };
        for selection in [Selection::Tournament(3), Selection::Roulette, Selection::Rank] {
            let config = GaConfig::default()
                .with_population_size(30)
                .with_max_rounds(60)
                .with_selection(selection)
                .with_seed(42)
                .with_parallel(false);

            let result = GaRunner::run(&problem, &config).unwrap();
            assert!(
                result.best_cost <= 4.0,
                "selection {selection:?} should make progress, got {}",
                result.best_cost
            );
        }
    }

    #[test]
    fn test_parallel_matches_serial_quality() {
        let problem = OneMax { n: 20 };
        let config = GaConfig::default()
            .with_population_size(50)
            .with_max_rounds(100)
            .with_seed(42);

        let result = GaRunner::run(&problem, &config.clone().with_parallel(true)).unwrap();
        let serial = GaRunner::run(&problem, &config.with_parallel(false)).unwrap();
        // Breeding draws from one sequential RNG either way, so the two modes
        // agree exactly.
        assert_eq!(result.best_cost, serial.best_cost);
        assert_eq!(result.cost_history, serial.cost_history);
    }

    #[test]
    fn test_observer_sees_every_round() {
        let problem = OneMax { n: 10 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_rounds(15)
            .with_seed(42)
            .with_parallel(false);

        let mut rounds_seen = Vec::new();
        let mut observer = |round: usize, _best: &Genome, cost: f64| {
            rounds_seen.push((round, cost));
        };
        let result =
            GaRunner::run_with_observer(&problem, &config, None, &mut observer).unwrap();

        assert_eq!(rounds_seen.len(), result.rounds);
        assert_eq!(rounds_seen.first().map(|&(r, _)| r), Some(1));
        // Observer costs mirror the history tail.
        for (i, &(round, cost)) in rounds_seen.iter().enumerate() {
            assert_eq!(round, i + 1);
            assert_eq!(cost, result.cost_history[i + 1]);
        }
    }

    #[test]
    fn test_step_api_matches_runner() {
        let problem = OneMax { n: 12 };
        let config = GaConfig::default()
            .with_population_size(20)
            .with_max_rounds(30)
            .with_seed(7)
            .with_parallel(false);

        let mut engine = GaEngine::new(&problem, config.clone()).unwrap();
        while engine.round() < config.max_rounds {
            if engine.step().is_some() {
                break;
            }
        }
        let stepped = engine.into_result(TerminationReason::BudgetExhausted);
        let ran = GaRunner::run(&problem, &config).unwrap();
        assert_eq!(stepped.best_cost, ran.best_cost);
        assert_eq!(stepped.cost_history, ran.cost_history);
    }

    #[test]
    fn test_invalid_config_is_rejected() {
        let problem = OneMax { n: 10 };
        let config = GaConfig::default().with_population_size(1);
        assert!(GaRunner::run(&problem, &config).is_err());

        // Operator/encoding mismatch is caught before any evaluation.
        let mismatched = GaConfig::permutation();
        assert!(GaRunner::run(&problem, &mismatched).is_err());

        // A struct-literal rate outside [0, 1] is rejected up front instead
        // of panicking mid-run.
        let literal = GaConfig {
            crossover_rate: 1.5,
            ..GaConfig::default().with_seed(42).with_parallel(false)
        };
        assert!(GaRunner::run(&problem, &literal).is_err());
    }

    #[test]
    fn test_time_limit_exhausts_budget() {
        struct Slow;
        impl GaProblem for Slow {
            fn encoding(&self) -> Encoding {
                Encoding::Bits {
                    length: 4,
                    inclusion_prob: 0.5,
                }
            }
            fn cost(&self, genome: &Genome) -> f64 {
                std::thread::sleep(Duration::from_millis(1));
                match genome {
                    Genome::Bits(bits) => bits.iter().filter(|&&b| !b).count() as f64,
                    Genome::Permutation(_) => unreachable!(),
                }
            }
        }

        let config = GaConfig::default()
            .with_population_size(10)
            .with_max_rounds(1_000_000)
            .with_time_limit_ms(20)
            .with_seed(42)
            .with_parallel(false);

        let result = GaRunner::run(&Slow, &config).unwrap();
        assert_eq!(result.reason, TerminationReason::BudgetExhausted);
        assert!(result.rounds < 1_000_000);
    }
}

//! GA configuration.
//!
//! [`GaConfig`] holds all parameters that control the evolutionary loop.

use super::schedule::MutationSchedule;
use super::selection::Selection;
use super::types::Encoding;
use crate::error::{Error, Result};

/// Which crossover operator breeds offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverKind {
    /// Per-gene coin flip between parents. Bit vectors only.
    Uniform,

    /// Alternate parents at `points` cut positions. Bit vectors only.
    MultiPoint { points: usize },

    /// Order crossover (OX). Permutations only.
    Order,
}

/// Which mutation operator perturbs offspring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MutationKind {
    /// Independent per-bit flips at the scheduled rate. Bit vectors only.
    BitFlip,

    /// Exchange two random positions. Either encoding; for bit vectors the
    /// swap applies with the scheduled rate as its trigger probability.
    Swap,

    /// Bit flips followed by the problem's greedy repair hook. Bit vectors
    /// only.
    Repair,
}

/// Configuration for the Genetic Algorithm.
///
/// Controls population size, selection strategy, operators, termination
/// conditions, and parallelism.
///
/// # Defaults
///
/// ```
/// use evocore::ga::GaConfig;
///
/// let config = GaConfig::default();
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.max_rounds, 500);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evocore::ga::{GaConfig, Selection};
///
/// let config = GaConfig::default()
///     .with_population_size(200)
///     .with_selection(Selection::Tournament(5))
///     .with_elitism(4)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of genomes in the population.
    ///
    /// Larger populations increase diversity but slow down each round.
    /// Typical range: 50–500.
    pub population_size: usize,

    /// Maximum number of rounds before termination.
    pub max_rounds: usize,

    /// Selection strategy for choosing parents.
    pub selection: Selection,

    /// Crossover operator. Must match the problem's encoding.
    pub crossover: CrossoverKind,

    /// Probability of applying crossover to a pair of parents (0.0–1.0).
    ///
    /// When crossover is not applied, clones of the parents are used.
    pub crossover_rate: f64,

    /// Mutation operator. Must match the problem's encoding.
    pub mutation: MutationKind,

    /// Per-round mutation rate schedule.
    pub mutation_schedule: MutationSchedule,

    /// Number of best genomes copied unchanged into the next round.
    ///
    /// Elitism makes the best cost monotonically non-increasing across
    /// rounds.
    pub elitism: usize,

    /// Stop as soon as the best cost reaches this value or below.
    ///
    /// `None` disables target-based termination.
    pub target_cost: Option<f64>,

    /// Number of rounds with no best-cost improvement before the engine
    /// intervenes.
    ///
    /// On the first trigger the non-elite part of the population is replaced
    /// with fresh random genomes; on the second consecutive trigger the run
    /// stops with [`TerminationReason::Stagnation`].
    ///
    /// [`TerminationReason::Stagnation`]: crate::TerminationReason::Stagnation
    ///
    /// Set to 0 to disable stagnation handling.
    pub stagnation_limit: usize,

    /// Whether the first stagnation window injects fresh genomes before
    /// giving up. When false, the first window terminates the run directly.
    pub inject_on_stagnation: bool,

    /// Whether to evaluate genomes in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds.
    ///
    /// The check happens at the start of each round, so the actual runtime
    /// may exceed this limit by one round's worth of work. Expiry counts as
    /// budget exhaustion.
    ///
    /// `None` disables time-based termination (the default).
    pub time_limit_ms: Option<u64>,
}

impl Default for GaConfig {
    fn default() -> Self {
        Self {
            population_size: 100,
            max_rounds: 500,
            selection: Selection::default(),
            crossover: CrossoverKind::Uniform,
            crossover_rate: 0.9,
            mutation: MutationKind::BitFlip,
            mutation_schedule: MutationSchedule::default(),
            elitism: 2,
            target_cost: None,
            stagnation_limit: 0,
            inject_on_stagnation: true,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl GaConfig {
    /// Preset for permutation problems: order crossover with swap mutation.
    pub fn permutation() -> Self {
        Self {
            crossover: CrossoverKind::Order,
            mutation: MutationKind::Swap,
            ..Self::default()
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the maximum number of rounds.
    pub fn with_max_rounds(mut self, n: usize) -> Self {
        self.max_rounds = n;
        self
    }

    /// Sets the selection strategy.
    pub fn with_selection(mut self, sel: Selection) -> Self {
        self.selection = sel;
        self
    }

    /// Sets the crossover operator.
    pub fn with_crossover(mut self, kind: CrossoverKind) -> Self {
        self.crossover = kind;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the mutation operator.
    pub fn with_mutation(mut self, kind: MutationKind) -> Self {
        self.mutation = kind;
        self
    }

    /// Sets the mutation-rate schedule.
    pub fn with_mutation_schedule(mut self, schedule: MutationSchedule) -> Self {
        self.mutation_schedule = schedule;
        self
    }

    /// Sets the number of elites carried over each round.
    pub fn with_elitism(mut self, count: usize) -> Self {
        self.elitism = count;
        self
    }

    /// Sets the target cost (stop at or below this value).
    pub fn with_target_cost(mut self, cost: f64) -> Self {
        self.target_cost = Some(cost);
        self
    }

    /// Sets the stagnation limit (0 to disable).
    pub fn with_stagnation_limit(mut self, limit: usize) -> Self {
        self.stagnation_limit = limit;
        self
    }

    /// Enables or disables fresh-genome injection on stagnation.
    pub fn with_inject_on_stagnation(mut self, inject: bool) -> Self {
        self.inject_on_stagnation = inject;
        self
    }

    /// Enables or disables parallel evaluation.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Sets the wall-clock time limit in milliseconds.
    pub fn with_time_limit_ms(mut self, ms: u64) -> Self {
        self.time_limit_ms = Some(ms);
        self
    }

    /// Validates the configuration in isolation.
    pub fn validate(&self) -> Result<()> {
        if self.population_size < 2 {
            return Err(Error::Config("population_size must be at least 2".into()));
        }
        if self.max_rounds == 0 {
            return Err(Error::Config("max_rounds must be at least 1".into()));
        }
        if self.elitism >= self.population_size {
            return Err(Error::Config(format!(
                "elitism {} must be smaller than population_size {}",
                self.elitism, self.population_size
            )));
        }
        // Fields are public, so a struct-literal config can bypass the
        // clamping builder.
        if !(0.0..=1.0).contains(&self.crossover_rate) || !self.crossover_rate.is_finite() {
            return Err(Error::Config(format!(
                "crossover_rate must be in [0, 1], got {}",
                self.crossover_rate
            )));
        }
        if let CrossoverKind::MultiPoint { points } = self.crossover {
            if points == 0 {
                return Err(Error::Config(
                    "multi-point crossover needs at least one cut point".into(),
                ));
            }
        }
        if let Some(target) = self.target_cost {
            if !target.is_finite() {
                return Err(Error::Config(format!(
                    "target_cost must be finite, got {target}"
                )));
            }
        }
        if self.time_limit_ms == Some(0) {
            return Err(Error::Config("time_limit_ms must be positive or None".into()));
        }
        self.selection.validate(self.population_size)?;
        self.mutation_schedule.validate()?;
        Ok(())
    }

    /// Validates the configuration against a problem's encoding: the
    /// operator pair must be admissible for the genome shape.
    pub fn validate_for(&self, encoding: &Encoding) -> Result<()> {
        self.validate()?;
        encoding.validate()?;
        match encoding {
            Encoding::Bits { length, .. } => {
                if self.crossover == CrossoverKind::Order {
                    return Err(Error::Config(
                        "order crossover requires a permutation encoding".into(),
                    ));
                }
                if let CrossoverKind::MultiPoint { points } = self.crossover {
                    if points >= *length {
                        return Err(Error::Config(format!(
                            "multi-point crossover with {points} cut points needs a genome longer than {length}"
                        )));
                    }
                }
            }
            Encoding::Permutation { .. } => {
                if self.crossover != CrossoverKind::Order {
                    return Err(Error::Config(
                        "permutation encoding requires order crossover".into(),
                    ));
                }
                if self.mutation != MutationKind::Swap {
                    return Err(Error::Config(
                        "permutation encoding requires swap mutation".into(),
                    ));
                }
            }
        }
        Ok(())
    }
}

//! ACO configuration.

use crate::error::{Error, Result};

/// Configuration for the Ant Colony Optimization engine.
///
/// # Defaults
///
/// ```
/// use evocore::aco::AcoConfig;
///
/// let config = AcoConfig::default();
/// assert_eq!(config.num_ants, 50);
/// assert_eq!(config.max_iterations, 100);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AcoConfig {
    /// Number of ants constructing tours each iteration.
    pub num_ants: usize,

    /// Maximum number of iterations before termination.
    pub max_iterations: usize,

    /// Pheromone influence exponent. Zero makes construction ignore
    /// pheromone entirely.
    pub alpha: f64,

    /// Heuristic (inverse distance) influence exponent. Zero makes
    /// construction ignore edge lengths.
    pub beta: f64,

    /// Fraction of pheromone removed each iteration (0, 1).
    pub evaporation: f64,

    /// Pheromone level every edge starts at.
    pub initial_pheromone: f64,

    /// Stop as soon as the best tour length reaches this value or below.
    ///
    /// `None` disables target-based termination.
    pub target_cost: Option<f64>,

    /// Whether ants construct tours in parallel using rayon.
    pub parallel: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,

    /// Optional wall-clock time limit in milliseconds, checked at iteration
    /// boundaries. Expiry counts as budget exhaustion.
    pub time_limit_ms: Option<u64>,
}

impl Default for AcoConfig {
    fn default() -> Self {
        Self {
            num_ants: 50,
            max_iterations: 100,
            alpha: 1.0,
            beta: 2.0,
            evaporation: 0.5,
            initial_pheromone: 1.0,
            target_cost: None,
            parallel: true,
            seed: None,
            time_limit_ms: None,
        }
    }
}

impl AcoConfig {
    /// Sets the number of ants.
    pub fn with_num_ants(mut self, n: usize) -> Self {
        self.num_ants = n;
        self
    }

    /// Sets the maximum number of iterations.
    pub fn with_max_iterations(mut self, n: usize) -> Self {
        self.max_iterations = n;
        self
    }

    /// Sets the pheromone influence exponent.
    pub fn with_alpha(mut self, alpha: f64) -> Self {
        self.alpha = alpha;
        self
    }

    /// Sets the heuristic influence exponent.
    pub fn with_beta(mut self, beta: f64) -> Self {
        self.beta = beta;
        self
    }

    /// Sets the evaporation rate.
    pub fn with_evaporation(mut self, rho: f64) -> Self {
        self.evaporation = rho;
        self
    }

    /// Sets the initial pheromone level.
    pub fn with_initial_pheromone(mut self, tau: f64) -> Self {
        self.initial_pheromone = tau;
        self
    }

    /// Sets the target tour length (stop at or below this value).
    pub fn with_target_cost(mut self, cost: f64) -> Self {
        self.target_cost = Some(cost);
        self
    }

    /// Enables or disables parallel tour construction.
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

    /// Validates the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.num_ants == 0 {
            return Err(Error::Config("num_ants must be at least 1".into()));
        }
        if self.max_iterations == 0 {
            return Err(Error::Config("max_iterations must be at least 1".into()));
        }
        if !self.alpha.is_finite() || self.alpha < 0.0 {
            return Err(Error::Config(format!(
                "alpha must be finite and non-negative, got {}",
                self.alpha
            )));
        }
        if !self.beta.is_finite() || self.beta < 0.0 {
            return Err(Error::Config(format!(
                "beta must be finite and non-negative, got {}",
                self.beta
            )));
        }
        if !(self.evaporation > 0.0 && self.evaporation < 1.0) {
            return Err(Error::Config(format!(
                "evaporation must be in (0, 1), got {}",
                self.evaporation
            )));
        }
        if !self.initial_pheromone.is_finite() || self.initial_pheromone <= 0.0 {
            return Err(Error::Config(format!(
                "initial_pheromone must be finite and positive, got {}",
                self.initial_pheromone
            )));
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
        Ok(())
    }
}

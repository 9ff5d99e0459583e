//! Population-based metaheuristic optimization core.
//!
//! Provides two engines for combinatorial minimization problems, driven by a
//! caller-supplied problem definition and notified through a per-round
//! progress callback:
//!
//! - **Genetic Algorithm (GA)**: generational evolution over two genome
//!   encodings — fixed-length bit vectors and permutations — with pluggable
//!   selection, crossover, and mutation, elitism, fitness memoization, and
//!   stagnation escape.
//! - **Ant Colony Optimization (ACO)**: pheromone-guided stochastic tour
//!   construction over a symmetric distance matrix, with evaporation and
//!   best-so-far reinforcement.
//!
//! Both engines are minimizers (lower cost is better), accept a cooperative
//! cancellation token checked at round boundaries, support seeded
//! reproducible runs, and evaluate their independent per-round work
//! (fitness scoring, ant construction) in parallel via rayon.
//!
//! # Architecture
//!
//! The engines contain no domain knowledge. A problem is described by its
//! genome encoding and objective function ([`ga::GaProblem`]) or by a
//! [`distance::DistanceMatrix`]; ready-made problem definitions for
//! subset-sum target matching, traveling-salesman tours, and open-shop
//! scheduling live in [`problems`]. Visualization and other consumers attach
//! through [`progress::ProgressObserver`] and are never called for anything
//! but notification.

pub mod aco;
pub mod distance;
pub mod error;
pub mod ga;
pub mod problems;
pub mod progress;
pub mod rng;

pub use error::{Error, Result};
pub use progress::{ProgressObserver, TerminationReason};

//! Ant Colony Optimization engine.
//!
//! A tour minimizer over symmetric distance matrices. Each iteration a
//! colony of ants constructs cyclic tours by stochastic proportional
//! selection over pheromone and inverse-distance weights; the pheromone
//! matrix then evaporates uniformly and the best tour found so far is
//! reinforced.
//!
//! # Key Types
//!
//! - [`AcoConfig`]: validated run parameters (colony size, exponents,
//!   evaporation, budgets)
//! - [`Pheromones`]: symmetric, strictly positive pheromone matrix
//! - [`AcoRunner`]: runs a configuration to completion
//! - [`AcoResult`]: best tour, iterations executed, termination reason

mod config;
mod pheromone;
mod runner;

pub use config::AcoConfig;
pub use pheromone::{Pheromones, MIN_PHEROMONE};
pub use runner::{AcoResult, AcoRunner};

//! Genetic Algorithm engine.
//!
//! A generational minimizer over two genome encodings: fixed-length bit
//! vectors and permutations. Users describe their problem by implementing
//! [`GaProblem`] (encoding + objective); the engine owns initialization,
//! memoized scoring, selection, variation, elitism, and termination.
//!
//! # Key Types
//!
//! - [`Genome`] / [`Encoding`]: solution representation and its shape
//! - [`GaConfig`]: validated run parameters (population, operators, budgets)
//! - [`GaEngine`]: round-by-round driver for caller-paced execution
//! - [`GaRunner`]: runs a configuration to completion
//! - [`GaResult`]: best solution, rounds executed, termination reason
//!
//! # Submodules
//!
//! - [`operators`]: encoding-specific crossover and mutation functions
//! - [`schedule`]: mutation-rate schedules as pure functions of round index

mod config;
pub mod operators;
mod runner;
mod schedule;
mod selection;
mod types;

pub use config::{CrossoverKind, GaConfig, MutationKind};
pub use runner::{GaEngine, GaResult, GaRunner};
pub use schedule::MutationSchedule;
pub use selection::Selection;
pub use types::{Encoding, GaProblem, Genome};

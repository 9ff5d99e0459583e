//! Ready-made problem definitions for the GA engine.
//!
//! Each type implements [`GaProblem`](crate::ga::GaProblem) and doubles as a
//! reference for wiring a new domain into the engine:
//!
//! - [`SubsetSumProblem`]: bit-vector encoding with a greedy repair hook
//! - [`TspProblem`]: permutation encoding over a distance matrix
//! - [`OpenShopProblem`]: permutation encoding with a makespan objective

mod open_shop;
mod subset_sum;
mod tsp;

pub use open_shop::OpenShopProblem;
pub use subset_sum::SubsetSumProblem;
pub use tsp::TspProblem;

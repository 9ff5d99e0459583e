//! Symmetric TSP as a GA problem.
//!
//! The same instances the ACO engine consumes directly; wiring them through
//! [`GaProblem`] lets the two engines be compared on identical inputs.

use crate::distance::DistanceMatrix;
use crate::error::{Error, Result};
use crate::ga::{Encoding, GaProblem, Genome};

/// Find the shortest cyclic tour through every city.
///
/// Genomes are permutations of the city indices; the cost is the cyclic tour
/// length, closing edge included.
#[derive(Debug, Clone)]
pub struct TspProblem {
    matrix: DistanceMatrix,
}

impl TspProblem {
    /// Creates a problem over an existing distance matrix.
    pub fn new(matrix: DistanceMatrix) -> Result<Self> {
        if matrix.len() < 2 {
            return Err(Error::Matrix(format!(
                "a tour needs at least 2 cities, got {}",
                matrix.len()
            )));
        }
        Ok(Self { matrix })
    }

    /// Creates a problem from 2D city coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Result<Self> {
        Self::new(DistanceMatrix::from_points(points))
    }

    /// The underlying distance matrix.
    pub fn matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }
}

impl GaProblem for TspProblem {
    fn encoding(&self) -> Encoding {
        Encoding::Permutation {
            length: self.matrix.len(),
        }
    }

    fn cost(&self, genome: &Genome) -> f64 {
        match genome.as_permutation() {
            Some(tour) => self.matrix.tour_length(tour),
            None => f64::INFINITY,
        }
    }
}

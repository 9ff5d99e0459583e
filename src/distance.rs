//! Symmetric distance matrices for tour problems.
//!
//! [`DistanceMatrix`] is the geometric input shared by the ACO engine and the
//! TSP problem definition. Construction validates the matrix once so the
//! engines can index without further checks.

use crate::error::{Error, Result};

/// N×N symmetric matrix of non-negative finite distances with a zero
/// diagonal.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    n: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from explicit rows.
    ///
    /// Rejects non-square input, non-finite or negative entries, a nonzero
    /// diagonal, and asymmetry beyond a small tolerance.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let n = rows.len();
        if n == 0 {
            return Err(Error::Matrix("distance matrix must not be empty".into()));
        }
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(Error::Matrix(format!(
                    "distance matrix must be square: row {i} has {} entries, expected {n}",
                    row.len()
                )));
            }
            for (j, &d) in row.iter().enumerate() {
                if !d.is_finite() || d < 0.0 {
                    return Err(Error::Matrix(format!(
                        "distance [{i}][{j}] must be finite and non-negative, got {d}"
                    )));
                }
            }
            if row[i] != 0.0 {
                return Err(Error::Matrix(format!(
                    "distance [{i}][{i}] must be zero, got {}",
                    row[i]
                )));
            }
        }
        for i in 0..n {
            for j in (i + 1)..n {
                if (rows[i][j] - rows[j][i]).abs() > 1e-9 {
                    return Err(Error::Matrix(format!(
                        "distance matrix must be symmetric: [{i}][{j}] = {} but [{j}][{i}] = {}",
                        rows[i][j], rows[j][i]
                    )));
                }
            }
        }

        let mut values = Vec::with_capacity(n * n);
        for row in &rows {
            values.extend_from_slice(row);
        }
        Ok(Self { n, values })
    }

    /// Builds a Euclidean matrix from 2D point coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut values = vec![0.0; n * n];
        for i in 0..n {
            for j in 0..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                values[i * n + j] = (dx * dx + dy * dy).sqrt();
            }
        }
        Self { n, values }
    }

    /// Number of cities.
    pub fn len(&self) -> usize {
        self.n
    }

    /// True when the matrix holds no cities.
    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Distance between cities `i` and `j`.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        self.values[i * self.n + j]
    }

    /// Total cyclic length of a tour, including the closing edge back to the
    /// start.
    pub fn tour_length(&self, tour: &[usize]) -> f64 {
        let n = tour.len();
        (0..n).map(|i| self.get(tour[i], tour[(i + 1) % n])).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_points_symmetric_zero_diagonal() {
        let m = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0), (6.0, 0.0)]);
        assert_eq!(m.len(), 3);
        for i in 0..3 {
            assert_eq!(m.get(i, i), 0.0);
            for j in 0..3 {
                assert_eq!(m.get(i, j), m.get(j, i));
            }
        }
        assert!((m.get(0, 1) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn test_from_rows_ok() {
        let m = DistanceMatrix::from_rows(vec![
            vec![0.0, 1.0, 2.0],
            vec![1.0, 0.0, 3.0],
            vec![2.0, 3.0, 0.0],
        ])
        .unwrap();
        assert_eq!(m.get(1, 2), 3.0);
    }

    #[test]
    fn test_from_rows_rejects_empty() {
        assert!(DistanceMatrix::from_rows(vec![]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        let result = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![1.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_rejects_asymmetric() {
        let result = DistanceMatrix::from_rows(vec![vec![0.0, 1.0], vec![2.0, 0.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_from_rows_rejects_negative_and_nan() {
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, -1.0], vec![-1.0, 0.0]]).is_err());
        assert!(DistanceMatrix::from_rows(vec![vec![0.0, f64::NAN], vec![f64::NAN, 0.0]]).is_err());
    }

    #[test]
    fn test_from_rows_rejects_nonzero_diagonal() {
        let result = DistanceMatrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 0.0]]);
        assert!(result.is_err());
    }

    #[test]
    fn test_tour_length_unit_square() {
        let m = DistanceMatrix::from_points(&[(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)]);
        // Perimeter cycle.
        assert!((m.tour_length(&[0, 1, 2, 3]) - 4.0).abs() < 1e-12);
        // Crossing tour uses both diagonals.
        let crossing = m.tour_length(&[0, 2, 1, 3]);
        assert!((crossing - (2.0 + 2.0 * 2.0_f64.sqrt())).abs() < 1e-12);
    }
}

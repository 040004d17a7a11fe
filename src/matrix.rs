//! Dense distance matrix.

use crate::error::ConfigError;

/// An n×n distance matrix stored in row-major order.
///
/// Supports Euclidean construction from 2-D coordinates and explicit
/// distance grids. The engine only ever reads it; symmetry is common but
/// never required.
///
/// # Examples
///
/// ```
/// use tsp_evo::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_points(&[(0.0, 0.0), (3.0, 4.0)]);
/// assert!((matrix.get(0, 1) - 5.0).abs() < 1e-10);
/// assert_eq!(matrix.size(), 2);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Computes a Euclidean distance matrix from 2-D coordinates.
    pub fn from_points(points: &[(f64, f64)]) -> Self {
        let n = points.len();
        let mut matrix = Self::new(n);
        for i in 0..n {
            for j in (i + 1)..n {
                let dx = points[i].0 - points[j].0;
                let dy = points[i].1 - points[j].1;
                let d = (dx * dx + dy * dy).sqrt();
                matrix.set(i, j, d);
                matrix.set(j, i, d);
            }
        }
        matrix
    }

    /// Creates a distance matrix from an explicit square grid of rows.
    ///
    /// Returns [`ConfigError::RaggedMatrix`] if any row's width differs
    /// from the number of rows.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Self, ConfigError> {
        let n = rows.len();
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(ConfigError::RaggedMatrix {
                    row: i,
                    expected: n,
                    got: row.len(),
                });
            }
        }
        let data = rows.iter().flatten().copied().collect();
        Ok(Self { data, size: n })
    }

    /// Creates a distance matrix from a flat row-major buffer.
    ///
    /// Returns `None` if the data length doesn't match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Option<Self> {
        if data.len() != size * size {
            return None;
        }
        Some(Self { data, size })
    }

    /// Returns the distance from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the distance from location `from` to location `to`.
    pub fn set(&mut self, from: usize, to: usize, distance: f64) {
        self.data[from * self.size + to] = distance;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the first negative entry, if any.
    pub(crate) fn first_negative(&self) -> Option<(usize, usize, f64)> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if d < 0.0 {
                    return Some((i, j, d));
                }
            }
        }
        None
    }

    /// Returns `true` if every off-diagonal entry is zero.
    pub(crate) fn is_degenerate(&self) -> bool {
        for i in 0..self.size {
            for j in 0..self.size {
                if i != j && self.get(i, j) != 0.0 {
                    return false;
                }
            }
        }
        true
    }
}

//! Dense distance matrix.

use crate::error::{Result, RouteError};

/// A dense n×n distance matrix (meters) stored in row-major order.
///
/// Unreachable pairs hold [`DistanceMatrix::UNREACHABLE`]. The diagonal is
/// zero. Symmetry is expected but not enforced; see [`is_symmetric`].
///
/// [`is_symmetric`]: DistanceMatrix::is_symmetric
///
/// # Examples
///
/// ```
/// use city_route::distance::DistanceMatrix;
///
/// let dm = DistanceMatrix::from_rows(vec![
///     vec![0.0, 1.0, 2.0],
///     vec![1.0, 0.0, 3.0],
///     vec![2.0, 3.0, 0.0],
/// ]).unwrap();
/// assert_eq!(dm.get(1, 2), 3.0);
/// assert_eq!(dm.size(), 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Sentinel for "no finite distance known".
    pub const UNREACHABLE: f64 = f64::INFINITY;

    /// Creates a distance matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a distance matrix from an explicit row-major n×n grid.
    ///
    /// Fails with [`RouteError::MalformedMatrix`] if the data length doesn't
    /// match `size * size`.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RouteError::MalformedMatrix(format!(
                "expected {} entries for a {size}x{size} matrix, got {}",
                size * size,
                data.len()
            )));
        }
        Ok(Self { data, size })
    }

    /// Creates a distance matrix from nested rows.
    ///
    /// Fails with [`RouteError::MalformedMatrix`] if any row length differs
    /// from the number of rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != size) {
            return Err(RouteError::MalformedMatrix(format!(
                "row {i} has {} entries, expected {size}",
                row.len()
            )));
        }
        Ok(Self {
            data: rows.into_iter().flatten().collect(),
            size,
        })
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

    /// Sets both directions of a pair.
    pub fn set_symmetric(&mut self, a: usize, b: usize, distance: f64) {
        self.set(a, b, distance);
        self.set(b, a, distance);
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `from → to` has a finite distance.
    pub fn is_reachable(&self, from: usize, to: usize) -> bool {
        self.get(from, to).is_finite()
    }

    /// Checks that every entry is a non-negative distance (or the unreachable
    /// sentinel) and that the diagonal is zero.
    pub fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let d = self.get(i, j);
                if d.is_nan() {
                    return Err(RouteError::MalformedMatrix(format!(
                        "entry ({i}, {j}) is NaN"
                    )));
                }
                if d < 0.0 {
                    return Err(RouteError::MalformedMatrix(format!(
                        "entry ({i}, {j}) is negative: {d}"
                    )));
                }
                if i == j && d != 0.0 {
                    return Err(RouteError::MalformedMatrix(format!(
                        "diagonal entry ({i}, {i}) is {d}, expected 0"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a == b {
                    continue;
                }
                if (a - b).abs() > tol || a.is_nan() || b.is_nan() {
                    return false;
                }
            }
        }
        true
    }

    /// Returns the nearest reachable neighbor of `from` among `candidates`.
    ///
    /// Ties go to the candidate listed first. Returns `None` if no candidate
    /// has a finite distance.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .filter(|&c| self.is_reachable(from, c))
            .min_by(|&a, &b| self.get(from, a).total_cmp(&self.get(from, b)))
    }

    /// Rows as nested vectors.
    pub fn to_rows(&self) -> Vec<Vec<f64>> {
        (0..self.size)
            .map(|i| self.data[i * self.size..(i + 1) * self.size].to_vec())
            .collect()
    }
}

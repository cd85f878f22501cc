use num_traits::NumCast;

use crate::linalg::LinalgError;
use crate::matrix::vector::Vector;
use crate::traits::{Coordinates, FloatScalar};
use crate::Matrix;

/// Mean and covariance of a point set.
///
/// Uses the biased estimator: sums are divided by the number of samples
/// `K`, not `K - 1`. The matrix is symmetric by construction.
///
/// ```
/// use smallmat::linalg::Covariance;
///
/// let pts = [(-1.0, -2.0), (1.0, 0.0), (2.0, -1.0), (2.0, -1.0)];
/// let cov = Covariance::new(&pts).unwrap();
/// assert_eq!(cov.mean().to_array(), [1.0, -1.0]);
/// assert_eq!(cov.matrix()[(0, 0)], 1.5);
/// assert_eq!(cov.matrix()[(0, 1)], 0.5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Covariance<T, const N: usize> {
    mean: Vector<T, N>,
    matrix: Matrix<T, N, N>,
}

impl<T: FloatScalar, const N: usize> Covariance<T, N> {
    /// Estimate from any slice of points.
    ///
    /// Returns [`LinalgError::EmptyInput`] when `points` is empty.
    pub fn new<P: Coordinates<T, N>>(points: &[P]) -> Result<Self, LinalgError> {
        let mut matrix = Matrix::zeros();
        let mean = matrix.set_covariance(points)?;
        Ok(Self { mean, matrix })
    }

    /// Per-component mean.
    #[inline]
    pub fn mean(&self) -> &Vector<T, N> {
        &self.mean
    }

    /// Covariance matrix.
    #[inline]
    pub fn matrix(&self) -> &Matrix<T, N, N> {
        &self.matrix
    }

    /// Split into `(mean, matrix)`.
    pub fn into_parts(self) -> (Vector<T, N>, Matrix<T, N, N>) {
        (self.mean, self.matrix)
    }
}

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Overwrite `self` with the covariance of `points` and return their mean.
    ///
    /// On [`LinalgError::EmptyInput`] `self` is left untouched.
    pub fn set_covariance<P: Coordinates<T, N>>(
        &mut self,
        points: &[P],
    ) -> Result<Vector<T, N>, LinalgError> {
        if points.is_empty() {
            return Err(LinalgError::EmptyInput);
        }

        let count = sample_count::<T>(points.len());
        let mut mean = Vector::<T, N>::zeros();
        for p in points {
            for i in 0..N {
                mean[i] = mean[i] + p.coord(i);
            }
        }
        for i in 0..N {
            mean[i] = mean[i] / count;
        }

        let mut cov = Self::zeros();
        for p in points {
            let mut d = [T::zero(); N];
            for (i, di) in d.iter_mut().enumerate() {
                *di = p.coord(i) - mean[i];
            }
            for i in 0..N {
                for j in i..N {
                    cov[(i, j)] = cov[(i, j)] + d[i] * d[j];
                }
            }
        }
        for i in 0..N {
            for j in i..N {
                let c = cov[(i, j)] / count;
                cov[(i, j)] = c;
                cov[(j, i)] = c;
            }
        }

        log::trace!("covariance of {} points, mean {:?}", points.len(), mean);
        self.set_from(&cov);
        Ok(mean)
    }
}

/// `len` as a float. Counting by repeated `+ 1` would stall at 2²⁴ for `f32`.
fn sample_count<T: FloatScalar>(len: usize) -> T {
    <T as NumCast>::from(len).unwrap_or_else(T::infinity)
}

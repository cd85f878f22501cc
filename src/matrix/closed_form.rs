//! Closed-form determinant, adjugate, and inverse for 2×2, 3×3, and 4×4.
//!
//! Inversion is `adj(A) / det(A)` with no pivoting and no singularity check:
//! a singular input yields `NaN` / `±inf` entries. Use
//! [`Matrix::try_inverse`] to get an error instead.

use crate::linalg::LinalgError;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

/// Determinant and adjugate by explicit cofactor expansion.
///
/// Implemented for square matrices of size 2, 3, and 4.
///
/// ```
/// use smallmat::{ClosedForm, Matrix3};
/// let m: Matrix3<f64> = Matrix3::new([
///     [2.0, 0.0, 1.0],
///     [1.0, 3.0, 2.0],
///     [1.0, 1.0, 2.0],
/// ]);
/// assert_eq!(m.determinant(), 6.0);
/// assert_eq!(m * m.adjugate(), Matrix3::<f64>::eye() * m.determinant());
/// ```
pub trait ClosedForm: Sized {
    type Scalar;

    /// Determinant.
    fn determinant(&self) -> Self::Scalar;

    /// Transpose of the cofactor matrix, so that `A · adj(A) = det(A) · I`.
    fn adjugate(&self) -> Self;
}

impl<T: Scalar> ClosedForm for Matrix<T, 2, 2> {
    type Scalar = T;

    fn determinant(&self) -> T {
        self[(0, 0)] * self[(1, 1)] - self[(0, 1)] * self[(1, 0)]
    }

    fn adjugate(&self) -> Self {
        let z = T::zero();
        Matrix::new([
            [self[(1, 1)], z - self[(0, 1)]],
            [z - self[(1, 0)], self[(0, 0)]],
        ])
    }
}

impl<T: Scalar> ClosedForm for Matrix<T, 3, 3> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let m = |i: usize, j: usize| self[(i, j)];
        m(0, 0) * (m(1, 1) * m(2, 2) - m(2, 1) * m(1, 2))
            + m(1, 0) * (m(2, 1) * m(0, 2) - m(0, 1) * m(2, 2))
            + m(2, 0) * (m(0, 1) * m(1, 2) - m(1, 1) * m(0, 2))
    }

    fn adjugate(&self) -> Self {
        let m = |i: usize, j: usize| self[(i, j)];
        Matrix::new([
            [
                m(1, 1) * m(2, 2) - m(1, 2) * m(2, 1),
                m(0, 2) * m(2, 1) - m(0, 1) * m(2, 2),
                m(0, 1) * m(1, 2) - m(0, 2) * m(1, 1),
            ],
            [
                m(1, 2) * m(2, 0) - m(1, 0) * m(2, 2),
                m(0, 0) * m(2, 2) - m(0, 2) * m(2, 0),
                m(0, 2) * m(1, 0) - m(0, 0) * m(1, 2),
            ],
            [
                m(1, 0) * m(2, 1) - m(1, 1) * m(2, 0),
                m(0, 1) * m(2, 0) - m(0, 0) * m(2, 1),
                m(0, 0) * m(1, 1) - m(0, 1) * m(1, 0),
            ],
        ])
    }
}

impl<T: Scalar> Matrix<T, 4, 4> {
    /// Determinant of the 3×3 submatrix left after deleting row `r` and column `c`.
    fn minor(&self, r: usize, c: usize) -> T {
        let mut rows = [0usize; 3];
        let mut cols = [0usize; 3];
        let (mut ri, mut ci) = (0, 0);
        for k in 0..4 {
            if k != r {
                rows[ri] = k;
                ri += 1;
            }
            if k != c {
                cols[ci] = k;
                ci += 1;
            }
        }
        let mut sub = Matrix::<T, 3, 3>::zeros();
        for i in 0..3 {
            for j in 0..3 {
                sub[(i, j)] = self[(rows[i], cols[j])];
            }
        }
        sub.determinant()
    }
}

impl<T: Scalar> ClosedForm for Matrix<T, 4, 4> {
    type Scalar = T;

    fn determinant(&self) -> T {
        let m = |i: usize, j: usize| self[(i, j)];

        // 2×2 minors of the last two columns
        let d1 = m(2, 2) * m(3, 3) - m(2, 3) * m(3, 2);
        let d2 = m(1, 2) * m(3, 3) - m(1, 3) * m(3, 2);
        let d3 = m(1, 2) * m(2, 3) - m(1, 3) * m(2, 2);
        let d4 = m(0, 2) * m(3, 3) - m(0, 3) * m(3, 2);
        let d5 = m(0, 2) * m(2, 3) - m(0, 3) * m(2, 2);
        let d6 = m(0, 2) * m(1, 3) - m(0, 3) * m(1, 2);

        m(0, 0) * (m(1, 1) * d1 - m(2, 1) * d2 + m(3, 1) * d3)
            - m(1, 0) * (m(0, 1) * d1 - m(2, 1) * d4 + m(3, 1) * d5)
            + m(2, 0) * (m(0, 1) * d2 - m(1, 1) * d4 + m(3, 1) * d6)
            - m(3, 0) * (m(0, 1) * d3 - m(1, 1) * d5 + m(2, 1) * d6)
    }

    fn adjugate(&self) -> Self {
        let mut adj = Self::zeros();
        for i in 0..4 {
            for j in 0..4 {
                let minor = self.minor(j, i);
                adj[(i, j)] = if (i + j) % 2 == 0 {
                    minor
                } else {
                    T::zero() - minor
                };
            }
        }
        adj
    }
}

// ── Inversion ───────────────────────────────────────────────────────

impl<T: FloatScalar, const N: usize> Matrix<T, N, N>
where
    Self: ClosedForm<Scalar = T>,
{
    /// Inverse as `adj(A) / det(A)`.
    ///
    /// A singular matrix gives non-finite entries rather than an error.
    ///
    /// ```
    /// use smallmat::Matrix2;
    /// let m: Matrix2<f64> = Matrix2::new([[4.0, 7.0], [2.0, 6.0]]);
    /// let inv = m.inverse();
    /// assert!((m * inv).epsilon_eq(&Matrix2::eye(), 1e-12));
    /// ```
    pub fn inverse(&self) -> Self {
        self.adjugate() / self.determinant()
    }

    /// Replace `self` with its inverse.
    pub fn invert(&mut self) {
        *self = self.inverse();
    }

    /// `self = a⁻¹`.
    pub fn set_inverse(&mut self, a: &Self) {
        *self = a.inverse();
    }

    /// Inverse, or [`LinalgError::Singular`] when the determinant is exactly zero.
    pub fn try_inverse(&self) -> Result<Self, LinalgError> {
        let det = self.determinant();
        if det == T::zero() {
            return Err(LinalgError::Singular);
        }
        Ok(self.adjugate() / det)
    }
}

use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

// ── Vector norms ────────────────────────────────────────────────────

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Squared L2 norm (dot product with self). No sqrt, works with integers.
    pub fn norm_squared(&self) -> T {
        self.dot(self)
    }
}

impl<T: FloatScalar, const N: usize> Vector<T, N> {
    /// L2 (Euclidean) norm.
    pub fn norm(&self) -> T {
        self.norm_squared().sqrt()
    }

    /// Return a unit vector in the same direction.
    ///
    /// A zero vector yields all-`NaN` components.
    pub fn normalize(&self) -> Self {
        let n = self.norm();
        *self * (T::one() / n)
    }
}

// ── Matrix norms ────────────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Squared Frobenius norm (sum of all elements squared). No sqrt.
    pub fn frobenius_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for i in 0..M {
            for j in 0..N {
                sum = sum + self[(i, j)] * self[(i, j)];
            }
        }
        sum
    }

    /// Squared Euclidean length of column `j`.
    pub fn column_norm_squared(&self, j: usize) -> T {
        let mut sum = T::zero();
        for i in 0..M {
            sum = sum + self[(i, j)] * self[(i, j)];
        }
        sum
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of squared entries strictly above the diagonal.
    ///
    /// For a symmetric matrix this is half the squared off-diagonal mass.
    pub fn upper_off_diagonal_norm_squared(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            for j in (i + 1)..N {
                sum = sum + self[(i, j)] * self[(i, j)];
            }
        }
        sum
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Frobenius norm (square root of sum of squared elements).
    pub fn frobenius_norm(&self) -> T {
        self.frobenius_norm_squared().sqrt()
    }

    /// Largest absolute entry. Squares nothing, so it cannot overflow.
    pub fn max_abs(&self) -> T {
        let mut m = T::zero();
        for col in self.data.iter() {
            for &x in col.iter() {
                m = m.max(x.abs());
            }
        }
        m
    }
}

use crate::matrix::vector::Vector;
use crate::traits::{FloatScalar, Scalar};
use crate::Matrix;

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Sum of diagonal elements.
    pub fn trace(&self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(i, i)];
        }
        sum
    }

    /// Create a diagonal matrix from a vector.
    pub fn from_diag(v: &Vector<T, N>) -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m[(i, i)] = v[i];
        }
        m
    }

    /// Overwrite with zeros.
    pub fn set_zero(&mut self) {
        *self = Self::zeros();
    }

    /// Overwrite with the identity.
    pub fn set_identity(&mut self) {
        *self = Self::eye();
    }

    /// Overwrite with a diagonal matrix; off-diagonal entries become zero.
    ///
    /// ```
    /// use smallmat::Matrix3;
    /// let mut m: Matrix3<f64> = Matrix3::eye();
    /// m.set_diagonal([2.0, 3.0, 4.0]);
    /// assert_eq!(m.trace(), 9.0);
    /// ```
    pub fn set_diagonal(&mut self, d: [T; N]) {
        *self = Self::zeros();
        for (i, &v) in d.iter().enumerate() {
            self[(i, i)] = v;
        }
    }

    /// Check if the matrix is symmetric (A == A^T).
    ///
    /// The comparison is exact: `m[i][j] == m[j][i]` for every `i != j`.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..N {
            for j in (i + 1)..N {
                if self[(i, j)] != self[(j, i)] {
                    return false;
                }
            }
        }
        true
    }

    /// Exact comparison against the identity pattern.
    pub fn is_identity(&self) -> bool {
        for j in 0..N {
            for i in 0..N {
                let expected = if i == j { T::one() } else { T::zero() };
                if self[(i, j)] != expected {
                    return false;
                }
            }
        }
        true
    }
}

impl<T: FloatScalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `true` when every entry differs from `other` by at most `epsilon`.
    ///
    /// Any `NaN` entry makes the comparison fail.
    pub fn epsilon_eq(&self, other: &Self, epsilon: T) -> bool {
        for j in 0..N {
            for i in 0..M {
                let d = (self[(i, j)] - other[(i, j)]).abs();
                if d.is_nan() || d > epsilon {
                    return false;
                }
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn trace() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m.trace(), 5.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id.trace(), 3.0);
    }

    #[test]
    fn from_diag() {
        let d = Vector::from_array([1.0, 5.0, 9.0]);
        let m2 = Matrix::from_diag(&d);
        assert_eq!(m2[(0, 0)], 1.0);
        assert_eq!(m2[(1, 1)], 5.0);
        assert_eq!(m2[(2, 2)], 9.0);
        assert_eq!(m2[(0, 1)], 0.0);
    }

    #[test]
    fn setters() {
        let mut m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        m.set_identity();
        assert!(m.is_identity());
        m.set_zero();
        assert_eq!(m, Matrix::zeros());
        m.set_diagonal([5.0, 6.0]);
        assert_eq!(m, Matrix::new([[5.0, 0.0], [0.0, 6.0]]));
    }

    #[test]
    fn is_symmetric() {
        let sym = Matrix::new([[1.0, 2.0, 3.0], [2.0, 5.0, 6.0], [3.0, 6.0, 9.0]]);
        assert!(sym.is_symmetric());

        assert!(Matrix::new([[4.0, 7.5], [7.5, -1.0]]).is_symmetric());
        assert!(!Matrix::new([[1.0, 1.0], [2.0, 2.0]]).is_symmetric());

        let id: Matrix<f64, 4, 4> = Matrix::eye();
        assert!(id.is_symmetric());
    }

    #[test]
    fn is_symmetric_is_exact() {
        let almost = Matrix::new([[1.0, 2.0], [2.0 + 1e-15, 1.0]]);
        assert!(!almost.is_symmetric());
    }

    #[test]
    fn is_identity() {
        let mut m: Matrix<f64, 3, 3> = Matrix::eye();
        assert!(m.is_identity());
        m[(1, 2)] = 1e-300;
        assert!(!m.is_identity());
        assert!(!Matrix::<f64, 2, 2>::zeros().is_identity());
        assert!(!Matrix::new([[1.0, 1.0], [2.0, 2.0]]).is_identity());
    }

    #[test]
    fn epsilon_eq() {
        let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let b = a + 1e-9;
        assert!(a.epsilon_eq(&b, 1e-6));
        assert!(!a.epsilon_eq(&b, 1e-12));

        let mut nan = a;
        nan[(0, 0)] = f64::NAN;
        assert!(!nan.epsilon_eq(&nan, 1.0));
    }
}

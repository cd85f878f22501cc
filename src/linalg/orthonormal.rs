//! Column re-orthonormalization of square matrices.
//!
//! Two procedures, each in a mutate-self and a write-into-destination shape:
//!
//! - [`Matrix::normalize_cp`] scales every column to unit length and, for
//!   3×3, rebuilds the third column as the cross product of the first two.
//!   It does not remove the component of column 1 along column 0, so it is
//!   only a repair step for bases that have drifted slightly.
//! - [`Matrix::orthonormalize`] is Gram-Schmidt and always yields
//!   an orthonormal matrix.

use crate::traits::FloatScalar;
use crate::Matrix;

impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Normalize each column in place; for 3×3 also set `c2 = c0 × c1`.
    ///
    /// A zero column divides by a zero norm, so its entries become `NaN`.
    ///
    /// ```
    /// use smallmat::Matrix3;
    /// let mut m: Matrix3<f64> = Matrix3::new([
    ///     [2.0, 0.0, 9.0],
    ///     [0.0, 3.0, 9.0],
    ///     [0.0, 0.0, 9.0],
    /// ]);
    /// m.normalize_cp();
    /// assert!(m.is_identity());
    /// ```
    pub fn normalize_cp(&mut self) {
        let cols = if N == 3 { 2 } else { N };
        for j in 0..cols {
            let n = self.column_norm_squared(j).sqrt();
            for i in 0..N {
                self[(i, j)] = self[(i, j)] / n;
            }
        }
        if N == 3 {
            self.cross_third_column();
        }
    }

    /// `self = normalize_cp(a)`.
    pub fn set_normalized_cp(&mut self, a: &Self) {
        self.set_from(a);
        self.normalize_cp();
    }

    /// Gram-Schmidt orthonormalization of the columns, in place.
    ///
    /// Each column has its projection on the previous columns removed and is
    /// then normalized; for 3×3 the last column is `c0 × c1`, which keeps the
    /// result right-handed. A column that is linearly dependent on the ones
    /// before it (a zero column in particular) is replaced by the canonical
    /// basis vector with the largest component orthogonal to them, so a zero
    /// matrix becomes the identity.
    ///
    /// ```
    /// use smallmat::Matrix2;
    /// let mut m: Matrix2<f64> = Matrix2::new([[3.0, 1.0], [4.0, 1.0]]);
    /// m.orthonormalize();
    /// assert!((m.transpose() * m).epsilon_eq(&Matrix2::eye(), 1e-12));
    /// ```
    pub fn orthonormalize(&mut self) {
        let cols = if N == 3 { 2 } else { N };

        for j in 0..cols {
            let len2 = self.column_norm_squared(j);
            let mut col = [T::zero(); N];
            self.get_column(j, &mut col);
            self.remove_projections(j, &mut col);

            let mut r2 = dot(&col, &col);
            if r2 <= T::epsilon() * len2 {
                // Dependent column: pick the best canonical replacement
                let mut best = T::zero();
                for k in 0..N {
                    let mut e = [T::zero(); N];
                    e[k] = T::one();
                    self.remove_projections(j, &mut e);
                    let e2 = dot(&e, &e);
                    if e2 > best {
                        best = e2;
                        col = e;
                    }
                }
                r2 = best;
            }

            let n = r2.sqrt();
            for v in col.iter_mut() {
                *v = *v / n;
            }
            self.set_column_from_slice(j, &col);
        }

        if N == 3 {
            self.cross_third_column();
        }
    }

    /// `self = orthonormalize(a)`.
    pub fn set_orthonormalized(&mut self, a: &Self) {
        self.set_from(a);
        self.orthonormalize();
    }

    /// Subtract from `v` its projection on each of the first `upto` columns,
    /// which must already be orthonormal.
    fn remove_projections(&self, upto: usize, v: &mut [T; N]) {
        for k in 0..upto {
            let mut d = T::zero();
            for i in 0..N {
                d = d + self[(i, k)] * v[i];
            }
            for i in 0..N {
                v[i] = v[i] - d * self[(i, k)];
            }
        }
    }

    /// Column 2 = column 0 × column 1. Only called when `N == 3`.
    fn cross_third_column(&mut self) {
        let m = *self;
        self[(0, 2)] = m[(1, 0)] * m[(2, 1)] - m[(1, 1)] * m[(2, 0)];
        self[(1, 2)] = m[(0, 1)] * m[(2, 0)] - m[(0, 0)] * m[(2, 1)];
        self[(2, 2)] = m[(0, 0)] * m[(1, 1)] - m[(0, 1)] * m[(1, 0)];
    }
}

fn dot<T: FloatScalar, const N: usize>(a: &[T; N], b: &[T; N]) -> T {
    let mut sum = T::zero();
    for i in 0..N {
        sum = sum + a[i] * b[i];
    }
    sum
}

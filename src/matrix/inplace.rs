//! Named arithmetic kernels in three call shapes.
//!
//! Each family comes as:
//! - a mutate-self form (`m.add_matrix(&b)`, `m.transpose_in_place()`),
//! - a write-into-destination form (`dst.set_sum(&a, &b)`),
//! - a return-new form (`a.transpose()`, `a.mul_transpose_left(&b)`, or the
//!   operator in `ops.rs`).
//!
//! A destination can never alias a source under the borrow rules, so the
//! aliasing cases (`M = M * N`, `M = Mᵀ`) are exactly the mutate-self forms.
//! Those that read an entry after it could be overwritten compute the full
//! result into a stack temporary first.

use crate::traits::Scalar;
use crate::Matrix;

// ── Entry-wise families (any shape) ─────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// `self[i][j] += s` for every entry.
    pub fn add_scalar(&mut self, s: T) {
        for col in self.data.iter_mut() {
            for x in col.iter_mut() {
                *x = *x + s;
            }
        }
    }

    /// `self = a + s` entry-wise.
    pub fn set_scalar_sum(&mut self, s: T, a: &Self) {
        self.data = a.data;
        self.add_scalar(s);
    }

    /// `self[i][j] -= s` for every entry.
    pub fn sub_scalar(&mut self, s: T) {
        for col in self.data.iter_mut() {
            for x in col.iter_mut() {
                *x = *x - s;
            }
        }
    }

    /// `self = a - s` entry-wise.
    pub fn set_scalar_difference(&mut self, s: T, a: &Self) {
        self.data = a.data;
        self.sub_scalar(s);
    }

    /// `self += b`.
    pub fn add_matrix(&mut self, b: &Self) {
        for j in 0..N {
            for i in 0..M {
                self.data[j][i] = self.data[j][i] + b.data[j][i];
            }
        }
    }

    /// `self = a + b`.
    pub fn set_sum(&mut self, a: &Self, b: &Self) {
        self.data = a.data;
        self.add_matrix(b);
    }

    /// `self -= b`.
    pub fn sub_matrix(&mut self, b: &Self) {
        for j in 0..N {
            for i in 0..M {
                self.data[j][i] = self.data[j][i] - b.data[j][i];
            }
        }
    }

    /// `self = a - b`.
    pub fn set_difference(&mut self, a: &Self, b: &Self) {
        self.data = a.data;
        self.sub_matrix(b);
    }

    /// `self *= s` for every entry.
    pub fn scale(&mut self, s: T) {
        for col in self.data.iter_mut() {
            for x in col.iter_mut() {
                *x = *x * s;
            }
        }
    }

    /// `self = s * a`.
    pub fn set_scaled(&mut self, s: T, a: &Self) {
        self.data = a.data;
        self.scale(s);
    }

    /// `self = -self`.
    pub fn negate(&mut self) {
        for col in self.data.iter_mut() {
            for x in col.iter_mut() {
                *x = T::zero() - *x;
            }
        }
    }

    /// `self = -a`.
    pub fn set_negation(&mut self, a: &Self) {
        self.data = a.data;
        self.negate();
    }

    /// Transpose: (M×N) → (N×M).
    pub fn transpose(&self) -> Matrix<T, N, M> {
        let mut out = Matrix::<T, N, M>::zeros();
        for i in 0..M {
            for j in 0..N {
                out[(j, i)] = self[(i, j)];
            }
        }
        out
    }
}

// ── Square-only families ────────────────────────────────────────────

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Transpose in place by swapping across the diagonal.
    pub fn transpose_in_place(&mut self) {
        for i in 0..N {
            for j in (i + 1)..N {
                let tmp = self[(i, j)];
                self[(i, j)] = self[(j, i)];
                self[(j, i)] = tmp;
            }
        }
    }

    /// `self = aᵀ`.
    pub fn set_transpose(&mut self, a: &Self) {
        *self = a.transpose();
    }

    /// `self = self * b`.
    pub fn mul_matrix(&mut self, b: &Self) {
        *self = *self * *b;
    }

    /// `self = a * b`.
    pub fn set_product(&mut self, a: &Self, b: &Self) {
        *self = *a * *b;
    }

    /// `selfᵀ · b`, reading `self` column-wise instead of transposing it.
    ///
    /// ```
    /// use smallmat::Matrix2;
    /// let a: Matrix2<f64> = Matrix2::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let b: Matrix2<f64> = Matrix2::new([[5.0, 6.0], [7.0, 8.0]]);
    /// assert_eq!(a.mul_transpose_left(&b), a.transpose() * b);
    /// ```
    pub fn mul_transpose_left(&self, b: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(k, i)] * b[(k, j)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }

    /// `self · bᵀ`, reading `b` row-wise instead of transposing it.
    pub fn mul_transpose_right(&self, b: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(i, k)] * b[(j, k)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }

    /// `selfᵀ · bᵀ` without materializing either transpose.
    pub fn mul_transpose_both(&self, b: &Self) -> Self {
        let mut out = Self::zeros();
        for i in 0..N {
            for j in 0..N {
                let mut sum = T::zero();
                for k in 0..N {
                    sum = sum + self[(k, i)] * b[(j, k)];
                }
                out[(i, j)] = sum;
            }
        }
        out
    }

    /// `self = selfᵀ · b`.
    pub fn mul_transpose_left_assign(&mut self, b: &Self) {
        *self = self.mul_transpose_left(b);
    }

    /// `self = self · bᵀ`.
    pub fn mul_transpose_right_assign(&mut self, b: &Self) {
        *self = self.mul_transpose_right(b);
    }

    /// `self = selfᵀ · bᵀ`.
    pub fn mul_transpose_both_assign(&mut self, b: &Self) {
        *self = self.mul_transpose_both(b);
    }

    /// `self = aᵀ · b`.
    pub fn set_mul_transpose_left(&mut self, a: &Self, b: &Self) {
        *self = a.mul_transpose_left(b);
    }

    /// `self = a · bᵀ`.
    pub fn set_mul_transpose_right(&mut self, a: &Self, b: &Self) {
        *self = a.mul_transpose_right(b);
    }

    /// `self = aᵀ · bᵀ`.
    pub fn set_mul_transpose_both(&mut self, a: &Self, b: &Self) {
        *self = a.mul_transpose_both(b);
    }
}

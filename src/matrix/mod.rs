pub mod aliases;
mod closed_form;
mod inplace;
mod norm;
mod ops;
mod square;
mod util;
pub mod vector;

use core::ops::{Index, IndexMut};

use crate::traits::Scalar;

pub use closed_form::ClosedForm;

/// Fixed-size matrix with `M` rows and `N` columns.
///
/// Storage is column-major: `data[col][row]`.
/// Stack-allocated, no-std compatible. Two matrices are equal iff every
/// entry compares equal; see [`Matrix::epsilon_eq`] for approximate equality.
///
/// # Examples
///
/// ```
/// use smallmat::Matrix;
///
/// let a = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
/// assert_eq!(a[(0, 1)], 2.0);
/// assert_eq!(a.nrows(), 2);
/// assert_eq!(a.ncols(), 2);
///
/// let b: Matrix<f64, 3, 3> = Matrix::eye();
/// assert_eq!(b[(0, 0)], 1.0);
/// assert_eq!(b[(0, 1)], 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix<T, const M: usize, const N: usize> {
    pub(crate) data: [[T; M]; N],
}

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix from a row-major 2D array.
    ///
    /// The input is `[[row0], [row1], ...]` (M arrays of N elements each).
    /// Internally transposed to column-major storage.
    #[inline]
    pub fn new(rows: [[T; N]; M]) -> Self
    where
        T: Copy,
    {
        // Transpose row-major input to column-major internal storage
        let init = rows[0][0];
        let mut data: [[T; M]; N] = [[init; M]; N];
        let mut col = 0;
        while col < N {
            let mut row = 0;
            while row < M {
                data[col][row] = rows[row][col];
                row += 1;
            }
            col += 1;
        }
        Self { data }
    }

    /// Number of rows.
    #[inline]
    pub const fn nrows(&self) -> usize {
        M
    }

    /// Number of columns.
    #[inline]
    pub const fn ncols(&self) -> usize {
        N
    }
}

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix filled with zeros.
    pub fn zeros() -> Self {
        Self {
            data: [[T::zero(); M]; N],
        }
    }

    /// Create a matrix from `M * N` values given in row-major order.
    ///
    /// Panics if `values.len() != M * N`.
    ///
    /// ```
    /// use smallmat::Matrix2;
    /// let m: Matrix2<f64> = Matrix2::from_row_slice(&[1.0, 2.0, 3.0, 4.0]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn from_row_slice(values: &[T]) -> Self {
        assert_eq!(
            values.len(),
            M * N,
            "from_row_slice expects {} values for a {M}×{N} matrix",
            M * N
        );
        let mut out = Self::zeros();
        for i in 0..M {
            for j in 0..N {
                out.data[j][i] = values[i * N + j];
            }
        }
        out
    }

    /// Overwrite every entry from a row-major 2D array.
    ///
    /// ```
    /// use smallmat::Matrix2;
    /// let mut m: Matrix2<f64> = Matrix2::eye();
    /// m.set([[1.0, 2.0], [3.0, 4.0]]);
    /// assert_eq!(m[(1, 0)], 3.0);
    /// ```
    pub fn set(&mut self, rows: [[T; N]; M]) {
        for (i, row) in rows.iter().enumerate() {
            for (j, &v) in row.iter().enumerate() {
                self.data[j][i] = v;
            }
        }
    }

    /// Copy every entry of `other` into `self`.
    #[inline]
    pub fn set_from(&mut self, other: &Self) {
        self.data = other.data;
    }
}

impl<T: Scalar, const N: usize> Matrix<T, N, N> {
    /// Create an identity matrix (square matrices only).
    pub fn eye() -> Self {
        let mut m = Self::zeros();
        for i in 0..N {
            m.data[i][i] = T::one();
        }
        m
    }
}

impl<T: Scalar, const N: usize> Default for Matrix<T, N, N> {
    /// The zero matrix.
    fn default() -> Self {
        Self::zeros()
    }
}

// Index by (row, col) tuple
impl<T, const M: usize, const N: usize> Index<(usize, usize)> for Matrix<T, M, N> {
    type Output = T;

    #[inline]
    fn index(&self, (row, col): (usize, usize)) -> &T {
        &self.data[col][row]
    }
}

impl<T, const M: usize, const N: usize> IndexMut<(usize, usize)> for Matrix<T, M, N> {
    #[inline]
    fn index_mut(&mut self, (row, col): (usize, usize)) -> &mut T {
        &mut self.data[col][row]
    }
}

pub use aliases::*;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zeros_and_eye() {
        let z: Matrix<f64, 3, 3> = Matrix::zeros();
        assert_eq!(z[(0, 0)], 0.0);
        assert_eq!(z[(2, 2)], 0.0);

        let id: Matrix<f64, 3, 3> = Matrix::eye();
        assert_eq!(id[(0, 0)], 1.0);
        assert_eq!(id[(1, 1)], 1.0);
        assert_eq!(id[(0, 1)], 0.0);
    }

    #[test]
    fn new_and_index() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        assert_eq!(m[(0, 0)], 1.0);
        assert_eq!(m[(0, 1)], 2.0);
        assert_eq!(m[(1, 0)], 3.0);
        assert_eq!(m[(1, 1)], 4.0);
    }

    #[test]
    fn index_mut() {
        let mut m: Matrix<f64, 2, 2> = Matrix::zeros();
        m[(0, 1)] = 5.0;
        assert_eq!(m[(0, 1)], 5.0);
    }

    #[test]
    #[should_panic]
    fn index_out_of_range() {
        let m: Matrix<f64, 3, 3> = Matrix::eye();
        let _ = m[(3, 0)];
    }

    #[test]
    fn from_row_slice() {
        let m: Matrix<f64, 3, 3> =
            Matrix::from_row_slice(&[1.0, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
        assert_eq!(m, Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]));
    }

    #[test]
    #[should_panic(expected = "expects 4 values")]
    fn from_row_slice_wrong_length() {
        let _: Matrix<f64, 2, 2> = Matrix::from_row_slice(&[1.0, 2.0, 3.0]);
    }

    #[test]
    fn set_from_copies() {
        let src = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let mut dst: Matrix<f64, 2, 2> = Matrix::default();
        dst.set_from(&src);
        assert_eq!(dst, src);
    }

    #[test]
    fn default_is_zero() {
        let m: Matrix<f64, 4, 4> = Matrix::default();
        assert_eq!(m, Matrix::zeros());
    }

    #[test]
    fn integer_matrix() {
        let m: Matrix<i32, 2, 2> = Matrix::eye();
        assert_eq!(m[(0, 0)], 1);
        assert_eq!(m[(0, 1)], 0);
    }
}

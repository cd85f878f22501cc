use core::fmt::{self, Write as _};

use crate::matrix::vector::Vector;
use crate::traits::Scalar;
use crate::Matrix;

// ── Constructors ────────────────────────────────────────────────────

impl<T, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Create a matrix by calling `f(row, col)` for each element.
    ///
    /// ```
    /// use smallmat::Matrix;
    /// let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| {
    ///     if i == j { 1.0 } else { 0.0 }
    /// });
    /// assert_eq!(m, Matrix::eye());
    /// ```
    pub fn from_fn(mut f: impl FnMut(usize, usize) -> T) -> Self
    where
        T: Copy + Default,
    {
        let mut data = [[T::default(); M]; N];
        for j in 0..N {
            for i in 0..M {
                data[j][i] = f(i, j);
            }
        }
        Self { data }
    }
}

// ── Row / Column access ─────────────────────────────────────────────

impl<T: Scalar, const M: usize, const N: usize> Matrix<T, M, N> {
    /// Extract column `j` as a row vector.
    ///
    /// ```
    /// use smallmat::Matrix;
    /// let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
    /// let c = m.col(1);
    /// assert_eq!(c.to_array(), [2.0, 4.0]);
    /// ```
    pub fn col(&self, j: usize) -> Vector<T, M> {
        Vector::from_array(self.data[j])
    }

    /// Copy row `i` into `out`.
    ///
    /// Panics unless `out.len() == N`.
    pub fn get_row(&self, i: usize, out: &mut [T]) {
        assert_eq!(out.len(), N, "get_row: buffer length must equal the column count {N}");
        for (j, o) in out.iter_mut().enumerate() {
            *o = self[(i, j)];
        }
    }

    /// Copy column `j` into `out`.
    ///
    /// Panics unless `out.len() == M`.
    pub fn get_column(&self, j: usize, out: &mut [T]) {
        assert_eq!(out.len(), M, "get_column: buffer length must equal the row count {M}");
        out.copy_from_slice(&self.data[j]);
    }

    /// Overwrite row `i` from `values`.
    ///
    /// Panics unless `values.len() == N`.
    pub fn set_row_from_slice(&mut self, i: usize, values: &[T]) {
        assert_eq!(
            values.len(),
            N,
            "set_row_from_slice: buffer length must equal the column count {N}"
        );
        for (j, &v) in values.iter().enumerate() {
            self[(i, j)] = v;
        }
    }

    /// Overwrite column `j` from `values`.
    ///
    /// Panics unless `values.len() == M`.
    ///
    /// ```
    /// use smallmat::Matrix3;
    /// let mut m: Matrix3<f64> = Matrix3::zeros();
    /// m.set_column_from_slice(2, &[1.0, 2.0, 3.0]);
    /// assert_eq!(m[(1, 2)], 2.0);
    /// ```
    pub fn set_column_from_slice(&mut self, j: usize, values: &[T]) {
        assert_eq!(
            values.len(),
            M,
            "set_column_from_slice: buffer length must equal the row count {M}"
        );
        self.data[j].copy_from_slice(values);
    }
}

// ── Display ─────────────────────────────────────────────────────────

impl<T: fmt::Display, const M: usize, const N: usize> fmt::Display for Matrix<T, M, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Find max width per column for alignment
        let mut widths = [0usize; N];
        for j in 0..N {
            for i in 0..M {
                let w = WriteCounting::count(|wc| write!(wc, "{}", self[(i, j)]));
                if w > widths[j] {
                    widths[j] = w;
                }
            }
        }

        for i in 0..M {
            write!(f, "│")?;
            for j in 0..N {
                if j > 0 {
                    write!(f, "  ")?;
                }
                write!(f, "{:>width$}", self[(i, j)], width = widths[j])?;
            }
            write!(f, "│")?;
            if i < M - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

/// Helper to count characters written, without allocating.
struct WriteCounting {
    count: usize,
}

impl WriteCounting {
    fn count(f: impl FnOnce(&mut Self) -> fmt::Result) -> usize {
        let mut wc = WriteCounting { count: 0 };
        let _ = f(&mut wc);
        wc.count
    }
}

impl fmt::Write for WriteCounting {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.count += s.chars().count();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_fn() {
        let m: Matrix<f64, 3, 3> = Matrix::from_fn(|i, j| if i == j { 1.0 } else { 0.0 });
        assert_eq!(m, Matrix::eye());
    }

    #[test]
    fn col_access() {
        let m = Matrix::new([[1.0, 2.0, 3.0], [4.0, 5.0, 6.0], [7.0, 8.0, 9.0]]);

        let c1 = m.col(1);
        assert_eq!(c1[0], 2.0);
        assert_eq!(c1[1], 5.0);
        assert_eq!(c1[2], 8.0);
    }

    #[test]
    fn slice_access() {
        let mut m: Matrix<f64, 3, 3> = Matrix::zeros();
        m.set_row_from_slice(1, &[1.0, 2.0, 3.0]);
        m.set_column_from_slice(0, &[9.0, 8.0, 7.0]);

        let mut row = [0.0; 3];
        m.get_row(1, &mut row);
        assert_eq!(row, [8.0, 2.0, 3.0]);

        let mut col = [0.0; 3];
        m.get_column(2, &mut col);
        assert_eq!(col, [0.0, 3.0, 0.0]);
    }

    #[test]
    #[should_panic(expected = "buffer length")]
    fn get_row_short_buffer() {
        let m: Matrix<f64, 3, 3> = Matrix::eye();
        let mut out = [0.0; 2];
        m.get_row(0, &mut out);
    }

    #[test]
    #[should_panic(expected = "buffer length")]
    fn set_column_long_buffer() {
        let mut m: Matrix<f64, 2, 2> = Matrix::eye();
        m.set_column_from_slice(0, &[1.0, 2.0, 3.0]);
    }

    #[test]
    fn display_2x2() {
        let m = Matrix::new([[1.0, 2.0], [3.0, 4.0]]);
        let s = format!("{}", m);
        assert!(s.contains("1"));
        assert!(s.contains("4"));
        assert_eq!(s.lines().count(), 2);
    }

    #[test]
    fn display_alignment() {
        let m = Matrix::new([[1, 100], [1000, 2]]);
        let s = format!("{}", m);
        let lines: Vec<&str> = s.lines().collect();
        assert_eq!(lines[0].len(), lines[1].len());
    }
}

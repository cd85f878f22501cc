use crate::matrix::vector::Vector;
use crate::traits::FloatScalar;
use crate::Matrix;

/// Tuning for the Jacobi eigenvalue iteration.
///
/// ```
/// use smallmat::linalg::JacobiParams;
/// let p = JacobiParams::<f64> { max_sweeps: 8, ..Default::default() };
/// assert_eq!(p.tolerance, f64::EPSILON);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JacobiParams<T> {
    /// Upper bound on full sweeps over the off-diagonal pairs. Hitting it is
    /// not an error; the current estimate is returned.
    pub max_sweeps: usize,
    /// Iteration stops once the off-diagonal norm is at most
    /// `tolerance · ‖A‖_F`. Both sides are measured after dividing by the
    /// largest absolute entry of `A`, which leaves the test unchanged but
    /// keeps it finite over the whole floating-point range.
    pub tolerance: T,
}

impl<T: FloatScalar> Default for JacobiParams<T> {
    fn default() -> Self {
        Self {
            max_sweeps: 32,
            tolerance: T::epsilon(),
        }
    }
}

/// Eigendecomposition of a real symmetric matrix by cyclic Jacobi rotations.
///
/// Each sweep visits the pairs `(0,1), (0,2), …, (N-2,N-1)` in order and
/// applies the plane rotation that zeroes the current `(p,q)` entry to both
/// the working matrix and an accumulator that starts at the identity.
///
/// The pairs come out in the order the rotations leave them, **not sorted**;
/// use [`SymmetricEigen::sorted`] for ascending order. Column `i` of
/// [`eigenvectors`](SymmetricEigen::eigenvectors) belongs to
/// `eigenvalues()[i]`. A matrix that is already diagonal (zero and identity
/// included) takes no rotation, so its eigenvectors are the identity columns.
///
/// Only the upper triangle is trusted to match the lower one; feeding a
/// non-symmetric matrix gives meaningless output.
///
/// # Example
///
/// ```
/// use smallmat::Matrix2;
/// use smallmat::linalg::SymmetricEigen;
///
/// let a: Matrix2<f64> = Matrix2::new([[1.0, 5.0], [5.0, 2.0]]);
/// let eig = SymmetricEigen::new(&a);
/// assert!(eig.converged());
///
/// // Verify A * v ≈ λ * v for every pair
/// for k in 0..2 {
///     let v = eig.eigenvector(k);
///     let av = a.vecmul(&v);
///     for i in 0..2 {
///         assert!((av[i] - eig.eigenvalues()[k] * v[i]).abs() < 1e-10);
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SymmetricEigen<T, const N: usize> {
    eigenvalues: [T; N],
    eigenvectors: Matrix<T, N, N>,
    sweeps: usize,
    converged: bool,
}

impl<T: FloatScalar, const N: usize> SymmetricEigen<T, N> {
    /// Decompose with [`JacobiParams::default`].
    pub fn new(a: &Matrix<T, N, N>) -> Self {
        Self::with_params(a, JacobiParams::default())
    }

    /// Decompose with explicit iteration parameters.
    pub fn with_params(a: &Matrix<T, N, N>, params: JacobiParams<T>) -> Self {
        let mut w = *a;
        let mut v = Matrix::<T, N, N>::eye();

        // Convergence sums are taken on w / max|a_ij| so squaring neither
        // overflows for huge entries nor underflows for tiny ones.
        let mut scale = a.max_abs();
        if scale == T::zero() {
            scale = T::one();
        }
        let threshold =
            params.tolerance * params.tolerance * (*a / scale).frobenius_norm_squared();

        let mut sweeps = 0;
        let converged = loop {
            let off = (w / scale).upper_off_diagonal_norm_squared();
            if off <= threshold {
                break true;
            }
            if sweeps == params.max_sweeps {
                log::warn!(
                    "jacobi: no convergence after {} sweeps (off-diagonal {:?}, threshold {:?})",
                    sweeps,
                    off,
                    threshold
                );
                break false;
            }
            sweeps += 1;
            for p in 0..N {
                for q in (p + 1)..N {
                    if w[(p, q)] != T::zero() {
                        rotate(&mut w, &mut v, p, q);
                    }
                }
            }
            log::trace!("jacobi: sweep {} done, off-diagonal was {:?}", sweeps, off);
        };

        let mut eigenvalues = [T::zero(); N];
        for (i, e) in eigenvalues.iter_mut().enumerate() {
            *e = w[(i, i)];
        }

        Self {
            eigenvalues,
            eigenvectors: v,
            sweeps,
            converged,
        }
    }

    /// The eigenvalues, in rotation order.
    #[inline]
    pub fn eigenvalues(&self) -> &[T; N] {
        &self.eigenvalues
    }

    /// The eigenvector matrix (columns are eigenvectors).
    #[inline]
    pub fn eigenvectors(&self) -> &Matrix<T, N, N> {
        &self.eigenvectors
    }

    /// Eigenvector `i` as a vector.
    pub fn eigenvector(&self, i: usize) -> Vector<T, N> {
        self.eigenvectors.col(i)
    }

    /// Number of full sweeps performed.
    #[inline]
    pub fn sweeps(&self) -> usize {
        self.sweeps
    }

    /// `false` when the sweep cap was reached first.
    #[inline]
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Copy with the pairs reordered by ascending eigenvalue.
    ///
    /// ```
    /// use smallmat::Matrix3;
    /// use smallmat::linalg::SymmetricEigen;
    ///
    /// let a: Matrix3<f64> = Matrix3::new([
    ///     [1.0, 5.0, 0.0],
    ///     [5.0, 2.0, 3.0],
    ///     [0.0, 3.0, 1.0],
    /// ]);
    /// let eig = SymmetricEigen::new(&a).sorted();
    /// let vals = eig.eigenvalues();
    /// assert!(vals[0] <= vals[1] && vals[1] <= vals[2]);
    /// ```
    pub fn sorted(&self) -> Self {
        let mut out = *self;
        // Selection sort keeps each column swap paired with its value
        for i in 0..N {
            let mut min_idx = i;
            for j in (i + 1)..N {
                if out.eigenvalues[j] < out.eigenvalues[min_idx] {
                    min_idx = j;
                }
            }
            if min_idx != i {
                out.eigenvalues.swap(i, min_idx);
                for row in 0..N {
                    let tmp = out.eigenvectors[(row, i)];
                    out.eigenvectors[(row, i)] = out.eigenvectors[(row, min_idx)];
                    out.eigenvectors[(row, min_idx)] = tmp;
                }
            }
        }
        out
    }
}

/// Apply the Jacobi rotation that zeroes `w[(p, q)]`, accumulating it in `v`.
fn rotate<T: FloatScalar, const N: usize>(
    w: &mut Matrix<T, N, N>,
    v: &mut Matrix<T, N, N>,
    p: usize,
    q: usize,
) {
    let one = T::one();
    let two = one + one;
    let half = one / two;

    let apq = w[(p, q)];
    let app = w[(p, p)];
    let aqq = w[(q, q)];

    // tan of the rotation angle, smaller root of t² + 2ut - 1 = 0
    let u = (aqq - app) / (two * apq);
    let u2 = u * u;
    let t = if u2.is_infinite() {
        half / u
    } else {
        let sign = if u < T::zero() { -one } else { one };
        sign / (u.abs() + (u2 + one).sqrt())
    };
    let c = one / (t * t + one).sqrt();
    let s = c * t;

    w[(p, p)] = app - t * apq;
    w[(q, q)] = aqq + t * apq;
    w[(p, q)] = T::zero();
    w[(q, p)] = T::zero();

    for r in 0..N {
        if r == p || r == q {
            continue;
        }
        let arp = w[(r, p)];
        let arq = w[(r, q)];
        let new_rp = c * arp - s * arq;
        let new_rq = s * arp + c * arq;
        w[(r, p)] = new_rp;
        w[(p, r)] = new_rp;
        w[(r, q)] = new_rq;
        w[(q, r)] = new_rq;
    }

    for i in 0..N {
        let vip = v[(i, p)];
        let viq = v[(i, q)];
        v[(i, p)] = c * vip - s * viq;
        v[(i, q)] = s * vip + c * viq;
    }
}

/// Convenience methods for symmetric eigendecomposition.
impl<T: FloatScalar, const N: usize> Matrix<T, N, N> {
    /// Symmetric eigendecomposition with default parameters.
    ///
    /// ```
    /// use smallmat::Matrix;
    ///
    /// let a = Matrix::new([[5.0_f64, 2.0], [2.0, 2.0]]);
    /// let eig = a.eig_symmetric().sorted();
    /// let vals = eig.eigenvalues();
    /// assert!((vals[0] - 1.0).abs() < 1e-10);
    /// assert!((vals[1] - 6.0).abs() < 1e-10);
    /// ```
    pub fn eig_symmetric(&self) -> SymmetricEigen<T, N> {
        SymmetricEigen::new(self)
    }

    /// Write the eigenvectors of `self` into the columns of `eigenvectors`
    /// and return the matching eigenvalues.
    pub fn eigenvectors_of_symmetric(&self, eigenvectors: &mut Self) -> [T; N] {
        let eig = SymmetricEigen::new(self);
        eigenvectors.set_from(eig.eigenvectors());
        eig.eigenvalues
    }
}

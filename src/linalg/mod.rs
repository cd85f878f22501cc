pub(crate) mod covariance;
pub(crate) mod jacobi;
pub(crate) mod orthonormal;

pub use covariance::Covariance;
pub use jacobi::{JacobiParams, SymmetricEigen};

/// Errors from the checked linear algebra entry points.
///
/// The unchecked paths (`inverse`, `normalize_cp`) never fail; they let
/// `NaN` / `±inf` propagate instead.
///
/// ```
/// use smallmat::Matrix;
/// use smallmat::linalg::{Covariance, LinalgError};
///
/// let singular = Matrix::new([[1.0_f64, 2.0], [2.0, 4.0]]);
/// assert_eq!(singular.try_inverse().unwrap_err(), LinalgError::Singular);
///
/// let none: [[f64; 2]; 0] = [];
/// assert_eq!(Covariance::new(&none).unwrap_err(), LinalgError::EmptyInput);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LinalgError {
    /// Determinant is exactly zero.
    Singular,
    /// An estimator was given no samples.
    EmptyInput,
}

impl core::fmt::Display for LinalgError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            LinalgError::Singular => write!(f, "matrix is singular"),
            LinalgError::EmptyInput => write!(f, "at least one sample is required"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LinalgError {}

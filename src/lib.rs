//! # smallmat
//!
//! Fixed-size dense matrix kernel for 2D/3D geometry, no-std compatible.
//! Everything lives on the stack; there is no heap allocation anywhere.
//!
//! ## Quick start
//!
//! ```
//! use smallmat::{ClosedForm, Matrix3};
//!
//! let a: Matrix3<f64> = Matrix3::new([
//!     [2.0, 1.0, -1.0],
//!     [-3.0, -1.0, 2.0],
//!     [-2.0, 1.0, 2.0],
//! ]);
//! assert_eq!(a.determinant(), -1.0);
//!
//! let inv = a.inverse();
//! assert!((a * inv).epsilon_eq(&Matrix3::eye(), 1e-12));
//!
//! // Matrix-vector product through any coordinate type
//! let p = a.transform(&(1.0, 0.0, 0.0));
//! assert_eq!(p, (2.0, -3.0, -2.0));
//! ```
//!
//! ## Modules
//!
//! - [`matrix`]: `Matrix<T, M, N>` with const-generic dimensions and
//!   column-major `[[T; M]; N]` storage. Arithmetic comes in three shapes:
//!   mutate-self (`m.add_matrix(&b)`), write-into-destination
//!   (`dst.set_sum(&a, &b)`) and return-new (`a + b`). Square matrices add
//!   `Aᵀ·B` / `A·Bᵀ` / `Aᵀ·Bᵀ` products without a transposed copy, exact
//!   `is_symmetric` / `is_identity`, and the [`ClosedForm`] determinant and
//!   adjugate for 2×2, 3×3 and 4×4.
//!
//! - [`linalg`]: Column orthonormalization (`normalize_cp`,
//!   `orthonormalize`), the Jacobi [`SymmetricEigen`] solver, and the
//!   [`Covariance`] estimator.
//!
//! - [`traits`]: Element traits:
//!   - [`Scalar`]: all matrix elements (`Copy + PartialEq + Debug + Zero + One + Num`)
//!   - [`FloatScalar`]: real floats (`Scalar + Float`), needed wherever a `sqrt` is
//!   - [`Coordinates`]: indexed component access for point/vector types
//!
//! ## Error behaviour
//!
//! The unchecked numeric paths follow IEEE-754: inverting a singular matrix
//! or normalizing a zero column yields `NaN` / `±inf` entries. The checked
//! entry points ([`Matrix::try_inverse`], [`Covariance::new`]) return
//! [`LinalgError`]. Wrong buffer lengths on slice accessors panic.
//!
//! ## Logging
//!
//! The Jacobi solver reports progress through the [`log`] facade
//! (`trace` per sweep, `warn` when the sweep cap is hit). No logger is
//! installed by this crate.
//!
//! ## Cargo features
//!
//! | Feature | Default | Description |
//! |---------|---------|-------------|
//! | `std`   | yes     | Hardware FPU via system libm, `std::error::Error` for [`LinalgError`] |
//! | `libm`  | no      | Pure-Rust float math for `no_std` targets |

#![cfg_attr(not(feature = "std"), no_std)]

pub mod linalg;
pub mod matrix;
pub mod traits;

pub use linalg::{Covariance, JacobiParams, LinalgError, SymmetricEigen};
pub use matrix::aliases::{Matrix2, Matrix2d, Matrix3, Matrix3d, Matrix4, Matrix4d};
pub use matrix::vector::{Vector, Vector2, Vector3, Vector4};
pub use matrix::{ClosedForm, Matrix};
pub use traits::{Coordinates, FloatScalar, Scalar};

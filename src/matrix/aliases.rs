//! Pre-defined type aliases for the supported square sizes.

use crate::Matrix;

/// 2×2 matrix.
pub type Matrix2<T> = Matrix<T, 2, 2>;
/// 3×3 matrix.
pub type Matrix3<T> = Matrix<T, 3, 3>;
/// 4×4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;

/// 2×2 matrix of `f64`.
pub type Matrix2d = Matrix2<f64>;
/// 3×3 matrix of `f64`.
pub type Matrix3d = Matrix3<f64>;
/// 4×4 matrix of `f64`.
pub type Matrix4d = Matrix4<f64>;

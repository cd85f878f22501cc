use core::ops::{Index, IndexMut};

use crate::traits::{Coordinates, Scalar};
use crate::Matrix;

/// A row vector (1×N matrix).
///
/// Vectors support single-index access (`v[i]`), dot products, norms, and
/// cross products (3-element vectors).
///
/// # Examples
///
/// ```
/// use smallmat::Vector;
///
/// let v = Vector::from_array([3.0_f64, 4.0]);
/// assert_eq!(v[0], 3.0);
/// assert_eq!(v.dot(&v), 25.0);
/// assert!((v.norm() - 5.0).abs() < 1e-12);
/// ```
pub type Vector<T, const N: usize> = Matrix<T, 1, N>;

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Create a vector from a 1D array.
    ///
    /// ```
    /// use smallmat::Vector;
    /// let v = Vector::from_array([1.0, 2.0, 3.0]);
    /// assert_eq!(v[0], 1.0);
    /// ```
    #[inline]
    pub fn from_array(data: [T; N]) -> Self {
        Self::new([data])
    }

    /// The components as an array.
    #[inline]
    pub fn to_array(&self) -> [T; N] {
        self.data.map(|c| c[0])
    }

    /// Dot product of two vectors.
    ///
    /// ```
    /// use smallmat::Vector;
    /// let a = Vector::from_array([1.0, 2.0, 3.0]);
    /// let b = Vector::from_array([4.0, 5.0, 6.0]);
    /// assert_eq!(a.dot(&b), 32.0); // 1*4 + 2*5 + 3*6
    /// ```
    #[inline]
    pub fn dot(&self, rhs: &Self) -> T {
        let mut sum = T::zero();
        for i in 0..N {
            sum = sum + self[(0, i)] * rhs[(0, i)];
        }
        sum
    }

    /// Outer product: `v.outer(w)` → N×P matrix where `result[i][j] = v[i] * w[j]`.
    pub fn outer<const P: usize>(&self, rhs: &Vector<T, P>) -> Matrix<T, N, P> {
        let mut out = Matrix::<T, N, P>::zeros();
        for i in 0..N {
            for j in 0..P {
                out[(i, j)] = self[i] * rhs[j];
            }
        }
        out
    }
}

// ── Vector size aliases ─────────────────────────────────────────────

/// A 2-element row vector.
pub type Vector2<T> = Vector<T, 2>;
/// A 3-element row vector.
///
/// Adds `cross()` for cross product in addition to all `Vector` methods.
pub type Vector3<T> = Vector<T, 3>;
/// A 4-element row vector.
pub type Vector4<T> = Vector<T, 4>;

impl<T: Scalar> Vector3<T> {
    /// Cross product of two 3-vectors.
    ///
    /// ```
    /// use smallmat::Vector3;
    /// let x = Vector3::from_array([1.0, 0.0, 0.0]);
    /// let y = Vector3::from_array([0.0, 1.0, 0.0]);
    /// let z = x.cross(&y);
    /// assert_eq!(z[2], 1.0); // x × y = z
    /// ```
    #[inline]
    pub fn cross(&self, rhs: &Self) -> Self {
        Self::from_array([
            self[1] * rhs[2] - self[2] * rhs[1],
            self[2] * rhs[0] - self[0] * rhs[2],
            self[0] * rhs[1] - self[1] * rhs[0],
        ])
    }
}

// ── Named component accessors ───────────────────────────────────────

macro_rules! impl_named_components {
    ($n:literal: $($get:ident, $set:ident => $idx:literal),*) => {
        impl<T: Copy> Vector<T, $n> {
            $(
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$idx][0]
                }

                #[inline]
                pub fn $set(&mut self, value: T) {
                    self.data[$idx][0] = value;
                }
            )*
        }
    };
}

impl_named_components!(2: x, set_x => 0, y, set_y => 1);
impl_named_components!(3: x, set_x => 0, y, set_y => 1, z, set_z => 2);
impl_named_components!(4: x, set_x => 0, y, set_y => 1, z, set_z => 2, w, set_w => 3);

impl<T: Scalar, const N: usize> Coordinates<T, N> for Vector<T, N> {
    #[inline]
    fn coord(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn from_coords(coords: [T; N]) -> Self {
        Self::from_array(coords)
    }
}

// Single-index access: v[i] instead of v[(0, i)]
impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self[(0, i)]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self[(0, i)]
    }
}

use core::fmt::Debug;
use num_traits::{Float, Num, One, Zero};

/// Trait for types that can be used as matrix elements.
///
/// Blanket-implemented for all types satisfying the bounds.
/// Covers `f32`, `f64`, and all integer types.
pub trait Scalar: Copy + PartialEq + Debug + Zero + One + Num {}

impl<T: Copy + PartialEq + Debug + Zero + One + Num> Scalar for T {}

/// Trait for floating-point matrix elements.
///
/// Required by operations that need `sqrt`, `abs`, `NaN` or an epsilon:
/// inversion, orthonormalization, the eigen-solver and covariance.
pub trait FloatScalar: Scalar + Float {}

impl<T: Scalar + Float> FloatScalar for T {}

/// Component access for external vector and point types.
///
/// This is the only thing the kernel needs from a geometry layer: read a
/// coordinate by index and build a value back from raw components. Index
/// 0 is X, 1 is Y, 2 is Z, 3 is W.
///
/// ```
/// use smallmat::{Coordinates, Matrix3};
///
/// let rot: Matrix3<f64> = Matrix3::new([[0.0, -1.0, 0.0], [1.0, 0.0, 0.0], [0.0, 0.0, 1.0]]);
/// let p = rot.transform(&(1.0, 0.0, 5.0));
/// assert_eq!(p, (0.0, 1.0, 5.0));
/// assert_eq!(p.coord(2), 5.0);
/// ```
pub trait Coordinates<T, const N: usize> {
    /// Component `i`. Panics if `i >= N`.
    fn coord(&self, i: usize) -> T;

    /// Build a value from its components.
    fn from_coords(coords: [T; N]) -> Self;

    /// All components as an array.
    fn to_coords(&self) -> [T; N]
    where
        T: Copy + Default,
    {
        let mut out = [T::default(); N];
        for (i, c) in out.iter_mut().enumerate() {
            *c = self.coord(i);
        }
        out
    }
}

impl<T: Copy, const N: usize> Coordinates<T, N> for [T; N] {
    #[inline]
    fn coord(&self, i: usize) -> T {
        self[i]
    }

    #[inline]
    fn from_coords(coords: [T; N]) -> Self {
        coords
    }
}

impl<T: Copy> Coordinates<T, 2> for (T, T) {
    #[inline]
    fn coord(&self, i: usize) -> T {
        match i {
            0 => self.0,
            1 => self.1,
            _ => panic!("coordinate index {i} out of range for a 2D tuple"),
        }
    }

    #[inline]
    fn from_coords([x, y]: [T; 2]) -> Self {
        (x, y)
    }
}

impl<T: Copy> Coordinates<T, 3> for (T, T, T) {
    #[inline]
    fn coord(&self, i: usize) -> T {
        match i {
            0 => self.0,
            1 => self.1,
            2 => self.2,
            _ => panic!("coordinate index {i} out of range for a 3D tuple"),
        }
    }

    #[inline]
    fn from_coords([x, y, z]: [T; 3]) -> Self {
        (x, y, z)
    }
}

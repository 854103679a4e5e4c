use crate::contract::Violation;
use crate::{dcheck, check, Direction3, Normal3, Real, Scalar};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 3D displacement with no fixed origin.
///
/// Invariant: no component is NaN (checked at construction in contract builds).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Vector3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let v = Self { x, y, z };
        dcheck!(!v.has_nans(), Violation::NaN { ty: "Vector3" });
        v
    }

    #[inline]
    pub fn zero() -> Self { Self::new(T::ZERO, T::ZERO, T::ZERO) }

    #[inline]
    pub fn splat(v: T) -> Self { Self::new(v, v, v) }

    #[inline]
    pub fn from_normal(n: Normal3<T>) -> Self { Self::new(n.x, n.y, n.z) }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    /// Dot product against another vector or a normal.
    #[inline]
    pub fn dot(self, rhs: impl Direction3<T>) -> T {
        let (x, y, z) = rhs.xyz();
        self.x * x + self.y * y + self.z * z
    }

    #[inline]
    pub fn abs_dot(self, rhs: impl Direction3<T>) -> T {
        self.dot(rhs).abs()
    }

    /// Flips `self` into the hemisphere around `reference`.
    #[inline]
    pub fn face_forward(self, reference: impl Direction3<T>) -> Self {
        if self.dot(reference) < T::ZERO { -self } else { self }
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.x * self.x + self.y * self.y + self.z * self.z
    }

    /// Cross product, evaluated in `f64` and rounded back to `T` once.
    ///
    /// Widening first keeps the three difference-of-products terms from
    /// cancelling catastrophically when `T` is `f32`.
    #[inline]
    pub fn cross(self, rhs: Self) -> Self {
        let (ax, ay, az) = (self.x.to_f64(), self.y.to_f64(), self.z.to_f64());
        let (bx, by, bz) = (rhs.x.to_f64(), rhs.y.to_f64(), rhs.z.to_f64());
        Self::new(
            T::from_f64(ay * bz - az * by),
            T::from_f64(az * bx - ax * bz),
            T::from_f64(ax * by - ay * bx),
        )
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs(), self.z.abs())
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y), self.z.min(other.z))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y), self.z.max(other.z))
    }

    #[inline]
    pub fn min_element(self) -> T {
        self.x.min(self.y.min(self.z))
    }

    #[inline]
    pub fn max_element(self) -> T {
        self.x.max(self.y.max(self.z))
    }

    /// Index of the largest component. Ties go to the later axis.
    #[inline]
    pub fn max_dimension(self) -> usize {
        if self.x > self.y {
            if self.x > self.z { 0 } else { 2 }
        } else if self.y > self.z {
            1
        } else {
            2
        }
    }

    /// `(self[x], self[y], self[z])`
    #[inline]
    pub fn permute(self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector3<U> {
        Vector3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }

    #[inline]
    pub fn as_array(&self) -> [T; 3] {
        [self.x, self.y, self.z]
    }
}

impl<T: Real> Vector3<T> {
    #[inline]
    pub fn length(self) -> T { self.length_squared().sqrt() }

    /// A zero vector trips the zero-divisor check.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }

    /// Completes `self` to a right-handed orthonormal basis `(self, v2, v3)`.
    ///
    /// `self` must be unit length. `v2` zeroes whichever of x/y has the smaller
    /// magnitude, so its divisor never collapses to zero.
    pub fn coordinate_system(self) -> (Self, Self) {
        let v2 = if self.x.abs() > self.y.abs() {
            Self::new(-self.z, T::ZERO, self.x) / (self.x * self.x + self.z * self.z).sqrt()
        } else {
            Self::new(T::ZERO, self.z, -self.y) / (self.y * self.y + self.z * self.z).sqrt()
        };
        let v3 = self.cross(v2);
        (v2, v3)
    }
}

impl<T: Scalar> Default for Vector3<T> {
    fn default() -> Self { Self::zero() }
}

impl<T: Scalar> From<[T; 3]> for Vector3<T> {
    fn from(a: [T; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<T: Scalar> From<Vector3<T>> for [T; 3] {
    fn from(v: Vector3<T>) -> Self { [v.x, v.y, v.z] }
}

impl<T: Scalar> From<Normal3<T>> for Vector3<T> {
    #[inline]
    fn from(n: Normal3<T>) -> Self { Self::from_normal(n) }
}

impl<T: Scalar> Index<usize> for Vector3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        dcheck!(i < 3, Violation::IndexOutOfRange { ty: "Vector3", index: i, len: 3 });
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        dcheck!(i < 3, Violation::IndexOutOfRange { ty: "Vector3", index: i, len: 3 });
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

impl<T: Scalar> Add for Vector3<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Vector3<T> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Neg for Vector3<T> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl<T: Scalar> Mul<T> for Vector3<T> {
    type Output = Self;
    #[inline] fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector3<T> {
    type Output = Self;
    #[inline] fn div(self, rhs: T) -> Self {
        check!(rhs != T::ZERO, Violation::ZeroDivisor { ty: "Vector3" });
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector3<T> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<T: Scalar> SubAssign for Vector3<T> {
    #[inline] fn sub_assign(&mut self, rhs: Self) { *self = *self - rhs; }
}

impl<T: Scalar> MulAssign<T> for Vector3<T> {
    #[inline] fn mul_assign(&mut self, rhs: T) { *self = *self * rhs; }
}

impl<T: Scalar> DivAssign<T> for Vector3<T> {
    #[inline] fn div_assign(&mut self, rhs: T) { *self = *self / rhs; }
}

// Scalar * Vector3 (commutative)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector3<$t>> for $t {
            type Output = Vector3<$t>;
            #[inline] fn mul(self, rhs: Vector3<$t>) -> Vector3<$t> { rhs * self }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

impl<T: Scalar> core::fmt::Display for Vector3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[{}, {}, {}]", self.x, self.y, self.z)
    }
}

use crate::contract::Violation;
use crate::{dcheck, check, Real, Scalar, Vector3};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A point in 3D space (distinct from Vector3: points have position, vectors have direction).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Point3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let p = Self { x, y, z };
        dcheck!(!p.has_nans(), Violation::NaN { ty: "Point3" });
        p
    }

    #[inline]
    pub fn origin() -> Self { Self::new(T::ZERO, T::ZERO, T::ZERO) }

    #[inline]
    pub fn to_vec(self) -> Vector3<T> { Vector3::new(self.x, self.y, self.z) }

    #[inline]
    pub fn from_vec(v: Vector3<T>) -> Self { Self::new(v.x, v.y, v.z) }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    #[inline]
    pub fn distance_squared(self, other: Self) -> T { (self - other).length_squared() }

    /// `(1 - t) * self + t * other`
    #[inline]
    pub fn lerp(self, other: Self, t: T) -> Self {
        self * (T::ONE - t) + other * t
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
    pub fn abs(self) -> Self { Self::new(self.x.abs(), self.y.abs(), self.z.abs()) }

    /// `(self[x], self[y], self[z])`
    #[inline]
    pub fn permute(self, x: usize, y: usize, z: usize) -> Self {
        Self::new(self[x], self[y], self[z])
    }

    #[inline]
    pub fn cast<U: Scalar>(self) -> Point3<U> {
        Point3::new(
            U::from_f64(self.x.to_f64()),
            U::from_f64(self.y.to_f64()),
            U::from_f64(self.z.to_f64()),
        )
    }
}

impl<T: Real> Point3<T> {
    #[inline]
    pub fn distance(self, other: Self) -> T { (self - other).length() }

    #[inline]
    pub fn floor(self) -> Self { Self::new(self.x.floor(), self.y.floor(), self.z.floor()) }

    #[inline]
    pub fn ceil(self) -> Self { Self::new(self.x.ceil(), self.y.ceil(), self.z.ceil()) }
}

impl<T: Scalar> Default for Point3<T> {
    fn default() -> Self { Self::origin() }
}

impl<T: Scalar> From<Vector3<T>> for Point3<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self { Self::from_vec(v) }
}

impl<T: Scalar> From<Point3<T>> for Vector3<T> {
    #[inline]
    fn from(p: Point3<T>) -> Self { p.to_vec() }
}

impl<T: Scalar> From<[T; 3]> for Point3<T> {
    #[inline]
    fn from(a: [T; 3]) -> Self { Self::new(a[0], a[1], a[2]) }
}

impl<T: Scalar> Index<usize> for Point3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        dcheck!(i < 3, Violation::IndexOutOfRange { ty: "Point3", index: i, len: 3 });
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Point3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        dcheck!(i < 3, Violation::IndexOutOfRange { ty: "Point3", index: i, len: 3 });
        match i {
            0 => &mut self.x,
            1 => &mut self.y,
            _ => &mut self.z,
        }
    }
}

// Point - Point = Vec
impl<T: Scalar> Sub for Point3<T> {
    type Output = Vector3<T>;
    #[inline] fn sub(self, rhs: Self) -> Vector3<T> {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Point + Vec = Point
impl<T: Scalar> Add<Vector3<T>> for Point3<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Vector3<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

// Point - Vec = Point
impl<T: Scalar> Sub<Vector3<T>> for Point3<T> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Vector3<T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// Point + Point = Point, only meaningful inside weighted sums
impl<T: Scalar> Add for Point3<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Point3<T> {
    type Output = Self;
    #[inline] fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Point3<T> {
    type Output = Self;
    #[inline] fn div(self, rhs: T) -> Self {
        check!(rhs != T::ZERO, Violation::ZeroDivisor { ty: "Point3" });
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> AddAssign<Vector3<T>> for Point3<T> {
    #[inline] fn add_assign(&mut self, rhs: Vector3<T>) { *self = *self + rhs; }
}

impl<T: Scalar> SubAssign<Vector3<T>> for Point3<T> {
    #[inline] fn sub_assign(&mut self, rhs: Vector3<T>) { *self = *self - rhs; }
}

impl<T: Scalar> AddAssign for Point3<T> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<T: Scalar> MulAssign<T> for Point3<T> {
    #[inline] fn mul_assign(&mut self, rhs: T) { *self = *self * rhs; }
}

impl<T: Scalar> DivAssign<T> for Point3<T> {
    #[inline] fn div_assign(&mut self, rhs: T) { *self = *self / rhs; }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Point3<$t>> for $t {
            type Output = Point3<$t>;
            #[inline] fn mul(self, rhs: Point3<$t>) -> Point3<$t> { rhs * self }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

impl<T: Scalar> core::fmt::Display for Point3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(1.0, 2.0, 2.0);
        assert!((a.distance(b) - 3.0).abs() < 1e-10);
        assert_eq!(a.distance(b), b.distance(a));
    }

    #[test]
    fn difference_uses_matching_axes() {
        let p = Point3::new(5.0, 7.0, 11.0);
        let q = Point3::new(1.0, 2.0, 3.0);
        assert_eq!(p - q, Vector3::new(4.0, 5.0, 8.0));
        assert_eq!((p - q) + q.to_vec(), p.to_vec());
        assert_eq!(q + (p - q), p);
    }

    #[test]
    fn lerp_midpoint() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(10.0, 20.0, 30.0);
        assert_eq!(a.lerp(b, 0.5), Point3::new(5.0, 10.0, 15.0));
        assert_eq!(0.5 * a + 0.5 * b, Point3::new(5.0, 10.0, 15.0));
    }

    #[test]
    fn componentwise_helpers() {
        let a = Point3::new(1.0, -5.0, 3.5);
        let b = Point3::new(2.0, -6.0, 3.0);
        assert_eq!(a.component_min(b), Point3::new(1.0, -6.0, 3.0));
        assert_eq!(a.component_max(b), Point3::new(2.0, -5.0, 3.5));
        assert_eq!(a.floor(), Point3::new(1.0, -5.0, 3.0));
        assert_eq!(a.ceil(), Point3::new(1.0, -5.0, 4.0));
        assert_eq!(a.abs(), Point3::new(1.0, 5.0, 3.5));
        assert_eq!(a.permute(1, 2, 0), Point3::new(-5.0, 3.5, 1.0));
    }

    #[test]
    fn add_sub_assign() {
        let mut p = Point3::new(1.0, 2.0, 3.0);
        p += Vector3::new(10.0, 20.0, 30.0);
        assert_eq!(p, Point3::new(11.0, 22.0, 33.0));
        p -= Vector3::new(10.0, 20.0, 30.0);
        assert_eq!(p, Point3::new(1.0, 2.0, 3.0));
        p *= 2.0;
        assert_eq!(p, Point3::new(2.0, 4.0, 6.0));
    }

    #[test]
    #[should_panic(expected = "Point3 divided by zero")]
    fn zero_divisor() {
        let _ = Point3::new(1, 2, 3) / 0;
    }
}

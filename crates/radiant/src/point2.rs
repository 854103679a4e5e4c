use crate::contract::Violation;
use crate::{dcheck, check, Point3, Real, Scalar, Vector2};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};

/// A point in 2D space (distinct from Vector2: points have position, vectors have direction).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Point2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let p = Self { x, y };
        dcheck!(!p.has_nans(), Violation::NaN { ty: "Point2" });
        p
    }

    #[inline]
    pub fn origin() -> Self { Self::new(T::ZERO, T::ZERO) }

    #[inline]
    pub fn to_vec(self) -> Vector2<T> { Vector2::new(self.x, self.y) }

    #[inline]
    pub fn from_vec(v: Vector2<T>) -> Self { Self::new(v.x, v.y) }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
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
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    #[inline]
    pub fn abs(self) -> Self { Self::new(self.x.abs(), self.y.abs()) }

    #[inline]
    pub fn cast<U: Scalar>(self) -> Point2<U> {
        Point2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }
}

impl<T: Real> Point2<T> {
    #[inline]
    pub fn distance(self, other: Self) -> T { (self - other).length() }

    #[inline]
    pub fn floor(self) -> Self { Self::new(self.x.floor(), self.y.floor()) }

    #[inline]
    pub fn ceil(self) -> Self { Self::new(self.x.ceil(), self.y.ceil()) }
}

impl<T: Scalar> Default for Point2<T> {
    fn default() -> Self { Self::origin() }
}

impl<T: Scalar> From<Vector2<T>> for Point2<T> {
    #[inline]
    fn from(v: Vector2<T>) -> Self { Self::from_vec(v) }
}

impl<T: Scalar> From<Point2<T>> for Vector2<T> {
    #[inline]
    fn from(p: Point2<T>) -> Self { p.to_vec() }
}

/// Projection onto the xy plane.
impl<T: Scalar> From<Point3<T>> for Point2<T> {
    #[inline]
    fn from(p: Point3<T>) -> Self { Self::new(p.x, p.y) }
}

impl<T: Scalar> Index<usize> for Point2<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Point2", index: i, len: 2 });
        if i == 0 { &self.x } else { &self.y }
    }
}

impl<T: Scalar> IndexMut<usize> for Point2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Point2", index: i, len: 2 });
        if i == 0 { &mut self.x } else { &mut self.y }
    }
}

// Point - Point = Vec
impl<T: Scalar> Sub for Point2<T> {
    type Output = Vector2<T>;
    #[inline] fn sub(self, rhs: Self) -> Vector2<T> {
        Vector2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Point + Vec = Point
impl<T: Scalar> Add<Vector2<T>> for Point2<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Vector2<T>) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

// Point - Vec = Point
impl<T: Scalar> Sub<Vector2<T>> for Point2<T> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Vector2<T>) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

// Point + Point = Point, only meaningful inside weighted sums
impl<T: Scalar> Add for Point2<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Mul<T> for Point2<T> {
    type Output = Self;
    #[inline] fn mul(self, rhs: T) -> Self { Self::new(self.x * rhs, self.y * rhs) }
}

impl<T: Scalar> Div<T> for Point2<T> {
    type Output = Self;
    #[inline] fn div(self, rhs: T) -> Self {
        check!(rhs != T::ZERO, Violation::ZeroDivisor { ty: "Point2" });
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> AddAssign<Vector2<T>> for Point2<T> {
    #[inline] fn add_assign(&mut self, rhs: Vector2<T>) { *self = *self + rhs; }
}

impl<T: Scalar> SubAssign<Vector2<T>> for Point2<T> {
    #[inline] fn sub_assign(&mut self, rhs: Vector2<T>) { *self = *self - rhs; }
}

impl<T: Scalar> AddAssign for Point2<T> {
    #[inline] fn add_assign(&mut self, rhs: Self) { *self = *self + rhs; }
}

impl<T: Scalar> MulAssign<T> for Point2<T> {
    #[inline] fn mul_assign(&mut self, rhs: T) { *self = *self * rhs; }
}

impl<T: Scalar> DivAssign<T> for Point2<T> {
    #[inline] fn div_assign(&mut self, rhs: T) { *self = *self / rhs; }
}

macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Point2<$t>> for $t {
            type Output = Point2<$t>;
            #[inline] fn mul(self, rhs: Point2<$t>) -> Point2<$t> { rhs * self }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

use crate::contract::Violation;
use crate::{dcheck, check, Real, Scalar};
use core::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign};

/// A 2D displacement with no fixed origin.
///
/// Invariant: no component is NaN (checked at construction in contract builds).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vector2<T> {
    pub x: T,
    pub y: T,
}

impl<T: Scalar> Vector2<T> {
    #[inline]
    pub fn new(x: T, y: T) -> Self {
        let v = Self { x, y };
        dcheck!(!v.has_nans(), Violation::NaN { ty: "Vector2" });
        v
    }

    #[inline]
    pub fn zero() -> Self {
        Self::new(T::ZERO, T::ZERO)
    }

    #[inline]
    pub fn splat(v: T) -> Self {
        Self::new(v, v)
    }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    #[inline]
    pub fn dot(self, rhs: Self) -> T {
        self.x * rhs.x + self.y * rhs.y
    }

    #[inline]
    pub fn abs_dot(self, rhs: Self) -> T {
        self.dot(rhs).abs()
    }

    #[inline]
    pub fn length_squared(self) -> T {
        self.dot(self)
    }

    #[inline]
    pub fn abs(self) -> Self {
        Self::new(self.x.abs(), self.y.abs())
    }

    #[inline]
    pub fn component_min(self, other: Self) -> Self {
        Self::new(self.x.min(other.x), self.y.min(other.y))
    }

    #[inline]
    pub fn component_max(self, other: Self) -> Self {
        Self::new(self.x.max(other.x), self.y.max(other.y))
    }

    /// Explicit conversion to another scalar domain (narrowing uses `as` semantics).
    #[inline]
    pub fn cast<U: Scalar>(self) -> Vector2<U> {
        Vector2::new(U::from_f64(self.x.to_f64()), U::from_f64(self.y.to_f64()))
    }
}

impl<T: Real> Vector2<T> {
    #[inline]
    pub fn length(self) -> T {
        self.length_squared().sqrt()
    }

    /// A zero vector trips the zero-divisor check.
    #[inline]
    pub fn normalize(self) -> Self {
        self / self.length()
    }
}

impl<T: Scalar> Default for Vector2<T> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar> From<[T; 2]> for Vector2<T> {
    fn from(a: [T; 2]) -> Self {
        Self::new(a[0], a[1])
    }
}

impl<T: Scalar> Index<usize> for Vector2<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Vector2", index: i, len: 2 });
        if i == 0 {
            &self.x
        } else {
            &self.y
        }
    }
}

impl<T: Scalar> IndexMut<usize> for Vector2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Vector2", index: i, len: 2 });
        if i == 0 {
            &mut self.x
        } else {
            &mut self.y
        }
    }
}

impl<T: Scalar> Add for Vector2<T> {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl<T: Scalar> Sub for Vector2<T> {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl<T: Scalar> Neg for Vector2<T> {
    type Output = Self;
    #[inline]
    fn neg(self) -> Self {
        Self::new(-self.x, -self.y)
    }
}

impl<T: Scalar> Mul<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl<T: Scalar> Div<T> for Vector2<T> {
    type Output = Self;
    #[inline]
    fn div(self, rhs: T) -> Self {
        check!(rhs != T::ZERO, Violation::ZeroDivisor { ty: "Vector2" });
        Self::new(self.x / rhs, self.y / rhs)
    }
}

impl<T: Scalar> AddAssign for Vector2<T> {
    #[inline]
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl<T: Scalar> SubAssign for Vector2<T> {
    #[inline]
    fn sub_assign(&mut self, rhs: Self) {
        *self = *self - rhs;
    }
}

impl<T: Scalar> MulAssign<T> for Vector2<T> {
    #[inline]
    fn mul_assign(&mut self, rhs: T) {
        *self = *self * rhs;
    }
}

impl<T: Scalar> DivAssign<T> for Vector2<T> {
    #[inline]
    fn div_assign(&mut self, rhs: T) {
        *self = *self / rhs;
    }
}

// Scalar * Vector2 (commutative)
macro_rules! impl_scalar_lhs_mul {
    ($($t:ty),*) => {$(
        impl Mul<Vector2<$t>> for $t {
            type Output = Vector2<$t>;
            #[inline]
            fn mul(self, rhs: Vector2<$t>) -> Vector2<$t> {
                rhs * self
            }
        }
    )*};
}

impl_scalar_lhs_mul!(f32, f64, i32);

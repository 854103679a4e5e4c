use crate::contract::Violation;
use crate::{dcheck, check, Real, Scalar, Vector3};
use core::ops::{Add, Div, Index, Mul, Neg, Sub};

/// Anything that can take part in a 3D dot product: [`Vector3`] and [`Normal3`].
///
/// Lets `dot`, `abs_dot` and `face_forward` accept either operand type
/// without an implicit conversion between the two.
pub trait Direction3<T>: Copy {
    fn xyz(self) -> (T, T, T);
}

impl<T: Scalar> Direction3<T> for Vector3<T> {
    #[inline]
    fn xyz(self) -> (T, T, T) { (self.x, self.y, self.z) }
}

impl<T: Scalar> Direction3<T> for Normal3<T> {
    #[inline]
    fn xyz(self) -> (T, T, T) { (self.x, self.y, self.z) }
}

/// A surface normal.
///
/// Kept apart from [`Vector3`] because normals transform by the inverse
/// transpose under non-uniform scaling. Convert explicitly with
/// [`Normal3::from_vector`] / [`Vector3::from_normal`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Normal3<T> {
    pub x: T,
    pub y: T,
    pub z: T,
}

impl<T: Scalar> Normal3<T> {
    #[inline]
    pub fn new(x: T, y: T, z: T) -> Self {
        let n = Self { x, y, z };
        dcheck!(!n.has_nans(), Violation::NaN { ty: "Normal3" });
        n
    }

    #[inline]
    pub fn from_vector(v: Vector3<T>) -> Self { Self::new(v.x, v.y, v.z) }

    #[inline]
    pub fn has_nans(&self) -> bool {
        self.x.is_nan() || self.y.is_nan() || self.z.is_nan()
    }

    #[inline]
    pub fn dot(self, rhs: impl Direction3<T>) -> T {
        let (x, y, z) = rhs.xyz();
        self.x * x + self.y * y + self.z * z
    }

    #[inline]
    pub fn abs_dot(self, rhs: impl Direction3<T>) -> T {
        self.dot(rhs).abs()
    }

    /// `-self` if `self` points away from `reference`, otherwise `self`.
    ///
    /// Orients shading normals consistently with a geometric normal or an
    /// outgoing direction.
    #[inline]
    pub fn face_forward(self, reference: impl Direction3<T>) -> Self {
        if self.dot(reference) < T::ZERO { -self } else { self }
    }

    #[inline]
    pub fn length_squared(self) -> T { self.dot(self) }
}

impl<T: Real> Normal3<T> {
    #[inline]
    pub fn length(self) -> T { self.length_squared().sqrt() }

    #[inline]
    pub fn normalize(self) -> Self { self / self.length() }
}

impl<T: Scalar> Default for Normal3<T> {
    fn default() -> Self { Self::new(T::ZERO, T::ZERO, T::ZERO) }
}

impl<T: Scalar> From<Vector3<T>> for Normal3<T> {
    #[inline]
    fn from(v: Vector3<T>) -> Self { Self::from_vector(v) }
}

impl<T: Scalar> Index<usize> for Normal3<T> {
    type Output = T;
    #[inline]
    fn index(&self, i: usize) -> &T {
        dcheck!(i < 3, Violation::IndexOutOfRange { ty: "Normal3", index: i, len: 3 });
        match i {
            0 => &self.x,
            1 => &self.y,
            _ => &self.z,
        }
    }
}

impl<T: Scalar> Neg for Normal3<T> {
    type Output = Self;
    #[inline] fn neg(self) -> Self { Self::new(-self.x, -self.y, -self.z) }
}

impl<T: Scalar> Add for Normal3<T> {
    type Output = Self;
    #[inline] fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl<T: Scalar> Sub for Normal3<T> {
    type Output = Self;
    #[inline] fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl<T: Scalar> Mul<T> for Normal3<T> {
    type Output = Self;
    #[inline] fn mul(self, rhs: T) -> Self {
        Self::new(self.x * rhs, self.y * rhs, self.z * rhs)
    }
}

impl<T: Scalar> Div<T> for Normal3<T> {
    type Output = Self;
    #[inline] fn div(self, rhs: T) -> Self {
        check!(rhs != T::ZERO, Violation::ZeroDivisor { ty: "Normal3" });
        Self::new(self.x / rhs, self.y / rhs, self.z / rhs)
    }
}

impl<T: Scalar> core::fmt::Display for Normal3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Normal3[{}, {}, {}]", self.x, self.y, self.z)
    }
}

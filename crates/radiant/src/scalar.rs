use core::fmt;
use core::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

/// Numeric domain every geometric type is generic over.
///
/// Implemented for `f32`, `f64` and `i32`. Integer instantiations exist for
/// discrete domains (pixel coordinates, image tiles), so nothing here assumes
/// a square root or an infinity; see [`Real`] for that.
pub trait Scalar:
    Copy
    + Clone
    + fmt::Debug
    + fmt::Display
    + PartialEq
    + PartialOrd
    + Default
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Div<Output = Self>
    + Neg<Output = Self>
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
    + Send
    + Sync
    + 'static
{
    const ZERO: Self;
    const ONE: Self;
    /// Most negative finite value.
    const LOWEST: Self;
    /// Largest finite value.
    const MAX: Self;

    /// Always `false` for integers.
    fn is_nan(self) -> bool;
    fn abs(self) -> Self;
    fn min(self, other: Self) -> Self;
    fn max(self, other: Self) -> Self;

    /// Narrowing conversion with `as` semantics (truncates and saturates for integers).
    fn from_f64(v: f64) -> Self;
    fn to_f64(self) -> f64;
}

/// Floating-point scalar domain.
pub trait Real: Scalar {
    const HALF: Self;
    const EPSILON: Self;
    const INFINITY: Self;

    fn sqrt(self) -> Self;
    fn floor(self) -> Self;
    fn ceil(self) -> Self;
}

/// `(1 - t) * a + t * b`
#[inline]
pub fn lerp<T: Scalar>(t: T, a: T, b: T) -> T {
    (T::ONE - t) * a + t * b
}

// In std mode, use inherent float methods. In no_std, use libm.
#[cfg(feature = "std")]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        x.sqrt()
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        x.abs()
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        x.abs()
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        x.floor()
    }
    #[inline(always)]
    pub fn floor_f64(x: f64) -> f64 {
        x.floor()
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        x.ceil()
    }
    #[inline(always)]
    pub fn ceil_f64(x: f64) -> f64 {
        x.ceil()
    }
}

#[cfg(all(not(feature = "std"), feature = "libm"))]
mod float_ops {
    #[inline(always)]
    pub fn sqrt_f32(x: f32) -> f32 {
        libm::sqrtf(x)
    }
    #[inline(always)]
    pub fn sqrt_f64(x: f64) -> f64 {
        libm::sqrt(x)
    }
    #[inline(always)]
    pub fn abs_f32(x: f32) -> f32 {
        libm::fabsf(x)
    }
    #[inline(always)]
    pub fn abs_f64(x: f64) -> f64 {
        libm::fabs(x)
    }
    #[inline(always)]
    pub fn floor_f32(x: f32) -> f32 {
        libm::floorf(x)
    }
    #[inline(always)]
    pub fn floor_f64(x: f64) -> f64 {
        libm::floor(x)
    }
    #[inline(always)]
    pub fn ceil_f32(x: f32) -> f32 {
        libm::ceilf(x)
    }
    #[inline(always)]
    pub fn ceil_f64(x: f64) -> f64 {
        libm::ceil(x)
    }
}

#[cfg(not(any(feature = "std", feature = "libm")))]
compile_error!("radiant needs either the `std` or the `libm` feature for float math");

macro_rules! impl_scalar_float {
    ($t:ident) => {
        ::paste::paste! {
        impl Scalar for $t {
            const ZERO: Self = 0.0;
            const ONE: Self = 1.0;
            const LOWEST: Self = $t::MIN;
            const MAX: Self = $t::MAX;

            #[inline] fn is_nan(self) -> bool { $t::is_nan(self) }
            #[inline] fn abs(self) -> Self { float_ops::[<abs_ $t>](self) }
            #[inline] fn min(self, other: Self) -> Self { if self < other { self } else { other } }
            #[inline] fn max(self, other: Self) -> Self { if self > other { self } else { other } }

            #[inline] fn from_f64(v: f64) -> Self { v as $t }
            #[inline] fn to_f64(self) -> f64 { self as f64 }
        }

        impl Real for $t {
            const HALF: Self = 0.5;
            const EPSILON: Self = $t::EPSILON;
            const INFINITY: Self = $t::INFINITY;

            #[inline] fn sqrt(self) -> Self { float_ops::[<sqrt_ $t>](self) }
            #[inline] fn floor(self) -> Self { float_ops::[<floor_ $t>](self) }
            #[inline] fn ceil(self) -> Self { float_ops::[<ceil_ $t>](self) }
        }
        }
    };
}

impl_scalar_float!(f32);
impl_scalar_float!(f64);

impl Scalar for i32 {
    const ZERO: Self = 0;
    const ONE: Self = 1;
    const LOWEST: Self = i32::MIN;
    const MAX: Self = i32::MAX;

    #[inline]
    fn is_nan(self) -> bool {
        false
    }
    #[inline]
    fn abs(self) -> Self {
        i32::abs(self)
    }
    #[inline]
    fn min(self, other: Self) -> Self {
        Ord::min(self, other)
    }
    #[inline]
    fn max(self, other: Self) -> Self {
        Ord::max(self, other)
    }

    #[inline]
    fn from_f64(v: f64) -> Self {
        v as i32
    }
    #[inline]
    fn to_f64(self) -> f64 {
        self as f64
    }
}

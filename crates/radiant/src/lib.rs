//! radiant: dimensional math for a physically based renderer
//!
//! The value types every other stage of the renderer speaks: vectors,
//! points, surface normals, rays with differentials, and axis-aligned bounds.
//! Generic over a [`Scalar`] domain so the same code serves floating-point
//! scene geometry and integer pixel/tile coordinates.
//!
//! # Design principles
//! - Points, vectors and normals are distinct types. Only the operations that
//!   make geometric sense exist (`Point - Point = Vector`, no `Point · Point`).
//! - `#[repr(C)]` everywhere; concrete instantiations are `Pod` with the
//!   `bytemuck` feature for upload to GPU buffers.
//! - Broken preconditions (NaN components, bad indices, division by zero) are
//!   programmer errors and panic through [`contract`]; nothing returns `Result`.
//! - `no_std`. The `libm` feature supplies float intrinsics when std is off.

#![no_std]

#[cfg(feature = "std")]
extern crate std;

#[cfg(test)]
extern crate alloc;

mod scalar;
pub mod contract;
mod vec2;
mod vec3;
mod normal3;
mod point2;
mod point3;
mod ray;
mod bounds2;
mod bounds3;

pub use scalar::{lerp, Real, Scalar};
pub use vec2::Vector2;
pub use vec3::Vector3;
pub use normal3::{Direction3, Normal3};
pub use point2::Point2;
pub use point3::Point3;
pub use ray::{Medium, Ray, RayDifferential};
pub use bounds2::{Bounds2, Bounds2Iter};
pub use bounds3::Bounds3;

/// Renderer-wide floating-point type.
#[cfg(not(feature = "float-as-double"))]
pub type Float = f32;
/// Renderer-wide floating-point type.
#[cfg(feature = "float-as-double")]
pub type Float = f64;

pub type Vector2f = Vector2<Float>;
pub type Vector2i = Vector2<i32>;
pub type Vector3f = Vector3<Float>;
pub type Vector3i = Vector3<i32>;
pub type Point2f = Point2<Float>;
pub type Point2i = Point2<i32>;
pub type Point3f = Point3<Float>;
pub type Point3i = Point3<i32>;
pub type Normal3f = Normal3<Float>;
pub type Bounds2f = Bounds2<Float>;
pub type Bounds2i = Bounds2<i32>;
pub type Bounds3f = Bounds3<Float>;
pub type Bounds3i = Bounds3<i32>;

// Generic structs can't derive Pod, so the concrete instantiations are listed.
#[cfg(feature = "bytemuck")]
mod bytemuck_impls {
    use super::*;

    macro_rules! impl_pod {
        ($($t:ty),* $(,)?) => {$(
            // SAFETY: #[repr(C)], every field has the same primitive type, no padding
            unsafe impl bytemuck::Zeroable for $t {}
            unsafe impl bytemuck::Pod for $t {}
        )*};
    }

    macro_rules! impl_pod_all {
        ($($s:ty),*) => {$(
            impl_pod!(
                Vector2<$s>,
                Vector3<$s>,
                Normal3<$s>,
                Point2<$s>,
                Point3<$s>,
                Bounds2<$s>,
                Bounds3<$s>,
            );
        )*};
    }

    impl_pod_all!(f32, f64, i32);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn float_aliases_follow_feature() {
        let expected = if cfg!(feature = "float-as-double") { 8 } else { 4 };
        assert_eq!(core::mem::size_of::<Float>(), expected);
        assert_eq!(core::mem::size_of::<Point3f>(), 3 * expected);
        assert_eq!(core::mem::size_of::<Bounds3f>(), 6 * expected);
    }

    #[test]
    fn raster_to_scene_space() {
        // pixel (3, 5) of a 16x16 tile starting at (32, 48), sampled at its center
        let tile = Bounds2i::new(Point2i::new(32, 48), Point2i::new(48, 64));
        let pixel = Point2i::new(35, 53);
        assert!(tile.contains_exclusive(pixel));
        let film: Point2f = pixel.cast::<Float>() + Vector2f::splat(0.5);
        let ray = Ray::new(Point3f::new(film.x, film.y, 0.0), Vector3f::new(0.0, 0.0, 1.0));
        assert_eq!(ray.at(2.0), Point3f::new(35.5, 53.5, 2.0));
    }

    #[test]
    fn accumulate_scene_bounds() {
        let pts = [
            Point3f::new(1.0, -2.0, 0.0),
            Point3f::new(-4.0, 3.0, 2.0),
            Point3f::new(0.5, 0.5, -1.0),
        ];
        let b = pts.iter().fold(Bounds3f::default(), |b, &p| b.union_point(p));
        assert_eq!(b.min, Point3f::new(-4.0, -2.0, -1.0));
        assert_eq!(b.max, Point3f::new(1.0, 3.0, 2.0));
        // x and y tie at 5
        assert_eq!(b.maximum_extent(), 1);
        for p in pts {
            assert!(b.contains(p));
        }
    }

    #[cfg(feature = "bytemuck")]
    #[test]
    fn pod_cast_to_bytes() {
        let v = [Point3::<f32>::new(1.0, 2.0, 3.0), Point3::new(4.0, 5.0, 6.0)];
        let flat: &[f32] = bytemuck::cast_slice(&v);
        assert_eq!(flat, &[1.0, 2.0, 3.0, 4.0, 5.0, 6.0]);
        let b: Bounds2<i32> = bytemuck::cast([0, 0, 8, 8]);
        assert_eq!(b.iter().count(), 64);
    }
}

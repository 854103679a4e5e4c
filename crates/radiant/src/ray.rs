//! Rays and ray differentials.
//!
//! A [`Ray`] carries its current nearest-hit bound in a [`Cell`], so an
//! intersection routine that only holds `&Ray` can still shrink it as closer
//! hits turn up. `Cell` makes `Ray` `Send` but not `Sync`: one traversal
//! context owns and narrows a ray at a time, and parallel traversals each own
//! their own ray.

use crate::{Float, Point3f, Vector3f};
use core::cell::Cell;
use core::fmt;
use core::ops::{Deref, DerefMut};

/// A participating medium (fog, smoke, ...) a ray travels through.
///
/// Defined by the renderer; rays only borrow it and never inspect it.
pub trait Medium: fmt::Debug + Send + Sync {}

/// Semi-infinite line `origin + dir * t` for `t` in `[0, t_max)`.
#[derive(Clone, Debug)]
pub struct Ray<'m> {
    pub origin: Point3f,
    pub dir: Vector3f,
    t_max: Cell<Float>,
    /// Shutter time, for motion blur.
    pub time: Float,
    /// Medium containing `origin`. Borrowed for `'m`; the caller keeps it alive.
    pub medium: Option<&'m dyn Medium>,
}

impl<'m> Ray<'m> {
    /// Unbounded ray at time 0 outside any medium.
    #[inline]
    pub fn new(origin: Point3f, dir: Vector3f) -> Self {
        Self { origin, dir, t_max: Cell::new(Float::INFINITY), time: 0.0, medium: None }
    }

    #[inline]
    pub fn with_t_max(self, t_max: Float) -> Self {
        self.t_max.set(t_max);
        self
    }

    #[inline]
    pub fn with_time(mut self, time: Float) -> Self {
        self.time = time;
        self
    }

    #[inline]
    pub fn with_medium(mut self, medium: &'m dyn Medium) -> Self {
        self.medium = Some(medium);
        self
    }

    /// Position at parameter `t`.
    #[inline]
    pub fn at(&self, t: Float) -> Point3f {
        self.origin + self.dir * t
    }

    #[inline]
    pub fn t_max(&self) -> Float {
        self.t_max.get()
    }

    /// Records a hit at `t` if it is closer than the current bound.
    ///
    /// Returns whether the bound moved. The bound never grows through this
    /// method, so a traversal can call it for every candidate hit.
    #[inline]
    pub fn narrow_t_max(&self, t: Float) -> bool {
        if t < self.t_max.get() {
            self.t_max.set(t);
            true
        } else {
            false
        }
    }

    /// Resets the bound unconditionally. Needs exclusive access.
    #[inline]
    pub fn set_t_max(&mut self, t_max: Float) {
        self.t_max.set(t_max);
    }
}

impl Default for Ray<'_> {
    fn default() -> Self {
        Self::new(Point3f::origin(), Vector3f::zero())
    }
}

/// A primary ray plus two auxiliary rays offset by one pixel in x and y.
///
/// The auxiliary rays estimate the primary ray's footprint on a surface for
/// texture filtering. They are meaningful only when `has_differentials` is set.
#[derive(Clone, Debug)]
pub struct RayDifferential<'m> {
    pub ray: Ray<'m>,
    pub has_differentials: bool,
    pub rx_origin: Point3f,
    pub ry_origin: Point3f,
    pub rx_dir: Vector3f,
    pub ry_dir: Vector3f,
}

impl<'m> RayDifferential<'m> {
    #[inline]
    pub fn new(origin: Point3f, dir: Vector3f) -> Self {
        Self::from(Ray::new(origin, dir))
    }

    /// Attaches auxiliary rays and marks the differentials valid.
    pub fn with_differentials(
        mut self,
        rx_origin: Point3f,
        rx_dir: Vector3f,
        ry_origin: Point3f,
        ry_dir: Vector3f,
    ) -> Self {
        self.rx_origin = rx_origin;
        self.rx_dir = rx_dir;
        self.ry_origin = ry_origin;
        self.ry_dir = ry_dir;
        self.has_differentials = true;
        self
    }

    /// Moves each auxiliary ray toward (or away from) the primary ray by `s`.
    ///
    /// Differentials are generated for one sample per pixel; with `n` samples
    /// per pixel callers typically pass `1 / sqrt(n)`. `s = 0` collapses both
    /// auxiliary rays onto the primary ray.
    pub fn scale_differentials(&mut self, s: Float) {
        let origin = self.ray.origin;
        let dir = self.ray.dir;
        self.rx_origin = origin + (self.rx_origin - origin) * s;
        self.ry_origin = origin + (self.ry_origin - origin) * s;
        self.rx_dir = dir + (self.rx_dir - dir) * s;
        self.ry_dir = dir + (self.ry_dir - dir) * s;
    }
}

/// Auxiliary rays start out equal to the primary ray, with `has_differentials` unset.
impl<'m> From<Ray<'m>> for RayDifferential<'m> {
    fn from(ray: Ray<'m>) -> Self {
        let (origin, dir) = (ray.origin, ray.dir);
        Self {
            ray,
            has_differentials: false,
            rx_origin: origin,
            ry_origin: origin,
            rx_dir: dir,
            ry_dir: dir,
        }
    }
}

impl Default for RayDifferential<'_> {
    fn default() -> Self {
        Self::from(Ray::default())
    }
}

impl<'m> Deref for RayDifferential<'m> {
    type Target = Ray<'m>;
    #[inline]
    fn deref(&self) -> &Ray<'m> { &self.ray }
}

impl<'m> DerefMut for RayDifferential<'m> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Ray<'m> { &mut self.ray }
}

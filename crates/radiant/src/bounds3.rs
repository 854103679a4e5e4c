use crate::contract::Violation;
use crate::{dcheck, lerp, Point3, Real, Scalar, Vector3};
use core::ops::{Index, IndexMut};

/// Axis-aligned box given by its minimum and maximum corners.
///
/// `Default` is the empty box (`min` = largest value, `max` = lowest), the
/// identity for [`union`](Self::union).
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds3<T> {
    pub min: Point3<T>,
    pub max: Point3<T>,
}

impl<T: Scalar> Bounds3<T> {
    /// Box spanning two arbitrary corners.
    #[inline]
    pub fn new(p1: Point3<T>, p2: Point3<T>) -> Self {
        Self { min: p1.component_min(p2), max: p1.component_max(p2) }
    }

    #[inline]
    pub fn from_point(p: Point3<T>) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point3::new(T::MAX, T::MAX, T::MAX),
            max: Point3::new(T::LOWEST, T::LOWEST, T::LOWEST),
        }
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y || self.min.z > self.max.z
    }

    /// Corner selected by the low three bits: bit 0 picks max x, bit 1 max y, bit 2 max z.
    #[inline]
    pub fn corner(&self, corner: usize) -> Point3<T> {
        Point3::new(
            self[corner & 1].x,
            self[(corner >> 1) & 1].y,
            self[(corner >> 2) & 1].z,
        )
    }

    /// `max - min`, or zero for an empty box so integer boxes never overflow
    /// on the sentinel. Every measure below derives from it.
    #[inline]
    pub fn diagonal(&self) -> Vector3<T> {
        if self.is_empty() {
            return Vector3::zero();
        }
        self.max - self.min
    }

    #[inline]
    pub fn surface_area(&self) -> T {
        let d = self.diagonal();
        (T::ONE + T::ONE) * (d.x * d.y + d.x * d.z + d.y * d.z)
    }

    #[inline]
    pub fn volume(&self) -> T {
        let d = self.diagonal();
        d.x * d.y * d.z
    }

    /// Axis of the longest side, used to pick a BVH split axis.
    ///
    /// `x` only when strictly longer than both others, then `y` only when
    /// strictly longer than `z`. Ties therefore go to the later axis.
    #[inline]
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y && d.x > d.z {
            0
        } else if d.y > d.z {
            1
        } else {
            2
        }
    }

    #[inline]
    pub fn union_point(&self, p: Point3<T>) -> Self {
        Self { min: self.min.component_min(p), max: self.max.component_max(p) }
    }

    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_min(other.min),
            max: self.max.component_max(other.max),
        }
    }

    /// Overlap of two boxes; inverted (and [`is_empty`](Self::is_empty)) when they are disjoint.
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_max(other.min),
            max: self.max.component_min(other.max),
        }
    }

    /// Touching faces count as overlap.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let x = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y = self.max.y >= other.min.y && self.min.y <= other.max.y;
        let z = self.max.z >= other.min.z && self.min.z <= other.max.z;
        x && y && z
    }

    #[inline]
    pub fn contains(&self, p: Point3<T>) -> bool {
        p.x >= self.min.x
            && p.x <= self.max.x
            && p.y >= self.min.y
            && p.y <= self.max.y
            && p.z >= self.min.z
            && p.z <= self.max.z
    }

    /// Like [`contains`](Self::contains) but excluding the max faces.
    #[inline]
    pub fn contains_exclusive(&self, p: Point3<T>) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    #[inline]
    pub fn expand(&self, delta: T) -> Self {
        let d = Vector3::splat(delta);
        Self { min: self.min - d, max: self.max + d }
    }

    #[inline]
    pub fn cast<U: Scalar>(&self) -> Bounds3<U> {
        Bounds3 { min: self.min.cast(), max: self.max.cast() }
    }
}

impl<T: Real> Bounds3<T> {
    /// Per-axis interpolation between the corners.
    #[inline]
    pub fn lerp(&self, t: Point3<T>) -> Point3<T> {
        Point3::new(
            lerp(t.x, self.min.x, self.max.x),
            lerp(t.y, self.min.y, self.max.y),
            lerp(t.z, self.min.z, self.max.z),
        )
    }

    /// Position of `p` relative to the box: `min` is 0 and `max` is 1 on each non-flat axis.
    #[inline]
    pub fn offset(&self, p: Point3<T>) -> Vector3<T> {
        let mut o = p - self.min;
        if self.max.x > self.min.x {
            o.x /= self.max.x - self.min.x;
        }
        if self.max.y > self.min.y {
            o.y /= self.max.y - self.min.y;
        }
        if self.max.z > self.min.z {
            o.z /= self.max.z - self.min.z;
        }
        o
    }

    /// Center and radius of a sphere enclosing the box.
    #[inline]
    pub fn bounding_sphere(&self) -> (Point3<T>, T) {
        let center = (self.min + self.max) * T::HALF;
        let radius = if self.contains(center) { center.distance(self.max) } else { T::ZERO };
        (center, radius)
    }
}

impl<T: Scalar> Default for Bounds3<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Index<usize> for Bounds3<T> {
    type Output = Point3<T>;
    #[inline]
    fn index(&self, i: usize) -> &Point3<T> {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Bounds3", index: i, len: 2 });
        if i == 0 { &self.min } else { &self.max }
    }
}

impl<T: Scalar> IndexMut<usize> for Bounds3<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Point3<T> {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Bounds3", index: i, len: 2 });
        if i == 0 { &mut self.min } else { &mut self.max }
    }
}

impl<T: Scalar> core::fmt::Display for Bounds3<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "[ {} - {} ]", self.min, self.max)
    }
}

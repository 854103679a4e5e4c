use crate::contract::Violation;
use crate::{dcheck, lerp, Point2, Real, Scalar, Vector2};
use core::iter::FusedIterator;
use core::ops::{Index, IndexMut};

/// Axis-aligned rectangle given by its minimum and maximum corners.
///
/// `Default` is the empty box: `min` at the largest representable value and
/// `max` at the lowest, so the first union with any point snaps to it.
#[derive(Clone, Copy, Debug, PartialEq)]
#[repr(C)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds2<T> {
    pub min: Point2<T>,
    pub max: Point2<T>,
}

impl<T: Scalar> Bounds2<T> {
    /// Box spanning two arbitrary corners.
    #[inline]
    pub fn new(p1: Point2<T>, p2: Point2<T>) -> Self {
        Self { min: p1.component_min(p2), max: p1.component_max(p2) }
    }

    /// Degenerate box covering a single point.
    #[inline]
    pub fn from_point(p: Point2<T>) -> Self {
        Self { min: p, max: p }
    }

    #[inline]
    pub fn empty() -> Self {
        Self {
            min: Point2::new(T::MAX, T::MAX),
            max: Point2::new(T::LOWEST, T::LOWEST),
        }
    }

    /// True when some axis has `min > max`, e.g. the empty box or a disjoint intersection.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Bit 0 of `corner` picks max x, bit 1 picks max y.
    #[inline]
    pub fn corner(&self, corner: usize) -> Point2<T> {
        Point2::new(self[corner & 1].x, self[(corner >> 1) & 1].y)
    }

    /// `max - min`, or zero for an empty box.
    #[inline]
    pub fn diagonal(&self) -> Vector2<T> {
        if self.is_empty() {
            return Vector2::zero();
        }
        self.max - self.min
    }

    #[inline]
    pub fn area(&self) -> T {
        let d = self.diagonal();
        d.x * d.y
    }

    /// Axis of the longest side; `y` on a tie.
    #[inline]
    pub fn maximum_extent(&self) -> usize {
        let d = self.diagonal();
        if d.x > d.y { 0 } else { 1 }
    }

    #[inline]
    pub fn union_point(&self, p: Point2<T>) -> Self {
        Self { min: self.min.component_min(p), max: self.max.component_max(p) }
    }

    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_min(other.min),
            max: self.max.component_max(other.max),
        }
    }

    /// Overlap of two boxes. Disjoint inputs give an inverted box (see [`is_empty`](Self::is_empty)).
    #[inline]
    pub fn intersect(&self, other: &Self) -> Self {
        Self {
            min: self.min.component_max(other.min),
            max: self.max.component_min(other.max),
        }
    }

    /// Closed-interval overlap on both axes: touching edges count.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        let x = self.max.x >= other.min.x && self.min.x <= other.max.x;
        let y = self.max.y >= other.min.y && self.min.y <= other.max.y;
        x && y
    }

    /// Closed containment, boundary included.
    #[inline]
    pub fn contains(&self, p: Point2<T>) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Half-open containment: the max edges are excluded, so abutting integer
    /// tiles never both claim a pixel.
    #[inline]
    pub fn contains_exclusive(&self, p: Point2<T>) -> bool {
        p.x >= self.min.x && p.x < self.max.x && p.y >= self.min.y && p.y < self.max.y
    }

    /// Grows every side outward by `delta`.
    #[inline]
    pub fn expand(&self, delta: T) -> Self {
        let d = Vector2::splat(delta);
        Self { min: self.min - d, max: self.max + d }
    }

    #[inline]
    pub fn cast<U: Scalar>(&self) -> Bounds2<U> {
        Bounds2 { min: self.min.cast(), max: self.max.cast() }
    }
}

impl<T: Real> Bounds2<T> {
    /// Point at fractional position `t` between the corners, per axis.
    #[inline]
    pub fn lerp(&self, t: Point2<T>) -> Point2<T> {
        Point2::new(lerp(t.x, self.min.x, self.max.x), lerp(t.y, self.min.y, self.max.y))
    }

    /// Inverse of [`lerp`](Self::lerp): `min` maps to 0 and `max` to 1 on each non-flat axis.
    #[inline]
    pub fn offset(&self, p: Point2<T>) -> Vector2<T> {
        let mut o = p - self.min;
        if self.max.x > self.min.x {
            o.x /= self.max.x - self.min.x;
        }
        if self.max.y > self.min.y {
            o.y /= self.max.y - self.min.y;
        }
        o
    }
}

impl<T: Scalar> Default for Bounds2<T> {
    fn default() -> Self {
        Self::empty()
    }
}

impl<T: Scalar> Index<usize> for Bounds2<T> {
    type Output = Point2<T>;
    #[inline]
    fn index(&self, i: usize) -> &Point2<T> {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Bounds2", index: i, len: 2 });
        if i == 0 { &self.min } else { &self.max }
    }
}

impl<T: Scalar> IndexMut<usize> for Bounds2<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut Point2<T> {
        dcheck!(i < 2, Violation::IndexOutOfRange { ty: "Bounds2", index: i, len: 2 });
        if i == 0 { &mut self.min } else { &mut self.max }
    }
}

impl Bounds2<i32> {
    /// Walks the integer lattice points `p` with `contains_exclusive(p)`,
    /// row by row with x varying fastest.
    #[inline]
    pub fn iter(&self) -> Bounds2Iter {
        Bounds2Iter::new(*self)
    }
}

impl IntoIterator for &Bounds2<i32> {
    type Item = Point2<i32>;
    type IntoIter = Bounds2Iter;
    fn into_iter(self) -> Bounds2Iter {
        self.iter()
    }
}

/// Iterator over the pixels of a [`Bounds2<i32>`].
#[derive(Clone, Debug)]
pub struct Bounds2Iter {
    bounds: Bounds2<i32>,
    next: Point2<i32>,
    remaining: u64,
}

impl Bounds2Iter {
    fn new(bounds: Bounds2<i32>) -> Self {
        let width = i64::from(bounds.max.x) - i64::from(bounds.min.x);
        let height = i64::from(bounds.max.y) - i64::from(bounds.min.y);
        // each side is below 2^32, so the product fits in u64
        let remaining = if width > 0 && height > 0 { width as u64 * height as u64 } else { 0 };
        Self { bounds, next: bounds.min, remaining }
    }
}

impl Iterator for Bounds2Iter {
    type Item = Point2<i32>;

    fn next(&mut self) -> Option<Point2<i32>> {
        if self.remaining == 0 {
            return None;
        }
        let p = self.next;
        self.remaining -= 1;
        if self.remaining > 0 {
            self.next.x += 1;
            if self.next.x == self.bounds.max.x {
                self.next.x = self.bounds.min.x;
                self.next.y += 1;
            }
        }
        Some(p)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match usize::try_from(self.remaining) {
            Ok(n) => (n, Some(n)),
            Err(_) => (usize::MAX, None),
        }
    }
}

// a full-domain box holds more pixels than a 32-bit usize can count
#[cfg(target_pointer_width = "64")]
impl ExactSizeIterator for Bounds2Iter {}
impl FusedIterator for Bounds2Iter {}

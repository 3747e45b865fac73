//! Geometry primitives: [`Point3`] and [`Bounds3`].
//!
//! Voxel coordinates are signed so that callers can probe cells just outside
//! a map (`x - 1` at the border) without wrapping.

use std::fmt;
use std::ops::{Add, Sub};

// ---------------------------------------------------------------------------
// Point3
// ---------------------------------------------------------------------------

/// A 3D integer voxel coordinate.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point3 {
    pub x: i32,
    pub y: i32,
    pub z: i32,
}

impl Point3 {
    /// Origin (0, 0, 0).
    pub const ZERO: Self = Self { x: 0, y: 0, z: 0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self { x, y, z }
    }

    /// `self + rhs`, or `None` if any axis leaves the `i32` range.
    #[inline]
    pub fn checked_add(self, rhs: Point3) -> Option<Self> {
        Some(Self {
            x: self.x.checked_add(rhs.x)?,
            y: self.y.checked_add(rhs.y)?,
            z: self.z.checked_add(rhs.z)?,
        })
    }

    /// Per-axis absolute difference between two points. Unsigned, so any two
    /// points have a representable delta.
    #[inline]
    pub const fn abs_delta(self, other: Point3) -> (u32, u32, u32) {
        (
            self.x.abs_diff(other.x),
            self.y.abs_diff(other.y),
            self.z.abs_diff(other.z),
        )
    }

    /// Number of non-zero components. For a unit step this is 1 for a face
    /// move, 2 for an edge diagonal and 3 for a corner diagonal.
    #[inline]
    pub const fn order(self) -> u8 {
        (self.x != 0) as u8 + (self.y != 0) as u8 + (self.z != 0) as u8
    }

    /// The coordinates as a tuple.
    #[inline]
    pub const fn as_tuple(self) -> (i32, i32, i32) {
        (self.x, self.y, self.z)
    }

    /// The coordinates as an array.
    #[inline]
    pub const fn to_array(self) -> [i32; 3] {
        [self.x, self.y, self.z]
    }
}

impl PartialOrd for Point3 {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

// Same order as grid storage: x outermost, z innermost.
impl Ord for Point3 {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.x
            .cmp(&other.x)
            .then(self.y.cmp(&other.y))
            .then(self.z.cmp(&other.z))
    }
}

impl fmt::Display for Point3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.x, self.y, self.z)
    }
}

impl From<(i32, i32, i32)> for Point3 {
    #[inline]
    fn from((x, y, z): (i32, i32, i32)) -> Self {
        Self::new(x, y, z)
    }
}

impl From<[i32; 3]> for Point3 {
    #[inline]
    fn from([x, y, z]: [i32; 3]) -> Self {
        Self::new(x, y, z)
    }
}

impl From<Point3> for (i32, i32, i32) {
    #[inline]
    fn from(p: Point3) -> Self {
        p.as_tuple()
    }
}

impl Add for Point3 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

// ---------------------------------------------------------------------------
// Bounds3
// ---------------------------------------------------------------------------

/// A half-open box \[min, max). `min` is inclusive, `max` is exclusive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Bounds3 {
    pub min: Point3,
    pub max: Point3,
}

impl Bounds3 {
    /// The box `[0, width) × [0, height) × [0, depth)`. Negative sizes are
    /// clamped to zero.
    #[inline]
    pub fn from_size(width: i32, height: i32, depth: i32) -> Self {
        Self {
            min: Point3::ZERO,
            max: Point3::new(width.max(0), height.max(0), depth.max(0)),
        }
    }

    /// Extent along each axis.
    #[inline]
    pub fn size(self) -> Point3 {
        self.max - self.min
    }

    /// Total number of cells in the box.
    #[inline]
    pub fn len(self) -> usize {
        if self.is_empty() {
            return 0;
        }
        let s = self.size();
        s.x as usize * s.y as usize * s.z as usize
    }

    /// Whether the box has zero volume.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x >= self.max.x || self.min.y >= self.max.y || self.min.z >= self.max.z
    }

    /// Whether `p` is inside the half-open box.
    #[inline]
    pub fn contains(self, p: Point3) -> bool {
        p.x >= self.min.x
            && p.x < self.max.x
            && p.y >= self.min.y
            && p.y < self.max.y
            && p.z >= self.min.z
            && p.z < self.max.z
    }

    /// Iterator over every point in the box, x outermost and z innermost.
    #[inline]
    pub fn iter(self) -> Bounds3Iter {
        Bounds3Iter {
            bounds: self,
            cur: self.min,
        }
    }
}

impl IntoIterator for Bounds3 {
    type Item = Point3;
    type IntoIter = Bounds3Iter;
    #[inline]
    fn into_iter(self) -> Bounds3Iter {
        self.iter()
    }
}

impl fmt::Display for Bounds3 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{})", self.min, self.max)
    }
}

// ---------------------------------------------------------------------------
// Bounds3Iter
// ---------------------------------------------------------------------------

/// Iterator over the points in a [`Bounds3`].
#[derive(Clone, Debug)]
pub struct Bounds3Iter {
    bounds: Bounds3,
    cur: Point3,
}

impl Iterator for Bounds3Iter {
    type Item = Point3;

    #[inline]
    fn next(&mut self) -> Option<Point3> {
        if self.bounds.is_empty() || self.cur.x >= self.bounds.max.x {
            return None;
        }
        let p = self.cur;
        self.cur.z += 1;
        if self.cur.z >= self.bounds.max.z {
            self.cur.z = self.bounds.min.z;
            self.cur.y += 1;
            if self.cur.y >= self.bounds.max.y {
                self.cur.y = self.bounds.min.y;
                self.cur.x += 1;
            }
        }
        Some(p)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        if self.bounds.is_empty() || self.cur.x >= self.bounds.max.x {
            return (0, Some(0));
        }
        let s = self.bounds.size();
        let (h, d) = (s.y as usize, s.z as usize);
        let rest_in_column = (self.bounds.max.z - self.cur.z) as usize;
        let rest_columns = (self.bounds.max.y - self.cur.y - 1) as usize;
        let rest_planes = (self.bounds.max.x - self.cur.x - 1) as usize;
        let total = rest_in_column + rest_columns * d + rest_planes * h * d;
        (total, Some(total))
    }
}

impl ExactSizeIterator for Bounds3Iter {}


#[cfg(all(test, feature = "serde"))]
mod serde_tests {
    use super::*;

    #[test]
    fn point_round_trip() {
        let p = Point3::new(3, -7, 11);
        let json = serde_json::to_string(&p).unwrap();
        let back: Point3 = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn bounds_round_trip() {
        let b = Bounds3::from_size(4, 5, 6);
        let json = serde_json::to_string(&b).unwrap();
        let back: Bounds3 = serde_json::from_str(&json).unwrap();
        assert_eq!(b, back);
    }
}

//! Line segments between two points.

use crate::vector::{Point3, VectorOps};

/// Straight segment from `v0` to `v1`.
///
/// Invariants:
/// - `length()` is the Euclidean distance between the endpoints.
/// - Equality is positional; endpoint order matters for `==` but not for length.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    pub v0: Point3,
    pub v1: Point3,
}

impl Segment {
    #[inline]
    pub fn new(v0: Point3, v1: Point3) -> Self {
        Self { v0, v1 }
    }

    #[inline]
    pub fn length(&self) -> f64 {
        (self.v1 - self.v0).length()
    }

    /// Same segment traversed the other way.
    #[inline]
    pub fn reversed(&self) -> Self {
        Self {
            v0: self.v1,
            v1: self.v0,
        }
    }

    #[inline]
    pub fn midpoint(&self) -> Point3 {
        (self.v0 + self.v1) * 0.5
    }

    /// Coincident endpoints; any tetrahedron using this edge is flat.
    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.v0 == self.v1
    }
}

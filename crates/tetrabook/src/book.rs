//! Fixed book geometry: spine, cover axis, and the four rhombus edges.
//!
//! The covers lie flat in the plane `z = 0`. The page tip (see `page`) moves
//! on the circle whose diameter is the cover axis `C0C1`, in the vertical
//! plane through the axis. The demo book has the spine `S0S1` along Y and
//! the axis along X, both centered at the origin.
//!
//! Validity
//! - All four endpoints in `z = 0`; spine and axis of non-zero length.
//! - The spine line passes through the axis midpoint, so `C0` and `C1` sit at
//!   the same distance from the spine and both covers have the same area.
//! - The spine does not run along the axis (covers would be flat).

use crate::error::GeomError;
use crate::segment::Segment;
use crate::vector::{point3, Point3, VectorOps};

/// Relative slack for the validity checks, scaled by the axis length.
const BOOK_EPS: f64 = 1e-9;

/// Immutable book covers. Build once, pass by reference.
///
/// Invariants:
/// - Nothing mutates a `BookGeometry` after construction.
/// - Every value satisfies the validity rules above (`new` checks them,
///   `symmetric` holds them by construction for positive lengths).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BookGeometry {
    spine: (Point3, Point3),
    axis: (Point3, Point3),
}

impl Default for BookGeometry {
    /// Demo book: spine `(0, ±√2/2, 0)`, axis `(±1, 0, 0)`.
    fn default() -> Self {
        Self::symmetric(std::f64::consts::SQRT_2, 2.0)
    }
}

impl BookGeometry {
    /// Book from spine `(S0, S1)` and cover axis `(C0, C1)`.
    ///
    /// Fails with `InvalidBook` when the endpoints break the validity rules.
    pub fn new(spine: (Point3, Point3), axis: (Point3, Point3)) -> Result<Self, GeomError> {
        let book = Self { spine, axis };
        book.validate()?;
        Ok(book)
    }

    /// Spine on the Y axis and cover axis on the X axis, both centered at
    /// the origin, with the given full lengths (expected positive).
    pub fn symmetric(spine_length: f64, axis_length: f64) -> Self {
        let s = spine_length / 2.0;
        let c = axis_length / 2.0;
        Self {
            spine: (point3(0.0, s, 0.0), point3(0.0, -s, 0.0)),
            axis: (point3(c, 0.0, 0.0), point3(-c, 0.0, 0.0)),
        }
    }

    fn validate(&self) -> Result<(), GeomError> {
        let spine = self.spine_segment();
        let axis = self.axis_segment();
        if axis.is_degenerate() {
            return Err(GeomError::InvalidBook {
                reason: "cover axis has coincident endpoints",
            });
        }
        if spine.is_degenerate() {
            return Err(GeomError::InvalidBook {
                reason: "spine has coincident endpoints",
            });
        }
        let eps = BOOK_EPS * axis.length().max(spine.length());
        let points = [self.spine.0, self.spine.1, self.axis.0, self.axis.1];
        if points.iter().any(|p| !(p.z.abs() <= eps)) {
            return Err(GeomError::InvalidBook {
                reason: "covers must lie in the plane z = 0",
            });
        }
        let dir = spine.v1 - spine.v0;
        let off_spine = |p: Point3| (p - spine.v0).cross(&dir).length() / dir.length();
        if off_spine(axis.midpoint()) > eps {
            return Err(GeomError::InvalidBook {
                reason: "spine does not pass through the cover-axis midpoint",
            });
        }
        if off_spine(self.axis.0) <= eps {
            return Err(GeomError::InvalidBook {
                reason: "spine runs along the cover axis",
            });
        }
        Ok(())
    }

    /// Spine endpoints `(S0, S1)`.
    #[inline]
    pub fn spine(&self) -> (Point3, Point3) {
        self.spine
    }

    /// Cover-axis endpoints `(C0, C1)`.
    #[inline]
    pub fn axis(&self) -> (Point3, Point3) {
        self.axis
    }

    /// Same book with the roles of the two covers exchanged.
    pub fn swapped_covers(&self) -> Self {
        let axis = self.axis_segment().reversed();
        Self {
            spine: self.spine,
            axis: (axis.v0, axis.v1),
        }
    }

    #[inline]
    pub fn spine_segment(&self) -> Segment {
        Segment::new(self.spine.0, self.spine.1)
    }

    #[inline]
    pub fn axis_segment(&self) -> Segment {
        Segment::new(self.axis.0, self.axis.1)
    }

    /// Center of the tip circle (midpoint of `C0C1`).
    #[inline]
    pub fn center(&self) -> Point3 {
        self.axis_segment().midpoint()
    }

    /// Unit vector from the center towards `C0`; `+x` for a zero-length axis.
    pub fn axis_direction(&self) -> Point3 {
        let d = self.axis.0 - self.center();
        let l = d.length();
        if l > 0.0 {
            d / l
        } else {
            point3(1.0, 0.0, 0.0)
        }
    }

    /// Cover-axis endpoint `C0` (`cover == 0`) or `C1` (otherwise).
    #[inline]
    pub fn cover(&self, cover: usize) -> Point3 {
        if cover == 0 {
            self.axis.0
        } else {
            self.axis.1
        }
    }

    /// Rhombus edges `[S0C0, S1C0, S0C1, S1C1]`.
    pub fn rhombus(&self) -> [Segment; 4] {
        let (s0, s1) = self.spine;
        let (c0, c1) = self.axis;
        [
            Segment::new(s0, c0),
            Segment::new(s1, c0),
            Segment::new(s0, c1),
            Segment::new(s1, c1),
        ]
    }

    /// Rhombus edge used by the inadvertent reconstruction: `|S0C1|`.
    #[inline]
    pub fn rhomb_length(&self) -> f64 {
        Segment::new(self.spine.0, self.axis.1).length()
    }
}

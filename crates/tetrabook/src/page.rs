//! The moving page, modelled by its tip.
//!
//! The tip traces a circle of radius `axis/2` around the axis midpoint `M`,
//! in the vertical plane through the cover axis:
//! `tip(θ) = M + (cos θ · u + sin θ · ẑ) · axis/2` with `u` the unit vector
//! from `M` to `C0`, mirrored through `M` for a page facing down. θ = 0 puts
//! the tip on `C0` (up) or `C1` (down).
//!
//! The angle is unbounded; callers reflect or wrap it at turning points.

use std::fmt;

use crate::book::BookGeometry;
use crate::vector::{point3, Point3};

/// Which side of the covers the page swings through.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Facing {
    /// Tip in `+z` for angles in (0°, 180°).
    Up,
    /// Point reflection of `Up`.
    Down,
}

impl Facing {
    #[inline]
    fn sign(self) -> f64 {
        match self {
            Facing::Up => 1.0,
            Facing::Down => -1.0,
        }
    }
}

impl fmt::Display for Facing {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Facing::Up => write!(f, "up"),
            Facing::Down => write!(f, "down"),
        }
    }
}

/// Page state: dihedral angle in degrees plus a fixed facing.
///
/// Invariants:
/// - `tip()` is a pure function of the angle, the facing and the frame fixed
///   at construction; nothing caches it.
/// - `delta_angle` is the only mutation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Page {
    angle: f64,
    facing: Facing,
    radius: f64,
    center: Point3,
    direction: Point3,
}

impl Page {
    /// Page with tip radius `axis_length / 2` on an axis along X centered at
    /// the origin (the frame of `BookGeometry::symmetric`).
    pub fn new(angle: f64, facing: Facing, axis_length: f64) -> Self {
        Self {
            angle,
            facing,
            radius: axis_length / 2.0,
            center: Point3::zeros(),
            direction: point3(1.0, 0.0, 0.0),
        }
    }

    /// Page hinged in `book`, swinging in the book's own frame.
    pub fn on(book: &BookGeometry, angle: f64, facing: Facing) -> Self {
        Self {
            angle,
            facing,
            radius: book.axis_segment().length() / 2.0,
            center: book.center(),
            direction: book.axis_direction(),
        }
    }

    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }

    #[inline]
    pub fn facing(&self) -> Facing {
        self.facing
    }

    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Current tip position.
    pub fn tip(&self) -> Point3 {
        let (sin, cos) = sin_cos_deg(self.angle);
        let s = self.facing.sign() * self.radius;
        self.center + self.direction * (cos * s) + point3(0.0, 0.0, sin * s)
    }

    /// Advance the dihedral angle by `degrees` (may be negative).
    #[inline]
    pub fn delta_angle(&mut self, degrees: f64) {
        self.angle += degrees;
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page at {}° facing {}", self.angle, self.facing)
    }
}

/// Dihedral angle of the regular tetrahedron, `2·asin(1/√3)` ≈ 70.53°.
///
/// At this angle the complementary tetrahedra of a book whose covers are
/// equilateral are regular.
pub fn regular_dihedral_deg() -> f64 {
    (2.0 * (1.0 / 3f64.sqrt()).asin()).to_degrees()
}

/// `(sin, cos)` of an angle in degrees, exact on quarter turns.
fn sin_cos_deg(deg: f64) -> (f64, f64) {
    let r = deg.rem_euclid(360.0);
    if r == 0.0 {
        (0.0, 1.0)
    } else if r == 90.0 {
        (1.0, 0.0)
    } else if r == 180.0 {
        (0.0, -1.0)
    } else if r == 270.0 {
        (-1.0, 0.0)
    } else {
        deg.to_radians().sin_cos()
    }
}

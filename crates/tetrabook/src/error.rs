//! Errors surfaced by the geometry layer.
//!
//! All variants are local and recoverable: the computations are pure, so a
//! repeated call with the same inputs fails the same way. Callers decide
//! whether to skip the sample, substitute a value, or report.

use std::fmt;

/// Errors surfaced by vector, volume, and reconstruction operations.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GeomError {
    /// Angle requested against a zero-length vector (direction undefined).
    DegenerateVector,
    /// An edge length is negative or not finite.
    InvalidEdgeLength { edge: char, value: f64 },
    /// Conventional unit requested with a non-positive or non-finite reference diameter.
    InvalidDiameter(f64),
    /// The Cayley–Menger determinant is negative beyond the tolerance:
    /// the six lengths cannot be the edges of any tetrahedron.
    InvalidTetrahedron { det: f64, tol: f64 },
    /// The inadvertent reconstruction needs the square root of a negative value.
    UnreachableConfiguration { radicand: f64 },
    /// Spine and cover axis do not form a book the page can swing through.
    InvalidBook { reason: &'static str },
    /// A sweep schedule would produce more than `limit` frames.
    SweepTooLong { limit: usize },
}

impl fmt::Display for GeomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeomError::DegenerateVector => {
                write!(f, "angle is undefined for a zero-length vector")
            }
            GeomError::InvalidEdgeLength { edge, value } => {
                write!(f, "edge {} has invalid length {}", edge, value)
            }
            GeomError::InvalidDiameter(d) => {
                write!(f, "reference diameter must be positive and finite, got {}", d)
            }
            GeomError::InvalidTetrahedron { det, tol } => write!(
                f,
                "edge lengths do not form a tetrahedron (Cayley–Menger det {:e} < -{:e})",
                det, tol
            ),
            GeomError::UnreachableConfiguration { radicand } => write!(
                f,
                "distances are incompatible with the rhombus edge (radicand {:e})",
                radicand
            ),
            GeomError::InvalidBook { reason } => write!(f, "invalid book geometry: {}", reason),
            GeomError::SweepTooLong { limit } => {
                write!(f, "sweep schedule exceeds {} frames", limit)
            }
        }
    }
}

impl std::error::Error for GeomError {}

//! 3D points and vectors.
//!
//! Points are plain `nalgebra::Vector3<f64>` values, so addition,
//! subtraction, negation, scalar multiplication (either side), `dot` and
//! `cross` come from nalgebra. This module adds the two operations the
//! geometry layer names explicitly: Euclidean `length` and a fallible
//! `angle_between`.

use nalgebra::Vector3;

use crate::error::GeomError;

/// A point (or free vector) in R³.
pub type Point3 = Vector3<f64>;

/// Shorthand constructor.
#[inline]
pub fn point3(x: f64, y: f64, z: f64) -> Point3 {
    Vector3::new(x, y, z)
}

/// Length and angle on top of nalgebra's vector arithmetic.
pub trait VectorOps {
    /// Euclidean length, always `>= 0`.
    fn length(&self) -> f64;
    /// Angle to `other` in radians, in `[0, π]`.
    ///
    /// Fails with `DegenerateVector` when either operand has zero length.
    fn angle_between(&self, other: &Self) -> Result<f64, GeomError>;
}

impl VectorOps for Point3 {
    #[inline]
    fn length(&self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    fn angle_between(&self, other: &Self) -> Result<f64, GeomError> {
        let la = self.length();
        let lb = other.length();
        if la == 0.0 || lb == 0.0 {
            return Err(GeomError::DegenerateVector);
        }
        // Rounding can push the normalized dot product just outside [-1, 1].
        let cos = (self.dot(other) / (la * lb)).clamp(-1.0, 1.0);
        Ok(cos.acos())
    }
}

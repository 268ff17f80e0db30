//! Tetrahedron volume from six edge lengths (Cayley–Menger).
//!
//! Derivation
//! - For a tetrahedron with Euclidean volume `V`, `det(CM) = 288 V²`.
//! - The regular tetrahedron with unit edge has `V = 1/(6√2)`, so in natural
//!   units `V_nat = 6√2 V` and `V_nat² = det(CM) / 4`.
//! - Conventional volumes measure natural edges in diameters `D` and cubes in
//!   radii `D/2`: `V_xyz = sqrt(8/9) · V_nat(lengths / D)`.
//!
//! Degeneracy
//! - `|det| <= rel_tol · L⁶` is a flat tetrahedron and yields exactly 0.
//! - `det < -rel_tol · L⁶` means no tetrahedron has these lengths.

use nalgebra::Matrix3;

use super::cfg::XYZ_PER_NATURAL;
use super::{EdgeLengthSet, VolumeCfg, VolumeUnit};
use crate::error::GeomError;
use crate::vector::Point3;

/// `6√2`: natural volume of a Euclidean unit of volume.
const NATURAL_PER_EUCLIDEAN: f64 = 8.485_281_374_238_571;

/// Volume of the tetrahedron with the given edge lengths.
///
/// Fails with `InvalidEdgeLength` for negative/non-finite input,
/// `InvalidDiameter` for a bad conventional reference, and
/// `InvalidTetrahedron` when the lengths violate the tetrahedron inequality.
pub fn compute(edges: &EdgeLengthSet, cfg: VolumeCfg) -> Result<f64, GeomError> {
    edges.validate()?;
    match cfg.unit {
        VolumeUnit::Natural => natural_volume(edges, cfg.rel_tol),
        VolumeUnit::Conventional { diameter } => {
            if !diameter.is_finite() || diameter <= 0.0 {
                return Err(GeomError::InvalidDiameter(diameter));
            }
            let in_diameters = edges.scaled(1.0 / diameter);
            Ok(XYZ_PER_NATURAL * natural_volume(&in_diameters, cfg.rel_tol)?)
        }
    }
}

fn natural_volume(edges: &EdgeLengthSet, rel_tol: f64) -> Result<f64, GeomError> {
    let det = edges.cayley_menger().determinant();
    let tol = rel_tol * edges.max_length().powi(6);
    if det < -tol {
        return Err(GeomError::InvalidTetrahedron { det, tol });
    }
    if det <= tol {
        return Ok(0.0);
    }
    Ok((det / 4.0).sqrt())
}

/// Convert a Euclidean volume (cubic units of length) to natural units.
#[inline]
pub fn natural_from_euclidean(v: f64) -> f64 {
    v * NATURAL_PER_EUCLIDEAN
}

/// Euclidean volume of four points via the Gram determinant of the edge vectors.
///
/// Coordinate-based cross-check for `compute`; returns 0 for flat input.
pub fn tetra_volume_from_points(p: [Point3; 4]) -> f64 {
    let u1 = p[1] - p[0];
    let u2 = p[2] - p[0];
    let u3 = p[3] - p[0];
    let gram = Matrix3::new(
        u1.dot(&u1),
        u1.dot(&u2),
        u1.dot(&u3),
        u2.dot(&u1),
        u2.dot(&u2),
        u2.dot(&u3),
        u3.dot(&u1),
        u3.dot(&u2),
        u3.dot(&u3),
    );
    let det = gram.determinant();
    if det <= 0.0 {
        return 0.0;
    }
    det.sqrt() / 6.0
}

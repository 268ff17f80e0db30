//! Tetrahedra described by their six edge lengths.
//!
//! Purpose
//! - Measure a tetrahedron from lengths alone (no coordinates) through the
//!   Cayley–Menger determinant, in either the natural (tetrahedral) unit or a
//!   conventional cubic unit.
//!
//! Edge convention
//! - Label the vertices V0, V1, V2 (a face) and V3 (the apex). Then
//!   `a = |V1V2|`, `b = |V2V0|`, `c = |V0V1|` (each face edge named after the
//!   vertex it does not touch) and `d = |V3V0|`, `e = |V3V1|`, `f = |V3V2|`.
//! - Opposite pairs are therefore a↔d, b↔e, c↔f. The determinant depends on
//!   this pairing: swapping two lengths across pairs changes the volume.
//!   `EdgeLengthSet::from_vertices` is the safe way to build a set.
//!
//! Code cross-refs: `EdgeLengthSet`, `VolumeCfg`, `compute`, `tetra_volume_from_points`

mod cfg;
mod volume;

pub use volume::{compute, natural_from_euclidean, tetra_volume_from_points};

use nalgebra::Matrix5;

use crate::error::GeomError;
use crate::vector::{Point3, VectorOps};

use cfg::{DEFAULT_DIAMETER, DEFAULT_REL_TOL};

/// Six edge lengths in the (a, b, c, d, e, f) convention of this module.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EdgeLengthSet {
    pub a: f64,
    pub b: f64,
    pub c: f64,
    pub d: f64,
    pub e: f64,
    pub f: f64,
}

impl EdgeLengthSet {
    #[inline]
    pub fn new(a: f64, b: f64, c: f64, d: f64, e: f64, f: f64) -> Self {
        Self { a, b, c, d, e, f }
    }

    /// All six edges equal to `edge`.
    #[inline]
    pub fn regular(edge: f64) -> Self {
        Self::new(edge, edge, edge, edge, edge, edge)
    }

    /// Lengths of the tetrahedron with face `[V0, V1, V2]` and apex `V3`.
    pub fn from_vertices(v: [Point3; 4]) -> Self {
        let dist = |i: usize, j: usize| (v[j] - v[i]).length();
        Self {
            a: dist(1, 2),
            b: dist(2, 0),
            c: dist(0, 1),
            d: dist(3, 0),
            e: dist(3, 1),
            f: dist(3, 2),
        }
    }

    #[inline]
    pub fn as_array(&self) -> [f64; 6] {
        [self.a, self.b, self.c, self.d, self.e, self.f]
    }

    /// Every length multiplied by `s`.
    pub fn scaled(&self, s: f64) -> Self {
        let [a, b, c, d, e, f] = self.as_array().map(|l| l * s);
        Self { a, b, c, d, e, f }
    }

    #[inline]
    pub fn max_length(&self) -> f64 {
        self.as_array().into_iter().fold(0.0, f64::max)
    }

    /// Reject negative or non-finite lengths. Zero is allowed (flat tetrahedron).
    pub fn validate(&self) -> Result<(), GeomError> {
        for (edge, value) in ['a', 'b', 'c', 'd', 'e', 'f'].into_iter().zip(self.as_array()) {
            if !value.is_finite() || value < 0.0 {
                return Err(GeomError::InvalidEdgeLength { edge, value });
            }
        }
        Ok(())
    }

    /// Bordered 5×5 Cayley–Menger matrix of squared distances.
    ///
    /// Row/column 0 is the border; rows 1..=4 are V0..V3.
    pub fn cayley_menger(&self) -> Matrix5<f64> {
        let (a2, b2, c2) = (self.a * self.a, self.b * self.b, self.c * self.c);
        let (d2, e2, f2) = (self.d * self.d, self.e * self.e, self.f * self.f);
        #[rustfmt::skip]
        let rows = [
            0.0, 1.0, 1.0, 1.0, 1.0,
            1.0, 0.0, c2,  b2,  d2,
            1.0, c2,  0.0, a2,  e2,
            1.0, b2,  a2,  0.0, f2,
            1.0, d2,  e2,  f2,  0.0,
        ];
        Matrix5::from_row_slice(&rows)
    }
}

/// Unit in which a volume is reported.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum VolumeUnit {
    /// Tetravolumes: the regular tetrahedron with unit edge has volume 1.
    Natural,
    /// Cubic volume with cube edge `diameter / 2`. With `diameter = 2` this is
    /// the ordinary Euclidean volume.
    Conventional { diameter: f64 },
}

impl VolumeUnit {
    /// Conventional unit at the demo book's reference diameter.
    pub fn conventional() -> Self {
        VolumeUnit::Conventional {
            diameter: DEFAULT_DIAMETER,
        }
    }
}

/// Volume configuration (unit and tolerance).
///
/// `rel_tol` is relative: the determinant threshold is `rel_tol · L⁶` with
/// `L` the longest edge, so it does not depend on the overall scale.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct VolumeCfg {
    pub unit: VolumeUnit,
    pub rel_tol: f64,
}

impl Default for VolumeCfg {
    fn default() -> Self {
        Self {
            unit: VolumeUnit::Natural,
            rel_tol: DEFAULT_REL_TOL,
        }
    }
}

impl VolumeCfg {
    #[inline]
    pub fn with_unit(unit: VolumeUnit) -> Self {
        Self {
            unit,
            ..Self::default()
        }
    }
}

/// Edge lengths plus the unit they are measured in. Volume is not cached.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tetrahedron {
    pub edges: EdgeLengthSet,
    pub cfg: VolumeCfg,
}

impl Tetrahedron {
    #[inline]
    pub fn new(edges: EdgeLengthSet, cfg: VolumeCfg) -> Self {
        Self { edges, cfg }
    }

    #[inline]
    pub fn volume(&self) -> Result<f64, GeomError> {
        compute(&self.edges, self.cfg)
    }
}

#[cfg(test)]
mod tests;

//! Inadvertent tetrahedron: four vertices placed from distances alone.
//!
//! Construction (not a change of frame of the book):
//! - `P = |tip C1|`, `Q = |tip C0|`, `r` = rhombus edge.
//! - Midpoints `Pm = (−x/2, 0, 0)` and `Qm = (x/2, 0, 0)`.
//! - `P0, P1 = Pm ∓ (0, P/2, 0)` and `Q0, Q1 = Qm ± (0, 0, Q/2)`, so the chords
//!   `P0P1` and `Q0Q1` are perpendicular.
//! - `|Pm Q0|² = r² − P²/4` and `x² = |Pm Q0|² − Q²/4` make every `P_i Q_j`
//!   edge equal to `r`.
//!
//! Either radicand can be negative: the distances are then incompatible
//! with `r` and the configuration is unreachable.

use crate::book::BookGeometry;
use crate::error::GeomError;
use crate::page::Page;
use crate::segment::Segment;
use crate::tetra::{compute, EdgeLengthSet, VolumeCfg};
use crate::vector::{point3, Point3, VectorOps};

/// Vertices of the inadvertent tetrahedron.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Inadvertent {
    pub p0: Point3,
    pub p1: Point3,
    pub q0: Point3,
    pub q1: Point3,
}

impl Inadvertent {
    #[inline]
    pub fn vertices(&self) -> [Point3; 4] {
        [self.p0, self.p1, self.q0, self.q1]
    }

    /// `[P0P1, P0Q0, P0Q1, P1Q0, Q0Q1, P1Q1]`.
    pub fn edges(&self) -> [Segment; 6] {
        [
            Segment::new(self.p0, self.p1),
            Segment::new(self.p0, self.q0),
            Segment::new(self.p0, self.q1),
            Segment::new(self.p1, self.q0),
            Segment::new(self.q0, self.q1),
            Segment::new(self.p1, self.q1),
        ]
    }

    /// Face `[P0, P1, Q0]`, apex `Q1`: `c = P0P1` is opposite `f = Q0Q1`.
    #[inline]
    pub fn edge_lengths(&self) -> EdgeLengthSet {
        EdgeLengthSet::from_vertices(self.vertices())
    }

    #[inline]
    pub fn volume(&self, cfg: VolumeCfg) -> Result<f64, GeomError> {
        compute(&self.edge_lengths(), cfg)
    }
}

/// Place the four vertices for chord lengths `p_len`, `q_len` and rhombus edge `rhomb`.
pub fn reconstruct(p_len: f64, q_len: f64, rhomb: f64) -> Result<Inadvertent, GeomError> {
    let half_p = p_len / 2.0;
    let half_q = q_len / 2.0;
    let pm_q0_sq = rhomb * rhomb - half_p * half_p;
    if pm_q0_sq < 0.0 {
        return Err(GeomError::UnreachableConfiguration { radicand: pm_q0_sq });
    }
    let x_sq = pm_q0_sq - half_q * half_q;
    if x_sq < 0.0 {
        return Err(GeomError::UnreachableConfiguration { radicand: x_sq });
    }
    let x = x_sq.sqrt();
    let pm = point3(-x / 2.0, 0.0, 0.0);
    let qm = point3(x / 2.0, 0.0, 0.0);
    Ok(Inadvertent {
        p0: pm + point3(0.0, -half_p, 0.0),
        p1: pm + point3(0.0, half_p, 0.0),
        q0: qm + point3(0.0, 0.0, half_q),
        q1: qm + point3(0.0, 0.0, -half_q),
    })
}

/// Inadvertent tetrahedron for the current page tip.
///
/// Fails with `UnreachableConfiguration` when `tip–C0`, `tip–C1` and the
/// book's rhombus edge cannot be realized; callers skip such angles.
pub fn inadvertent(page: &Page, book: &BookGeometry) -> Result<Inadvertent, GeomError> {
    let tip = page.tip();
    let (c0, c1) = book.axis();
    let p_len = (tip - c1).length();
    let q_len = (tip - c0).length();
    reconstruct(p_len, q_len, book.rhomb_length())
}

//! Complementary tetrahedra: page tip over each cover.

use crate::book::BookGeometry;
use crate::error::GeomError;
use crate::page::Page;
use crate::segment::Segment;
use crate::tetra::{compute, EdgeLengthSet, VolumeCfg};

/// Edge sets of the two complementary tetrahedra, indexed by cover.
///
/// `covers[i]` is built from face `[S0, C_i, S1]` with the tip as apex:
/// `a = |C_i S1|`, `b = spine`, `c = |S0 C_i|` are fixed by the book and
/// `d = |tip S0|`, `e = |tip C_i|`, `f = |tip S1|` follow the page.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Complementary {
    pub covers: [EdgeLengthSet; 2],
}

impl Complementary {
    /// Volumes `[V(C0), V(C1)]`.
    pub fn volumes(&self, cfg: VolumeCfg) -> Result<[f64; 2], GeomError> {
        Ok([compute(&self.covers[0], cfg)?, compute(&self.covers[1], cfg)?])
    }

    /// Same pair with the covers in the other order.
    #[inline]
    pub fn swapped(&self) -> Self {
        Self {
            covers: [self.covers[1], self.covers[0]],
        }
    }

    /// `|V0 − V1| / max(V0, V1)`, or 0 when both volumes vanish.
    pub fn relative_deviation(&self, cfg: VolumeCfg) -> Result<f64, GeomError> {
        let [v0, v1] = self.volumes(cfg)?;
        Ok(relative_gap(v0, v1))
    }
}

/// `|a − b| / max(a, b)` for non-negative volumes; 0 when both vanish.
pub(crate) fn relative_gap(a: f64, b: f64) -> f64 {
    let scale = a.max(b);
    if scale == 0.0 {
        0.0
    } else {
        (a - b).abs() / scale
    }
}

/// Edge sets of the tetrahedra `(S0, C0, S1, tip)` and `(S0, C1, S1, tip)`.
pub fn complementary(page: &Page, book: &BookGeometry) -> Complementary {
    let tip = page.tip();
    let (s0, s1) = book.spine();
    let (c0, c1) = book.axis();
    let over = |cover| EdgeLengthSet::from_vertices([s0, cover, s1, tip]);
    Complementary {
        covers: [over(c0), over(c1)],
    }
}

/// Moving edges for display: `[tip–S0, tip–C1, tip–S1, tip–C0]`.
pub fn tip_segments(page: &Page, book: &BookGeometry) -> [Segment; 4] {
    let tip = page.tip();
    let (s0, s1) = book.spine();
    let (c0, c1) = book.axis();
    [
        Segment::new(tip, s0),
        Segment::new(tip, c1),
        Segment::new(tip, s1),
        Segment::new(tip, c0),
    ]
}

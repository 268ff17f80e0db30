//! Entry points for display drivers.
//!
//! A driver reads `Page::tip`, asks for segments and volumes, advances the
//! page with `Page::delta_angle`, and decides pacing on its own. The value
//! types come from `prelude`; this module adds the per-frame calls a driver
//! makes without holding a `Page` of its own.

use crate::book::BookGeometry;
use crate::error::GeomError;
use crate::invariant::{complementary, inadvertent, tip_segments};
use crate::page::{Facing, Page};
use crate::segment::Segment;
use crate::tetra::VolumeCfg;

pub use crate::sweep::{full_turn_angles, sample_angles, Oscillation};

/// Complementary volumes `[V(C0), V(C1)]` for a fresh page at `angle` degrees.
pub fn complementary_volumes_at(
    book: &BookGeometry,
    angle: f64,
    facing: Facing,
    cfg: VolumeCfg,
) -> Result<[f64; 2], GeomError> {
    complementary(&Page::on(book, angle, facing), book).volumes(cfg)
}

/// Inadvertent volume at `angle` degrees; `None` where the tetrahedron is unreachable.
pub fn inadvertent_volume_at(
    book: &BookGeometry,
    angle: f64,
    facing: Facing,
    cfg: VolumeCfg,
) -> Result<Option<f64>, GeomError> {
    match inadvertent(&Page::on(book, angle, facing), book) {
        Ok(t) => t.volume(cfg).map(Some),
        Err(GeomError::UnreachableConfiguration { .. }) => Ok(None),
        Err(e) => Err(e),
    }
}

/// Segments to draw for one frame: the spine, then `tip_segments`.
pub fn frame_segments(book: &BookGeometry, angle: f64, facing: Facing) -> [Segment; 5] {
    let [a, b, c, d] = tip_segments(&Page::on(book, angle, facing), book);
    [book.spine_segment(), a, b, c, d]
}

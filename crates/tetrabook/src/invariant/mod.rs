//! Tetrahedra spanned by the page tip.
//!
//! Purpose
//! - `complementary`: one tetrahedron per cover, both with the page tip as
//!   apex and the spine as a shared edge. Their volumes agree at every angle.
//! - `inadvertent`: a third tetrahedron rebuilt from distances alone. Its
//!   opposite edges `P0P1`, `Q0Q1` have the lengths `tip–C1`, `tip–C0`, and
//!   the remaining four edges equal the rhombus edge.
//!
//! Why the complementary volumes agree
//! - Both bases `S0 C_i S1` lie in the cover plane `z = 0` and have the same
//!   area because every `BookGeometry` has its spine through the axis
//!   midpoint; the apex height `|tip.z|` is shared. For symmetric books the inadvertent volume matches as well
//!   (checked numerically in the tests, not assumed by the code).
//!
//! Code cross-refs: `BookGeometry`, `Page`, `EdgeLengthSet::from_vertices`

mod complementary;
mod inadvertent;

pub(crate) use complementary::relative_gap;
pub use complementary::{complementary, tip_segments, Complementary};
pub use inadvertent::{inadvertent, reconstruct, Inadvertent};

//! Volume invariant of a page swinging between two book covers.
//!
//! A triangular page hinged on the spine of a book sweeps its tip along a
//! semicircle between two triangular covers. The tip and each cover span a
//! tetrahedron; both tetrahedra share the spine and always have the same
//! volume, whatever the dihedral angle of the page.
//!
//! Layout
//! - `vector`, `segment`: minimal 3D algebra over `nalgebra::Vector3<f64>`.
//! - `tetra`: six-edge tetrahedra and their Cayley–Menger volume.
//! - `book`, `page`: the fixed covers and the moving page tip.
//! - `invariant`: complementary and inadvertent tetrahedra built from a page.
//! - `sweep`: angle sweeps that sample the invariant (no rendering).
//! - `samplers`: seeded samplers for books and angles.

pub mod api;
pub mod book;
pub mod error;
pub mod invariant;
pub mod page;
pub mod samplers;
pub mod segment;
pub mod sweep;
pub mod tetra;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use book::BookGeometry;
pub use error::GeomError;
pub use page::{Facing, Page};
pub use segment::Segment;
pub use tetra::{EdgeLengthSet, Tetrahedron, VolumeCfg, VolumeUnit};
pub use vector::{point3, Point3, VectorOps};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::book::BookGeometry;
    pub use crate::error::GeomError;
    pub use crate::invariant::{complementary, inadvertent, Complementary, Inadvertent};
    pub use crate::page::{regular_dihedral_deg, Facing, Page};
    pub use crate::samplers::{draw_book, BookCfg, ReplayToken};
    pub use crate::segment::Segment;
    pub use crate::sweep::{sample, sweep, Sample, SweepCfg};
    pub use crate::tetra::{compute, EdgeLengthSet, Tetrahedron, VolumeCfg, VolumeUnit};
    pub use crate::vector::{point3, Point3, VectorOps};
}

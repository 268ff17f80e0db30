//! Tolerance and unit defaults for tetrahedron volumes (internal).
//!
//! Policy
//! - Defaults are fixed constants; callers override them through `VolumeCfg`
//!   rather than by touching these values.

/// Relative tolerance on the Cayley–Menger determinant, scaled by `L⁶`.
pub(crate) const DEFAULT_REL_TOL: f64 = 1e-9;
/// Reference sphere diameter of the demo book (unit-radius spheres).
pub(crate) const DEFAULT_DIAMETER: f64 = 2.0;
/// `V_xyz = sqrt(8/9) · V_nat` when natural edges are measured in diameters
/// and cubic edges in radii.
pub(crate) const XYZ_PER_NATURAL: f64 = 0.942_809_041_582_063_4;

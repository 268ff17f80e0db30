//! Seeded samplers for books, angles, and tetrahedra.
//!
//! Purpose
//! - Reproducible random inputs for tests, benchmarks, and CLI spot checks.
//! - Determinism uses a replay token `(seed, index)` mixed into one RNG, so a
//!   failing draw can be replayed by its index alone.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::book::BookGeometry;
use crate::tetra::EdgeLengthSet;
use crate::vector::{point3, Point3};

/// Replay token to make draws reproducible and indexable.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the next draw of the same stream.
    #[inline]
    pub fn next(self) -> Self {
        Self {
            seed: self.seed,
            index: self.index.wrapping_add(1),
        }
    }

    #[inline]
    fn to_std_rng(self) -> StdRng {
        // SplitMix64 finalizer on both halves of the token.
        fn mix(mut x: u64) -> u64 {
            x ^= x >> 30;
            x = x.wrapping_mul(0xbf58476d1ce4e5b9);
            x ^= x >> 27;
            x = x.wrapping_mul(0x94d049bb133111eb);
            x ^ (x >> 31)
        }
        let k = mix(self.seed ^ mix(self.index.wrapping_add(0x9e3779b97f4a7c15)));
        StdRng::seed_from_u64(k)
    }
}

/// Length ranges for random symmetric books.
#[derive(Clone, Copy, Debug)]
pub struct BookCfg {
    pub spine: (f64, f64),
    pub axis: (f64, f64),
}

impl Default for BookCfg {
    fn default() -> Self {
        Self {
            spine: (0.2, 3.0),
            axis: (0.2, 3.0),
        }
    }
}

fn draw_in<R: Rng>(rng: &mut R, (lo, hi): (f64, f64)) -> f64 {
    let lo = lo.max(1e-9);
    if hi <= lo {
        lo
    } else {
        rng.gen_range(lo..hi)
    }
}

/// Symmetric book with spine and axis lengths drawn from `cfg`.
pub fn draw_book(cfg: BookCfg, tok: ReplayToken) -> BookGeometry {
    let mut rng = tok.to_std_rng();
    let spine = draw_in(&mut rng, cfg.spine);
    let axis = draw_in(&mut rng, cfg.axis);
    BookGeometry::symmetric(spine, axis)
}

/// `n` angles in `[0, 360)` degrees.
pub fn draw_angles(tok: ReplayToken, n: usize) -> Vec<f64> {
    let mut rng = tok.to_std_rng();
    (0..n).map(|_| rng.gen_range(0.0..360.0)).collect()
}

/// Four points in the cube `[-half, half]³`.
pub fn draw_points(tok: ReplayToken, half: f64) -> [Point3; 4] {
    let mut rng = tok.to_std_rng();
    let h = half.abs().max(1e-9);
    let mut draw = || point3(rng.gen_range(-h..h), rng.gen_range(-h..h), rng.gen_range(-h..h));
    [draw(), draw(), draw(), draw()]
}

/// Edge lengths of a random tetrahedron (always realizable).
pub fn draw_edge_lengths(tok: ReplayToken, half: f64) -> EdgeLengthSet {
    EdgeLengthSet::from_vertices(draw_points(tok, half))
}

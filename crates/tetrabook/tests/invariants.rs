//! Property tests for the book-page volume invariant.
//!
//! Angles are kept away from the closed book (|sin θ| > 0.05) so both
//! tetrahedra sit well above the degeneracy threshold; the closed book itself
//! is covered by unit tests.

use proptest::prelude::*;
use tetrabook::invariant::{complementary, inadvertent, reconstruct};
use tetrabook::samplers::{draw_edge_lengths, ReplayToken};
use tetrabook::tetra::compute;
use tetrabook::{point3, BookGeometry, Facing, Page, Point3, VectorOps, VolumeCfg, VolumeUnit};

fn close(a: f64, b: f64, rel: f64) -> bool {
    (a - b).abs() <= rel * a.abs().max(b.abs()) + 1e-12
}

fn facing() -> impl Strategy<Value = Facing> {
    prop_oneof![Just(Facing::Up), Just(Facing::Down)]
}

fn open_angle() -> impl Strategy<Value = f64> {
    (0.0f64..360.0).prop_filter("page not closed", |deg| deg.to_radians().sin().abs() > 0.05)
}

/// `symmetric(spine, axis)` rotated about z by `phi` and moved by `(dx, dy)`.
fn placed_book(spine: f64, axis: f64, phi: f64, dx: f64, dy: f64) -> BookGeometry {
    let (sin, cos) = phi.sin_cos();
    let place = |p: Point3| point3(cos * p.x - sin * p.y + dx, sin * p.x + cos * p.y + dy, 0.0);
    let base = BookGeometry::symmetric(spine, axis);
    let (s0, s1) = base.spine();
    let (c0, c1) = base.axis();
    BookGeometry::new((place(s0), place(s1)), (place(c0), place(c1))).unwrap()
}

proptest! {
    #[test]
    fn placement_does_not_change_volumes(
        spine in 0.5f64..3.0,
        axis in 0.5f64..3.0,
        phi in 0.0f64..std::f64::consts::TAU,
        dx in -5.0f64..5.0,
        dy in -5.0f64..5.0,
        angle in open_angle(),
        facing in facing(),
    ) {
        let book = placed_book(spine, axis, phi, dx, dy);
        let reference = BookGeometry::symmetric(spine, axis);
        let cover_idx = match facing {
            Facing::Up => 0,
            Facing::Down => 1,
        };
        prop_assert!((Page::on(&book, 0.0, facing).tip() - book.cover(cover_idx)).length() < 1e-12);
        let cfg = VolumeCfg::default();
        let [v0, v1] = complementary(&Page::on(&book, angle, facing), &book).volumes(cfg).unwrap();
        let [r0, _] = complementary(&Page::on(&reference, angle, facing), &reference)
            .volumes(cfg)
            .unwrap();
        prop_assert!(close(v0, v1, 1e-6), "{} vs {}", v0, v1);
        prop_assert!(close(v0, r0, 1e-6), "{} vs {}", v0, r0);
    }

    #[test]
    fn complementary_volumes_agree(
        spine in 0.5f64..3.0,
        axis in 0.5f64..3.0,
        angle in open_angle(),
        facing in facing(),
    ) {
        let book = BookGeometry::symmetric(spine, axis);
        let page = Page::on(&book, angle, facing);
        let pair = complementary(&page, &book);
        for cfg in [VolumeCfg::default(), VolumeCfg::with_unit(VolumeUnit::conventional())] {
            let [v0, v1] = pair.volumes(cfg).unwrap();
            prop_assert!(v0 > 0.0);
            prop_assert!(close(v0, v1, 1e-6), "{} vs {}", v0, v1);
            let [s0, s1] = pair.swapped().volumes(cfg).unwrap();
            prop_assert_eq!((s0, s1), (v1, v0));
        }
    }

    #[test]
    fn inadvertent_matches_complementary(
        spine in 0.5f64..3.0,
        axis in 0.5f64..3.0,
        angle in open_angle(),
        facing in facing(),
    ) {
        let book = BookGeometry::symmetric(spine, axis);
        let page = Page::on(&book, angle, facing);
        let cfg = VolumeCfg::default();
        let [v0, _] = complementary(&page, &book).volumes(cfg).unwrap();
        let vi = inadvertent(&page, &book).unwrap().volume(cfg).unwrap();
        prop_assert!(close(v0, vi, 1e-6), "{} vs {}", v0, vi);
    }

    #[test]
    fn delta_angle_is_additive(
        start in -360.0f64..360.0,
        a in -360.0f64..360.0,
        b in -360.0f64..360.0,
        facing in facing(),
    ) {
        let mut stepped = Page::new(start, facing, 2.0);
        stepped.delta_angle(a);
        stepped.delta_angle(b);
        let mut once = Page::new(start, facing, 2.0);
        once.delta_angle(a + b);
        prop_assert!((stepped.tip() - once.tip()).length() < 1e-9);
    }

    #[test]
    fn volume_is_deterministic_and_cubic_in_scale(
        seed in any::<u64>(),
        index in any::<u64>(),
        k in 0.1f64..10.0,
    ) {
        let edges = draw_edge_lengths(ReplayToken::new(seed, index), 1.0);
        let cfg = VolumeCfg::default();
        let v = compute(&edges, cfg).unwrap();
        prop_assert_eq!(compute(&edges, cfg).unwrap().to_bits(), v.to_bits());
        prop_assume!(v > 1e-2);
        let scaled = compute(&edges.scaled(k), cfg).unwrap();
        prop_assert!(close(scaled, v * k * k * k, 1e-6), "{} vs {}", scaled, v * k * k * k);
    }

    #[test]
    fn conventional_is_rescaled_natural(
        seed in any::<u64>(),
        diameter in 0.5f64..4.0,
    ) {
        let edges = draw_edge_lengths(ReplayToken::new(seed, 0), 1.0);
        let natural = compute(&edges.scaled(1.0 / diameter), VolumeCfg::default()).unwrap();
        prop_assume!(natural > 1e-2);
        let conv = compute(
            &edges,
            VolumeCfg::with_unit(VolumeUnit::Conventional { diameter }),
        )
        .unwrap();
        prop_assert!(close(conv, (8.0f64 / 9.0).sqrt() * natural, 1e-9));
    }

    #[test]
    fn reconstruction_reproduces_distances(
        p in 0.0f64..2.0,
        q in 0.0f64..2.0,
        slack in 1e-6f64..1.0,
    ) {
        let rhomb = ((p * p + q * q) / 4.0 + slack).sqrt();
        let t = reconstruct(p, q, rhomb).unwrap();
        let edges = t.edges();
        prop_assert!((edges[0].length() - p).abs() < 1e-9);
        prop_assert!((edges[4].length() - q).abs() < 1e-9);
        for i in [1, 2, 3, 5] {
            prop_assert!((edges[i].length() - rhomb).abs() < 1e-9);
        }
    }
}

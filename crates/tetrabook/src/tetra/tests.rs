use super::*;
use crate::vector::point3;
use rand::{rngs::StdRng, Rng, SeedableRng};

fn corner() -> [Point3; 4] {
    [
        point3(0.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(0.0, 2.0, 0.0),
        point3(0.0, 0.0, 3.0),
    ]
}

#[test]
fn regular_unit_edge_is_one_natural_unit() {
    let v = compute(&EdgeLengthSet::regular(1.0), VolumeCfg::default()).unwrap();
    assert!((v - 1.0).abs() < 1e-12, "volume {}", v);
}

#[test]
fn regular_tetra_conventional_matches_euclidean() {
    // D = 2 reports plain Euclidean volume: edge 1 -> √2/12.
    let cfg = VolumeCfg::with_unit(VolumeUnit::conventional());
    let v = compute(&EdgeLengthSet::regular(1.0), cfg).unwrap();
    assert!((v - 2f64.sqrt() / 12.0).abs() < 1e-12, "volume {}", v);
    // Edge D in diameter units is the natural unit tetra -> sqrt(8/9).
    let cfg3 = VolumeCfg::with_unit(VolumeUnit::Conventional { diameter: 3.0 });
    let v3 = compute(&EdgeLengthSet::regular(3.0), cfg3).unwrap();
    assert!((v3 - (8.0f64 / 9.0).sqrt()).abs() < 1e-12, "volume {}", v3);
}

#[test]
fn corner_tetra_from_vertices() {
    let edges = EdgeLengthSet::from_vertices(corner());
    assert!((edges.a - 5f64.sqrt()).abs() < 1e-12);
    assert!((edges.b - 2.0).abs() < 1e-12);
    assert!((edges.c - 1.0).abs() < 1e-12);
    assert!((edges.d - 3.0).abs() < 1e-12);
    assert!((edges.e - 10f64.sqrt()).abs() < 1e-12);
    assert!((edges.f - 13f64.sqrt()).abs() < 1e-12);

    let cfg = VolumeCfg::with_unit(VolumeUnit::conventional());
    let v = compute(&edges, cfg).unwrap();
    assert!((v - 1.0).abs() < 1e-9, "volume {}", v);
    let nat = compute(&edges, VolumeCfg::default()).unwrap();
    assert!((nat - natural_from_euclidean(1.0)).abs() < 1e-9);
}

#[test]
fn pairing_across_opposite_edges_changes_volume() {
    let edges = EdgeLengthSet::from_vertices(corner());
    let base = compute(&edges, VolumeCfg::default()).unwrap();
    let crossed = EdgeLengthSet { d: edges.e, e: edges.d, ..edges };
    match compute(&crossed, VolumeCfg::default()) {
        Ok(v) => assert!((v - base).abs() > 1e-3, "{} vs {}", v, base),
        Err(GeomError::InvalidTetrahedron { .. }) => {}
        Err(e) => panic!("unexpected error {e}"),
    }
}

#[test]
fn coplanar_points_are_flat_not_invalid() {
    let square = [
        point3(0.0, 0.0, 0.0),
        point3(1.0, 0.0, 0.0),
        point3(1.0, 1.0, 0.0),
        point3(0.0, 1.0, 0.0),
    ];
    let edges = EdgeLengthSet::from_vertices(square);
    assert_eq!(compute(&edges, VolumeCfg::default()), Ok(0.0));
    assert_eq!(tetra_volume_from_points(square), 0.0);
    assert_eq!(compute(&EdgeLengthSet::regular(0.0), VolumeCfg::default()), Ok(0.0));
}

#[test]
fn impossible_lengths_are_rejected() {
    // Apex closer to every vertex than the circumradius of the face.
    let edges = EdgeLengthSet::new(1.0, 1.0, 1.0, 0.1, 0.1, 0.1);
    assert!(matches!(
        compute(&edges, VolumeCfg::default()),
        Err(GeomError::InvalidTetrahedron { det, .. }) if det < 0.0
    ));
}

#[test]
fn bad_inputs_are_reported() {
    let neg = EdgeLengthSet::new(1.0, 1.0, -1.0, 1.0, 1.0, 1.0);
    assert_eq!(
        compute(&neg, VolumeCfg::default()),
        Err(GeomError::InvalidEdgeLength {
            edge: 'c',
            value: -1.0
        })
    );
    let nan = EdgeLengthSet { f: f64::NAN, ..EdgeLengthSet::regular(1.0) };
    assert!(matches!(
        compute(&nan, VolumeCfg::default()),
        Err(GeomError::InvalidEdgeLength { edge: 'f', .. })
    ));
    let cfg = VolumeCfg::with_unit(VolumeUnit::Conventional { diameter: 0.0 });
    assert_eq!(
        compute(&EdgeLengthSet::regular(1.0), cfg),
        Err(GeomError::InvalidDiameter(0.0))
    );
}

#[test]
fn tolerance_is_scale_invariant() {
    // Sliver: apex 3e-4 above the face. det ≈ 2.9e-6 against L⁶ ≈ 125.
    let mut pts = corner();
    pts[3] = point3(0.2, 0.3, 3e-4);
    let edges = EdgeLengthSet::from_vertices(pts);
    let loose = VolumeCfg {
        rel_tol: 1e-6,
        ..VolumeCfg::default()
    };
    let small = compute(&edges, loose).unwrap();
    let big = compute(&edges.scaled(1e3), loose).unwrap();
    assert_eq!(small, 0.0);
    assert_eq!(big, 0.0);
    // The default tolerance keeps the sliver.
    assert!(compute(&edges, VolumeCfg::default()).unwrap() > 0.0);
}

#[test]
fn repeated_calls_are_bit_identical() {
    let edges = EdgeLengthSet::from_vertices(corner());
    let t = Tetrahedron::new(edges, VolumeCfg::default());
    let first = t.volume().unwrap();
    for _ in 0..8 {
        assert_eq!(t.volume().unwrap().to_bits(), first.to_bits());
    }
    assert_eq!(compute(&edges, VolumeCfg::default()).unwrap(), first);
}

#[test]
fn lengths_agree_with_coordinates_randomized_seeded() {
    let mut rng = StdRng::seed_from_u64(7);
    for _ in 0..200 {
        let mut p = [Point3::zeros(); 4];
        for v in p.iter_mut() {
            *v = point3(
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
                rng.gen_range(-2.0..2.0),
            );
        }
        let euclid = tetra_volume_from_points(p);
        if euclid < 1e-2 {
            // near-flat draws may fall under the degeneracy threshold
            continue;
        }
        let from_points = natural_from_euclidean(euclid);
        let from_lengths = compute(&EdgeLengthSet::from_vertices(p), VolumeCfg::default()).unwrap();
        assert!(
            (from_points - from_lengths).abs() <= 1e-7 * from_points.max(1.0),
            "{} vs {}",
            from_points,
            from_lengths
        );
    }
}

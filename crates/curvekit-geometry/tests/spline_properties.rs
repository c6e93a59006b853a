// Property tests across knot vectors, basis functions, and windowing.

use approx::assert_relative_eq;
use curvekit_geometry::basis::{create_bernstein, CoxDeBoor};
use curvekit_geometry::curve::{LastSharedWindow, ThreeSharedWindow, WindowingStrategy};
use curvekit_geometry::knot::{centripetal, chord_length, uniform};
use curvekit_geometry::{KnotVector, MatrixFormSpline, Spline, SplineKind};
use curvekit_math::{DVec3, Point3};
use proptest::prelude::*;

fn point() -> impl Strategy<Value = Point3> {
    (-50.0..50.0f64, -50.0..50.0f64, -50.0..50.0f64).prop_map(|(x, y, z)| DVec3::new(x, y, z))
}

fn distinct_points(min: usize, max: usize) -> impl Strategy<Value = Vec<Point3>> {
    prop::collection::vec(point(), min..=max).prop_filter("consecutive points must differ", |pts| {
        pts.windows(2).all(|w| w[0].distance(w[1]) > 1e-3)
    })
}

proptest! {
    #[test]
    fn bernstein_partition_of_unity(n in 0i64..12, t in 0.0..=1.0f64) {
        let sum: f64 = (0..=n).map(|i| create_bernstein(n, i).unwrap().evaluate(t)).sum();
        prop_assert!((sum - 1.0).abs() < 1e-10, "sum = {}", sum);
    }

    #[test]
    fn knot_vector_logical_round_trip(
        gaps in prop::collection::vec(0.01..5.0f64, 1..8),
        mults in prop::collection::vec(1usize..4, 8),
    ) {
        let mut values = vec![0.0];
        for g in &gaps {
            values.push(values[values.len() - 1] + g);
        }
        let multiplicities = mults[..values.len()].to_vec();
        let knots = KnotVector::new(values.clone(), multiplicities.clone()).unwrap();

        let expected: Vec<f64> = values
            .iter()
            .zip(&multiplicities)
            .flat_map(|(&v, &m)| std::iter::repeat(v).take(m))
            .collect();
        prop_assert_eq!(knots.knot_count(), expected.len());
        for (i, &k) in expected.iter().enumerate() {
            prop_assert_eq!(knots.logical_knot(i as isize).unwrap(), k);
        }
        prop_assert!(knots.logical_knot(expected.len() as isize).is_err());
    }

    #[test]
    fn cox_de_boor_partition_of_unity_uniform(
        point_count in 4usize..10,
        degree in 1usize..4,
        frac in 0.001..0.999f64,
    ) {
        let knots = uniform(point_count, degree).unwrap();
        let (lo, hi) = knots.domain(degree).unwrap();
        let t = lo + (hi - lo) * frac;
        let cox = CoxDeBoor::new(&knots);
        let sum: f64 = (0..=cox.family_count(degree) as isize)
            .map(|i| cox.evaluate(degree, i, t))
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-10, "sum = {} at t = {}", sum, t);
    }

    #[test]
    fn cox_de_boor_partition_of_unity_derived(
        pts in distinct_points(4, 9),
        frac in 0.001..0.999f64,
        use_centripetal in any::<bool>(),
    ) {
        let degree = 3;
        let knots = if use_centripetal {
            centripetal(&pts, degree).unwrap()
        } else {
            chord_length(&pts, degree).unwrap()
        };
        let cox = CoxDeBoor::new(&knots);
        let sum: f64 = (0..=cox.family_count(degree) as isize)
            .map(|i| cox.evaluate(degree, i, frac))
            .sum();
        prop_assert!((sum - 1.0).abs() < 1e-9, "sum = {}", sum);
    }

    #[test]
    fn last_shared_round_trip(segments in 1usize..5, pts in prop::collection::vec(point(), 13)) {
        let geometry = pts[..1 + 3 * segments].to_vec();
        let segs = LastSharedWindow.segments(&geometry).unwrap();
        prop_assert_eq!(segs.len(), segments);
        prop_assert_eq!(LastSharedWindow.flatten(&segs), geometry);
    }

    #[test]
    fn three_shared_round_trip(pts in prop::collection::vec(point(), 4..12)) {
        let segs = ThreeSharedWindow.segments(&pts).unwrap();
        prop_assert_eq!(segs.len(), pts.len() - 3);
        prop_assert_eq!(ThreeSharedWindow.flatten(&segs), pts);
    }
}

#[test]
fn test_window_round_trip_lengths() {
    let pts: Vec<Point3> = (0..10).map(|i| DVec3::new(i as f64, 2.0 * i as f64, 0.5)).collect();
    for (kind, lengths) in [
        (SplineKind::Hermite, [4, 7, 10]),
        (SplineKind::CubicBezier, [4, 7, 10]),
        (SplineKind::UniformBSpline, [4, 5, 6]),
        (SplineKind::CatmullRom, [4, 5, 6]),
    ] {
        for len in lengths {
            let mut spline = MatrixFormSpline::new(kind);
            spline.set_geometry(pts[..len].to_vec()).unwrap();
            assert_eq!(spline.geometry(), pts[..len].to_vec(), "{kind:?} with {len} points");
        }
    }
}

#[test]
fn test_basis_boundary_families() {
    // 5 control points, cubic, uniform knots -3..=5
    let knots = uniform(5, 3).unwrap();
    let cox = CoxDeBoor::new(&knots);
    let last = cox.family_count(3) as isize;
    assert_eq!(last, 5);

    // Family 0 has no predecessor knot: zero at degree 0 everywhere, and zero
    // at degree 3 across the domain.
    for step in 0..=8 {
        let t = step as f64 * 0.25;
        assert_eq!(cox.evaluate(0, 0, t), 0.0);
        assert_eq!(cox.evaluate(3, 0, t), 0.0);
    }

    // The last family is fully defined and carries the final control point.
    assert_relative_eq!(cox.evaluate(3, last, 2.0), 1.0 / 6.0, epsilon = 1e-12);
    assert_relative_eq!(cox.evaluate(3, 1, 0.0), 1.0 / 6.0, epsilon = 1e-12);
}

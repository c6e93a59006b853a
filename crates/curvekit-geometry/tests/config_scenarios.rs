// End-to-end construction through the JSON configuration surface.

use curvekit_geometry::tessellate::{par_sample, sample};
use curvekit_geometry::SplineConfig;
use curvekit_math::{DVec3, Point3};

fn assert_point_eq(a: Point3, b: Point3) {
    assert!((a - b).length() < 1e-10, "expected {b:?}, got {a:?}");
}

#[test]
fn cubic_bezier_from_json() {
    let spline = SplineConfig::from_json(
        r#"{"kind": "cubic_bezier", "geometry": [[0,0,0],[1,2,0],[2,2,0],[3,0,0]]}"#,
    )
    .unwrap()
    .build()
    .unwrap();

    assert_point_eq(spline.evaluate(0.0).unwrap(), DVec3::ZERO);
    assert_point_eq(spline.evaluate(1.0).unwrap(), DVec3::new(3.0, 0.0, 0.0));
    assert_point_eq(spline.evaluate(0.5).unwrap(), DVec3::new(1.5, 1.5, 0.0));
}

#[test]
fn general_bezier_needs_degree_plus_one_points() {
    let err = SplineConfig::from_json(
        r#"{"kind": "bezier", "degree": 3, "control_points": [[0,0,0],[1,2,0],[2,2,0]]}"#,
    )
    .unwrap()
    .build()
    .err().unwrap();
    assert!(err.is_configuration());
}

#[test]
fn explicit_knots_mismatch_is_configuration_error() {
    let err = SplineConfig::from_json(
        r#"{
            "kind": "non_uniform_b_spline",
            "degree": 1,
            "control_points": [[0,0,0],[1,0,0]],
            "knots": { "values": [0, 1, 2], "multiplicities": [2, 2] }
        }"#,
    )
    .unwrap()
    .build()
    .err().unwrap();
    assert!(err.is_configuration());
}

#[test]
fn conflicting_knot_request_is_configuration_error() {
    let err = SplineConfig::from_json(
        r#"{
            "kind": "non_uniform_b_spline",
            "control_points": [[0,0,0],[1,0,0],[2,1,0],[3,0,0]],
            "knots": { "uniform": true, "chord_length": true }
        }"#,
    )
    .unwrap()
    .build()
    .err().unwrap();
    assert!(err.is_configuration());
}

#[test]
fn uniform_bspline_kinds_agree() {
    let points = "[[0,0,0],[1,2,0],[3,3,0],[4,0,0],[6,1,0]]";
    let matrix = SplineConfig::from_json(&format!(
        r#"{{"kind": "uniform_b_spline", "geometry": {points}}}"#
    ))
    .unwrap()
    .build()
    .unwrap();
    let general = SplineConfig::from_json(&format!(
        r#"{{"kind": "non_uniform_b_spline", "control_points": {points}, "knots": {{"uniform": true}}}}"#
    ))
    .unwrap()
    .build()
    .unwrap();

    assert_eq!(matrix.domain(), (0.0, 2.0));
    assert_eq!(general.domain(), (0.0, 2.0));
    let a = sample(matrix.as_ref(), 17).unwrap();
    let b = par_sample(general.as_ref(), 17).unwrap();
    for (p, q) in a.iter().zip(&b) {
        assert_point_eq(*p, *q);
    }
}

#[test]
fn chord_length_curve_interpolates_ends() {
    let spline = SplineConfig::from_json(
        r#"{
            "kind": "non_uniform_b_spline",
            "degree": 2,
            "control_points": [[0,0,0],[1,2,0],[3,1,0],[4,4,1]],
            "knots": { "chord_length": true }
        }"#,
    )
    .unwrap()
    .build()
    .unwrap();
    assert_eq!(spline.domain(), (0.0, 1.0));
    assert_point_eq(spline.evaluate(0.0).unwrap(), DVec3::ZERO);
    assert_point_eq(spline.evaluate(1.0).unwrap(), DVec3::new(4.0, 4.0, 1.0));
    assert!(spline.evaluate(1.5).unwrap_err().is_domain());
}

#[test]
fn config_round_trips_through_json() {
    let config = SplineConfig::from_json(
        r#"{"kind": "catmull_rom", "geometry": [[0,0,0],[1,1,0],[2,0,0],[3,1,0]]}"#,
    )
    .unwrap();
    let json = serde_json::to_string(&config).unwrap();
    assert_eq!(SplineConfig::from_json(&json).unwrap(), config);
}

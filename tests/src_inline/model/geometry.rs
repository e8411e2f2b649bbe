use super::{
    MIN_BODY_SCALE, Point, STRAIGHT_ANGLE, clip01, joint_angle, ratio, score_angle, torso_length,
};
use crate::fixtures;

#[test]
fn test_joint_angle_collinear_is_straight() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 0.5);
    let c = Point::new(0.0, 1.0);
    assert!((joint_angle(a, b, c) - 180.0).abs() < 1e-9);
}

#[test]
fn test_joint_angle_right_angle() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.0, 1.0);
    let c = Point::new(1.0, 1.0);
    assert!((joint_angle(a, b, c) - 90.0).abs() < 1e-9);
}

#[test]
fn test_joint_angle_folded_is_zero() {
    let a = Point::new(1.0, 0.0);
    let b = Point::new(0.0, 0.0);
    let c = Point::new(2.0, 0.0);
    assert!(joint_angle(a, b, c).abs() < 1e-9);
}

#[test]
fn test_joint_angle_degenerate_vectors() {
    let p = Point::new(0.3, 0.3);
    let q = Point::new(0.7, 0.1);
    assert_eq!(joint_angle(p, p, q), STRAIGHT_ANGLE);
    assert_eq!(joint_angle(q, p, p), STRAIGHT_ANGLE);
    assert_eq!(joint_angle(p, p, p), STRAIGHT_ANGLE);
}

#[test]
fn test_joint_angle_stays_in_range() {
    let pts = [
        Point::new(0.1, 0.9),
        Point::new(0.2, 0.35),
        Point::new(0.77, 0.4),
        Point::new(0.5, 0.5),
        Point::new(0.51, 0.49),
    ];
    for &a in &pts {
        for &b in &pts {
            for &c in &pts {
                let angle = joint_angle(a, b, c);
                assert!(angle.is_finite());
                assert!((0.0..=180.0).contains(&angle), "angle {angle}");
            }
        }
    }
}

#[test]
fn test_score_angle_boundaries() {
    assert_eq!(score_angle(105.0, 105.0, 90.0), 1.0);
    assert!((score_angle(150.0, 105.0, 90.0) - 0.5).abs() < 1e-12);
    assert!((score_angle(60.0, 105.0, 90.0) - 0.5).abs() < 1e-12);
    assert_eq!(score_angle(195.0, 105.0, 90.0), 0.0);
    assert_eq!(score_angle(15.0, 105.0, 90.0), 0.0);
    assert_eq!(score_angle(285.0, 105.0, 90.0), 0.0);
}

#[test]
fn test_torso_length_translation_invariant() {
    let joints = fixtures::mountain_perfect();
    let base = torso_length(&joints);
    assert!((base - 0.25).abs() < 1e-12);

    let shifted = fixtures::map_points(&joints, |p| Point::new(p.x + 0.125, p.y - 0.0625));
    assert!((torso_length(&shifted) - base).abs() < 1e-12);
}

#[test]
fn test_torso_length_scales_linearly() {
    let joints = fixtures::tree_perfect();
    let base = torso_length(&joints);
    let scaled = fixtures::map_points(&joints, |p| Point::new(p.x * 0.5, p.y * 0.5));
    assert!((torso_length(&scaled) - base * 0.5).abs() < 1e-12);
}

#[test]
fn test_ratio_guards_zero_denominator() {
    assert_eq!(ratio(0.5, 0.25), 2.0);
    let guarded = ratio(1.0, 0.0);
    assert!(guarded.is_finite());
    assert_eq!(guarded, 1.0 / MIN_BODY_SCALE);
    assert_eq!(ratio(0.0, 0.0), 0.0);
}

#[test]
fn test_clip01() {
    assert_eq!(clip01(-0.2), 0.0);
    assert_eq!(clip01(0.4), 0.4);
    assert_eq!(clip01(1.7), 1.0);
}

#[test]
fn test_point_midpoint_and_distance() {
    let a = Point::new(0.0, 0.0);
    let b = Point::new(0.6, 0.8);
    assert_eq!(a.midpoint(b), Point::new(0.3, 0.4));
    assert!((a.distance(b) - 1.0).abs() < 1e-12);
}

#[test]
fn test_joint_angle_tiny_vectors_stay_finite() {
    // Magnitudes of 1e-170 multiply to below the smallest subnormal.
    let a = Point::new(1e-170, 0.0);
    let b = Point::new(0.0, 0.0);
    let c = Point::new(0.0, 1e-170);
    assert_eq!(joint_angle(a, b, c), STRAIGHT_ANGLE);

    let huge = Point::new(1e200, 1e200);
    let angle = joint_angle(huge, b, Point::new(-1e200, 1e200));
    assert!(angle.is_finite());
}

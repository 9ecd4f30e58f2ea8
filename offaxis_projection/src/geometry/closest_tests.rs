use glam::Vec3;
use crate::error::Error;
use crate::geometry::Line;
use super::*;

// ============================================================================
// Intersecting and skew lines
// ============================================================================

#[test]
fn test_intersecting_lines_meet_at_apex() {
    let apex = Vec3::new(1.5, 1.68, 1.5);
    let a = Line::new(Vec3::new(0.0, 1.0, 0.2), apex + Vec3::new(0.0, 3.0, 0.6));
    let b = Line::new(Vec3::new(1.0, 0.0, -0.3), apex - Vec3::new(2.0, 0.0, -0.6));

    let closest = closest_points(&a, &b).unwrap();

    assert!((closest.on_a - apex).length() < 1e-5);
    assert!((closest.on_b - apex).length() < 1e-5);
    assert!((closest.midpoint() - apex).length() < 1e-5);
    assert!(closest.distance() < 1e-5);
}

#[test]
fn test_skew_lines_common_perpendicular() {
    // Line a along X at z = 0, line b along Y at z = 2
    let a = Line::new(Vec3::X, Vec3::new(-4.0, 0.0, 0.0));
    let b = Line::new(Vec3::Y, Vec3::new(1.0, 7.0, 2.0));

    let closest = closest_points(&a, &b).unwrap();

    assert!((closest.on_a - Vec3::new(1.0, 0.0, 0.0)).length() < 1e-5);
    assert!((closest.on_b - Vec3::new(1.0, 0.0, 2.0)).length() < 1e-5);
    assert!((closest.distance() - 2.0).abs() < 1e-5);
    assert!((closest.midpoint() - Vec3::new(1.0, 0.0, 1.0)).length() < 1e-5);

    // Connecting segment is perpendicular to both lines
    let segment = closest.on_b - closest.on_a;
    assert!(segment.dot(a.direction).abs() < 1e-5);
    assert!(segment.dot(b.direction).abs() < 1e-5);
}

// ============================================================================
// Parallel lines
// ============================================================================

// Parallel lines used to leave the caller's output untouched; now the failure
// is explicit and carries no points at all.
#[test]
fn test_parallel_lines_report_error_instead_of_stale_output() {
    let a = Line::new(Vec3::Z, Vec3::ZERO);
    let b = Line::new(Vec3::Z * 3.0, Vec3::new(1.0, 1.0, 0.0));

    assert_eq!(closest_points(&a, &b), Err(Error::Parallel("lines".to_string())));
}

#[test]
fn test_zero_direction_is_parallel() {
    let a = Line::new(Vec3::ZERO, Vec3::ZERO);
    let b = Line::new(Vec3::X, Vec3::Y);

    assert!(matches!(closest_points(&a, &b), Err(Error::Parallel(_))));
}

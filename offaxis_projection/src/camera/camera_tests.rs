use glam::{Mat4, Vec3, Vec4};
use crate::config::Tolerance;
use crate::error::Error;
use super::*;

// ============================================================================
// ImageRegion
// ============================================================================

#[test]
fn test_full_region() {
    let full = ImageRegion::FULL;
    assert_eq!(full, ImageRegion::new(0.0, 0.0, 1.0, 1.0));
    assert_eq!(full, ImageRegion::default());
    assert_eq!(full.area(), 1.0);
    assert!(full.is_normalized());
}

#[test]
fn test_region_extents() {
    let region = ImageRegion::new(0.25, 0.0, 1.0, 0.5);
    assert_eq!(region.width(), 0.75);
    assert_eq!(region.height(), 0.5);
    assert_eq!(region.area(), 0.375);
}

#[test]
fn test_region_normalization_checks() {
    assert!(ImageRegion::new(0.1, 0.2, 0.9, 0.8).is_normalized());
    assert!(!ImageRegion::new(-0.1, 0.0, 1.0, 1.0).is_normalized());
    assert!(!ImageRegion::new(0.0, 0.0, 1.0, 1.2).is_normalized());
    assert!(!ImageRegion::new(0.8, 0.0, 0.2, 1.0).is_normalized());
    assert!(!ImageRegion::new(f32::NAN, 0.0, 1.0, 1.0).is_normalized());
}

#[test]
fn test_region_vec4_conversion() {
    let v = Vec4::new(0.1, 0.2, 0.3, 0.4);
    let region = ImageRegion::from(v);
    assert_eq!(region.to_array(), [0.1, 0.2, 0.3, 0.4]);
    assert_eq!(Vec4::from(region), v);
}

#[test]
fn test_region_bytes_are_four_floats() {
    let region = ImageRegion::new(0.0, 0.5, 1.0, 1.0);
    let bytes = region.as_bytes();
    assert_eq!(bytes.len(), 16);
    let floats: &[f32] = bytemuck::cast_slice(bytes);
    assert_eq!(floats, &[0.0, 0.5, 1.0, 1.0]);
}

#[test]
fn test_region_display() {
    assert_eq!(format!("{}", ImageRegion::new(0.0, 0.5, 1.0, 1.0)), "(0,0.5,1,1)");
}

// ============================================================================
// CameraParams
// ============================================================================

fn test_camera() -> CameraParams {
    CameraParams {
        position: Vec3::new(0.0, 0.0, 5.0),
        direction: -Vec3::Z,
        up: Vec3::Y,
        fovy: std::f32::consts::FRAC_PI_2,
        aspect: 1.0,
        image_region: ImageRegion::FULL,
    }
}

#[test]
fn test_camera_view_matrix_matches_look_at() {
    let camera = test_camera();
    let expected = Mat4::look_at_rh(Vec3::new(0.0, 0.0, 5.0), Vec3::ZERO, Vec3::Y);
    assert!(camera.view_matrix().abs_diff_eq(expected, 1e-6));
}

#[test]
fn test_camera_projection_matrix() {
    let camera = test_camera();
    let expected = Mat4::perspective_rh_gl(std::f32::consts::FRAC_PI_2, 1.0, 0.1, 100.0);
    assert_eq!(camera.projection_matrix(0.1, 100.0), expected);
}

#[test]
fn test_camera_display_mentions_fields() {
    let text = format!("{}", test_camera());
    assert!(text.contains("position (0,0,5)"));
    assert!(text.contains("fovy 90.000 deg"));
    assert!(text.contains("region (0,0,1,1)"));
}

// ============================================================================
// ProjectionPair
// ============================================================================

#[test]
fn test_view_projection() {
    let projection = Mat4::perspective_rh_gl(1.0, 1.5, 0.1, 10.0);
    let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let pair = ProjectionPair::new(projection, view);
    assert_eq!(pair.view_projection(), projection * view);
}

#[test]
fn test_inverted_pair() {
    let projection = Mat4::perspective_rh_gl(1.0, 1.5, 0.1, 10.0);
    let view = Mat4::from_translation(Vec3::new(1.0, 2.0, 3.0));
    let pair = ProjectionPair::new(projection, view);

    let inverse = pair.inverted(Tolerance::Exact).unwrap();
    assert!((inverse.projection * projection).abs_diff_eq(Mat4::IDENTITY, 1e-5));
    assert!((inverse.view * view).abs_diff_eq(Mat4::IDENTITY, 1e-6));
}

#[test]
fn test_inverted_singular_pair() {
    let pair = ProjectionPair::new(Mat4::ZERO, Mat4::IDENTITY);
    assert_eq!(pair.inverted(Tolerance::Exact), Err(Error::Singular));

    let pair = ProjectionPair::new(Mat4::IDENTITY, Mat4::ZERO);
    assert_eq!(pair.inverted(Tolerance::Exact), Err(Error::Singular));
}

#[test]
fn test_pair_bytes() {
    let pair = ProjectionPair::new(Mat4::IDENTITY, Mat4::IDENTITY);
    assert_eq!(pair.as_bytes().len(), 2 * 16 * 4);
}

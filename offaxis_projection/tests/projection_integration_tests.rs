//! Integration tests for off-axis projection through the public API
//!
//! Run with: cargo test --test projection_integration_tests

use offaxis_projection::glam::{Mat4, Vec3, Vec4};
use offaxis_projection::offaxis::{Error, ProjectionConfig, Projector, Tolerance};
use offaxis_projection::offaxis::camera::{
    ImageRegion, Quad, offaxis_camera, offaxis_camera_from_transform, offaxis_transform,
};
use offaxis_projection::offaxis::consumer::{
    CameraConsumer, CameraDescription, CameraStrategy, RecordingConsumer, submit_with_strategy,
};
use offaxis_projection::offaxis::geometry::{Plane, intersect_planes};

// ============================================================================
// HELPERS
// ============================================================================

fn powerwall() -> Quad {
    Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(3.0, 3.0, 0.0),
    )
}

/// Floor of a CAVE, viewed from above, with -Z toward the front wall
fn cave_floor() -> Quad {
    Quad::new(
        Vec3::new(0.0, 0.0, 3.0),
        Vec3::new(3.0, 0.0, 3.0),
        Vec3::new(3.0, 0.0, 0.0),
    )
}

const EYE: Vec3 = Vec3::new(1.5, 1.68, 1.5);

fn project(pair_matrix: Mat4, point: Vec3) -> Vec3 {
    let clip = pair_matrix * point.extend(1.0);
    clip.truncate() / clip.w
}

// ============================================================================
// ROUND TRIP
// ============================================================================

#[test]
fn test_integration_round_trip_powerwall() {
    let config = ProjectionConfig::default();
    let pair = offaxis_transform(&powerwall(), EYE, &config).unwrap();

    let camera = offaxis_camera_from_transform(&pair.projection.inverse(), &pair.view.inverse(), &config).unwrap();

    assert!((camera.position - EYE).length() < 1e-3, "eye {:?}", camera.position);
    assert!(camera.fovy > 0.0);
    assert!(camera.aspect > 0.0);
    for v in camera.image_region.to_array() {
        assert!((0.0..=1.0).contains(&v));
    }
}

#[test]
fn test_integration_round_trip_cave_floor() {
    let config = ProjectionConfig::default().with_clip_range(0.05, 50.0);
    let eye = Vec3::new(1.0, 1.7, 2.0);

    let projector = Projector::new(config).unwrap();
    let pair = projector.transform(&cave_floor(), eye).unwrap();
    let reconstructed = projector.camera_from_pair(&pair).unwrap();
    let direct = projector.camera(&cave_floor(), eye).unwrap();

    assert!((reconstructed.position - eye).length() < 1e-3);
    assert!((reconstructed.direction - Vec3::NEG_Y).length() < 1e-4);
    assert!((reconstructed.fovy - direct.fovy).abs() < 1e-3);
    assert!((reconstructed.aspect - direct.aspect).abs() < 1e-3);
}

// ============================================================================
// MATRIX CAMERA
// ============================================================================

#[test]
fn test_integration_matrix_camera_maps_wall_to_ndc_square() {
    let pair = offaxis_transform(&powerwall(), EYE, &ProjectionConfig::default()).unwrap();
    let view_projection = pair.view_projection();
    let quad = powerwall();

    let corners = [
        (quad.lower_left, Vec3::new(-1.0, -1.0, 0.0)),
        (quad.lower_right, Vec3::new(1.0, -1.0, 0.0)),
        (quad.upper_right, Vec3::new(1.0, 1.0, 0.0)),
        (quad.upper_left(), Vec3::new(-1.0, 1.0, 0.0)),
    ];
    for (corner, expected) in corners {
        let ndc = project(view_projection, corner);
        assert!((ndc.x - expected.x).abs() < 1e-4, "{:?} -> {:?}", corner, ndc);
        assert!((ndc.y - expected.y).abs() < 1e-4, "{:?} -> {:?}", corner, ndc);
    }
}

#[test]
fn test_integration_perspective_crop_matches_matrix_camera() {
    // A point seen through the symmetric camera and cropped to the image
    // region must land where the off-axis matrix puts it.
    let config = ProjectionConfig::default();
    let pair = offaxis_transform(&powerwall(), EYE, &config).unwrap();
    let camera = offaxis_camera(&powerwall(), EYE, &config).unwrap();
    let symmetric = camera.projection_matrix(config.znear, config.zfar) * camera.view_matrix();
    let region = camera.image_region;

    for point in [Vec3::new(0.7, 2.2, 0.0), Vec3::new(2.9, 0.1, 0.0), Vec3::new(1.0, 1.0, -2.0)] {
        let offaxis = project(pair.view_projection(), point);
        let full = project(symmetric, point);

        // Full image coordinates in [0, 1], then into the crop
        let u = (full.x + 1.0) * 0.5;
        let v = (full.y + 1.0) * 0.5;
        let cropped_x = (u - region.x0) / region.width() * 2.0 - 1.0;
        let cropped_y = (v - region.y0) / region.height() * 2.0 - 1.0;

        assert!((cropped_x - offaxis.x).abs() < 1e-3, "{:?}: {} vs {}", point, cropped_x, offaxis.x);
        assert!((cropped_y - offaxis.y).abs() < 1e-3, "{:?}: {} vs {}", point, cropped_y, offaxis.y);
    }
}

// ============================================================================
// STRATEGIES
// ============================================================================

#[test]
fn test_integration_three_strategies() {
    let config = ProjectionConfig::default();
    let mut full = RecordingConsumer::new("rasterizer");
    let mut perspective_only = RecordingConsumer::perspective_only("path tracer");

    let mut accepted = Vec::new();
    for strategy in CameraStrategy::ALL {
        accepted.push((
            submit_with_strategy(&mut full, strategy, &powerwall(), EYE, &config).unwrap(),
            submit_with_strategy(&mut perspective_only, strategy, &powerwall(), EYE, &config).unwrap(),
        ));
    }

    assert_eq!(accepted, vec![(true, false), (true, true), (true, true)]);
    assert_eq!(full.submitted().len(), 3);
    assert_eq!(perspective_only.submitted().len(), 2);
    assert!(perspective_only.submitted().iter().all(|c| !c.is_matrix()));
}

struct FailingConsumer;

impl CameraConsumer for FailingConsumer {
    fn name(&self) -> &str {
        "failing"
    }

    fn supports_matrix_camera(&self) -> bool {
        true
    }

    fn submit(&mut self, _camera: &CameraDescription) -> offaxis_projection::offaxis::Result<()> {
        Err(Error::Degenerate("device lost".to_string()))
    }
}

#[test]
fn test_integration_consumer_errors_propagate() {
    let result = submit_with_strategy(
        &mut FailingConsumer,
        CameraStrategy::PerspectiveFromQuad,
        &powerwall(),
        EYE,
        &ProjectionConfig::default(),
    );
    assert_eq!(result, Err(Error::Degenerate("device lost".to_string())));
}

// ============================================================================
// FAILURE MODES
// ============================================================================

#[test]
fn test_integration_parallel_planes() {
    let a = Plane::new(Vec3::Z, Vec3::ZERO);
    let b = Plane::new(Vec3::Z, Vec3::new(0.0, 0.0, 1.0));
    assert_eq!(intersect_planes(&a, &b), Err(Error::Parallel("planes".to_string())));
}

#[test]
fn test_integration_eye_behind_wall() {
    let projector = Projector::default();
    let behind = Vec3::new(1.5, 1.5, -1.0);

    assert!(matches!(projector.transform(&powerwall(), behind), Err(Error::Degenerate(_))));
    assert!(matches!(projector.camera(&powerwall(), behind), Err(Error::Degenerate(_))));
}

#[test]
fn test_integration_epsilon_tolerance_rejects_sliver_quad() {
    let sliver = Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(1.0, 0.0, 0.0),
        Vec3::new(2.0, 1e-4, 0.0),
    );
    let eye = Vec3::new(0.5, 0.0, 1.0);

    // Collinear within 1e-6 but not exactly
    let exact = ProjectionConfig::default();
    let loose = ProjectionConfig::default().with_tolerance(Tolerance::Epsilon(1e-6));
    assert!(sliver.viewer_frame(eye, &exact).is_ok());
    assert!(matches!(sliver.viewer_frame(eye, &loose), Err(Error::Degenerate(_))));
}

#[test]
fn test_integration_image_region_vec4_conversion() {
    let region = ImageRegion::from(Vec4::new(0.0, 0.1, 0.9, 1.0));
    assert_eq!(Vec4::from(region), Vec4::new(0.0, 0.1, 0.9, 1.0));
    assert_eq!(region.to_string(), "(0,0.1,0.9,1)");
}

/// Reconstruction of an off-axis camera from opaque matrices.
///
/// Given only the inverse projection and view matrices, the frustum is
/// recovered by unprojecting the NDC cube. The eye is the apex where the
/// side planes meet, and the far slice serves as the quad. Both are then
/// handed to the perspective emulation.
///
/// For a true perspective frustum the left/right and bottom/top intersection
/// lines both pass through the apex. With rounding (or slightly inconsistent
/// matrices) they are skew, so the eye is taken as the midpoint of their
/// common perpendicular.

use glam::{Mat4, Vec3};
use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::geometry::{
    FrustumCorners, Plane, closest_points_with_tolerance, intersect_planes_with_tolerance, ndc_corners,
};
use crate::{offaxis_bail, offaxis_err, offaxis_trace};
use super::camera::{CameraParams, ProjectionPair};
use super::perspective::offaxis_camera;
use super::quad::Quad;

const SOURCE: &str = "offaxis::reconstruct";

fn unit_edge(from: Vec3, to: Vec3, name: &str) -> Result<Vec3> {
    (to - from).try_normalize()
        .ok_or_else(|| offaxis_err!(SOURCE, "frustum edge {} has zero length", name))
}

fn unit_normal(a: Vec3, b: Vec3, face: &str) -> Result<Vec3> {
    a.cross(b).try_normalize()
        .ok_or_else(|| offaxis_err!(SOURCE, "{} frustum face is degenerate", face))
}

/// Recover the frustum apex (the eye) and the far slice as a quad.
pub fn reconstruct_apex(proj_inv: &Mat4, view_inv: &Mat4, config: &ProjectionConfig) -> Result<(Vec3, Quad)> {
    let corners = ndc_corners(proj_inv, view_inv);
    if !corners.is_finite() {
        offaxis_bail!(SOURCE, "unprojected frustum corners are not finite: {:?}", corners);
    }
    let FrustumCorners { v000, v001, v010, v011, v100, v101, v110, v111 } = corners;
    offaxis_trace!(SOURCE, "near slice {:?} {:?} {:?}, far slice {:?} {:?} {:?}",
        v000, v100, v110, v001, v101, v111);

    // Edges from -z to +z
    let ez00 = unit_edge(v000, v001, "ez00")?;
    let ez10 = unit_edge(v100, v101, "ez10")?;
    let ez01 = unit_edge(v010, v011, "ez01")?;
    // Edges from -y to +y
    let ey00 = unit_edge(v000, v010, "ey00")?;
    let ey10 = unit_edge(v100, v110, "ey10")?;
    // Edges from -x to +x
    let ex00 = unit_edge(v000, v100, "ex00")?;
    let ex10 = unit_edge(v010, v110, "ex10")?;

    let left = Plane::new(unit_normal(ey00, ez00, "left")?, v000);
    let right = Plane::new(unit_normal(ez10, ey10, "right")?, v100);
    let bottom = Plane::new(unit_normal(ez00, ex00, "bottom")?, v000);
    let top = Plane::new(unit_normal(ex10, ez01, "top")?, v010);

    let left_right = intersect_planes_with_tolerance(&left, &right, config.tolerance)?;
    let bottom_top = intersect_planes_with_tolerance(&bottom, &top, config.tolerance)?;
    let closest = closest_points_with_tolerance(&left_right, &bottom_top, config.tolerance)?;

    let eye = closest.midpoint();
    offaxis_trace!(SOURCE, "apex {:?} (side lines {} apart)", eye, closest.distance());

    Ok((eye, Quad::new(v001, v101, v111)))
}

/// Symmetric perspective camera equivalent to an arbitrary matrix pair.
///
/// Takes the *inverse* projection and view matrices.
///
/// # Errors
///
/// `Error::Degenerate` for an invalid `config` or for matrices whose frustum
/// corners or faces collapse,
/// `Error::Parallel` when the side planes or their intersection lines do not
/// converge, plus any error of [`offaxis_camera`].
pub fn offaxis_camera_from_transform(
    proj_inv: &Mat4,
    view_inv: &Mat4,
    config: &ProjectionConfig,
) -> Result<CameraParams> {
    config.validate()?;
    let (eye, quad) = reconstruct_apex(proj_inv, view_inv, config)?;
    offaxis_camera(&quad, eye, config)
}

/// Same as [`offaxis_camera_from_transform`], inverting `pair` first.
pub fn offaxis_camera_from_pair(pair: &ProjectionPair, config: &ProjectionConfig) -> Result<CameraParams> {
    let inverse = pair.inverted(config.tolerance)?;
    offaxis_camera_from_transform(&inverse.projection, &inverse.view, config)
}

#[cfg(test)]
#[path = "reconstruct_tests.rs"]
mod tests;

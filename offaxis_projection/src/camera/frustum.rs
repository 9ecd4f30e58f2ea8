/// Frustum - asymmetric projection/view matrices for an eye in front of a quad.
///
/// The projection is the classic GL `glFrustum` matrix (right-handed,
/// column-major, NDC z in [-1, 1]); the view matrix expresses world points
/// in the quad's frame with the eye at the origin looking down -Z.

use glam::{Mat4, Vec3, Vec4};
use crate::config::ProjectionConfig;
use crate::error::Result;
use super::camera::ProjectionPair;
use super::quad::Quad;

/// Asymmetric perspective frustum matrix.
///
/// `left`/`right`/`bottom`/`top` are the near-plane extents, already scaled
/// to `znear`.
pub fn frustum_matrix(left: f32, right: f32, bottom: f32, top: f32, znear: f32, zfar: f32) -> Mat4 {
    let width = right - left;
    let height = top - bottom;
    let depth = zfar - znear;

    Mat4::from_cols(
        Vec4::new(2.0 * znear / width, 0.0, 0.0, 0.0),
        Vec4::new(0.0, 2.0 * znear / height, 0.0, 0.0),
        Vec4::new(
            (right + left) / width,
            (top + bottom) / height,
            -(zfar + znear) / depth,
            -1.0,
        ),
        Vec4::new(0.0, 0.0, -(2.0 * zfar * znear) / depth, 0.0),
    )
}

/// World-to-eye matrix for an orthonormal basis (`x`, `y`, `z`) and `eye`.
///
/// Rotation rows are the basis vectors; the translation moves `eye` to the
/// origin.
pub fn basis_view_matrix(x: Vec3, y: Vec3, z: Vec3, eye: Vec3) -> Mat4 {
    Mat4::from_cols(
        Vec4::new(x.x, y.x, z.x, 0.0),
        Vec4::new(x.y, y.y, z.y, 0.0),
        Vec4::new(x.z, y.z, z.z, 0.0),
        Vec4::new(-x.dot(eye), -y.dot(eye), -z.dot(eye), 1.0),
    )
}

/// Off-axis projection and view matrices for `eye` looking at `quad`.
///
/// # Errors
///
/// Returns `Error::Degenerate` for an invalid clip range, a collapsed quad,
/// or an eye that is not in front of the quad.
pub fn offaxis_transform(quad: &Quad, eye: Vec3, config: &ProjectionConfig) -> Result<ProjectionPair> {
    config.validate()?;
    let frame = quad.viewer_frame(eye, config)?;

    // Similar triangles: wall offsets at `distance` -> near plane at `znear`
    let scale = config.znear / frame.distance;
    let left = -frame.left * scale;
    let right = frame.right * scale;
    let bottom = -frame.bottom * scale;
    let top = frame.top * scale;

    let projection = frustum_matrix(left, right, bottom, top, config.znear, config.zfar);
    let view = basis_view_matrix(frame.x_axis, frame.y_axis, frame.z_axis, eye);

    Ok(ProjectionPair::new(projection, view))
}

#[cfg(test)]
#[path = "frustum_tests.rs"]
mod tests;

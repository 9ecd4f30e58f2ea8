/// Perspective emulation of an off-axis view.
///
/// Renderers that only offer a centered perspective camera can still show an
/// off-axis view: widen the symmetric frustum until it contains the
/// asymmetric one, then crop the rendered image to the part that matches the
/// quad.

use std::f32::consts::PI;
use glam::Vec3;
use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::offaxis_bail;
use super::camera::{CameraParams, ImageRegion};
use super::quad::{Quad, ViewerFrame};

const SOURCE: &str = "offaxis::perspective";

/// Symmetric perspective camera plus image region for `eye` looking at `quad`.
///
/// # Errors
///
/// Returns `Error::Degenerate` for an invalid `config`, a collapsed quad, an
/// eye not in front of it, or when the field of view reaches 180 degrees.
pub fn offaxis_camera(quad: &Quad, eye: Vec3, config: &ProjectionConfig) -> Result<CameraParams> {
    config.validate()?;
    let frame = quad.viewer_frame(eye, config)?;
    let ViewerFrame { left, right, bottom, top, distance, .. } = frame;

    let full_width = 2.0 * left.max(right);
    let full_height = 2.0 * bottom.max(top);

    let fovy = 2.0 * (full_height / (2.0 * distance)).atan();
    let aspect = full_width / full_height;

    // atan saturates: fovy rounding to pi leaves tan(fovy / 2) negative
    let half_tan = (fovy * 0.5).tan();
    if !(fovy > 0.0 && fovy < PI) || !(half_tan.is_finite() && half_tan > 0.0)
        || !(aspect.is_finite() && aspect > 0.0)
    {
        offaxis_bail!(SOURCE,
            "no finite symmetric camera (fovy {}, aspect {}) for eye at distance {}",
            fovy, aspect, distance);
    }

    // The narrow side of each axis is cropped; the wide side touches the frame edge.
    let image_region = ImageRegion {
        x0: if left < right { (right - left) / full_width } else { 0.0 },
        y0: if bottom < top { (top - bottom) / full_height } else { 0.0 },
        x1: if right < left { (left + right) / full_width } else { 1.0 },
        y1: if top < bottom { (bottom + top) / full_height } else { 1.0 },
    };

    Ok(CameraParams {
        position: frame.eye,
        direction: -frame.z_axis,
        up: frame.y_axis,
        fovy,
        aspect,
        image_region,
    })
}

#[cfg(test)]
#[path = "perspective_tests.rs"]
mod tests;

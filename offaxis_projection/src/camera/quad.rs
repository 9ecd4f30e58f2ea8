/// Quad - flat rectangular display surface (wall, screen, CAVE panel).
///
/// Described by three corners; the fourth is derived. The corners are
/// assumed to form a rectangle (LL→LR orthogonal to LR→UR). Only the
/// properties needed to avoid non-finite output are checked.

use glam::Vec3;
use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::offaxis_bail;

const SOURCE: &str = "offaxis::Quad";

/// Display surface given by its lower-left, lower-right and upper-right corners.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quad {
    pub lower_left: Vec3,
    pub lower_right: Vec3,
    pub upper_right: Vec3,
}

impl Quad {
    pub fn new(lower_left: Vec3, lower_right: Vec3, upper_right: Vec3) -> Self {
        Self { lower_left, lower_right, upper_right }
    }

    /// Fourth corner, `LL + (UR - LR)`.
    pub fn upper_left(&self) -> Vec3 {
        self.lower_left + (self.upper_right - self.lower_right)
    }

    /// Length of the LL→LR edge.
    pub fn width(&self) -> f32 {
        self.lower_left.distance(self.lower_right)
    }

    /// Length of the LR→UR edge.
    pub fn height(&self) -> f32 {
        self.lower_right.distance(self.upper_right)
    }

    /// Center of the rectangle.
    pub fn center(&self) -> Vec3 {
        (self.lower_left + self.upper_right) * 0.5
    }

    /// Express `eye` in the quad's frame.
    ///
    /// # Errors
    ///
    /// Returns `Error::Degenerate` for an invalid `config`, if an edge has zero
    /// length, the edges are parallel, or the eye is not in front of the
    /// surface by more than `config.min_eye_distance`. An eye so close that
    /// the quad's extent exceeds its distance by `1 / f32::EPSILON` is
    /// rejected as well.
    pub fn viewer_frame(&self, eye: Vec3, config: &ProjectionConfig) -> Result<ViewerFrame> {
        config.validate()?;

        let horizontal = self.lower_right - self.lower_left;
        let vertical = self.upper_right - self.lower_right;

        let Some(x_axis) = horizontal.try_normalize() else {
            offaxis_bail!(SOURCE, "lower edge {:?} -> {:?} has zero length", self.lower_left, self.lower_right);
        };
        let Some(y_axis) = vertical.try_normalize() else {
            offaxis_bail!(SOURCE, "right edge {:?} -> {:?} has zero length", self.lower_right, self.upper_right);
        };
        let normal = x_axis.cross(y_axis);
        if config.tolerance.is_degenerate(normal.length_squared()) {
            offaxis_bail!(SOURCE, "quad corners are collinear");
        }
        let z_axis = normal.normalize();

        if !eye.is_finite() {
            offaxis_bail!(SOURCE, "eye {:?} is not finite", eye);
        }

        let eye_offset = eye - self.lower_left;
        let distance = eye_offset.dot(z_axis);
        if !(distance > config.min_eye_distance) {
            offaxis_bail!(SOURCE,
                "eye {:?} is {} from the quad plane (must be in front by more than {})",
                eye, distance, config.min_eye_distance);
        }

        let width = horizontal.length();
        let height = vertical.length();

        // Below this the quad spans the whole half-space as seen from the eye
        let min_distance = width.max(height) * f32::EPSILON;
        if !(distance > min_distance) {
            offaxis_bail!(SOURCE,
                "eye {:?} is {} from a quad of extent {} (no finite field of view)",
                eye, distance, width.max(height));
        }
        let left = eye_offset.dot(x_axis);
        let bottom = eye_offset.dot(y_axis);

        Ok(ViewerFrame {
            x_axis,
            y_axis,
            z_axis,
            eye,
            distance,
            left,
            right: width - left,
            bottom,
            top: height - bottom,
        })
    }
}

/// The eye expressed relative to a quad.
///
/// Offsets are measured in world units inside the quad plane from the
/// eye's perpendicular foot to each edge; they go negative when the foot
/// lies outside the quad.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ViewerFrame {
    /// Unit vector along LL→LR
    pub x_axis: Vec3,
    /// Unit vector along LR→UR
    pub y_axis: Vec3,
    /// Quad normal, pointing toward the eye side
    pub z_axis: Vec3,
    pub eye: Vec3,
    /// Perpendicular eye-to-plane distance (always positive)
    pub distance: f32,
    pub left: f32,
    pub right: f32,
    pub bottom: f32,
    pub top: f32,
}

#[cfg(test)]
#[path = "quad_tests.rs"]
mod tests;

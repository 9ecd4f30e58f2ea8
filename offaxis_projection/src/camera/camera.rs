/// Camera value types exchanged with camera consumers.
///
/// A camera reaches a consumer either as an explicit matrix pair or as a
/// symmetric perspective camera plus a normalized crop of its image.

use std::fmt;
use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3, Vec4};
use crate::config::Tolerance;
use crate::error::{Error, Result};

/// Normalized crop box `(x0, y0) – (x1, y1)` inside `[0, 1]²`.
///
/// Laid out as four consecutive `f32`, the layout consumers expect for a
/// float box parameter.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ImageRegion {
    pub x0: f32,
    pub y0: f32,
    pub x1: f32,
    pub y1: f32,
}

impl ImageRegion {
    /// The whole image
    pub const FULL: ImageRegion = ImageRegion { x0: 0.0, y0: 0.0, x1: 1.0, y1: 1.0 };

    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> f32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> f32 {
        self.y1 - self.y0
    }

    pub fn area(&self) -> f32 {
        self.width() * self.height()
    }

    /// All components in `[0, 1]` and the box is not inverted.
    pub fn is_normalized(&self) -> bool {
        let unit = |v: f32| (0.0..=1.0).contains(&v);
        unit(self.x0) && unit(self.y0) && unit(self.x1) && unit(self.y1)
            && self.x0 <= self.x1 && self.y0 <= self.y1
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.x0, self.y0, self.x1, self.y1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

impl Default for ImageRegion {
    fn default() -> Self {
        Self::FULL
    }
}

impl From<Vec4> for ImageRegion {
    fn from(v: Vec4) -> Self {
        Self::new(v.x, v.y, v.z, v.w)
    }
}

impl From<ImageRegion> for Vec4 {
    fn from(region: ImageRegion) -> Self {
        Vec4::new(region.x0, region.y0, region.x1, region.y1)
    }
}

impl fmt::Display for ImageRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{},{},{})", self.x0, self.y0, self.x1, self.y1)
    }
}

/// Symmetric perspective camera plus image crop.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraParams {
    pub position: Vec3,
    /// Unit view direction
    pub direction: Vec3,
    /// Unit up vector
    pub up: Vec3,
    /// Vertical field of view in radians
    pub fovy: f32,
    /// Width over height of the full (uncropped) image
    pub aspect: f32,
    pub image_region: ImageRegion,
}

impl CameraParams {
    /// Symmetric projection matrix for this camera (GL clip space), ignoring the crop.
    pub fn projection_matrix(&self, znear: f32, zfar: f32) -> Mat4 {
        Mat4::perspective_rh_gl(self.fovy, self.aspect, znear, zfar)
    }

    /// World-to-eye matrix for this camera.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_to_rh(self.position, self.direction, self.up)
    }
}

impl fmt::Display for CameraParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "position ({},{},{}) direction ({},{},{}) up ({},{},{}) fovy {:.3} deg aspect {:.4} region {}",
            self.position.x, self.position.y, self.position.z,
            self.direction.x, self.direction.y, self.direction.z,
            self.up.x, self.up.y, self.up.z,
            self.fovy.to_degrees(),
            self.aspect,
            self.image_region,
        )
    }
}

/// Projection and view matrices describing one camera.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Pod, Zeroable)]
pub struct ProjectionPair {
    pub projection: Mat4,
    pub view: Mat4,
}

impl ProjectionPair {
    pub fn new(projection: Mat4, view: Mat4) -> Self {
        Self { projection, view }
    }

    /// Combined view-projection matrix (projection * view).
    pub fn view_projection(&self) -> Mat4 {
        self.projection * self.view
    }

    /// Both matrices inverted, as the reconstructor consumes them.
    ///
    /// # Errors
    ///
    /// Returns `Error::Singular` if either determinant is degenerate.
    pub fn inverted(&self, tolerance: Tolerance) -> Result<ProjectionPair> {
        if tolerance.is_degenerate(self.projection.determinant())
            || tolerance.is_degenerate(self.view.determinant())
        {
            return Err(Error::Singular);
        }
        Ok(ProjectionPair {
            projection: self.projection.inverse(),
            view: self.view.inverse(),
        })
    }

    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::bytes_of(self)
    }
}

#[cfg(test)]
#[path = "camera_tests.rs"]
mod tests;

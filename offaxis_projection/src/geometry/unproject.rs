/// NDC → world unprojection.

use glam::{Mat4, Vec3};

/// Unproject a point of the canonical view volume to world space.
///
/// Applies `proj_inv` to `(x, y, z, 1)`, then `view_inv`, then divides by the
/// resulting `w`. A `w` of zero yields non-finite components; callers that
/// need finite output must check.
pub fn unproject_ndc(proj_inv: &Mat4, view_inv: &Mat4, ndc: Vec3) -> Vec3 {
    let v = *view_inv * (*proj_inv * ndc.extend(1.0));
    v.truncate() / v.w
}

/// The eight NDC cube corners mapped to world space.
///
/// Field names are `v{x}{y}{z}` where `0` stands for −1 and `1` for +1 on
/// that NDC axis, so `v000` is the near lower-left corner and `v111` the far
/// upper-right one.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrustumCorners {
    pub v000: Vec3,
    pub v001: Vec3,
    pub v010: Vec3,
    pub v011: Vec3,
    pub v100: Vec3,
    pub v101: Vec3,
    pub v110: Vec3,
    pub v111: Vec3,
}

impl FrustumCorners {
    pub fn as_array(&self) -> [Vec3; 8] {
        [
            self.v000, self.v001, self.v010, self.v011,
            self.v100, self.v101, self.v110, self.v111,
        ]
    }

    pub fn is_finite(&self) -> bool {
        self.as_array().iter().all(|v| v.is_finite())
    }
}

/// Unproject all eight NDC cube corners.
pub fn ndc_corners(proj_inv: &Mat4, view_inv: &Mat4) -> FrustumCorners {
    let corner = |x: f32, y: f32, z: f32| unproject_ndc(proj_inv, view_inv, Vec3::new(x, y, z));

    FrustumCorners {
        v000: corner(-1.0, -1.0, -1.0),
        v001: corner(-1.0, -1.0, 1.0),
        v010: corner(-1.0, 1.0, -1.0),
        v011: corner(-1.0, 1.0, 1.0),
        v100: corner(1.0, -1.0, -1.0),
        v101: corner(1.0, -1.0, 1.0),
        v110: corner(1.0, 1.0, -1.0),
        v111: corner(1.0, 1.0, 1.0),
    }
}

#[cfg(test)]
#[path = "unproject_tests.rs"]
mod tests;

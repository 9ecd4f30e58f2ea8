/// Planes, parametric lines, and plane–plane intersection.

use glam::Vec3;
use crate::config::Tolerance;
use crate::error::{Error, Result};

/// Infinite plane through `point` with (not necessarily unit) `normal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub normal: Vec3,
    pub point: Vec3,
}

impl Plane {
    pub fn new(normal: Vec3, point: Vec3) -> Self {
        Self { normal, point }
    }

    /// Signed distance of `p`, in units of `|normal|`.
    pub fn signed_distance(&self, p: Vec3) -> f32 {
        self.normal.dot(p - self.point)
    }
}

/// Parametric line `point + t·direction`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    pub direction: Vec3,
    pub point: Vec3,
}

impl Line {
    pub fn new(direction: Vec3, point: Vec3) -> Self {
        Self { direction, point }
    }

    /// Point at parameter `t`.
    pub fn at(&self, t: f32) -> Vec3 {
        self.point + self.direction * t
    }
}

/// Line of intersection of two planes (exact parallelism test).
pub fn intersect_planes(a: &Plane, b: &Plane) -> Result<Line> {
    intersect_planes_with_tolerance(a, b, Tolerance::Exact)
}

/// Line of intersection of two planes.
///
/// The returned direction is `na × nb` (unnormalized). Returns
/// [`Error::Parallel`] when `|na × nb|²` is degenerate, i.e. the planes are
/// parallel or coincident.
pub fn intersect_planes_with_tolerance(a: &Plane, b: &Plane, tolerance: Tolerance) -> Result<Line> {
    let nc = a.normal.cross(b.normal);
    let det = nc.length_squared();

    if tolerance.is_degenerate(det) {
        return Err(Error::Parallel("planes".to_string()));
    }

    // Planes in the form n·x + d = 0
    let da = -a.normal.dot(a.point);
    let db = -b.normal.dot(b.point);

    let point = (nc.cross(b.normal) * da + a.normal.cross(nc) * db) / det;
    Ok(Line::new(nc, point))
}

#[cfg(test)]
#[path = "plane_tests.rs"]
mod tests;

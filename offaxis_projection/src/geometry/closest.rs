/// Closest points between two (possibly skew) lines via the common
/// perpendicular.

use glam::{Mat3, Vec3};
use crate::config::Tolerance;
use crate::error::{Error, Result};
use super::plane::Line;
use super::solve::solve3x3_with_tolerance;

/// Pair of closest points, one on each input line.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosestPoints {
    /// Closest point on the first line
    pub on_a: Vec3,
    /// Closest point on the second line
    pub on_b: Vec3,
}

impl ClosestPoints {
    /// Midpoint of the connecting segment. For lines that truly intersect
    /// this is the intersection point.
    pub fn midpoint(&self) -> Vec3 {
        (self.on_a + self.on_b) * 0.5
    }

    /// Length of the common perpendicular segment.
    pub fn distance(&self) -> f32 {
        self.on_a.distance(self.on_b)
    }
}

/// Closest points between two lines (exact singularity test).
pub fn closest_points(a: &Line, b: &Line) -> Result<ClosestPoints> {
    closest_points_with_tolerance(a, b, Tolerance::Exact)
}

/// Closest points between two lines.
///
/// Solves `pa + na·s + nc·u = pb + nb·t` for `(s, t, u)` where `nc` is the
/// unit common perpendicular. Parallel lines have no unique answer and yield
/// [`Error::Parallel`].
pub fn closest_points_with_tolerance(a: &Line, b: &Line, tolerance: Tolerance) -> Result<ClosestPoints> {
    let nc = a.direction.cross(b.direction).try_normalize()
        .ok_or_else(|| Error::Parallel("lines".to_string()))?;

    let system = Mat3::from_cols(a.direction, -b.direction, nc);
    let x = solve3x3_with_tolerance(system, b.point - a.point, tolerance)
        .map_err(|_| Error::Parallel("lines".to_string()))?;

    Ok(ClosestPoints {
        on_a: a.point + a.direction * x.x,
        on_b: b.point + b.direction * x.y,
    })
}

#[cfg(test)]
#[path = "closest_tests.rs"]
mod tests;

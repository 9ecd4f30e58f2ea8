/// Cramer's-rule solver for 3x3 linear systems.
///
/// No pivoting or refinement: callers are expected to pass well-conditioned
/// systems. The only degeneracy check is on the determinant of `A`.

use glam::{Mat3, Vec3};
use crate::config::Tolerance;
use crate::error::{Error, Result};

/// Solve `A·x = b` with the exact (zero determinant) degeneracy test.
///
/// `a` holds the three column vectors of `A`.
pub fn solve3x3(a: Mat3, b: Vec3) -> Result<Vec3> {
    solve3x3_with_tolerance(a, b, Tolerance::Exact)
}

/// Solve `A·x = b`, treating `det(A)` as zero according to `tolerance`.
///
/// Returns [`Error::Singular`] when the determinant is degenerate.
pub fn solve3x3_with_tolerance(a: Mat3, b: Vec3, tolerance: Tolerance) -> Result<Vec3> {
    let d = a.determinant();
    if tolerance.is_degenerate(d) {
        return Err(Error::Singular);
    }

    let d1 = Mat3::from_cols(b, a.y_axis, a.z_axis).determinant();
    let d2 = Mat3::from_cols(a.x_axis, b, a.z_axis).determinant();
    let d3 = Mat3::from_cols(a.x_axis, a.y_axis, b).determinant();

    Ok(Vec3::new(d1 / d, d2 / d, d3 / d))
}

#[cfg(test)]
#[path = "solve_tests.rs"]
mod tests;

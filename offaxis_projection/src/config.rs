//! Projection configuration and degeneracy thresholds

use crate::error::{Error, Result};

/// How degenerate quantities (determinants, squared cross-product lengths)
/// are detected.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Tolerance {
    /// Only an exact zero (or a non-finite value) is degenerate
    #[default]
    Exact,

    /// Absolute values at or below the threshold are degenerate
    Epsilon(f32),
}

impl Tolerance {
    /// Whether `value` counts as zero under this tolerance.
    ///
    /// NaN and infinities are always degenerate.
    pub fn is_degenerate(self, value: f32) -> bool {
        if !value.is_finite() {
            return true;
        }
        match self {
            Tolerance::Exact => value == 0.0,
            Tolerance::Epsilon(eps) => value.abs() <= eps,
        }
    }
}

/// Off-axis projection configuration
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectionConfig {
    /// Near plane distance used when building frustum matrices
    pub znear: f32,
    /// Far plane distance used when building frustum matrices
    pub zfar: f32,
    /// Eye-to-quad distances at or below this are rejected as degenerate
    pub min_eye_distance: f32,
    /// Degeneracy test for the linear solver and intersections
    pub tolerance: Tolerance,
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        // The clip range only has to give a well-conditioned matrix; it
        // carries no physical meaning for the wall.
        Self {
            znear: 1e-3,
            zfar: 1000.0,
            min_eye_distance: 0.0,
            tolerance: Tolerance::Exact,
        }
    }
}

impl ProjectionConfig {
    pub fn with_clip_range(mut self, znear: f32, zfar: f32) -> Self {
        self.znear = znear;
        self.zfar = zfar;
        self
    }

    pub fn with_min_eye_distance(mut self, distance: f32) -> Self {
        self.min_eye_distance = distance;
        self
    }

    pub fn with_tolerance(mut self, tolerance: Tolerance) -> Self {
        self.tolerance = tolerance;
        self
    }

    /// Check that the clip range and thresholds are usable.
    pub fn validate(&self) -> Result<()> {
        if !(self.znear > 0.0) || !self.znear.is_finite() {
            return Err(Error::Degenerate(format!("znear must be positive, got {}", self.znear)));
        }
        if !(self.zfar > self.znear) || !self.zfar.is_finite() {
            return Err(Error::Degenerate(format!(
                "zfar ({}) must be finite and greater than znear ({})",
                self.zfar, self.znear
            )));
        }
        if !(self.min_eye_distance >= 0.0) {
            return Err(Error::Degenerate(format!(
                "min_eye_distance must be non-negative, got {}",
                self.min_eye_distance
            )));
        }
        if let Tolerance::Epsilon(eps) = self.tolerance {
            if !(eps >= 0.0) {
                return Err(Error::Degenerate(format!("tolerance epsilon must be non-negative, got {}", eps)));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;

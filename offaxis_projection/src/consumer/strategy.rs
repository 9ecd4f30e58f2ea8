/// Strategies for turning a quad and an eye into a consumer camera.

use std::fmt;
use glam::Vec3;
use crate::camera::{Quad, offaxis_camera, offaxis_camera_from_pair, offaxis_transform};
use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::{offaxis_debug, offaxis_warn};
use super::consumer::{CameraConsumer, CameraDescription};

const SOURCE: &str = "offaxis::strategy";

/// How a camera is produced for a consumer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CameraStrategy {
    /// Pass the asymmetric matrix pair straight through
    MatrixCamera,
    /// Perspective emulation computed from the quad and the eye
    PerspectiveFromQuad,
    /// Perspective emulation reconstructed from the matrix pair
    PerspectiveFromMatrices,
}

impl CameraStrategy {
    pub const ALL: [CameraStrategy; 3] = [
        CameraStrategy::MatrixCamera,
        CameraStrategy::PerspectiveFromQuad,
        CameraStrategy::PerspectiveFromMatrices,
    ];

    /// Whether the consumer must accept `CameraDescription::Matrix`.
    pub fn requires_matrix_camera(&self) -> bool {
        matches!(self, CameraStrategy::MatrixCamera)
    }
}

impl fmt::Display for CameraStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            CameraStrategy::MatrixCamera => "matrix camera",
            CameraStrategy::PerspectiveFromQuad => "perspective from quad",
            CameraStrategy::PerspectiveFromMatrices => "perspective from matrices",
        };
        f.write_str(name)
    }
}

/// Camera for `eye` looking at `quad`, in the form `strategy` produces.
pub fn describe_camera(
    strategy: CameraStrategy,
    quad: &Quad,
    eye: Vec3,
    config: &ProjectionConfig,
) -> Result<CameraDescription> {
    let description = match strategy {
        CameraStrategy::MatrixCamera => {
            CameraDescription::Matrix(offaxis_transform(quad, eye, config)?)
        }
        CameraStrategy::PerspectiveFromQuad => {
            CameraDescription::Perspective(offaxis_camera(quad, eye, config)?)
        }
        CameraStrategy::PerspectiveFromMatrices => {
            let pair = offaxis_transform(quad, eye, config)?;
            CameraDescription::Perspective(offaxis_camera_from_pair(&pair, config)?)
        }
    };
    offaxis_debug!(SOURCE, "{}: {}", strategy, description);
    Ok(description)
}

/// Describe the camera with `strategy` and submit it to `consumer`.
///
/// Returns `Ok(false)` without computing anything when the strategy needs a
/// matrix camera the consumer lacks.
pub fn submit_with_strategy(
    consumer: &mut dyn CameraConsumer,
    strategy: CameraStrategy,
    quad: &Quad,
    eye: Vec3,
    config: &ProjectionConfig,
) -> Result<bool> {
    if strategy.requires_matrix_camera() && !consumer.supports_matrix_camera() {
        offaxis_warn!(SOURCE, "'{}' has no matrix camera, skipping {}", consumer.name(), strategy);
        return Ok(false);
    }

    let description = describe_camera(strategy, quad, eye, config)?;
    consumer.submit(&description)?;
    Ok(true)
}

#[cfg(test)]
#[path = "strategy_tests.rs"]
mod tests;

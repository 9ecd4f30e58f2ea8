/// Projector - configured entry point for off-axis cameras
///
/// Bundles a `ProjectionConfig` with the camera functions and reports every
/// computation through the crate logger. Failures are logged at error level
/// before being returned.

use glam::{Mat4, Vec3};
use crate::camera::{
    CameraParams, ProjectionPair, Quad,
    offaxis_camera, offaxis_camera_from_pair, offaxis_camera_from_transform, offaxis_transform,
};
use crate::config::ProjectionConfig;
use crate::error::Result;
use crate::{offaxis_debug, offaxis_error};

const SOURCE: &str = "offaxis::Projector";

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Projector {
    config: ProjectionConfig,
}

impl Projector {
    /// Create a projector after checking `config`.
    pub fn new(config: ProjectionConfig) -> Result<Self> {
        if let Err(error) = config.validate() {
            offaxis_error!(SOURCE, "Rejected configuration {:?}: {}", config, error);
            return Err(error);
        }
        offaxis_debug!(SOURCE, "Projector created with {:?}", config);
        Ok(Self { config })
    }

    pub fn config(&self) -> &ProjectionConfig {
        &self.config
    }

    /// Asymmetric projection and view matrices for `eye` looking at `quad`.
    pub fn transform(&self, quad: &Quad, eye: Vec3) -> Result<ProjectionPair> {
        let result = offaxis_transform(quad, eye, &self.config);
        self.report("transform", &result);
        result
    }

    /// Symmetric perspective camera with image crop for `eye` looking at `quad`.
    pub fn camera(&self, quad: &Quad, eye: Vec3) -> Result<CameraParams> {
        let result = offaxis_camera(quad, eye, &self.config);
        self.report("camera", &result);
        result
    }

    /// Perspective camera recovered from inverse projection and view matrices.
    pub fn camera_from_transform(&self, proj_inv: &Mat4, view_inv: &Mat4) -> Result<CameraParams> {
        let result = offaxis_camera_from_transform(proj_inv, view_inv, &self.config);
        self.report("camera_from_transform", &result);
        result
    }

    /// Perspective camera recovered from a (non-inverted) matrix pair.
    pub fn camera_from_pair(&self, pair: &ProjectionPair) -> Result<CameraParams> {
        let result = offaxis_camera_from_pair(pair, &self.config);
        self.report("camera_from_pair", &result);
        result
    }

    fn report<T: std::fmt::Debug>(&self, operation: &str, result: &Result<T>) {
        match result {
            Ok(value) => offaxis_debug!(SOURCE, "{} -> {:?}", operation, value),
            Err(error) => offaxis_error!(SOURCE, "{} failed: {}", operation, error),
        }
    }
}

#[cfg(test)]
#[path = "projector_tests.rs"]
mod tests;

/// Camera consumer trait - the receiving end of a computed camera

use std::fmt;
use crate::camera::{CameraParams, ProjectionPair};
use crate::error::Result;

/// A camera in one of the two forms a consumer understands.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CameraDescription {
    /// Explicit projection and view matrices
    Matrix(ProjectionPair),
    /// Symmetric perspective camera plus image crop
    Perspective(CameraParams),
}

impl CameraDescription {
    pub fn is_matrix(&self) -> bool {
        matches!(self, CameraDescription::Matrix(_))
    }

    pub fn as_matrix(&self) -> Option<&ProjectionPair> {
        match self {
            CameraDescription::Matrix(pair) => Some(pair),
            CameraDescription::Perspective(_) => None,
        }
    }

    pub fn as_perspective(&self) -> Option<&CameraParams> {
        match self {
            CameraDescription::Perspective(params) => Some(params),
            CameraDescription::Matrix(_) => None,
        }
    }
}

impl fmt::Display for CameraDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CameraDescription::Matrix(pair) => write!(
                f,
                "matrix camera: projection {:?} view {:?}",
                pair.projection.to_cols_array(),
                pair.view.to_cols_array(),
            ),
            CameraDescription::Perspective(params) => write!(f, "perspective camera: {}", params),
        }
    }
}

/// Receives cameras.
///
/// Implemented by renderer bindings. The crate never renders itself.
pub trait CameraConsumer: Send + Sync {
    /// Name used in log lines
    fn name(&self) -> &str;

    /// Whether `CameraDescription::Matrix` is accepted.
    ///
    /// Consumers without a matrix camera only get perspective descriptions.
    fn supports_matrix_camera(&self) -> bool;

    /// Take a camera for the next frame
    fn submit(&mut self, camera: &CameraDescription) -> Result<()>;
}

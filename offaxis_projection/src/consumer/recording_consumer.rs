/// Recording consumer - keeps every camera it receives
///
/// Stands in for a real renderer in tests and in the demo.

use crate::error::Result;
use crate::offaxis_bail;
use super::consumer::{CameraConsumer, CameraDescription};

const SOURCE: &str = "offaxis::RecordingConsumer";

#[derive(Debug, Clone)]
pub struct RecordingConsumer {
    name: String,
    matrix_camera: bool,
    submitted: Vec<CameraDescription>,
}

impl RecordingConsumer {
    /// Consumer that accepts both camera forms.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            matrix_camera: true,
            submitted: Vec::new(),
        }
    }

    /// Consumer that only has a perspective camera.
    pub fn perspective_only(name: impl Into<String>) -> Self {
        Self {
            matrix_camera: false,
            ..Self::new(name)
        }
    }

    pub fn submitted(&self) -> &[CameraDescription] {
        &self.submitted
    }

    pub fn last(&self) -> Option<&CameraDescription> {
        self.submitted.last()
    }

    pub fn clear(&mut self) {
        self.submitted.clear();
    }
}

impl CameraConsumer for RecordingConsumer {
    fn name(&self) -> &str {
        &self.name
    }

    fn supports_matrix_camera(&self) -> bool {
        self.matrix_camera
    }

    fn submit(&mut self, camera: &CameraDescription) -> Result<()> {
        if camera.is_matrix() && !self.matrix_camera {
            offaxis_bail!(SOURCE, "'{}' has no matrix camera", self.name);
        }
        self.submitted.push(*camera);
        Ok(())
    }
}

#[cfg(test)]
#[path = "recording_consumer_tests.rs"]
mod tests;

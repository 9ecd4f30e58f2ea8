//! Off-axis projection demo
//!
//! A viewer stands in front of a 3x3 powerwall, slightly above its center.
//! The camera is computed with each strategy and handed to two consumers:
//! one with a matrix camera, one that only understands perspective cameras.

use offaxis_projection::glam::Vec3;
use offaxis_projection::offaxis::{Diagnostics, ProjectionConfig, Result};
use offaxis_projection::offaxis::camera::Quad;
use offaxis_projection::offaxis::consumer::{
    CameraConsumer, CameraDescription, CameraStrategy, submit_with_strategy,
};
use offaxis_projection::offaxis::log::LogSeverity;
use offaxis_projection::{offaxis_error, offaxis_info};

const SOURCE: &str = "offaxis::demo";

/// Consumer that reports every camera through the logger
struct LoggingConsumer {
    name: &'static str,
    matrix_camera: bool,
    frames: u32,
}

impl CameraConsumer for LoggingConsumer {
    fn name(&self) -> &str {
        self.name
    }

    fn supports_matrix_camera(&self) -> bool {
        self.matrix_camera
    }

    fn submit(&mut self, camera: &CameraDescription) -> Result<()> {
        self.frames += 1;
        offaxis_info!(SOURCE, "[{}] frame {}: {}", self.name, self.frames, camera);
        Ok(())
    }
}

fn main() {
    if std::env::args().any(|arg| arg == "--verbose") {
        Diagnostics::set_min_severity(LogSeverity::Debug);
    }

    let wall = Quad::new(
        Vec3::new(0.0, 0.0, 0.0),
        Vec3::new(3.0, 0.0, 0.0),
        Vec3::new(3.0, 3.0, 0.0),
    );
    let eye = Vec3::new(1.5, 1.68, 1.5);
    let config = ProjectionConfig::default();

    let mut consumers = [
        LoggingConsumer { name: "rasterizer", matrix_camera: true, frames: 0 },
        LoggingConsumer { name: "path tracer", matrix_camera: false, frames: 0 },
    ];

    for consumer in consumers.iter_mut() {
        for strategy in CameraStrategy::ALL {
            match submit_with_strategy(consumer, strategy, &wall, eye, &config) {
                Ok(true) => offaxis_info!(SOURCE, "[{}] {} submitted", consumer.name, strategy),
                Ok(false) => {}
                Err(e) => offaxis_error!(SOURCE, "[{}] {} failed: {}", consumer.name, strategy, e),
            }
        }
    }
}

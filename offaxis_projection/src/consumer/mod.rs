//! Consumer module - handing cameras to whatever draws the picture.
//!
//! A consumer accepts either an explicit matrix pair or a symmetric
//! perspective camera with an image crop. Strategies decide which form is
//! produced and how.

mod consumer;
mod recording_consumer;
mod strategy;

pub use consumer::{CameraConsumer, CameraDescription};
pub use recording_consumer::RecordingConsumer;
pub use strategy::{CameraStrategy, describe_camera, submit_with_strategy};

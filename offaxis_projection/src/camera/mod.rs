//! Camera module - off-axis projections for a viewer in front of a quad.
//!
//! Produces either an explicit projection/view matrix pair or a symmetric
//! perspective camera with an image crop, and recovers the latter from an
//! arbitrary matrix pair. Everything here is a pure function of its inputs.

mod camera;
mod quad;
mod frustum;
mod perspective;
mod reconstruct;

pub use camera::{CameraParams, ImageRegion, ProjectionPair};
pub use quad::{Quad, ViewerFrame};
pub use frustum::{basis_view_matrix, frustum_matrix, offaxis_transform};
pub use perspective::offaxis_camera;
pub use reconstruct::{offaxis_camera_from_pair, offaxis_camera_from_transform, reconstruct_apex};

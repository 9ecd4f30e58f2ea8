//! Geometry module - numeric primitives behind frustum reconstruction.
//!
//! All functions are pure and operate on `glam` values. Failure is reported
//! through [`Error`](crate::offaxis::Error) and never leaves partial output.

mod solve;
mod plane;
mod closest;
mod unproject;

pub use solve::{solve3x3, solve3x3_with_tolerance};
pub use plane::{Plane, Line, intersect_planes, intersect_planes_with_tolerance};
pub use closest::{ClosestPoints, closest_points, closest_points_with_tolerance};
pub use unproject::{FrustumCorners, unproject_ndc, ndc_corners};

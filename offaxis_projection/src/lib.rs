/*!
# Offaxis Projection

Off-axis (asymmetric-frustum) cameras for a viewer standing in front of a
flat display surface such as a powerwall or a CAVE panel.

Every operation is a pure function of a quad, an eye position and a
`ProjectionConfig`. Failures are reported as `Result` values and logged
through a replaceable process-wide logger.

## Architecture

- **geometry**: 3x3 solver, plane/plane and line/line intersection, NDC unprojection
- **camera**: frustum matrices, perspective emulation with image crop, camera reconstruction
- **consumer**: the receiving side of a camera and the three strategies to feed it
- **Projector**: configured facade over the camera functions
*/

// Internal modules
mod error;
mod diagnostics;
mod config;
mod projector;
pub mod log;
pub mod geometry;
pub mod camera;
pub mod consumer;

// Main offaxis namespace module
pub mod offaxis {
    // Error types
    pub use crate::error::{Error, Result};

    // Logger slot
    pub use crate::diagnostics::Diagnostics;

    // Configuration
    pub use crate::config::{ProjectionConfig, Tolerance};

    // Facade
    pub use crate::projector::Projector;

    // Logging sub-module (types only; the offaxis_* macros live at the crate root)
    pub mod log {
        pub use crate::log::{Logger, LogEntry, LogSeverity, DefaultLogger};
    }

    // Geometry primitives
    pub mod geometry {
        pub use crate::geometry::*;
    }

    // Camera computations
    pub mod camera {
        pub use crate::camera::*;
    }

    // Camera consumers and strategies
    pub mod consumer {
        pub use crate::consumer::*;
    }
}

// Re-export math library at crate root
pub use glam;

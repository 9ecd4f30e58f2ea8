//! Error types for off-axis projection
//!
//! Every fallible geometry operation returns one of these instead of a
//! success flag plus out-parameters, so a failed call never leaves output
//! state behind.

use std::fmt;

/// Result type for off-axis projection operations
pub type Result<T> = std::result::Result<T, Error>;

/// Off-axis projection errors
#[derive(Debug, Clone, PartialEq)]
pub enum Error {
    /// 3x3 linear system has a zero (or non-finite) determinant
    Singular,

    /// Two planes or two lines do not intersect/converge (what was parallel)
    Parallel(String),

    /// Input geometry cannot produce a finite camera (eye in the quad plane,
    /// collapsed quad edges, non-invertible matrices, ...)
    Degenerate(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Singular => write!(f, "Singular linear system"),
            Error::Parallel(what) => write!(f, "Parallel {}", what),
            Error::Degenerate(msg) => write!(f, "Degenerate input: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

/// Log an ERROR with file:line and build an [`Error::Degenerate`] from the message
///
/// # Example
///
/// ```ignore
/// let axis = edge.try_normalize()
///     .ok_or_else(|| offaxis_err!("offaxis::Quad", "zero-length edge {:?}", edge))?;
/// ```
#[macro_export]
macro_rules! offaxis_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::offaxis::Diagnostics::log_detailed(
            $crate::offaxis::log::LogSeverity::Error,
            $source,
            message.clone(),
            file!(),
            line!()
        );
        $crate::offaxis::Error::Degenerate(message)
    }};
}

/// Log an ERROR and return early with an [`Error::Degenerate`]
#[macro_export]
macro_rules! offaxis_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::offaxis_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

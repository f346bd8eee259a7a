//! Error types for the Aurora3D engine
//!
//! Degenerate geometry (colinear plane points, inverted near/far) is NOT an
//! error: the math is permissive and NaN/Inf propagate, per the documented
//! preconditions on each constructor. Errors here cover the backend boundary
//! and misuse of engine resources.

use std::fmt;

/// Result type for Aurora3D engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// Aurora3D engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Backend-specific error (reported by the graphics context)
    BackendError(String),

    /// Invalid resource or resource misuse (texture unit out of range, etc.)
    InvalidResource(String),

    /// Initialization failed
    InitializationFailed(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Build an [`Error::InvalidResource`], logging it at ERROR severity first.
///
/// # Example
///
/// ```no_run
/// use aurora_3d_engine::engine_err;
///
/// let err = engine_err!("aurora3d::Scene", "entity not found");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        $crate::engine_error!($source, $($arg)*);
        $crate::aurora3d::Error::InvalidResource(format!($($arg)*))
    }};
}

/// Early-return an `Err` built with [`engine_err!`].
///
/// # Example
///
/// ```no_run
/// use aurora_3d_engine::engine_bail;
/// use aurora_3d_engine::aurora3d::Result;
///
/// fn check_unit(unit: u32) -> Result<()> {
///     if unit >= 32 {
///         engine_bail!("aurora3d::PipelineState", "texture unit {} out of range", unit);
///     }
///     Ok(())
/// }
/// ```
#[macro_export]
macro_rules! engine_bail {
    ($source:expr, $($arg:tt)*) => {
        return Err($crate::engine_err!($source, $($arg)*))
    };
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;

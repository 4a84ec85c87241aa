//! Error types for the KK engine
//!
//! This module defines the error type used throughout the engine and its
//! graphics drivers, plus the `engine_err!` / `engine_bail!` helpers that log
//! an error before handing it back to the caller.

use std::fmt;

/// Result type for KK engine operations
pub type Result<T> = std::result::Result<T, Error>;

/// KK engine errors
#[derive(Debug, Clone)]
pub enum Error {
    /// Driver-specific error (HRESULT text from Direct3D / DXGI, etc.)
    BackendError(String),

    /// Out of GPU memory
    OutOfMemory,

    /// Unusable input resource (window handle, surface, ...)
    InvalidResource(String),

    /// A setup step failed (device, swap chain, render target, ...)
    InitializationFailed(String),

    /// Operation not allowed in the current state
    InvalidState(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::BackendError(msg) => write!(f, "Backend error: {}", msg),
            Error::OutOfMemory => write!(f, "Out of GPU memory"),
            Error::InvalidResource(msg) => write!(f, "Invalid resource: {}", msg),
            Error::InitializationFailed(msg) => write!(f, "Initialization failed: {}", msg),
            Error::InvalidState(msg) => write!(f, "Invalid state: {}", msg),
        }
    }
}

impl std::error::Error for Error {}

// ===== ERROR MACROS =====

/// Log an ERROR message and build an `Error::BackendError` with the same text
///
/// # Example
///
/// ```no_run
/// # use kk_engine::engine_err;
/// let err = engine_err!("kk::d3d11", "CreateSwapChain failed: {}", "E_INVALIDARG");
/// ```
#[macro_export]
macro_rules! engine_err {
    ($source:expr, $($arg:tt)*) => {{
        let message = format!($($arg)*);
        $crate::engine_error!($source, "{}", message);
        $crate::kk::Error::BackendError(message)
    }};
}

/// Log an ERROR message and return `Err(Error::BackendError(..))` from the current function
///
/// # Example
///
/// ```no_run
/// # use kk_engine::engine_bail;
/// fn check(ok: bool) -> kk_engine::kk::Result<()> {
///     if !ok {
///         engine_bail!("kk::d3d11", "Unsupported window handle");
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

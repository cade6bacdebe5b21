//! Crate-level error types.

use std::fmt;

#[cfg(feature = "viewer")]
use crate::gpu::GpuSetupError;

/// Errors produced by the orrery crate.
///
/// The carousel itself never fails; these cover configuration, GPU setup
/// and the platform front ends.
#[derive(Debug)]
pub enum OrreryError {
    /// GPU context initialization failure.
    #[cfg(feature = "viewer")]
    Gpu(GpuSetupError),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML/JSON options parsing or serialization failure.
    OptionsParse(String),
    /// Viewer event-loop failure.
    Viewer(String),
    /// Browser wiring failure (missing window, listener registration).
    Web(String),
}

impl fmt::Display for OrreryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => write!(f, "GPU error: {e}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Viewer(msg) => write!(f, "viewer error: {msg}"),
            Self::Web(msg) => write!(f, "web error: {msg}"),
        }
    }
}

impl std::error::Error for OrreryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            #[cfg(feature = "viewer")]
            Self::Gpu(e) => Some(e),
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<GpuSetupError> for OrreryError {
    fn from(e: GpuSetupError) -> Self {
        Self::Gpu(e)
    }
}

impl From<std::io::Error> for OrreryError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[test]
    fn io_error_keeps_source() {
        let err = OrreryError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing.toml",
        ));
        assert!(err.to_string().starts_with("I/O error"));
        assert!(err.source().is_some());
    }

    #[cfg(feature = "viewer")]
    #[test]
    fn gpu_setup_error_is_wrapped() {
        let err = OrreryError::from(GpuSetupError::at("device", "lost"));
        assert_eq!(err.to_string(), "GPU error: device setup failed: lost");
        assert!(err.source().is_some());
    }

    #[test]
    fn parse_error_has_no_source() {
        let err = OrreryError::OptionsParse("bad key".into());
        assert_eq!(err.to_string(), "options parse error: bad key");
        assert!(err.source().is_none());
    }
}

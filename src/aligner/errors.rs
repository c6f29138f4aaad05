//! Custom error types for alignment and batch processing

use std::fmt;
use std::io;

/// Alignment error types
#[derive(Debug)]
pub enum AlignError {
    /// I/O error
    IoError(io::Error),
    /// Image decode or encode failure
    ImageError(image::ImageError),
    /// Crop window with a zero dimension
    InvalidRegion { width: u32, height: u32 },
    /// Preview transparency outside [0, 1]
    InvalidTransparency(f64),
    /// Plane or canvas dimensions do not fit the pixel coordinate range
    DimensionOverflow(i128, i128),
    /// Placement offset beyond `MAX_OFFSET` in either direction
    OffsetOutOfRange(i64),
    /// Malformed configuration or settings file
    ConfigError(String),
    /// Requested run does not exist under the base directory
    RunNotFound(String),
    /// Generic error with message
    GenericError(String),
}

impl fmt::Display for AlignError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AlignError::IoError(e) => write!(f, "I/O error: {}", e),
            AlignError::ImageError(e) => write!(f, "Image error: {}", e),
            AlignError::InvalidRegion { width, height } =>
                write!(f, "Invalid overlap region size: {}x{}", width, height),
            AlignError::InvalidTransparency(t) =>
                write!(f, "Transparency must be between 0 and 1, got {}", t),
            AlignError::DimensionOverflow(w, h) =>
                write!(f, "Plane too large: {}x{}", w, h),
            AlignError::OffsetOutOfRange(offset) =>
                write!(f, "Offset {} is outside the supported range", offset),
            AlignError::ConfigError(msg) => write!(f, "Configuration error: {}", msg),
            AlignError::RunNotFound(name) => write!(f, "Run not found: {}", name),
            AlignError::GenericError(msg) => write!(f, "Alignment error: {}", msg),
        }
    }
}

impl std::error::Error for AlignError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AlignError::IoError(e) => Some(e),
            AlignError::ImageError(e) => Some(e),
            _ => None,
        }
    }
}

impl From<io::Error> for AlignError {
    fn from(error: io::Error) -> Self {
        AlignError::IoError(error)
    }
}

impl From<image::ImageError> for AlignError {
    fn from(error: image::ImageError) -> Self {
        AlignError::ImageError(error)
    }
}

impl From<toml::de::Error> for AlignError {
    fn from(error: toml::de::Error) -> Self {
        AlignError::ConfigError(error.to_string())
    }
}

impl From<toml::ser::Error> for AlignError {
    fn from(error: toml::ser::Error) -> Self {
        AlignError::ConfigError(error.to_string())
    }
}

/// Result type for alignment operations
pub type AlignResult<T> = Result<T, AlignError>;

impl From<String> for AlignError {
    fn from(msg: String) -> Self {
        AlignError::GenericError(msg)
    }
}

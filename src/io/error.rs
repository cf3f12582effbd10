//! Error types for wardrobe loading and option validation

use std::fmt;
use std::path::PathBuf;

/// Main error type for all fallible wardrobe operations
///
/// Outfit generation itself never fails; these errors come from the surfaces
/// around it (loading a wardrobe, parsing user-supplied options).
#[derive(Debug)]
pub enum WardrobeError {
    /// Failed to read a wardrobe file from disk
    WardrobeLoad {
        /// Path to the wardrobe file
        path: PathBuf,
        /// Underlying I/O error
        source: std::io::Error,
    },

    /// Wardrobe file is not a valid JSON item list
    WardrobeParse {
        /// Path to the wardrobe file
        path: PathBuf,
        /// Underlying JSON error
        source: serde_json::Error,
    },

    /// Option validation failed
    InvalidParameter {
        /// Name of the invalid parameter
        parameter: &'static str,
        /// Provided value that failed validation
        value: String,
        /// Explanation of why the value is invalid
        reason: String,
    },

    /// Weather bucket name not recognized
    UnknownWeather {
        /// The unrecognized input
        value: String,
    },

    /// General file system operation failure
    FileSystem {
        /// Path involved in the operation
        path: PathBuf,
        /// Description of the operation that failed
        operation: &'static str,
        /// Underlying I/O error
        source: std::io::Error,
    },
}

impl fmt::Display for WardrobeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WardrobeLoad { path, source } => {
                write!(f, "Failed to load wardrobe '{}': {source}", path.display())
            }
            Self::WardrobeParse { path, source } => {
                write!(f, "Failed to parse wardrobe '{}': {source}", path.display())
            }
            Self::InvalidParameter {
                parameter,
                value,
                reason,
            } => {
                write!(f, "Invalid parameter '{parameter}' = '{value}': {reason}")
            }
            Self::UnknownWeather { value } => {
                write!(
                    f,
                    "Unknown weather condition '{value}' (expected hot, warm, mild, cool, cold or freezing)"
                )
            }
            Self::FileSystem {
                path,
                operation,
                source,
            } => {
                write!(
                    f,
                    "File system error during {operation} on '{}': {source}",
                    path.display()
                )
            }
        }
    }
}

impl std::error::Error for WardrobeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::WardrobeLoad { source, .. } | Self::FileSystem { source, .. } => Some(source),
            Self::WardrobeParse { source, .. } => Some(source),
            _ => None,
        }
    }
}

/// Convenience type alias for wardrobe results
pub type Result<T> = std::result::Result<T, WardrobeError>;

impl From<std::io::Error> for WardrobeError {
    fn from(err: std::io::Error) -> Self {
        Self::FileSystem {
            path: PathBuf::from("<unknown>"),
            operation: "unknown",
            source: err,
        }
    }
}

impl From<serde_json::Error> for WardrobeError {
    fn from(err: serde_json::Error) -> Self {
        Self::WardrobeParse {
            path: PathBuf::from("<unknown>"),
            source: err,
        }
    }
}

/// Create an invalid parameter error
pub fn invalid_parameter(
    parameter: &'static str,
    value: &impl ToString,
    reason: &impl ToString,
) -> WardrobeError {
    WardrobeError::InvalidParameter {
        parameter,
        value: value.to_string(),
        reason: reason.to_string(),
    }
}

//! Error types for the CAM tools crate.
//!
//! Only bad input is an error. Joinery that does not fit an edge is not:
//! the edge is cut straight and generation carries on.

use std::io;
use thiserror::Error;

/// Errors that can occur during CAM tool operations.
#[derive(Error, Debug)]
pub enum CamToolError {
    /// A parameter validation error occurred.
    #[error("Parameter error: {0}")]
    Parameter(#[from] ParameterError),

    /// Generation produced no usable geometry.
    #[error("Generation failed: {0}")]
    GenerationFailed(String),

    /// I/O error while writing output.
    #[error("I/O error: {0}")]
    IoError(#[from] io::Error),
}

impl From<std::fmt::Error> for CamToolError {
    fn from(err: std::fmt::Error) -> Self {
        CamToolError::GenerationFailed(err.to_string())
    }
}

/// Errors related to CAM tool parameter validation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ParameterError {
    /// A parameter is NaN or infinite.
    #[error("Parameter '{name}' must be a finite number")]
    NotFinite { name: String },

    /// A parameter that must be strictly positive is zero or negative.
    #[error("Parameter '{name}' must be greater than zero (got {value})")]
    NotPositive { name: String, value: f64 },

    /// A parameter that may be zero is negative.
    #[error("Parameter '{name}' must not be negative (got {value})")]
    Negative { name: String, value: f64 },

    /// A parameter value is invalid.
    #[error("Invalid value for '{name}': {reason}")]
    InvalidValue { name: String, reason: String },
}

impl ParameterError {
    /// Name of the offending parameter.
    pub fn name(&self) -> &str {
        match self {
            ParameterError::NotFinite { name }
            | ParameterError::NotPositive { name, .. }
            | ParameterError::Negative { name, .. }
            | ParameterError::InvalidValue { name, .. } => name,
        }
    }
}

/// Result type alias for CAM tool operations.
pub type CamToolResult<T> = Result<T, CamToolError>;

/// Result type alias for parameter validation.
pub type ParameterResult<T> = Result<T, ParameterError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cam_tool_error_display() {
        let err = CamToolError::GenerationFailed("empty panel".to_string());
        assert_eq!(err.to_string(), "Generation failed: empty panel");
    }

    #[test]
    fn test_parameter_error_display() {
        let err = ParameterError::NotPositive {
            name: "width".to_string(),
            value: -5.0,
        };
        assert_eq!(
            err.to_string(),
            "Parameter 'width' must be greater than zero (got -5)"
        );
        assert_eq!(err.name(), "width");

        let err = ParameterError::NotFinite {
            name: "kerf".to_string(),
        };
        assert_eq!(err.to_string(), "Parameter 'kerf' must be a finite number");
    }

    #[test]
    fn test_error_conversion() {
        let param_err = ParameterError::Negative {
            name: "kerf".to_string(),
            value: -0.1,
        };
        let cam_err: CamToolError = param_err.into();
        assert!(matches!(cam_err, CamToolError::Parameter(_)));

        let io_err = io::Error::new(io::ErrorKind::PermissionDenied, "access denied");
        let cam_err: CamToolError = io_err.into();
        assert!(matches!(cam_err, CamToolError::IoError(_)));
    }
}

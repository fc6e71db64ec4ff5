//! # Error Types
//!
//! Structured error types for section_core. Each variant carries enough
//! context to tell which input or which geometric step went wrong, and every
//! error serializes to JSON for callers that report results as data.
//!
//! ## Example
//!
//! ```rust
//! use section_core::errors::{SectionError, SectionResult};
//!
//! fn validate_thickness(thickness: f64) -> SectionResult<()> {
//!     if thickness <= 0.0 {
//!         return Err(SectionError::invalid_input(
//!             "thickness",
//!             thickness.to_string(),
//!             "Thickness must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_thickness(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type alias for section_core operations
pub type SectionResult<T> = Result<T, SectionError>;

/// Structured error type for section operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum SectionError {
    /// An input value is invalid (too few vertices, non-finite, out of range)
    #[error("Invalid input for '{field}': {value} - {reason}")]
    InvalidInput {
        field: String,
        value: String,
        reason: String,
    },

    /// The geometry cannot be processed (zero area, clockwise outline,
    /// inner ring outside outer ring, indeterminate cut width)
    #[error("Geometry error in {operation}: {reason}")]
    Geometry { operation: String, reason: String },
}

impl SectionError {
    /// Create an InvalidInput error
    pub fn invalid_input(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        SectionError::InvalidInput {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create a Geometry error
    pub fn geometry(operation: impl Into<String>, reason: impl Into<String>) -> Self {
        SectionError::Geometry {
            operation: operation.into(),
            reason: reason.into(),
        }
    }

    /// True for errors caused by the shape itself rather than a bad argument
    pub fn is_geometry(&self) -> bool {
        matches!(self, SectionError::Geometry { .. })
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            SectionError::InvalidInput { .. } => "INVALID_INPUT",
            SectionError::Geometry { .. } => "GEOMETRY_ERROR",
        }
    }
}

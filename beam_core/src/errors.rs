//! # Error Types
//!
//! Structured error types for beam_core. Every fallible operation in the crate
//! returns [`CalcResult`], and every variant carries enough context for a
//! caller (or a rendering shell) to report what went wrong without parsing
//! message strings.
//!
//! ## Example
//!
//! ```rust
//! use beam_core::errors::{CalcError, CalcResult};
//!
//! fn validate_span(span: f64) -> CalcResult<()> {
//!     if span <= 0.0 {
//!         return Err(CalcError::invalid_argument(
//!             "primary_span",
//!             span.to_string(),
//!             "Span must be positive",
//!         ));
//!     }
//!     Ok(())
//! }
//!
//! assert!(validate_span(-1.0).is_err());
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::calculations::{AnalysisCondition, Quantity};

/// Result type alias for beam_core operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Structured error type for analysis operations.
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", content = "details")]
pub enum CalcError {
    /// No analyzer is registered for the requested support condition
    #[error("Unsupported condition: no analyzer registered for {condition}")]
    UnsupportedCondition { condition: AnalysisCondition },

    /// An argument is outside its valid domain (position, span, load, ...)
    #[error("Invalid argument '{field}': {value} - {reason}")]
    InvalidArgument {
        field: String,
        value: String,
        reason: String,
    },

    /// The analyzer for a condition has no formula for this quantity
    #[error("Not implemented: {quantity} for {condition}")]
    NotImplemented {
        condition: AnalysisCondition,
        quantity: Quantity,
    },

    /// A material property needed by a formula is absent
    #[error("Material '{material}' is missing property '{property}'")]
    MissingProperty { material: String, property: String },

    /// File I/O error
    #[error("File error: {operation} on '{path}' - {reason}")]
    FileError {
        operation: String,
        path: String,
        reason: String,
    },

    /// JSON serialization/deserialization error
    #[error("Serialization error: {reason}")]
    SerializationError { reason: String },

    /// Case file schema version mismatch
    #[error("Version mismatch: file version {file_version}, expected {expected_version}")]
    VersionMismatch {
        file_version: String,
        expected_version: String,
    },
}

impl CalcError {
    /// Create an UnsupportedCondition error
    pub fn unsupported_condition(condition: AnalysisCondition) -> Self {
        CalcError::UnsupportedCondition { condition }
    }

    /// Create an InvalidArgument error
    pub fn invalid_argument(
        field: impl Into<String>,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::InvalidArgument {
            field: field.into(),
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Create the InvalidArgument raised when `x` falls outside `[0, total_length]`
    pub fn out_of_domain(x: f64, total_length: f64) -> Self {
        CalcError::invalid_argument(
            "x",
            x.to_string(),
            format!("x out of domain [0, {}]", total_length),
        )
    }

    /// Create a NotImplemented error
    pub fn not_implemented(condition: AnalysisCondition, quantity: Quantity) -> Self {
        CalcError::NotImplemented {
            condition,
            quantity,
        }
    }

    /// Create a MissingProperty error
    pub fn missing_property(material: impl Into<String>, property: impl Into<String>) -> Self {
        CalcError::MissingProperty {
            material: material.into(),
            property: property.into(),
        }
    }

    /// Create a FileError
    pub fn file_error(
        operation: impl Into<String>,
        path: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CalcError::FileError {
            operation: operation.into(),
            path: path.into(),
            reason: reason.into(),
        }
    }

    /// Get a short error code for programmatic handling
    pub fn error_code(&self) -> &'static str {
        match self {
            CalcError::UnsupportedCondition { .. } => "UNSUPPORTED_CONDITION",
            CalcError::InvalidArgument { .. } => "INVALID_ARGUMENT",
            CalcError::NotImplemented { .. } => "NOT_IMPLEMENTED",
            CalcError::MissingProperty { .. } => "MISSING_PROPERTY",
            CalcError::FileError { .. } => "FILE_ERROR",
            CalcError::SerializationError { .. } => "SERIALIZATION_ERROR",
            CalcError::VersionMismatch { .. } => "VERSION_MISMATCH",
        }
    }
}

impl From<serde_json::Error> for CalcError {
    fn from(err: serde_json::Error) -> Self {
        CalcError::SerializationError {
            reason: err.to_string(),
        }
    }
}

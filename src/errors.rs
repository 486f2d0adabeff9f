// ABOUTME: Unified error types for the nutrition engine
// ABOUTME: ErrorCode bands, AppError with context/details, and builder constructors
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Unified Error Handling
//!
//! Every fallible operation in this crate returns [`AppError`]. Three kinds
//! of failure exist, all ordinary outcomes of user input rather than faults:
//!
//! - **validation**: a rule on a single field is violated
//!   ([`ErrorCode::InvalidInput`], [`ErrorCode::MissingRequiredField`],
//!   [`ErrorCode::InvalidFormat`], [`ErrorCode::ValueOutOfRange`])
//! - **consistency**: two otherwise-valid fields disagree with each other
//!   ([`ErrorCode::ConsistencyMismatch`], used for the calorie/macro check)
//! - **not found**: a referenced food or serving unit does not exist
//!   ([`ErrorCode::ResourceNotFound`])
//!
//! Errors are returned synchronously, never retried (the computations are
//! deterministic), and never fatal to the process.

use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Standard error codes used throughout the engine
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ErrorCode {
    // Validation (3000-3999)
    /// Input violates a structural rule
    #[serde(rename = "INVALID_INPUT")]
    InvalidInput = 3000,
    /// A mandatory field is absent or blank
    #[serde(rename = "MISSING_REQUIRED_FIELD")]
    MissingRequiredField = 3001,
    /// A field is present but malformed (e.g. a bad URL)
    #[serde(rename = "INVALID_FORMAT")]
    InvalidFormat = 3002,
    /// A numeric field falls outside its allowed band
    #[serde(rename = "VALUE_OUT_OF_RANGE")]
    ValueOutOfRange = 3003,
    /// Two individually valid fields contradict each other
    #[serde(rename = "CONSISTENCY_MISMATCH")]
    ConsistencyMismatch = 3004,

    // Resource Management (4000-4999)
    /// A referenced food or serving unit does not exist
    #[serde(rename = "RESOURCE_NOT_FOUND")]
    ResourceNotFound = 4000,

    // Internal (5000-5999)
    /// Configuration could not be loaded or is invalid
    #[serde(rename = "CONFIG_ERROR")]
    ConfigError = 5000,
    /// Unexpected internal failure
    #[serde(rename = "INTERNAL_ERROR")]
    InternalError = 5001,
}

impl ErrorCode {
    /// HTTP status an embedding server should map this code to
    #[must_use]
    pub const fn http_status(self) -> u16 {
        match self {
            Self::InvalidInput
            | Self::MissingRequiredField
            | Self::InvalidFormat
            | Self::ValueOutOfRange
            | Self::ConsistencyMismatch => 400,
            Self::ResourceNotFound => 404,
            Self::ConfigError | Self::InternalError => 500,
        }
    }

    /// Human-readable description of the error code
    #[must_use]
    pub const fn description(self) -> &'static str {
        match self {
            Self::InvalidInput => "Invalid input provided",
            Self::MissingRequiredField => "Required field is missing",
            Self::InvalidFormat => "Input format is invalid",
            Self::ValueOutOfRange => "Value is outside allowed range",
            Self::ConsistencyMismatch => "Declared values are mutually inconsistent",
            Self::ResourceNotFound => "Requested resource not found",
            Self::ConfigError => "Configuration error",
            Self::InternalError => "Internal error",
        }
    }

    /// Whether this code reports a user-correctable validation failure
    #[must_use]
    pub const fn is_validation(self) -> bool {
        matches!(
            self,
            Self::InvalidInput
                | Self::MissingRequiredField
                | Self::InvalidFormat
                | Self::ValueOutOfRange
                | Self::ConsistencyMismatch
        )
    }
}

/// Additional context that can be attached to errors
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorContext {
    /// Identifier of the entity the error concerns (food id, template id, …)
    pub resource_id: Option<String>,
    /// Field the error concerns, when field-scoped
    pub field: Option<String>,
    /// Additional key-value context (offending value, violated bound, …)
    pub details: serde_json::Value,
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self {
            resource_id: None,
            field: None,
            details: serde_json::Value::Object(serde_json::Map::new()),
        }
    }
}

/// Unified error type for the nutrition engine
#[derive(Debug, Error)]
pub struct AppError {
    /// Error code
    pub code: ErrorCode,
    /// Human-readable error message
    pub message: String,
    /// Additional context
    pub context: ErrorContext,
    /// Source error for error chaining
    #[source]
    pub source: Option<Box<dyn std::error::Error + Send + Sync>>,
}

impl AppError {
    /// Create a new error with the given code and message
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            context: ErrorContext::default(),
            source: None,
        }
    }

    /// Attach the identifier of the entity the error concerns
    #[must_use]
    pub fn with_resource_id(mut self, resource_id: impl Into<String>) -> Self {
        self.context.resource_id = Some(resource_id.into());
        self
    }

    /// Attach the field the error concerns
    #[must_use]
    pub fn with_field(mut self, field: impl Into<String>) -> Self {
        self.context.field = Some(field.into());
        self
    }

    /// Attach structured details (offending value, violated bound, …)
    #[must_use]
    pub fn with_details(mut self, details: serde_json::Value) -> Self {
        self.context.details = details;
        self
    }

    /// Attach a source error for error chaining
    #[must_use]
    pub fn with_source(mut self, source: impl std::error::Error + Send + Sync + 'static) -> Self {
        self.source = Some(Box::new(source));
        self
    }

    /// HTTP status an embedding server should map this error to
    #[must_use]
    pub fn http_status(&self) -> u16 {
        self.code.http_status()
    }
}

/// Convenience constructors for the error kinds this crate produces
impl AppError {
    /// A structural validation rule is violated
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidInput, message)
    }

    /// A mandatory field is absent or blank after trimming
    pub fn missing_field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::MissingRequiredField, message).with_field(field)
    }

    /// A field is present but malformed
    pub fn invalid_format(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InvalidFormat, message).with_field(field)
    }

    /// A numeric field falls outside its allowed band
    pub fn out_of_range(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ValueOutOfRange, message).with_field(field)
    }

    /// Declared calories disagree with the macro-derived expectation
    pub fn consistency_mismatch(declared: f64, expected: f64, tolerance: f64) -> Self {
        let diff = declared - expected;
        Self::new(
            ErrorCode::ConsistencyMismatch,
            format!(
                "calories ({declared:.2}) don't match calculated calories from macros \
                 ({expected:.2}). Difference: {diff:.2}. Allowed tolerance: \u{b1}{tolerance:.2}"
            ),
        )
        .with_field("calories")
        .with_details(serde_json::json!({
            "declared": declared,
            "expected": expected,
            "difference": diff,
            "tolerance": tolerance,
        }))
    }

    /// A referenced resource does not exist
    pub fn not_found(resource: impl Into<String>) -> Self {
        Self::new(
            ErrorCode::ResourceNotFound,
            format!("{} not found", resource.into()),
        )
    }

    /// Configuration could not be loaded or is invalid
    pub fn config(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::ConfigError, message)
    }

    /// Unexpected internal failure
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorCode::InternalError, message)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.code.description(), self.message)
    }
}

/// Result type alias for convenience
pub type AppResult<T> = Result<T, AppError>;

/// Conversion from anyhow::Error for interop with embedding applications
impl From<anyhow::Error> for AppError {
    fn from(error: anyhow::Error) -> Self {
        match error.source() {
            Some(source) => Self::new(ErrorCode::InternalError, error.to_string()).with_details(
                serde_json::json!({
                    "source": source.to_string()
                }),
            ),
            None => Self::new(ErrorCode::InternalError, error.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_code_http_status() {
        assert_eq!(ErrorCode::InvalidInput.http_status(), 400);
        assert_eq!(ErrorCode::ConsistencyMismatch.http_status(), 400);
        assert_eq!(ErrorCode::ResourceNotFound.http_status(), 404);
        assert_eq!(ErrorCode::InternalError.http_status(), 500);
    }

    #[test]
    fn test_validation_classification() {
        assert!(ErrorCode::ValueOutOfRange.is_validation());
        assert!(ErrorCode::ConsistencyMismatch.is_validation());
        assert!(!ErrorCode::ResourceNotFound.is_validation());
    }

    #[test]
    fn test_consistency_mismatch_details() {
        let error = AppError::consistency_mismatch(160.0, 171.0, 10.0);
        assert_eq!(error.code, ErrorCode::ConsistencyMismatch);
        assert_eq!(error.context.field.as_deref(), Some("calories"));
        assert!((error.context.details["difference"].as_f64().unwrap() + 11.0).abs() < 1e-9);
        assert!(error.message.contains("160.00"));
        assert!(error.message.contains("171.00"));
    }

    #[test]
    fn test_error_code_serialization() {
        let json = serde_json::to_string(&ErrorCode::ResourceNotFound).unwrap();
        assert_eq!(json, "\"RESOURCE_NOT_FOUND\"");
    }

    #[test]
    fn test_builder_context() {
        let error = AppError::not_found("food item")
            .with_resource_id("5f1e")
            .with_field("food_id");
        assert_eq!(error.context.resource_id.as_deref(), Some("5f1e"));
        assert_eq!(error.context.field.as_deref(), Some("food_id"));
    }
}

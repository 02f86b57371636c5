//! Error types for the Rentora engine

use serde::Serialize;
use thiserror::Error;

use crate::models::enums::RentalStatus;

/// A single offending field in a validation failure
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Main application error type
///
/// Every core operation returns a typed error; the UI layer maps each kind
/// to a display message, so each variant carries the offending field list,
/// id, or transition edge.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Validation failed: {}", format_fields(.0))]
    Validation(Vec<FieldError>),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid status transition: {from} -> {to}")]
    InvalidTransition {
        from: RentalStatus,
        to: RentalStatus,
    },

    #[error("Persistence error: {0}")]
    Persistence(#[from] StoreError),

    #[error("Authentication failed: {0}")]
    Authentication(String),
}

impl AppError {
    /// Shorthand for a single-field validation failure
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        AppError::Validation(vec![FieldError::new(field, message)])
    }

    /// Names of the offending fields, if this is a validation failure
    pub fn fields(&self) -> Vec<&str> {
        match self {
            AppError::Validation(errors) => errors.iter().map(|e| e.field.as_str()).collect(),
            _ => Vec::new(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        let mut fields: Vec<FieldError> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, errs)| {
                errs.iter().map(move |e| {
                    let message = e
                        .message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string());
                    FieldError::new(*field, message)
                })
            })
            .collect();
        // field_errors is a hash map; sort for stable error text.
        fields.sort_by(|a, b| a.field.cmp(&b.field));
        AppError::Validation(fields)
    }
}

fn format_fields(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Failure in the underlying key-value store
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Read failed for key '{key}': {reason}")]
    Read { key: String, reason: String },

    #[error("Write failed for key '{key}': {reason}")]
    Write { key: String, reason: String },

    #[error("Stored data under key '{key}' is not valid JSON: {reason}")]
    Corrupt { key: String, reason: String },
}

/// Result type alias for application operations
pub type AppResult<T> = Result<T, AppError>;

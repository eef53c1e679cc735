//! Error types for `alianza-lib`.

use thiserror::Error;

/// Primary error type for intake operations.
#[derive(Error, Debug)]
pub enum IntakeError {
    // === Validation Errors ===
    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Multiple validation errors occurred.
    #[error("Validation errors: {errors:?}")]
    ValidationErrors { errors: Vec<ValidationError> },

    /// Invalid status value.
    #[error("Invalid status: {status} (expected pending, in_progress or resolved)")]
    InvalidStatus { status: String },

    /// Ticket number doesn't match the `PREFIX-YYYYMMDD-NNNN` shape.
    #[error("Invalid ticket number: {ticket}")]
    InvalidTicket { ticket: String },

    // === Workflow Errors ===
    /// `advance()` called on the final wizard step.
    #[error("Already at the final step; submit instead of advancing")]
    AtFinalStep,

    /// `submit()` called before reaching the final wizard step.
    #[error("Submission is only allowed from the final step (currently at {step})")]
    NotAtFinalStep { step: String },

    /// The wizard has already submitted; reset before reuse.
    #[error("Form already submitted (ticket {ticket}); reset before reuse")]
    AlreadySubmitted { ticket: String },

    // === Storage Errors ===
    /// Generic storage error.
    #[error("Storage error: {0}")]
    Storage(String),

    // === I/O Errors ===
    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// A single field validation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub field: String,
    pub message: String,
}

impl ValidationError {
    #[must_use]
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ValidationError {}

impl IntakeError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn from_validation_errors(errors: Vec<ValidationError>) -> Self {
        if errors.len() == 1 {
            let err = &errors[0];
            Self::Validation {
                field: err.field.clone(),
                reason: err.message.clone(),
            }
        } else {
            Self::ValidationErrors { errors }
        }
    }
}

/// Result type using `IntakeError`.
pub type Result<T> = std::result::Result<T, IntakeError>;

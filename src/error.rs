//! Error types for the `aps` CLI.

use std::path::PathBuf;
use thiserror::Error;

/// Primary error type for CLI operations.
#[derive(Error, Debug)]
pub enum AlianzaError {
    /// No `.alianza` workspace in the current directory.
    #[error("Not an alianza workspace (run 'aps init' first)")]
    NotInitialized,

    /// `init` called where a workspace already exists.
    #[error("Workspace already initialized at {path} (use --force to overwrite)")]
    AlreadyInitialized { path: PathBuf },

    /// No record with the given id or ticket.
    #[error("Request not found: {reference}")]
    RequestNotFound { reference: String },

    /// Field validation failed.
    #[error("Validation failed: {field}: {reason}")]
    Validation { field: String, reason: String },

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Core library error.
    #[error(transparent)]
    Intake(#[from] alianza_lib::IntakeError),

    /// File system I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// YAML configuration parse error.
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

impl AlianzaError {
    #[must_use]
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }
}

/// Result type using `AlianzaError`.
pub type Result<T> = std::result::Result<T, AlianzaError>;

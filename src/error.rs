//! Error types for the handoff crate.
//!
//! Malformed incoming state is never an error: accessors report it as
//! absent. These variants cover the infrastructure underneath, namely the
//! persistent store and the navigation collaborator.

use std::path::PathBuf;
use thiserror::Error;

/// Result type for handoff operations.
pub type Result<T> = std::result::Result<T, HandoffError>;

/// Errors that can occur while transferring state between views.
#[derive(Error, Debug)]
pub enum HandoffError {
    // Store Errors
    #[error("Failed to read store file: {path}: {source}")]
    StoreRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write store file: {path}: {source}")]
    StoreWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory creation failed: {path}: {source}")]
    DirectoryCreate {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Store file is not a JSON object: {path}")]
    StoreCorrupt { path: PathBuf },

    // Serialization Errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Navigation Errors
    #[error("Navigation to app '{app_id}' failed: {reason}")]
    NavigationFailed { app_id: String, reason: String },
}

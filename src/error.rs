//! Error types for the Patlex library.
//!
//! All errors are represented by the [`PatlexError`] enum, which provides
//! detailed information about what went wrong.
//!
//! # Examples
//!
//! ```
//! use patlex::error::{PatlexError, Result};
//!
//! fn example_operation() -> Result<()> {
//!     Err(PatlexError::invalid_argument("Invalid input"))
//! }
//!
//! match example_operation() {
//!     Ok(_) => println!("Success"),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::io;

use anyhow;
use thiserror::Error;

/// The main error type for Patlex operations.
///
/// This enum represents all possible errors that can occur in the Patlex
/// library. It uses the `thiserror` crate for automatic `Error` trait
/// implementation and provides convenient constructor methods for creating
/// specific error types.
#[derive(Error, Debug)]
pub enum PatlexError {
    /// I/O errors (file operations, network, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Query-related errors (missing query, invalid pagination, etc.)
    #[error("Query error: {0}")]
    Query(String),

    /// Analysis-related errors (tokenization, highlighting)
    #[error("Analysis error: {0}")]
    Analysis(String),

    /// Embedding provider errors (remote API failures, malformed vectors)
    #[error("Embedding error: {0}")]
    Embedding(String),

    /// Document store errors
    #[error("Store error: {0}")]
    Store(String),

    /// Search request exceeded its time budget
    #[error("Timeout: {0}")]
    Timeout(String),

    /// Invalid operation
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),

    /// HTTP transport errors from the remote embedding provider
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic error for other cases
    #[error("Error: {0}")]
    Other(String),

    /// Generic anyhow error
    #[error("Anyhow error: {0}")]
    Anyhow(#[from] anyhow::Error),
}

/// Result type alias for operations that may fail with PatlexError.
pub type Result<T> = std::result::Result<T, PatlexError>;

impl PatlexError {
    /// Create a new query error.
    pub fn query<S: Into<String>>(msg: S) -> Self {
        PatlexError::Query(msg.into())
    }

    /// Create a new analysis error.
    pub fn analysis<S: Into<String>>(msg: S) -> Self {
        PatlexError::Analysis(msg.into())
    }

    /// Create a new embedding error.
    pub fn embedding<S: Into<String>>(msg: S) -> Self {
        PatlexError::Embedding(msg.into())
    }

    /// Create a new store error.
    pub fn store<S: Into<String>>(msg: S) -> Self {
        PatlexError::Store(msg.into())
    }

    /// Create a new timeout error.
    pub fn timeout<S: Into<String>>(msg: S) -> Self {
        PatlexError::Timeout(msg.into())
    }

    /// Create a new invalid argument error.
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        PatlexError::Other(format!("Invalid argument: {}", msg.into()))
    }

    /// Create a new invalid config error.
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        PatlexError::Other(format!("Invalid configuration: {}", msg.into()))
    }

    /// Create a new generic error.
    pub fn other<S: Into<String>>(msg: S) -> Self {
        PatlexError::Other(msg.into())
    }
}

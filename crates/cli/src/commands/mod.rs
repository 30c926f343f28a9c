//! Subcommand implementations.
//!
//! Each command writes to a caller-supplied writer so it can be exercised
//! in tests without a terminal.

pub mod basket;
pub mod run;
pub mod validate;

use thiserror::Error;

/// Errors a command can fail with.
#[derive(Debug, Error)]
pub enum CommandError {
    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

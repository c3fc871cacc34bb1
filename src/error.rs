//! Custom error types for fundboard
//!
//! This module defines the error hierarchy for the application using thiserror
//! for ergonomic error definitions.
//!
//! Planner operations are total functions (out-of-range indices and unknown row
//! ids are silent no-ops), so these errors only arise at the edges:
//! configuration, file I/O, and terminal setup.

use thiserror::Error;

/// The main error type for fundboard operations
#[derive(Error, Debug)]
pub enum FundboardError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// File I/O errors
    #[error("I/O error: {0}")]
    Io(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(String),

    /// TUI errors
    #[error("TUI error: {0}")]
    Tui(String),
}

impl FundboardError {
    /// Check if this is a configuration error
    pub fn is_config(&self) -> bool {
        matches!(self, Self::Config(_))
    }
}

/// Result type alias using FundboardError
pub type FundboardResult<T> = Result<T, FundboardError>;

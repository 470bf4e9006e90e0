//! # Error Types
//!
//! This module defines error types used throughout the printslip library.
//!
//! Layout itself never fails: degraded columns are logged and skipped. Errors
//! only come from the edges (font loading, image encoding, configuration and
//! the print service).

use thiserror::Error;

/// Main error type for printslip operations
#[derive(Debug, Error)]
pub enum PrintslipError {
    /// Print service errors (connection, submission)
    #[error("Transport error: {0}")]
    Transport(String),

    /// Image encoding or decoding error
    #[error("Image error: {0}")]
    Image(String),

    /// Font data could not be loaded
    #[error("Font error: {0}")]
    Font(String),

    /// Invalid configuration file or value
    #[error("Config error: {0}")]
    Config(String),

    /// I/O error wrapper
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

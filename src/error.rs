//! Error types for docker-banner-gen
//!
//! Centralized error handling using thiserror.

use thiserror::Error;

/// All error types that can occur while generating a banner
#[derive(Debug, Error)]
pub enum BannerGenError {
    /// Font name could not be resolved to a built-in or on-disk font
    #[error("Font not found: {0}")]
    FontNotFound(String),

    /// Malformed .flf font file
    #[error("Font format error: {0}")]
    FontFormat(String),

    /// The figlet renderer could not produce output
    #[error("Render error: {0}")]
    Render(String),

    /// IO error (template file read, output write, font directory scan)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for docker-banner-gen operations
pub type Result<T> = std::result::Result<T, BannerGenError>;

//! # Error Types
//!
//! Custom error types for Gamepad Remap using `thiserror`.
//!
//! The mapping database itself has no fatal error path: malformed lines are
//! skipped and load operations report a plain boolean. The typed errors here
//! cover the configuration layer, which does fail loudly.

use thiserror::Error;

/// Main error type for Gamepad Remap
#[derive(Debug, Error)]
pub enum RemapError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for Gamepad Remap
pub type Result<T> = std::result::Result<T, RemapError>;

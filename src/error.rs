//! Error types for routerlab.
//!
//! Defines the application error enum used by the front ends. Rejected
//! device commands are not errors at this level; see
//! [`crate::commands::CommandError`].

use thiserror::Error;

/// Main error type for routerlab operations.
#[derive(Error, Debug)]
pub enum SimError {
    /// Configuration errors (invalid config file, bad CLI values, etc.)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Terminal errors (raw mode, drawing, event polling).
    #[error("Terminal error: {0}")]
    Terminal(String),

    /// Line server errors (bind failures, broken connections).
    #[error("Server error: {0}")]
    Server(String),

    /// File or stream I/O errors outside the terminal.
    #[error("I/O error: {0}")]
    Io(String),

    /// Internal application errors (unexpected states, bugs, etc.)
    #[error("Internal error: {0}")]
    Internal(String),
}

impl SimError {
    /// Creates a configuration error with the given message.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Creates a terminal error with the given message.
    pub fn terminal(msg: impl Into<String>) -> Self {
        Self::Terminal(msg.into())
    }

    /// Creates a server error with the given message.
    pub fn server(msg: impl Into<String>) -> Self {
        Self::Server(msg.into())
    }

    /// Creates an I/O error with the given message.
    pub fn io(msg: impl Into<String>) -> Self {
        Self::Io(msg.into())
    }

    /// Creates an internal error with the given message.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    /// Returns the error category as a string for display purposes.
    pub fn category(&self) -> &'static str {
        match self {
            Self::Config(_) => "Configuration Error",
            Self::Terminal(_) => "Terminal Error",
            Self::Server(_) => "Server Error",
            Self::Io(_) => "I/O Error",
            Self::Internal(_) => "Internal Error",
        }
    }
}

/// Result type alias using SimError.
pub type Result<T> = std::result::Result<T, SimError>;

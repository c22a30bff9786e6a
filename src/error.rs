//! Crate-level error type used by configuration and the binary.

use thiserror::Error;

use crate::auth::{LoginError, SignInError};
use crate::review::MediaLoadError;
use crate::session::SessionError;

/// Errors surfaced to the user by the `werent` binary.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AppError {
    /// Configuration is missing or invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// The login request failed.
    #[error(transparent)]
    Login(#[from] LoginError),

    /// The persisted session could not be written or cleared.
    #[error(transparent)]
    Session(#[from] SessionError),

    /// A media file could not be read.
    #[error(transparent)]
    Media(#[from] MediaLoadError),

    /// Terminal user interface failure.
    #[error("terminal UI error: {message}")]
    Tui {
        /// Error detail from the TUI runtime.
        message: String,
    },

    /// Writing output failed.
    #[error("I/O error: {message}")]
    Io {
        /// Underlying I/O detail.
        message: String,
    },
}

impl From<SignInError> for AppError {
    fn from(error: SignInError) -> Self {
        match error {
            SignInError::Login(inner) => Self::Login(inner),
            SignInError::Session(inner) => Self::Session(inner),
        }
    }
}

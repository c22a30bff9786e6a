//! Error types exposed by the login helper.

use thiserror::Error;

use crate::session::SessionError;

/// Message used when a rejected login carries no usable explanation.
pub const GENERIC_LOGIN_FAILURE: &str = "Login failed";

/// Errors surfaced while calling the authentication endpoint.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum LoginError {
    /// The endpoint answered with a non-success status.
    ///
    /// Displays exactly the server's message, or [`GENERIC_LOGIN_FAILURE`].
    #[error("{message}")]
    Rejected {
        /// HTTP status code of the response.
        status: u16,
        /// Message extracted from the error body.
        message: String,
    },

    /// The request could not be sent or its response not received.
    #[error("network error during login: {message}")]
    Network {
        /// Transport-level error detail.
        message: String,
    },

    /// A success response did not have the expected shape.
    #[error("unexpected login response: {message}")]
    InvalidResponse {
        /// Decoding failure detail.
        message: String,
    },

    /// The HTTP client or endpoint could not be configured.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },
}

/// Errors raised by [`super::sign_in`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SignInError {
    /// The login request failed.
    #[error(transparent)]
    Login(#[from] LoginError),

    /// The session could not be persisted after a successful login.
    #[error(transparent)]
    Session(#[from] SessionError),
}

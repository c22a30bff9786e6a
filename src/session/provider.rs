//! Session snapshot type and the provider abstraction over its storage.

use std::fmt;

use thiserror::Error;

/// Persisted session written by the login flow.
#[derive(Clone, PartialEq, Eq)]
pub struct SessionSnapshot {
    token: String,
    display_name: String,
}

impl SessionSnapshot {
    /// Creates a snapshot from an access token and display name.
    #[must_use]
    pub fn new(token: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            display_name: display_name.into(),
        }
    }

    /// Returns the opaque access token.
    #[must_use]
    pub fn token(&self) -> &str {
        self.token.as_str()
    }

    /// Returns the user's display name.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.display_name.as_str()
    }

    /// Builds a snapshot only when both values are non-empty.
    pub(crate) fn from_parts(token: Option<String>, display_name: Option<String>) -> Option<Self> {
        let token = token.filter(|value| !value.is_empty())?;
        let display_name = display_name.filter(|value| !value.is_empty())?;
        Some(Self {
            token,
            display_name,
        })
    }
}

impl fmt::Debug for SessionSnapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SessionSnapshot")
            .field("token", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Errors raised while writing or clearing a persisted session.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SessionError {
    /// The session storage location could not be used.
    #[error("session storage error: {message}")]
    Io {
        /// Underlying I/O detail.
        message: String,
    },
}

/// Storage for the current session.
///
/// Reading never fails: a missing, partial, or unreadable session reads as
/// `None`, which callers treat as logged out.
pub trait SessionProvider: Send + Sync {
    /// Reads the persisted session, if complete.
    fn read(&self) -> Option<SessionSnapshot>;

    /// Persists a session, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the session cannot be written.
    fn store(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError>;

    /// Removes the persisted session. Clearing an absent session succeeds.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when stored entries cannot be removed.
    fn clear(&self) -> Result<(), SessionError>;
}

impl<P: SessionProvider + ?Sized> SessionProvider for &P {
    fn read(&self) -> Option<SessionSnapshot> {
        (**self).read()
    }

    fn store(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        (**self).store(snapshot)
    }

    fn clear(&self) -> Result<(), SessionError> {
        (**self).clear()
    }
}

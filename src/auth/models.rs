//! Request and response models for the authentication endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::session::SessionSnapshot;

/// Email and password sent to the authentication endpoint.
#[derive(Clone, PartialEq, Eq, Serialize)]
pub struct LoginCredentials {
    email: String,
    password: String,
}

impl LoginCredentials {
    /// Creates credentials.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        self.email.as_str()
    }
}

impl fmt::Debug for LoginCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Opaque bearer token returned by a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessToken(String);

impl AccessToken {
    /// Wraps a raw token value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw token value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessToken(<redacted>)")
    }
}

/// The signed-in user as reported by the endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthenticatedUser {
    /// Display name.
    pub name: String,
}

/// Normalised result of a successful login.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginOutcome {
    /// The signed-in user.
    pub user: AuthenticatedUser,
    /// Access token for later requests.
    pub token: AccessToken,
}

impl LoginOutcome {
    /// Converts the outcome into the snapshot persisted for the session
    /// indicator.
    #[must_use]
    pub fn to_session_snapshot(&self) -> SessionSnapshot {
        SessionSnapshot::new(self.token.as_str(), self.user.name.as_str())
    }
}

/// Success body: `{ "user": { "name": ... }, "access_token": ... }`.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiLoginResponse {
    user: ApiUser,
    access_token: String,
}

#[derive(Debug, Deserialize)]
struct ApiUser {
    name: String,
}

impl From<ApiLoginResponse> for LoginOutcome {
    fn from(response: ApiLoginResponse) -> Self {
        Self {
            user: AuthenticatedUser {
                name: response.user.name,
            },
            token: AccessToken(response.access_token),
        }
    }
}

/// Error body: `{ "message": ... }`, where the message may be a string or a
/// list of strings.
#[derive(Debug, Deserialize)]
pub(crate) struct ApiErrorBody {
    message: Option<ApiErrorMessage>,
}

#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum ApiErrorMessage {
    Text(String),
    List(Vec<String>),
}

impl ApiErrorBody {
    /// Extracts a non-empty message from a raw error body.
    pub(crate) fn message_from(body: &str) -> Option<String> {
        let parsed: Self = serde_json::from_str(body).ok()?;
        let message = match parsed.message? {
            ApiErrorMessage::Text(text) => text,
            ApiErrorMessage::List(parts) => parts.join(", "),
        };
        (!message.trim().is_empty()).then_some(message)
    }
}

//! Login request helper for the WeRent API.
//!
//! [`HttpLoginGateway`] posts credentials to `{base}/auth/login` and turns
//! the reply into a [`LoginOutcome`] or a [`LoginError`] whose message is the
//! server's own text. [`sign_in`] then persists the session for the
//! navigation-bar indicator.

pub mod error;
pub mod flow;
pub mod gateway;
pub mod models;

pub use error::{GENERIC_LOGIN_FAILURE, LoginError, SignInError};
pub use flow::sign_in;
pub use gateway::{HttpLoginGateway, LoginGateway, LoginGatewayConfig};
pub use models::{AccessToken, AuthenticatedUser, LoginCredentials, LoginOutcome};

#[cfg(test)]
pub use gateway::MockLoginGateway;

#[cfg(test)]
mod tests;

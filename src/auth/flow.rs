//! Login followed by session persistence.

use super::error::SignInError;
use super::gateway::LoginGateway;
use super::models::{LoginCredentials, LoginOutcome};
use crate::session::SessionProvider;

/// Logs in through `gateway` and stores the resulting session in `provider`.
///
/// Nothing is stored when the login fails.
///
/// # Errors
///
/// Returns [`SignInError::Login`] when the gateway rejects the request and
/// [`SignInError::Session`] when the session cannot be stored.
pub async fn sign_in<G, P>(
    gateway: &G,
    provider: &P,
    credentials: &LoginCredentials,
) -> Result<LoginOutcome, SignInError>
where
    G: LoginGateway + ?Sized,
    P: SessionProvider + ?Sized,
{
    let outcome = gateway.login(credentials).await?;
    provider.store(&outcome.to_session_snapshot())?;
    Ok(outcome)
}

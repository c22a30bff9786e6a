//! Login operation.

use werent::auth::{HttpLoginGateway, LoginOutcome, sign_in};
use werent::session::FileSessionStore;
use werent::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use werent::{AppError, WerentConfig};

use super::output::write_line;

/// Logs in and stores the session, then greets the user.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when the API URL, credentials, or
/// session directory are missing, and the login or session error otherwise.
pub async fn run(config: &WerentConfig) -> Result<(), AppError> {
    let outcome = sign_in_with_config(config, &StderrJsonlTelemetrySink).await?;
    write_line(&format!("Logged in as {}", outcome.user.name))
}

pub(crate) async fn sign_in_with_config(
    config: &WerentConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<LoginOutcome, AppError> {
    let credentials = config.require_credentials()?;
    let gateway = HttpLoginGateway::new(&config.login_gateway_config()?)?;
    let store = FileSessionStore::new(config.resolve_session_dir()?);

    let outcome = sign_in(&gateway, &store, &credentials).await?;
    telemetry.record(TelemetryEvent::LoginSucceeded {
        user: outcome.user.name.clone(),
    });
    Ok(outcome)
}

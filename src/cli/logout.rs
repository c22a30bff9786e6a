//! Logout operation.

use werent::session::{FileSessionStore, SessionIndicator};
use werent::telemetry::{StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
use werent::{AppError, WerentConfig};

use super::output::write_line;

/// Clears the persisted session and prints the logged-out navigation bar.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when the session directory cannot be
/// resolved and [`AppError::Session`] when clearing fails.
pub fn run(config: &WerentConfig) -> Result<(), AppError> {
    let view = logout_with_config(config, &StderrJsonlTelemetrySink)?;
    write_line(view.trim_end())
}

fn logout_with_config(
    config: &WerentConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<String, AppError> {
    let store = FileSessionStore::new(config.resolve_session_dir()?);
    let mut indicator = SessionIndicator::mount(store);
    let was_logged_in = indicator.is_logged_in();

    indicator.logout()?;
    if was_logged_in {
        telemetry.record(TelemetryEvent::SessionCleared);
    }
    Ok(indicator.view())
}

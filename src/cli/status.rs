//! Status operation: prints the navigation bar for the stored session.

use werent::session::{FileSessionStore, SessionIndicator};
use werent::{AppError, WerentConfig};

use super::output::write_line;

/// Prints the navigation bar.
///
/// # Errors
///
/// Returns [`AppError::Configuration`] when the session directory cannot be
/// resolved.
pub fn run(config: &WerentConfig) -> Result<(), AppError> {
    let store = FileSessionStore::new(config.resolve_session_dir()?);
    let indicator = SessionIndicator::mount(store);
    write_line(indicator.view().trim_end())
}

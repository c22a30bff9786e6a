//! Application configuration loaded from CLI, environment, and files.
//!
//! Values are merged with ortho-config's layered approach.
//!
//! # Precedence
//!
//! Configuration values are loaded with the following precedence (lowest to
//! highest):
//!
//! 1. **Defaults** – Built-in application defaults
//! 2. **Configuration file** – `.werent.toml` in current directory, home
//!    directory, or XDG config directory
//! 3. **Environment variables** – `WERENT_API_URL`, `WERENT_EMAIL`, ...
//! 4. **Command-line arguments** – `--api-url`/`-a`, `--email`/`-e`, ...
//!
//! # Configuration File
//!
//! ```toml
//! api_url = "https://api.werent.example/api"
//! email = "ayu@example.com"
//! session_dir = "/home/ayu/.local/state/werent/session"
//! request_timeout_seconds = 30
//! ```

use std::env;
use std::time::Duration;

use camino::Utf8PathBuf;
use ortho_config::OrthoConfig;
use serde::{Deserialize, Serialize};
use url::Url;

use crate::auth::{LoginCredentials, LoginGatewayConfig};
use crate::error::AppError;

const SESSION_SUBDIR: &str = "werent/session";

/// Operation mode determined by CLI arguments.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OperationMode {
    /// Log in and persist the session.
    Login,
    /// Clear the persisted session.
    Logout,
    /// Open the review composer.
    Review,
    /// Show the navigation bar for the current session.
    Status,
}

/// Application configuration supporting CLI, environment, and file sources.
///
/// # Example
///
/// ```no_run
/// use ortho_config::OrthoConfig;
/// use werent::WerentConfig;
///
/// let config = WerentConfig::load().expect("failed to load configuration");
/// let api_url = config.require_api_url().expect("API URL required");
/// ```
#[derive(Debug, Clone, Default, Deserialize, Serialize, OrthoConfig)]
#[serde(default)]
#[ortho_config(
    prefix = "WERENT",
    discovery(
        dotfile_name = ".werent.toml",
        config_file_name = "werent.toml",
        app_name = "werent"
    )
)]
pub struct WerentConfig {
    /// Base URL of the rental API; login posts to `{api_url}/auth/login`.
    ///
    /// Can be provided via:
    /// - CLI: `--api-url <URL>` or `-a <URL>`
    /// - Environment: `WERENT_API_URL`
    /// - Config file: `api_url = "..."`
    #[ortho_config(cli_short = 'a')]
    pub api_url: Option<String>,

    /// Account email used by `--login`.
    #[ortho_config(cli_short = 'e')]
    pub email: Option<String>,

    /// Account password used by `--login`.
    #[ortho_config(cli_short = 'p')]
    pub password: Option<String>,

    /// Directory holding the persisted session entries.
    ///
    /// Defaults to `$XDG_STATE_HOME/werent/session`, falling back to
    /// `$HOME/.local/state/werent/session`.
    #[ortho_config()]
    pub session_dir: Option<String>,

    /// Login request timeout in seconds. Requests wait indefinitely when
    /// unset.
    #[ortho_config(cli_short = 'R')]
    pub request_timeout_seconds: Option<u64>,

    /// Logs in with `email` and `password`.
    ///
    /// Note: boolean flags are not loaded from the environment.
    #[ortho_config(cli_short = 'l')]
    pub login: bool,

    /// Clears the persisted session.
    #[ortho_config()]
    pub logout: bool,

    /// Opens the review composer.
    #[ortho_config(cli_short = 'r')]
    pub review: bool,

    /// Comma-separated media paths attached when the composer opens.
    #[ortho_config(cli_short = 'm')]
    pub media: Option<String>,
}

impl WerentConfig {
    /// Determines the operation mode. Login wins over logout, which wins
    /// over review; with no flag set the mode is [`OperationMode::Status`].
    #[must_use]
    pub const fn operation_mode(&self) -> OperationMode {
        if self.login {
            OperationMode::Login
        } else if self.logout {
            OperationMode::Logout
        } else if self.review {
            OperationMode::Review
        } else {
            OperationMode::Status
        }
    }

    /// Returns the parsed API base URL.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when no URL is configured or the
    /// value is not an absolute URL.
    pub fn require_api_url(&self) -> Result<Url, AppError> {
        let raw = self
            .api_url
            .as_deref()
            .map(str::trim)
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Configuration {
                message: "API URL is required (use --api-url or WERENT_API_URL)".to_owned(),
            })?;

        Url::parse(raw).map_err(|error| AppError::Configuration {
            message: format!("invalid API URL '{raw}': {error}"),
        })
    }

    /// Returns login credentials.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] naming the first missing value.
    pub fn require_credentials(&self) -> Result<LoginCredentials, AppError> {
        let email = self
            .email
            .as_deref()
            .filter(|value| !value.is_empty())
            .ok_or_else(|| AppError::Configuration {
                message: "email is required (use --email or -e)".to_owned(),
            })?;
        let password = self
            .password
            .as_deref()
            .ok_or_else(|| AppError::Configuration {
                message: "password is required (use --password or -p)".to_owned(),
            })?;
        Ok(LoginCredentials::new(email, password))
    }

    /// Builds the login gateway configuration.
    ///
    /// # Errors
    ///
    /// Propagates [`Self::require_api_url`] failures.
    pub fn login_gateway_config(&self) -> Result<LoginGatewayConfig, AppError> {
        let config = LoginGatewayConfig::new(self.require_api_url()?);
        Ok(match self.request_timeout_seconds {
            Some(seconds) => config.with_timeout(Duration::from_secs(seconds)),
            None => config,
        })
    }

    /// Returns the media paths listed in `media`, trimmed, skipping blanks.
    #[must_use]
    pub fn media_paths(&self) -> Vec<Utf8PathBuf> {
        self.media
            .as_deref()
            .map(split_paths)
            .unwrap_or_default()
    }

    /// Resolves the session directory from configuration or the
    /// environment.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Configuration`] when neither `session_dir`,
    /// `XDG_STATE_HOME`, nor `HOME` is available.
    pub fn resolve_session_dir(&self) -> Result<Utf8PathBuf, AppError> {
        if let Some(dir) = self.session_dir.as_deref().filter(|dir| !dir.is_empty()) {
            return Ok(Utf8PathBuf::from(dir));
        }
        resolve_session_dir_from(
            env::var("XDG_STATE_HOME").ok().as_deref(),
            env::var("HOME").ok().as_deref(),
        )
    }
}

/// Splits a comma-separated path list.
#[must_use]
pub fn split_paths(raw: &str) -> Vec<Utf8PathBuf> {
    raw.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(Utf8PathBuf::from)
        .collect()
}

fn resolve_session_dir_from(
    xdg_state_home: Option<&str>,
    home: Option<&str>,
) -> Result<Utf8PathBuf, AppError> {
    if let Some(state_home) = xdg_state_home.filter(|value| !value.is_empty()) {
        return Ok(Utf8PathBuf::from(state_home).join(SESSION_SUBDIR));
    }
    if let Some(home_dir) = home.filter(|value| !value.is_empty()) {
        return Ok(Utf8PathBuf::from(home_dir)
            .join(".local/state")
            .join(SESSION_SUBDIR));
    }
    Err(AppError::Configuration {
        message: "cannot locate the session directory (set --session-dir, XDG_STATE_HOME, or HOME)"
            .to_owned(),
    })
}

#[cfg(test)]
mod tests;

//! Navigation-bar session indicator.
//!
//! The indicator reads the persisted session once when mounted and shows
//! either the signed-in user with a logout action or a login action.

use super::provider::{SessionError, SessionProvider};

/// Brand shown at the start of the navigation bar.
pub const BRAND: &str = "WeRent";

/// What the indicator currently shows.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionState {
    /// No complete session was found.
    LoggedOut,
    /// A session exists for the named user.
    LoggedIn {
        /// Name shown next to the logout action.
        display_name: String,
    },
}

/// Session indicator bound to a [`SessionProvider`].
#[derive(Debug)]
pub struct SessionIndicator<P> {
    provider: P,
    state: SessionState,
}

impl<P: SessionProvider> SessionIndicator<P> {
    /// Reads the session from `provider` and builds the indicator.
    #[must_use]
    pub fn mount(provider: P) -> Self {
        let state = provider
            .read()
            .map_or(SessionState::LoggedOut, |snapshot| SessionState::LoggedIn {
                display_name: snapshot.display_name().to_owned(),
            });
        let logged_in = state != SessionState::LoggedOut;
        tracing::debug!(logged_in, "session indicator mounted");

        Self { provider, state }
    }

    /// Returns the current state.
    #[must_use]
    pub const fn state(&self) -> &SessionState {
        &self.state
    }

    /// Returns whether a user is signed in.
    #[must_use]
    pub const fn is_logged_in(&self) -> bool {
        matches!(self.state, SessionState::LoggedIn { .. })
    }

    /// Returns the signed-in user's name, if any.
    #[must_use]
    pub fn display_name(&self) -> Option<&str> {
        match &self.state {
            SessionState::LoggedIn { display_name } => Some(display_name.as_str()),
            SessionState::LoggedOut => None,
        }
    }

    /// Returns the provider.
    #[must_use]
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Signs out: the indicator switches to logged-out, then the persisted
    /// session is cleared.
    ///
    /// # Errors
    ///
    /// Returns the provider's [`SessionError`] when clearing fails. The
    /// indicator shows logged-out either way.
    pub fn logout(&mut self) -> Result<(), SessionError> {
        self.state = SessionState::LoggedOut;
        self.provider.clear().inspect_err(|error| {
            tracing::warn!("failed to clear persisted session: {error}");
        })
    }

    /// Renders the navigation bar as a single line.
    #[must_use]
    pub fn view(&self) -> String {
        match &self.state {
            SessionState::LoggedIn { display_name } => {
                format!("{BRAND}  [{display_name}]  [Logout]\n")
            }
            SessionState::LoggedOut => format!("{BRAND}  [Login]\n"),
        }
    }
}

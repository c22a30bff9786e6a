//! In-memory session storage.

use std::sync::{Mutex, PoisonError};

use super::provider::{SessionError, SessionProvider, SessionSnapshot};

/// Session provider keeping the snapshot in process memory.
#[derive(Debug, Default)]
pub struct InMemorySessionStore {
    snapshot: Mutex<Option<SessionSnapshot>>,
}

impl InMemorySessionStore {
    /// Creates a store that already holds `snapshot`.
    #[must_use]
    pub const fn with_snapshot(snapshot: SessionSnapshot) -> Self {
        Self {
            snapshot: Mutex::new(Some(snapshot)),
        }
    }
}

impl SessionProvider for InMemorySessionStore {
    fn read(&self) -> Option<SessionSnapshot> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn store(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        *self
            .snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner) = Some(snapshot.clone());
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        self.snapshot
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .take();
        Ok(())
    }
}

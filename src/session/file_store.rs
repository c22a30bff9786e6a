//! File-backed session storage.
//!
//! The session directory holds two entries, `token` and `user`, each a
//! plain UTF-8 file. The directory is created on first write.

use std::io;

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;

use super::provider::{SessionError, SessionProvider, SessionSnapshot};

/// Entry holding the access token.
pub const TOKEN_ENTRY: &str = "token";

/// Entry holding the display name.
pub const USER_ENTRY: &str = "user";

/// Session provider persisting entries in a directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSessionStore {
    root: Utf8PathBuf,
}

impl FileSessionStore {
    /// Creates a store rooted at `root`. Nothing is touched until used.
    #[must_use]
    pub fn new(root: impl Into<Utf8PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Returns the session directory.
    #[must_use]
    pub fn root(&self) -> &Utf8Path {
        self.root.as_path()
    }

    fn open_root(&self) -> io::Result<Dir> {
        Dir::open_ambient_dir(&self.root, ambient_authority())
    }

    fn read_entry(dir: &Dir, entry: &str) -> Option<String> {
        match dir.read_to_string(entry) {
            Ok(content) => Some(content.trim_end_matches(['\r', '\n']).to_owned()),
            Err(error) => {
                tracing::debug!("session entry '{entry}' unavailable: {error}");
                None
            }
        }
    }

    fn remove_entry(&self, dir: &Dir, entry: &str) -> Result<(), SessionError> {
        match dir.remove_file(entry) {
            Ok(()) => Ok(()),
            Err(error) if error.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(error) => Err(SessionError::Io {
                message: format!(
                    "failed to remove session entry '{entry}' in '{}': {error}",
                    self.root
                ),
            }),
        }
    }
}

impl SessionProvider for FileSessionStore {
    fn read(&self) -> Option<SessionSnapshot> {
        let dir = match self.open_root() {
            Ok(dir) => dir,
            Err(error) => {
                tracing::debug!("session directory '{}' unavailable: {error}", self.root);
                return None;
            }
        };

        SessionSnapshot::from_parts(
            Self::read_entry(&dir, TOKEN_ENTRY),
            Self::read_entry(&dir, USER_ENTRY),
        )
    }

    fn store(&self, snapshot: &SessionSnapshot) -> Result<(), SessionError> {
        Dir::create_ambient_dir_all(&self.root, ambient_authority()).map_err(|error| {
            SessionError::Io {
                message: format!("failed to create session directory '{}': {error}", self.root),
            }
        })?;
        let dir = self.open_root().map_err(|error| SessionError::Io {
            message: format!("failed to open session directory '{}': {error}", self.root),
        })?;

        for (entry, value) in [
            (TOKEN_ENTRY, snapshot.token()),
            (USER_ENTRY, snapshot.display_name()),
        ] {
            dir.write(entry, value).map_err(|error| SessionError::Io {
                message: format!(
                    "failed to write session entry '{entry}' in '{}': {error}",
                    self.root
                ),
            })?;
        }
        Ok(())
    }

    fn clear(&self) -> Result<(), SessionError> {
        let dir = match self.open_root() {
            Ok(dir) => dir,
            Err(error) if error.kind() == io::ErrorKind::NotFound => return Ok(()),
            Err(error) => {
                return Err(SessionError::Io {
                    message: format!("failed to open session directory '{}': {error}", self.root),
                });
            }
        };

        self.remove_entry(&dir, TOKEN_ENTRY)?;
        self.remove_entry(&dir, USER_ENTRY)
    }
}

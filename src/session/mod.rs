//! Session persistence and the navigation-bar session indicator.
//!
//! Storage sits behind [`SessionProvider`] so the indicator does not depend
//! on where the session lives. [`FileSessionStore`] keeps it on disk;
//! [`InMemorySessionStore`] keeps it in process memory.

pub mod file_store;
pub mod indicator;
pub mod memory;
pub mod provider;

pub use file_store::FileSessionStore;
pub use indicator::{BRAND, SessionIndicator, SessionState};
pub use memory::InMemorySessionStore;
pub use provider::{SessionError, SessionProvider, SessionSnapshot};

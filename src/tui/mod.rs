//! Terminal front end for the review composer.
//!
//! The TUI follows the Model-View-Update (MVU) pattern of bubbletea-rs:
//!
//! - **Model**: [`ReviewComposerApp`], wrapping a headless
//!   [`crate::review::ReviewComposer`]
//! - **View**: a pure rendering of the form, padded to the terminal size
//! - **Update**: [`messages::ReviewMsg`] transitions, with key events mapped
//!   by [`input::map_key_to_message`] according to the focused row
//!
//! # Startup and results
//!
//! `Model::init()` is static, so media to attach on open are stored with
//! [`set_initial_media`] before the program starts. After the program exits,
//! [`take_submission`] returns the accepted review, if any.

pub mod app;
pub mod focus;
pub mod input;
pub mod messages;
mod storage;

pub use app::{ComposerSink, ReviewComposerApp};
pub use focus::Focus;
pub use storage::{set_initial_media, set_initial_terminal_size, take_submission};

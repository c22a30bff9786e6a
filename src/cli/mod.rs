//! CLI operation mode handlers.
//!
//! - [`login`]: exchange credentials for a stored session
//! - [`logout`]: clear the stored session
//! - [`review`]: run the review composer TUI
//! - [`status`]: print the navigation bar for the stored session
//!
//! Output helpers are in [`output`].

pub mod login;
pub mod logout;
pub mod output;
pub mod review;
pub mod status;

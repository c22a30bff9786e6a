//! WeRent client library.
//!
//! The crate provides the client-side pieces of the WeRent rental
//! marketplace:
//!
//! - [`session`]: the persisted session and the navigation-bar indicator
//! - [`review`]: the headless review composer with validation and media
//!   attachments
//! - [`auth`]: the login request helper
//! - [`tui`]: a terminal front end for the review composer
//!
//! Configuration is layered through ortho-config in [`config`]; errors
//! surfaced by the binary are collected in [`AppError`].

pub mod auth;
pub mod config;
pub mod error;
pub mod review;
pub mod session;
pub mod telemetry;
pub mod tui;

pub use auth::{HttpLoginGateway, LoginCredentials, LoginError, LoginGateway, LoginOutcome};
pub use config::WerentConfig;
pub use error::AppError;
pub use review::{ReviewComposer, ReviewSink, ReviewSubmission, SubmitOutcome};
pub use session::{FileSessionStore, SessionIndicator, SessionProvider, SessionSnapshot};

//! Startup context and result storage for the composer TUI.
//!
//! `Model::init()` is a static function, so data the program needs at
//! startup is placed in module-level storage before the program runs. The
//! accepted submission is handed back the same way.

use std::sync::{Mutex, OnceLock, PoisonError};

use crate::review::{MediaFile, ReviewSubmission};

/// Media attached when the composer opens.
static INITIAL_MEDIA: OnceLock<Vec<MediaFile>> = OnceLock::new();

/// Terminal dimensions used for the first frame.
static INITIAL_TERMINAL_SIZE: OnceLock<(u16, u16)> = OnceLock::new();

/// Submission accepted by the most recent composer run.
static SUBMISSION_OUTBOX: Mutex<Option<ReviewSubmission>> = Mutex::new(None);

/// Sets the media attached when the composer opens.
///
/// Returns `false` if media were already set.
pub fn set_initial_media(media: Vec<MediaFile>) -> bool {
    INITIAL_MEDIA.set(media).is_ok()
}

/// Sets the terminal dimensions for the first frame.
///
/// Returns `false` if dimensions were already set.
pub fn set_initial_terminal_size(width: u16, height: u16) -> bool {
    INITIAL_TERMINAL_SIZE.set((width, height)).is_ok()
}

/// Takes the submission accepted by the last composer run, if any.
#[must_use]
pub fn take_submission() -> Option<ReviewSubmission> {
    SUBMISSION_OUTBOX
        .lock()
        .unwrap_or_else(PoisonError::into_inner)
        .take()
}

pub(crate) fn initial_media() -> Vec<MediaFile> {
    INITIAL_MEDIA.get().cloned().unwrap_or_default()
}

pub(crate) fn initial_terminal_size() -> Option<(u16, u16)> {
    INITIAL_TERMINAL_SIZE.get().copied()
}

pub(crate) fn publish_submission(submission: ReviewSubmission) {
    *SUBMISSION_OUTBOX
        .lock()
        .unwrap_or_else(PoisonError::into_inner) = Some(submission);
}

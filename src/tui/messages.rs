//! Message types for the composer's update loop.
//!
//! Messages represent user actions, async command results, and terminal
//! events.

use crate::review::DecodedPreview;

/// Messages for the review composer TUI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReviewMsg {
    // Focus
    /// Move focus to the next row.
    FocusNext,
    /// Move focus to the previous row.
    FocusPrevious,

    // Field edits
    /// Pick a star rating.
    SelectRating(u8),
    /// Step the fit assessment forward.
    NextFit,
    /// Step the fit assessment backward.
    PreviousFit,
    /// Insert a character into the focused text input.
    InsertChar(char),
    /// Delete the last character of the focused text input.
    DeleteChar,

    // Media
    /// Load the paths typed into the media input as one batch.
    LoadMedia,
    /// Select the next attachment.
    SelectNextAttachment,
    /// Select the previous attachment.
    SelectPreviousAttachment,
    /// Remove the selected attachment.
    RemoveAttachment,
    /// Preview decoding finished for one attachment.
    PreviewDecoded(DecodedPreview),

    // Lifecycle
    /// Validate and submit the review.
    Submit,
    /// Discard the draft and close.
    Cancel,

    // Window events
    /// Terminal window was resized.
    WindowResized {
        /// New width in columns.
        width: u16,
        /// New height in rows.
        height: u16,
    },
}

//! Which form row receives keyboard input.

use crate::review::{Measurement, ReviewField};

/// A focusable row of the review form, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    /// Star rating picker.
    #[default]
    Rating,
    /// Free-text comment.
    Content,
    /// Fit assessment picker.
    Fit,
    /// One of the body measurement inputs.
    Measurement(Measurement),
    /// Path input for loading media files.
    MediaPath,
    /// List of admitted attachments.
    Attachments,
    /// Submit button.
    Submit,
}

impl Focus {
    /// Every row in tab order.
    pub const ORDER: [Self; 9] = [
        Self::Rating,
        Self::Content,
        Self::Fit,
        Self::Measurement(Measurement::Waist),
        Self::Measurement(Measurement::Bust),
        Self::Measurement(Measurement::Hips),
        Self::MediaPath,
        Self::Attachments,
        Self::Submit,
    ];

    /// Returns the row after this one, wrapping around.
    #[must_use]
    pub fn next(self) -> Self {
        Self::ORDER
            .get(self.position() + 1)
            .copied()
            .unwrap_or(Self::Rating)
    }

    /// Returns the row before this one, wrapping around.
    #[must_use]
    pub fn previous(self) -> Self {
        self.position()
            .checked_sub(1)
            .and_then(|index| Self::ORDER.get(index))
            .copied()
            .unwrap_or(Self::Submit)
    }

    /// Returns the row that edits `field`.
    #[must_use]
    pub const fn for_field(field: ReviewField) -> Self {
        match field {
            ReviewField::Rating => Self::Rating,
            ReviewField::Content => Self::Content,
            ReviewField::Fit => Self::Fit,
            ReviewField::Waist => Self::Measurement(Measurement::Waist),
            ReviewField::Bust => Self::Measurement(Measurement::Bust),
            ReviewField::Hips => Self::Measurement(Measurement::Hips),
            ReviewField::Media => Self::MediaPath,
        }
    }

    fn position(self) -> usize {
        Self::ORDER
            .iter()
            .position(|focus| *focus == self)
            .unwrap_or(0)
    }
}

//! Pure validation rules for review drafts.
//!
//! Each editable field has an update rule returning a [`FieldUpdate`] that
//! the composer applies to its [`ValidationErrors`]. Submission runs
//! [`validate_submission`], which recomputes every rule from the current
//! draft regardless of the errors already on display.

use std::collections::BTreeMap;
use std::fmt;
use std::ops::RangeInclusive;

use thiserror::Error;

use super::draft::ReviewDraft;
use super::fields::{FitAssessment, Measurement, StarRating};
use super::media::MediaRejection;

/// Minimum trimmed comment length, in characters.
pub const MIN_CONTENT_CHARS: usize = 10;

/// Maximum trimmed comment length, in characters.
pub const MAX_CONTENT_CHARS: usize = 1000;

/// Form fields that can carry a validation error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReviewField {
    /// Star rating.
    Rating,
    /// Free-text comment.
    Content,
    /// Fit assessment.
    Fit,
    /// Waist measurement.
    Waist,
    /// Bust measurement.
    Bust,
    /// Hip measurement.
    Hips,
    /// Media attachments.
    Media,
}

impl From<Measurement> for ReviewField {
    fn from(measurement: Measurement) -> Self {
        match measurement {
            Measurement::Waist => Self::Waist,
            Measurement::Bust => Self::Bust,
            Measurement::Hips => Self::Hips,
        }
    }
}

impl fmt::Display for ReviewField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Rating => "rating",
            Self::Content => "content",
            Self::Fit => "fit",
            Self::Waist => "waist",
            Self::Bust => "bust",
            Self::Hips => "hips",
            Self::Media => "media",
        };
        f.write_str(name)
    }
}

/// A rule violation attached to one field.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FieldError {
    /// No rating was chosen.
    #[error("Please select a rating")]
    RatingMissing,

    /// The trimmed comment is shorter than the minimum.
    #[error("Comment must be at least {min} characters")]
    ContentTooShort {
        /// Required minimum length.
        min: usize,
    },

    /// The trimmed comment is longer than the maximum.
    #[error("Comment must not exceed {max} characters")]
    ContentTooLong {
        /// Permitted maximum length.
        max: usize,
    },

    /// No fit option was chosen.
    #[error("Please select how it fits")]
    FitMissing,

    /// A mandatory measurement was left empty.
    #[error("{0} measurement is required")]
    MeasurementMissing(Measurement),

    /// A measurement lies outside its range or is not an integer.
    #[error("{measurement} must be between {min}-{max} cm")]
    MeasurementOutOfRange {
        /// Offending measurement.
        measurement: Measurement,
        /// Inclusive lower bound.
        min: u16,
        /// Inclusive upper bound.
        max: u16,
    },

    /// The last attachment batch was refused.
    #[error(transparent)]
    Media(#[from] MediaRejection),
}

/// How a field's error entry changes after an edit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    /// Remove the field's error.
    Clear,
    /// Replace the field's error.
    Set(FieldError),
    /// Leave the field's error untouched.
    Retain,
}

/// Field-scoped errors currently shown on the form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    entries: BTreeMap<ReviewField, FieldError>,
}

impl ValidationErrors {
    /// Creates an empty error set.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Applies a field update.
    pub fn apply(&mut self, field: ReviewField, update: FieldUpdate) {
        match update {
            FieldUpdate::Clear => {
                self.entries.remove(&field);
            }
            FieldUpdate::Set(error) => {
                self.entries.insert(field, error);
            }
            FieldUpdate::Retain => {}
        }
    }

    /// Sets the error for `field`.
    pub fn set(&mut self, field: ReviewField, error: FieldError) {
        self.entries.insert(field, error);
    }

    /// Removes the error for `field`.
    pub fn clear(&mut self, field: ReviewField) {
        self.entries.remove(&field);
    }

    /// Removes every error.
    pub fn clear_all(&mut self) {
        self.entries.clear();
    }

    /// Returns the error for `field`, if any.
    #[must_use]
    pub fn get(&self, field: ReviewField) -> Option<&FieldError> {
        self.entries.get(&field)
    }

    /// Returns the rendered message for `field`, if any.
    #[must_use]
    pub fn message(&self, field: ReviewField) -> Option<String> {
        self.get(field).map(ToString::to_string)
    }

    /// Returns whether `field` has an error.
    #[must_use]
    pub fn contains(&self, field: ReviewField) -> bool {
        self.entries.contains_key(&field)
    }

    /// Returns whether no field has an error.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of fields with errors.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Iterates errors in field order.
    pub fn iter(&self) -> impl Iterator<Item = (ReviewField, &FieldError)> {
        self.entries.iter().map(|(field, error)| (*field, error))
    }
}

/// Counts characters of the trimmed comment as Unicode scalar values.
///
/// An emoji outside the Basic Multilingual Plane counts once, not as a
/// UTF-16 surrogate pair.
#[must_use]
pub fn trimmed_char_count(content: &str) -> usize {
    content.trim().chars().count()
}

const fn content_bounds() -> RangeInclusive<usize> {
    MIN_CONTENT_CHARS..=MAX_CONTENT_CHARS
}

/// Rule applied when a rating is chosen.
#[must_use]
pub const fn on_rating_change(_rating: StarRating) -> FieldUpdate {
    FieldUpdate::Clear
}

/// Rule applied while the comment is typed.
///
/// Errors are only ever cleared here; a too-long comment is tolerated
/// until submission.
#[must_use]
pub fn on_content_change(content: &str) -> FieldUpdate {
    if content_bounds().contains(&trimmed_char_count(content)) {
        FieldUpdate::Clear
    } else {
        FieldUpdate::Retain
    }
}

/// Rule applied when a fit option is chosen.
#[must_use]
pub const fn on_fit_change(_fit: FitAssessment) -> FieldUpdate {
    FieldUpdate::Clear
}

/// Rule applied when a measurement input changes.
///
/// An emptied input clears its error; emptiness is only reported at
/// submission.
#[must_use]
pub fn on_measurement_change(measurement: Measurement, raw: &str) -> FieldUpdate {
    if raw.trim().is_empty() {
        return FieldUpdate::Clear;
    }
    match check_measurement_range(measurement, raw) {
        Ok(_) => FieldUpdate::Clear,
        Err(error) => FieldUpdate::Set(error),
    }
}

/// Parses a non-empty measurement input and checks it against its range.
///
/// Only the leading integer counts, so `"70.5"` and `"70cm"` both read as
/// 70.
///
/// # Errors
///
/// Returns [`FieldError::MeasurementOutOfRange`] when the input does not
/// start with an integer or the integer falls outside the range.
pub fn check_measurement_range(measurement: Measurement, raw: &str) -> Result<u16, FieldError> {
    let range = measurement.range();
    leading_integer(raw)
        .filter(|value| range.contains(value))
        .ok_or(FieldError::MeasurementOutOfRange {
            measurement,
            min: *range.start(),
            max: *range.end(),
        })
}

/// Reads the digits at the start of `raw`, after whitespace and an
/// optional `+`. Negative and digit-less inputs yield `None`.
fn leading_integer(raw: &str) -> Option<u16> {
    let trimmed = raw.trim_start();
    let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
    let end = unsigned
        .find(|character: char| !character.is_ascii_digit())
        .unwrap_or(unsigned.len());
    unsigned
        .get(..end)
        .filter(|digits| !digits.is_empty())?
        .parse()
        .ok()
}

fn validate_content(content: &str) -> Option<FieldError> {
    let count = trimmed_char_count(content);
    if count < MIN_CONTENT_CHARS {
        Some(FieldError::ContentTooShort {
            min: MIN_CONTENT_CHARS,
        })
    } else if count > MAX_CONTENT_CHARS {
        Some(FieldError::ContentTooLong {
            max: MAX_CONTENT_CHARS,
        })
    } else {
        None
    }
}

fn validate_measurement(measurement: Measurement, raw: &str) -> Option<FieldError> {
    if raw.trim().is_empty() {
        return Some(FieldError::MeasurementMissing(measurement));
    }
    check_measurement_range(measurement, raw).err()
}

/// Runs every submission rule against the draft.
///
/// The result only covers rating, content, fit, and measurements; media
/// errors come from attachment batches and never block submission.
#[must_use]
pub fn validate_submission(draft: &ReviewDraft) -> ValidationErrors {
    let mut errors = ValidationErrors::new();

    if draft.rating().is_none() {
        errors.set(ReviewField::Rating, FieldError::RatingMissing);
    }
    if let Some(error) = validate_content(draft.content()) {
        errors.set(ReviewField::Content, error);
    }
    if draft.fit().is_none() {
        errors.set(ReviewField::Fit, FieldError::FitMissing);
    }
    for measurement in Measurement::ALL {
        if let Some(error) = validate_measurement(measurement, draft.measurement(measurement)) {
            errors.set(measurement.into(), error);
        }
    }

    errors
}

//! The review composer: a headless form model with field-level and
//! submission-time validation.
//!
//! The composer owns a [`ReviewDraft`] and its [`ValidationErrors`], and
//! hands validated reviews to a [`ReviewSink`]. Rendering front ends drive
//! it through the mutation methods and read it back through the accessors.

use super::attachments::AttachmentList;
use super::draft::{ReviewDraft, ReviewSubmission};
use super::fields::{FitAssessment, Measurement, StarRating};
use super::media::MediaFile;
use super::preview::{DecodedPreview, PreviewJob};
use super::validation::{
    FieldError, ReviewField, ValidationErrors, check_measurement_range, on_content_change,
    on_fit_change, on_measurement_change, on_rating_change, validate_submission,
};

/// Receiver for the composer's submit and close events.
pub trait ReviewSink {
    /// Receives a validated review. Called once per successful submission.
    fn submit(&mut self, review: ReviewSubmission);

    /// Called after a successful submission and when the user cancels.
    fn close(&mut self);
}

/// Result of a submission attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[must_use]
pub enum SubmitOutcome {
    /// The review was handed to the sink and the form was reset.
    Submitted,
    /// Validation failed; errors are available from the composer.
    Rejected,
}

/// Headless review form.
#[derive(Debug)]
pub struct ReviewComposer<S> {
    draft: ReviewDraft,
    errors: ValidationErrors,
    sink: S,
}

impl<S: ReviewSink> ReviewComposer<S> {
    /// Creates an empty composer delivering to `sink`.
    #[must_use]
    pub fn new(sink: S) -> Self {
        Self {
            draft: ReviewDraft::default(),
            errors: ValidationErrors::new(),
            sink,
        }
    }

    /// Returns the current draft.
    #[must_use]
    pub const fn draft(&self) -> &ReviewDraft {
        &self.draft
    }

    /// Returns the errors currently shown.
    #[must_use]
    pub const fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    /// Returns the sink.
    #[must_use]
    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the attachments.
    #[must_use]
    pub const fn attachments(&self) -> &AttachmentList {
        &self.draft.media
    }

    /// Chooses a star rating.
    pub fn select_rating(&mut self, rating: StarRating) {
        self.draft.rating = Some(rating);
        self.errors
            .apply(ReviewField::Rating, on_rating_change(rating));
    }

    /// Replaces the comment text.
    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
        self.errors
            .apply(ReviewField::Content, on_content_change(&self.draft.content));
    }

    /// Chooses a fit assessment.
    pub fn select_fit(&mut self, fit: FitAssessment) {
        self.draft.fit = Some(fit);
        self.errors.apply(ReviewField::Fit, on_fit_change(fit));
    }

    /// Replaces the raw input of a measurement.
    pub fn set_measurement(&mut self, measurement: Measurement, raw: impl Into<String>) {
        let slot = self.draft.measurement_mut(measurement);
        *slot = raw.into();
        let update = on_measurement_change(measurement, slot);
        self.errors.apply(measurement.into(), update);
    }

    /// Attaches a batch of files selected together.
    ///
    /// On success the media error is cleared and one preview job per file
    /// is returned for the caller to run. On refusal the media error is set
    /// and no job is returned.
    pub fn attach(&mut self, batch: Vec<MediaFile>) -> Vec<PreviewJob> {
        match self.draft.media.admit(batch) {
            Ok(jobs) => {
                self.errors.clear(ReviewField::Media);
                jobs
            }
            Err(rejection) => {
                tracing::debug!("attachment batch rejected: {rejection}");
                self.errors
                    .set(ReviewField::Media, FieldError::Media(rejection));
                Vec::new()
            }
        }
    }

    /// Stores a completed preview. Returns `false` for removed attachments.
    pub fn apply_preview(&mut self, decoded: DecodedPreview) -> bool {
        self.draft.media.apply_preview(decoded)
    }

    /// Removes the attachment at `index` with its preview.
    pub fn remove_attachment(&mut self, index: usize) -> Option<MediaFile> {
        self.draft
            .media
            .remove(index)
            .map(|attachment| attachment.file().clone())
    }

    /// Validates the whole draft and, when valid, delivers it to the sink.
    ///
    /// A rejected submission leaves the draft untouched and shows every
    /// discovered error at once. A successful one calls the sink's `submit`
    /// then `close`, and resets the form.
    pub fn submit(&mut self) -> SubmitOutcome {
        let found = validate_submission(&self.draft);
        let Some(submission) = self.build_submission().filter(|_| found.is_empty()) else {
            tracing::debug!("review submission rejected with {} errors", found.len());
            self.show_submission_errors(found);
            return SubmitOutcome::Rejected;
        };

        tracing::info!(
            rating = submission.rating,
            media = submission.media.len(),
            "review submitted"
        );
        self.sink.submit(submission);
        self.reset();
        self.sink.close();
        SubmitOutcome::Submitted
    }

    /// Discards the draft and notifies the sink that the form closed.
    pub fn cancel(&mut self) {
        self.reset();
        self.sink.close();
    }

    /// Replaces the shown errors with `found`, keeping the media error from
    /// the last refused batch.
    fn show_submission_errors(&mut self, mut found: ValidationErrors) {
        if let Some(media_error) = self.errors.get(ReviewField::Media).cloned() {
            found.set(ReviewField::Media, media_error);
        }
        self.errors = found;
    }

    /// Empties the form. The attachment list is cleared in place so its
    /// identities stay unique across drafts.
    fn reset(&mut self) {
        let mut media = std::mem::take(&mut self.draft.media);
        media.clear();
        self.draft = ReviewDraft {
            media,
            ..ReviewDraft::default()
        };
        self.errors.clear_all();
    }

    fn build_submission(&self) -> Option<ReviewSubmission> {
        let measure = |measurement| {
            check_measurement_range(measurement, self.draft.measurement(measurement)).ok()
        };

        Some(ReviewSubmission {
            rating: self.draft.rating?.stars(),
            content: self.draft.content.trim().to_owned(),
            waist: measure(Measurement::Waist)?,
            bust: measure(Measurement::Bust)?,
            hips: measure(Measurement::Hips)?,
            fit: self.draft.fit?,
            media: self.draft.media.files(),
        })
    }
}

/// Sink that records every event.
#[cfg(any(test, feature = "test-support"))]
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RecordingSink {
    /// Reviews received, in order.
    pub submissions: Vec<ReviewSubmission>,
    /// Number of close notifications.
    pub close_count: usize,
}

#[cfg(any(test, feature = "test-support"))]
impl ReviewSink for RecordingSink {
    fn submit(&mut self, review: ReviewSubmission) {
        self.submissions.push(review);
    }

    fn close(&mut self) {
        self.close_count = self.close_count.saturating_add(1);
    }
}

#[cfg(test)]
#[path = "composer_tests.rs"]
mod tests;

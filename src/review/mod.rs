//! Review composition: the draft model, its validation rules, and media
//! attachment handling.
//!
//! The composer is headless. It accepts edits, keeps field-scoped errors in
//! step with the current values, admits media in atomic batches, and hands
//! validated reviews to a [`ReviewSink`].

pub mod attachments;
pub mod composer;
pub mod draft;
pub mod fields;
pub mod media;
pub mod preview;
pub mod validation;

pub use attachments::{Attachment, AttachmentId, AttachmentList, PreviewState};
#[cfg(any(test, feature = "test-support"))]
pub use composer::RecordingSink;
pub use composer::{ReviewComposer, ReviewSink, SubmitOutcome};
pub use draft::{ReviewDraft, ReviewSubmission};
pub use fields::{FitAssessment, MAX_STARS, Measurement, StarRating};
pub use media::{
    ACCEPTED_EXTENSIONS, MAX_ATTACHMENTS, MediaFile, MediaKind, MediaLoadError, MediaRejection,
    validate_file,
};
pub use preview::{DecodedPreview, PreviewJob, decode_all, encode_data_url};
pub use validation::{
    FieldError, FieldUpdate, MAX_CONTENT_CHARS, MIN_CONTENT_CHARS, ReviewField, ValidationErrors,
};

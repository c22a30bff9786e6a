//! In-progress review state and the payload emitted on submission.

use serde::{Serialize, Serializer};

use super::attachments::AttachmentList;
use super::fields::{FitAssessment, Measurement, StarRating};
use super::media::MediaFile;

/// The mutable, in-progress review.
///
/// Measurements hold the raw input text so that empty and non-numeric
/// entries can be told apart from valid values.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewDraft {
    pub(crate) rating: Option<StarRating>,
    pub(crate) content: String,
    pub(crate) fit: Option<FitAssessment>,
    pub(crate) waist: String,
    pub(crate) bust: String,
    pub(crate) hips: String,
    pub(crate) media: AttachmentList,
}

impl ReviewDraft {
    /// Returns the chosen rating, if any.
    #[must_use]
    pub const fn rating(&self) -> Option<StarRating> {
        self.rating
    }

    /// Returns the comment as typed.
    #[must_use]
    pub const fn content(&self) -> &str {
        self.content.as_str()
    }

    /// Returns the chosen fit, if any.
    #[must_use]
    pub const fn fit(&self) -> Option<FitAssessment> {
        self.fit
    }

    /// Returns the raw input for a measurement.
    #[must_use]
    pub const fn measurement(&self, measurement: Measurement) -> &str {
        match measurement {
            Measurement::Waist => self.waist.as_str(),
            Measurement::Bust => self.bust.as_str(),
            Measurement::Hips => self.hips.as_str(),
        }
    }

    pub(crate) const fn measurement_mut(&mut self, measurement: Measurement) -> &mut String {
        match measurement {
            Measurement::Waist => &mut self.waist,
            Measurement::Bust => &mut self.bust,
            Measurement::Hips => &mut self.hips,
        }
    }

    /// Returns the attachments.
    #[must_use]
    pub const fn media(&self) -> &AttachmentList {
        &self.media
    }
}

/// A fully validated review handed to the submission sink.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSubmission {
    /// Star rating, 1 to 5.
    pub rating: u8,
    /// Trimmed comment.
    pub content: String,
    /// Waist in centimetres.
    pub waist: u16,
    /// Bust in centimetres.
    pub bust: u16,
    /// Hips in centimetres.
    pub hips: u16,
    /// Fit assessment.
    pub fit: FitAssessment,
    /// Attached files in order.
    #[serde(serialize_with = "serialize_media")]
    pub media: Vec<MediaFile>,
}

#[derive(Serialize)]
struct MediaSummary<'file> {
    name: &'file str,
    content_type: &'file str,
    size: usize,
}

fn serialize_media<S>(media: &[MediaFile], serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    serializer.collect_seq(media.iter().map(|file| MediaSummary {
        name: file.name(),
        content_type: file.content_type(),
        size: file.len(),
    }))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::ReviewSubmission;
    use crate::review::fields::FitAssessment;
    use crate::review::media::MediaFile;

    #[test]
    fn submission_serialises_media_as_summaries() {
        let submission = ReviewSubmission {
            rating: 4,
            content: "Loved the fit!".to_owned(),
            waist: 70,
            bust: 85,
            hips: 95,
            fit: FitAssessment::TrueToSize,
            media: vec![MediaFile::new("look.png", "image/png", vec![0_u8; 3])],
        };

        let encoded = serde_json::to_value(&submission).expect("submission should serialise");

        assert_eq!(
            encoded,
            json!({
                "rating": 4,
                "content": "Loved the fit!",
                "waist": 70,
                "bust": 85,
                "hips": 95,
                "fit": "TRUE_TO_SIZE",
                "media": [{"name": "look.png", "content_type": "image/png", "size": 3}]
            })
        );
    }
}

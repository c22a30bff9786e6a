//! Asynchronous preview decoding for attached media.
//!
//! Every admitted file yields a [`PreviewJob`] keyed by its attachment id.
//! Jobs may complete in any order; the attachment list resolves each result
//! into the slot that owns the id.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use tokio::task::JoinSet;

use super::attachments::AttachmentId;
use super::media::MediaFile;

/// Encodes a file as a `data:` URL suitable for immediate display.
#[must_use]
pub fn encode_data_url(file: &MediaFile) -> String {
    format!(
        "data:{};base64,{}",
        file.content_type(),
        STANDARD.encode(file.data())
    )
}

/// Pending preview work for one attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreviewJob {
    id: AttachmentId,
    file: MediaFile,
}

impl PreviewJob {
    pub(crate) const fn new(id: AttachmentId, file: MediaFile) -> Self {
        Self { id, file }
    }

    /// Returns the attachment this job belongs to.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Decodes the preview on a blocking worker thread.
    pub async fn decode(self) -> DecodedPreview {
        let Self { id, file } = self;
        let result = tokio::task::spawn_blocking(move || encode_data_url(&file))
            .await
            .map_err(|error| {
                tracing::warn!("preview decoding for attachment {id} failed: {error}");
                error.to_string()
            });

        DecodedPreview { id, result }
    }

    /// Decodes the preview on the calling thread.
    #[must_use]
    pub fn decode_now(self) -> DecodedPreview {
        DecodedPreview {
            id: self.id,
            result: Ok(encode_data_url(&self.file)),
        }
    }
}

/// Outcome of a preview job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecodedPreview {
    /// Attachment the preview belongs to.
    pub id: AttachmentId,
    /// Encoded `data:` URL, or the failure detail.
    pub result: Result<String, String>,
}

/// Runs jobs concurrently and returns their results in completion order.
pub async fn decode_all(jobs: Vec<PreviewJob>) -> Vec<DecodedPreview> {
    let mut tasks = JoinSet::new();
    for job in jobs {
        tasks.spawn(job.decode());
    }

    let mut decoded = Vec::with_capacity(tasks.len());
    while let Some(joined) = tasks.join_next().await {
        match joined {
            Ok(preview) => decoded.push(preview),
            Err(error) => tracing::warn!("preview task aborted: {error}"),
        }
    }
    decoded
}

//! Ordered attachment slots pairing each file with its preview.
//!
//! A slot is created when its file is admitted and owns the preview from
//! then on, so asynchronous decodes resolve by [`AttachmentId`] rather than
//! by position. Removing a slot removes file and preview in one step.

use std::fmt;

use super::media::{MAX_ATTACHMENTS, MediaFile, MediaRejection, validate_file};
use super::preview::{DecodedPreview, PreviewJob};

/// Stable identity of an attachment slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct AttachmentId(u64);

impl AttachmentId {
    pub(crate) const fn new(value: u64) -> Self {
        Self(value)
    }
}

impl fmt::Display for AttachmentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Preview status of an attachment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PreviewState {
    /// Decoding has not completed yet.
    Pending,
    /// Decoded `data:` URL.
    Ready(String),
    /// Decoding failed with the given detail.
    Failed(String),
}

impl PreviewState {
    /// Returns the decoded URL when ready.
    #[must_use]
    pub fn data_url(&self) -> Option<&str> {
        match self {
            Self::Ready(url) => Some(url.as_str()),
            Self::Pending | Self::Failed(_) => None,
        }
    }
}

/// One attached file and its preview.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    id: AttachmentId,
    file: MediaFile,
    preview: PreviewState,
}

impl Attachment {
    /// Returns the slot identity.
    #[must_use]
    pub const fn id(&self) -> AttachmentId {
        self.id
    }

    /// Returns the attached file.
    #[must_use]
    pub const fn file(&self) -> &MediaFile {
        &self.file
    }

    /// Returns the preview status.
    #[must_use]
    pub const fn preview(&self) -> &PreviewState {
        &self.preview
    }
}

/// Ordered list of attachments, at most [`MAX_ATTACHMENTS`] long.
///
/// Identities are handed out from a counter that only grows, so an id is
/// never reused for the life of the list, even across [`clear`].
/// Equality compares the attachments only.
///
/// [`clear`]: AttachmentList::clear
#[derive(Debug, Clone, Default, Eq)]
pub struct AttachmentList {
    items: Vec<Attachment>,
    next_id: u64,
}

impl PartialEq for AttachmentList {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl AttachmentList {
    /// Admits a batch of files atomically.
    ///
    /// The batch is refused as a whole when it would exceed the attachment
    /// maximum or when any file fails validation; the first failing file
    /// determines the rejection. Admitted files are appended in batch order
    /// with pending previews, and one [`PreviewJob`] is returned per file.
    ///
    /// # Errors
    ///
    /// Returns the [`MediaRejection`] that refused the batch.
    pub fn admit(&mut self, batch: Vec<MediaFile>) -> Result<Vec<PreviewJob>, MediaRejection> {
        if self.items.len().saturating_add(batch.len()) > MAX_ATTACHMENTS {
            return Err(MediaRejection::TooManyFiles {
                max: MAX_ATTACHMENTS,
            });
        }

        for file in &batch {
            validate_file(file)?;
        }

        let jobs = batch
            .into_iter()
            .map(|file| {
                let id = AttachmentId::new(self.next_id);
                self.next_id = self.next_id.saturating_add(1);
                self.items.push(Attachment {
                    id,
                    file: file.clone(),
                    preview: PreviewState::Pending,
                });
                PreviewJob::new(id, file)
            })
            .collect();

        Ok(jobs)
    }

    /// Stores a decoded preview in the slot it belongs to.
    ///
    /// Returns `false` when the slot was removed before decoding finished.
    pub fn apply_preview(&mut self, decoded: DecodedPreview) -> bool {
        let Some(slot) = self.items.iter_mut().find(|item| item.id == decoded.id) else {
            tracing::debug!("discarding preview for removed attachment {}", decoded.id);
            return false;
        };

        slot.preview = match decoded.result {
            Ok(url) => PreviewState::Ready(url),
            Err(message) => PreviewState::Failed(message),
        };
        true
    }

    /// Removes the attachment at `index` together with its preview.
    pub fn remove(&mut self, index: usize) -> Option<Attachment> {
        (index < self.items.len()).then(|| self.items.remove(index))
    }

    /// Removes every attachment. Previews still decoding for the removed
    /// slots are discarded when they arrive.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Returns the attachment at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Attachment> {
        self.items.get(index)
    }

    /// Returns the number of attachments.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns whether nothing is attached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates attachments in order.
    pub fn iter(&self) -> std::slice::Iter<'_, Attachment> {
        self.items.iter()
    }

    /// Returns the attached files in order.
    #[must_use]
    pub fn files(&self) -> Vec<MediaFile> {
        self.items.iter().map(|item| item.file.clone()).collect()
    }
}

impl<'list> IntoIterator for &'list AttachmentList {
    type Item = &'list Attachment;
    type IntoIter = std::slice::Iter<'list, Attachment>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

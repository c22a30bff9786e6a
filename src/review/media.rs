//! Media files attached to a review and the rules that admit them.
//!
//! Images (`image/jpeg`, `image/png`, `image/webp`) may be up to 5 MB and
//! videos (`video/mp4`, `video/quicktime`) up to 50 MB. A review carries at
//! most [`MAX_ATTACHMENTS`] files.

use std::sync::Arc;

use camino::Utf8Path;
use cap_std::ambient_authority;
use cap_std::fs_utf8::Dir;
use thiserror::Error;

/// Maximum number of files attached to one review.
pub const MAX_ATTACHMENTS: usize = 5;

/// Maximum accepted image size in bytes.
pub const MAX_IMAGE_BYTES: usize = 5 * 1024 * 1024;

/// Maximum accepted video size in bytes.
pub const MAX_VIDEO_BYTES: usize = 50 * 1024 * 1024;

/// File extensions offered by the media picker.
pub const ACCEPTED_EXTENSIONS: [&str; 6] = ["jpg", "jpeg", "png", "webp", "mp4", "mov"];

const IMAGE_TYPES: [&str; 3] = ["image/jpeg", "image/png", "image/webp"];
const VIDEO_TYPES: [&str; 2] = ["video/mp4", "video/quicktime"];

/// Broad category of an accepted media file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    /// A still image.
    Image,
    /// A video clip.
    Video,
}

impl MediaKind {
    /// Classifies a MIME type, returning `None` for unsupported types.
    ///
    /// Parameters such as `charset` are ignored; only the essence is
    /// compared.
    #[must_use]
    pub fn classify(content_type: &str) -> Option<Self> {
        let parsed = content_type.parse::<mime::Mime>().ok()?;
        let essence = parsed.essence_str();

        if IMAGE_TYPES.contains(&essence) {
            Some(Self::Image)
        } else if VIDEO_TYPES.contains(&essence) {
            Some(Self::Video)
        } else {
            None
        }
    }

    /// Size limit in bytes for this kind.
    #[must_use]
    pub const fn max_bytes(self) -> usize {
        match self {
            Self::Image => MAX_IMAGE_BYTES,
            Self::Video => MAX_VIDEO_BYTES,
        }
    }

    fn too_large(self, name: &str) -> MediaRejection {
        let name = name.to_owned();
        match self {
            Self::Image => MediaRejection::ImageTooLarge { name },
            Self::Video => MediaRejection::VideoTooLarge { name },
        }
    }
}

/// A binary file selected for attachment.
///
/// The payload is reference counted so preview jobs can share it with the
/// attachment list without copying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaFile {
    name: String,
    content_type: String,
    data: Arc<[u8]>,
}

impl MediaFile {
    /// Creates a media file from its name, declared MIME type, and bytes.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        content_type: impl Into<String>,
        data: impl Into<Arc<[u8]>>,
    ) -> Self {
        Self {
            name: name.into(),
            content_type: content_type.into(),
            data: data.into(),
        }
    }

    /// Reads a file from disk, guessing its MIME type from the extension.
    ///
    /// The size is checked against the limit for the guessed type before
    /// any bytes are read; files of unsupported types are only read up to
    /// the video limit.
    ///
    /// # Errors
    ///
    /// Returns [`MediaLoadError`] when the path has no file name, the file
    /// cannot be read, or it is larger than its limit.
    pub fn from_path(path: &Utf8Path) -> Result<Self, MediaLoadError> {
        let file_name = path.file_name().ok_or_else(|| MediaLoadError {
            path: path.to_string(),
            message: "path has no file name".to_owned(),
        })?;
        let parent = match path.parent() {
            Some(parent) if !parent.as_str().is_empty() => parent,
            _ => Utf8Path::new("."),
        };

        let dir =
            Dir::open_ambient_dir(parent, ambient_authority()).map_err(|error| MediaLoadError {
                path: path.to_string(),
                message: error.to_string(),
            })?;

        let content_type = mime_guess::from_path(path.as_std_path())
            .first_or_octet_stream()
            .essence_str()
            .to_owned();

        let declared_len = dir
            .metadata(file_name)
            .map_err(|error| MediaLoadError {
                path: path.to_string(),
                message: error.to_string(),
            })?
            .len();
        let len = usize::try_from(declared_len).unwrap_or(usize::MAX);
        if let Some(rejection) = oversize_rejection(file_name, &content_type, len) {
            tracing::debug!("refusing to load {path}: {rejection}");
            return Err(MediaLoadError {
                path: path.to_string(),
                message: rejection.to_string(),
            });
        }

        let data = dir.read(file_name).map_err(|error| MediaLoadError {
            path: path.to_string(),
            message: error.to_string(),
        })?;

        Ok(Self::new(file_name, content_type, data))
    }

    /// Returns the file name shown to the user.
    #[must_use]
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    /// Returns the declared MIME type.
    #[must_use]
    pub fn content_type(&self) -> &str {
        self.content_type.as_str()
    }

    /// Returns the file contents.
    #[must_use]
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the file size in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns whether the file is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

/// Reasons a batch of selected files is refused.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum MediaRejection {
    /// The batch would push the attachment count past the maximum.
    #[error("Maximum {max} files allowed")]
    TooManyFiles {
        /// Configured attachment maximum.
        max: usize,
    },

    /// A file's MIME type is neither a supported image nor video type.
    #[error("Invalid file type. Allowed: jpg, png, webp for images or mp4, mov for videos")]
    InvalidType {
        /// Name of the offending file.
        name: String,
        /// Declared MIME type of the offending file.
        content_type: String,
    },

    /// An image exceeds the 5 MB limit.
    #[error("Image \"{name}\" exceeds 5MB limit")]
    ImageTooLarge {
        /// Name of the offending file.
        name: String,
    },

    /// A video exceeds the 50 MB limit.
    #[error("Video \"{name}\" exceeds 50MB limit")]
    VideoTooLarge {
        /// Name of the offending file.
        name: String,
    },
}

/// Failure to read a media file from disk.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not read media file '{path}': {message}")]
pub struct MediaLoadError {
    /// Path that was requested.
    pub path: String,
    /// Underlying I/O detail.
    pub message: String,
}

/// Checks a single file's type and size.
///
/// # Errors
///
/// Returns [`MediaRejection::InvalidType`] for unsupported types, or the
/// kind-specific size rejection when the file is too large.
pub fn validate_file(file: &MediaFile) -> Result<MediaKind, MediaRejection> {
    let kind =
        MediaKind::classify(file.content_type()).ok_or_else(|| MediaRejection::InvalidType {
            name: file.name().to_owned(),
            content_type: file.content_type().to_owned(),
        })?;

    if file.len() > kind.max_bytes() {
        return Err(kind.too_large(file.name()));
    }

    Ok(kind)
}

/// Rejection for a file whose on-disk size already rules it out.
fn oversize_rejection(name: &str, content_type: &str, len: usize) -> Option<MediaRejection> {
    match MediaKind::classify(content_type) {
        Some(kind) if len > kind.max_bytes() => Some(kind.too_large(name)),
        None if len > MAX_VIDEO_BYTES => Some(MediaRejection::InvalidType {
            name: name.to_owned(),
            content_type: content_type.to_owned(),
        }),
        _ => None,
    }
}

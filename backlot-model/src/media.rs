use std::fmt::{Display, Formatter};
use std::path::Path;

/// Coarse MIME class a form slot will accept.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaCategory {
    /// Any `image/*` type (carousel and display-ad creatives).
    Image,
    /// Any `video/*` type (video-ad uploads).
    Video,
}

impl MediaCategory {
    /// MIME prefix this category matches against.
    pub fn mime_prefix(self) -> &'static str {
        match self {
            MediaCategory::Image => "image/",
            MediaCategory::Video => "video/",
        }
    }

    /// Whether a declared MIME type falls under this category.
    pub fn accepts(self, mime: &str) -> bool {
        mime.starts_with(self.mime_prefix())
    }
}

impl Display for MediaCategory {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            MediaCategory::Image => write!(f, "image"),
            MediaCategory::Video => write!(f, "video"),
        }
    }
}

/// A binary payload staged for multipart upload.
///
/// Attachments are never inlined into JSON; every one becomes its own
/// multipart part, and the backend answers with a relative path under
/// its static `/public` prefix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaAttachment {
    pub file_name: String,
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl MediaAttachment {
    pub fn new(
        file_name: impl Into<String>,
        mime: impl Into<String>,
        bytes: Vec<u8>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            mime: mime.into(),
            bytes,
        }
    }

    /// Category derived from the declared MIME type, if it has one.
    pub fn category(&self) -> Option<MediaCategory> {
        if MediaCategory::Image.accepts(&self.mime) {
            Some(MediaCategory::Image)
        } else if MediaCategory::Video.accepts(&self.mime) {
            Some(MediaCategory::Video)
        } else {
            None
        }
    }
}

/// Best-effort MIME type from a file extension.
///
/// Covers the formats the upload endpoints actually see; anything else
/// gets the generic octet-stream type, which the attachment gate then
/// rejects with a field-local error.
pub fn mime_for_path(path: &Path) -> &'static str {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("jpg" | "jpeg") => "image/jpeg",
        Some("png") => "image/png",
        Some("webp") => "image/webp",
        Some("gif") => "image/gif",
        Some("avif") => "image/avif",
        Some("mp4") => "video/mp4",
        Some("webm") => "video/webm",
        Some("mkv") => "video/x-matroska",
        Some("mov") => "video/quicktime",
        _ => "application/octet-stream",
    }
}

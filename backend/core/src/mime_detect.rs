//! MIME type helpers for image uploads.

use std::path::Path;

/// Detect MIME type by file extension.
pub fn detect_mime_type(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_lowercase();

    match ext.as_str() {
        "jpg" | "jpeg" | "jfif" => "image/jpeg",
        "png"          => "image/png",
        "gif"          => "image/gif",
        "webp"         => "image/webp",
        "avif"         => "image/avif",
        "bmp"          => "image/bmp",
        "tiff" | "tif" => "image/tiff",
        "heic"         => "image/heic",
        _              => "application/octet-stream",
    }
}

/// Whether a MIME type is for an image.
pub fn is_image(mime: &str) -> bool {
    mime.starts_with("image/")
}

/// Data-URL subtype for a declared MIME type.
///
/// Binary on purpose: anything that does not mention `png` is tagged `jpeg`,
/// including GIF, WebP and types that are not images at all.
pub fn media_subtype(mime: &str) -> &'static str {
    if mime.contains("png") {
        "png"
    } else {
        "jpeg"
    }
}

//! Request payloads and canned model replies.

use axum_test::multipart::{MultipartForm, Part};

/// 1x1 transparent PNG.
pub const TINY_PNG: &[u8] = &[
    0x89, 0x50, 0x4E, 0x47, 0x0D, 0x0A, 0x1A, 0x0A, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x48, 0x44,
    0x52, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x01, 0x08, 0x06, 0x00, 0x00, 0x00, 0x1F,
    0x15, 0xC4, 0x89, 0x00, 0x00, 0x00, 0x0D, 0x49, 0x44, 0x41, 0x54, 0x78, 0x9C, 0x63, 0x00,
    0x01, 0x00, 0x00, 0x05, 0x00, 0x01, 0x0D, 0x0A, 0x2D, 0xB4, 0x00, 0x00, 0x00, 0x00, 0x49,
    0x45, 0x4E, 0x44, 0xAE, 0x42, 0x60, 0x82,
];

/// JPEG start/end markers around a JFIF header; enough for content sniffing.
pub const TINY_JPEG: &[u8] = &[
    0xFF, 0xD8, 0xFF, 0xE0, 0x00, 0x10, 0x4A, 0x46, 0x49, 0x46, 0x00, 0x01, 0x01, 0x00, 0x00,
    0x01, 0x00, 0x01, 0x00, 0x00, 0xFF, 0xD9,
];

/// A well-formed model reply wrapped in chatter, with too few hashtags.
pub const CHATTY_MODEL_REPLY: &str = r##"Sure! Here is the analysis:
{"brand": "Dravidian", "caption": "Sunday brunch is back!", "hashtags": ["#Brunch", "#Sunday", "#Dravidian"], "is_urgent": "true"}
Let me know if you need anything else."##;

/// A multipart form with a single `file` part.
pub fn poster_form(bytes: &[u8], file_name: &str, mime: &str) -> MultipartForm {
    MultipartForm::new().add_part(
        "file",
        Part::bytes(bytes.to_vec())
            .file_name(file_name)
            .mime_type(mime),
    )
}

pub fn png_form() -> MultipartForm {
    poster_form(TINY_PNG, "poster.png", "image/png")
}

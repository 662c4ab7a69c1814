//! Key generation and validation for stored images.

use social_os_core::ImageContentType;
use uuid::Uuid;

/// Generate a collision-resistant filename whose extension matches the content type.
pub fn generate_filename(content_type: ImageContentType) -> String {
    format!("{}{}", Uuid::new_v4().simple(), content_type.extension())
}

/// A key is a single path segment: no separators, no traversal, no hidden files.
pub fn is_valid_key(key: &str) -> bool {
    !key.is_empty()
        && !key.contains("..")
        && !key.contains('/')
        && !key.contains('\\')
        && !key.starts_with('.')
}

//! Request validation shared by the HTTP layer and the orchestrators.

use crate::error::AppError;
use crate::models::PublishRequest;

/// A publish request whose required fields are known to be non-empty.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidPublish {
    pub image_url: String,
    pub caption: String,
}

/// Check that caption and image URL are non-empty after trimming.
///
/// The caption is checked first so a request missing both reports the caption.
pub fn validate_publish_request(request: &PublishRequest) -> Result<ValidPublish, AppError> {
    let caption = request.caption.trim();
    if caption.is_empty() {
        return Err(AppError::Validation("Caption cannot be empty.".to_string()));
    }

    let image_url = request.image_url.trim();
    if image_url.is_empty() {
        return Err(AppError::Validation("image_url is required.".to_string()));
    }

    Ok(ValidPublish {
        image_url: image_url.to_string(),
        caption: caption.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(image_url: &str, caption: &str) -> PublishRequest {
        PublishRequest {
            image_url: image_url.to_string(),
            caption: caption.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_valid_request_is_trimmed() {
        let valid = validate_publish_request(&request("  https://x/a.jpg ", " Game night! ")).unwrap();
        assert_eq!(valid.image_url, "https://x/a.jpg");
        assert_eq!(valid.caption, "Game night!");
    }

    #[test]
    fn test_whitespace_caption_rejected() {
        let err = validate_publish_request(&request("https://x/a.jpg", " \n\t ")).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "Caption cannot be empty."),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_image_url_rejected() {
        let err = validate_publish_request(&request("   ", "caption")).unwrap_err();
        match err {
            AppError::Validation(msg) => assert_eq!(msg, "image_url is required."),
            other => panic!("Expected Validation, got {:?}", other),
        }
    }

    #[test]
    fn test_caption_checked_before_image_url() {
        let err = validate_publish_request(&request("", "")).unwrap_err();
        assert!(err.to_string().contains("Caption"));
    }
}

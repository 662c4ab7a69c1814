use social_os_core::{AppError, ImageContentType};

/// Validation errors for uploaded posters
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("File too large: {size} bytes (max: {max} bytes)")]
    FileTooLarge { size: usize, max: usize },

    #[error("Only JPG and PNG files are supported.")]
    InvalidContentType { content_type: String },

    #[error("Uploaded file is empty.")]
    EmptyFile,
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        match err {
            ValidationError::FileTooLarge { max, .. } => AppError::PayloadTooLarge(format!(
                "File size exceeds maximum allowed size of {} MB",
                max / 1024 / 1024
            )),
            other => AppError::Validation(other.to_string()),
        }
    }
}

/// Poster upload validator
///
/// Checks run before anything is stored or sent to the AI model.
pub struct UploadValidator {
    max_file_size: usize,
}

impl UploadValidator {
    pub fn new(max_file_size: usize) -> Self {
        Self { max_file_size }
    }

    /// Validate content type against the JPEG/PNG allow-list
    pub fn validate_content_type(
        &self,
        content_type: Option<&str>,
    ) -> Result<ImageContentType, ValidationError> {
        let raw = content_type.unwrap_or_default();
        ImageContentType::from_mime(raw).ok_or_else(|| ValidationError::InvalidContentType {
            content_type: raw.to_string(),
        })
    }

    /// Validate file size
    pub fn validate_file_size(&self, size: usize) -> Result<(), ValidationError> {
        if size == 0 {
            return Err(ValidationError::EmptyFile);
        }

        if size > self.max_file_size {
            return Err(ValidationError::FileTooLarge {
                size,
                max: self.max_file_size,
            });
        }

        Ok(())
    }

    /// Validate an upload; the content type is checked first.
    pub fn validate_all(
        &self,
        content_type: Option<&str>,
        file_size: usize,
    ) -> Result<ImageContentType, ValidationError> {
        let image_type = self.validate_content_type(content_type)?;
        self.validate_file_size(file_size)?;
        Ok(image_type)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_validator() -> UploadValidator {
        UploadValidator::new(1024 * 1024) // 1MB
    }

    #[test]
    fn test_validate_content_type_ok() {
        let validator = test_validator();
        assert_eq!(
            validator.validate_content_type(Some("image/jpeg")).unwrap(),
            ImageContentType::Jpeg
        );
        assert_eq!(
            validator.validate_content_type(Some("IMAGE/PNG")).unwrap(),
            ImageContentType::Png
        );
    }

    #[test]
    fn test_validate_content_type_invalid() {
        let validator = test_validator();
        let err = validator
            .validate_content_type(Some("image/gif"))
            .unwrap_err();
        assert_eq!(err.to_string(), "Only JPG and PNG files are supported.");
        assert!(validator.validate_content_type(None).is_err());
    }

    #[test]
    fn test_validate_file_size_empty() {
        let validator = test_validator();
        assert!(matches!(
            validator.validate_file_size(0),
            Err(ValidationError::EmptyFile)
        ));
    }

    #[test]
    fn test_validate_file_size_too_large() {
        let validator = test_validator();
        assert!(validator.validate_file_size(2 * 1024 * 1024).is_err());
        assert!(validator.validate_file_size(512 * 1024).is_ok());
    }

    #[test]
    fn test_validate_all_reports_content_type_before_size() {
        let validator = test_validator();
        let err = validator.validate_all(Some("image/gif"), 0).unwrap_err();
        assert!(matches!(err, ValidationError::InvalidContentType { .. }));
    }

    #[test]
    fn test_validation_error_maps_to_400() {
        use social_os_core::ErrorMetadata;
        let err: AppError = ValidationError::EmptyFile.into();
        assert_eq!(err.http_status_code(), 400);
        assert_eq!(err.client_message(), "Uploaded file is empty.");
    }

    #[test]
    fn test_file_too_large_maps_to_413() {
        use social_os_core::ErrorMetadata;
        let err: AppError = ValidationError::FileTooLarge {
            size: 11 * 1024 * 1024,
            max: 10 * 1024 * 1024,
        }
        .into();
        assert_eq!(err.http_status_code(), 413);
        assert!(err.client_message().contains("10 MB"));
    }
}

use serde::{Deserialize, Serialize};

/// Image formats accepted for upload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ImageContentType {
    #[serde(rename = "image/jpeg")]
    Jpeg,
    #[serde(rename = "image/png")]
    Png,
}

impl ImageContentType {
    pub const ALLOWED: [ImageContentType; 2] = [ImageContentType::Jpeg, ImageContentType::Png];

    /// Parse a MIME type, ignoring parameters and case
    /// (`"Image/JPEG; charset=binary"` is JPEG).
    pub fn from_mime(content_type: &str) -> Option<Self> {
        let normalized = content_type
            .split(';')
            .next()
            .map(|s| s.trim().to_lowercase())
            .unwrap_or_default();
        match normalized.as_str() {
            "image/jpeg" => Some(ImageContentType::Jpeg),
            "image/png" => Some(ImageContentType::Png),
            _ => None,
        }
    }

    /// Guess the content type from a stored filename's extension.
    pub fn from_filename(filename: &str) -> Option<Self> {
        let extension = filename.rsplit_once('.')?.1.to_lowercase();
        match extension.as_str() {
            "jpg" | "jpeg" => Some(ImageContentType::Jpeg),
            "png" => Some(ImageContentType::Png),
            _ => None,
        }
    }

    pub fn mime(&self) -> &'static str {
        match self {
            ImageContentType::Jpeg => "image/jpeg",
            ImageContentType::Png => "image/png",
        }
    }

    /// File extension including the leading dot.
    pub fn extension(&self) -> &'static str {
        match self {
            ImageContentType::Jpeg => ".jpg",
            ImageContentType::Png => ".png",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_mime() {
        assert_eq!(ImageContentType::from_mime("image/jpeg"), Some(ImageContentType::Jpeg));
        assert_eq!(ImageContentType::from_mime("image/png"), Some(ImageContentType::Png));
        assert_eq!(
            ImageContentType::from_mime(" IMAGE/PNG ; foo=bar"),
            Some(ImageContentType::Png)
        );
        assert_eq!(ImageContentType::from_mime("image/gif"), None);
        assert_eq!(ImageContentType::from_mime("image/jpg"), None);
        assert_eq!(ImageContentType::from_mime(""), None);
    }

    #[test]
    fn test_from_filename() {
        assert_eq!(
            ImageContentType::from_filename("abc.jpg"),
            Some(ImageContentType::Jpeg)
        );
        assert_eq!(
            ImageContentType::from_filename("abc.PNG"),
            Some(ImageContentType::Png)
        );
        assert_eq!(ImageContentType::from_filename("abc.gif"), None);
        assert_eq!(ImageContentType::from_filename("noextension"), None);
    }

    #[test]
    fn test_extension_matches_mime() {
        assert_eq!(ImageContentType::Jpeg.extension(), ".jpg");
        assert_eq!(ImageContentType::Png.extension(), ".png");
        assert_eq!(ImageContentType::Jpeg.mime(), "image/jpeg");
    }
}

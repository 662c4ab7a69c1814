use serde::{Deserialize, Serialize};

/// Number of hashtags every analysis carries.
pub const HASHTAG_COUNT: usize = 10;

/// Brand used when the model did not name one.
pub const UNKNOWN_BRAND: &str = "Unknown";

/// Marketing fields recovered from the model output.
///
/// Produced only by the response normalizer, which guarantees a non-empty
/// brand and exactly [`HASHTAG_COUNT`] non-empty hashtags.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisFields {
    pub brand: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub is_urgent: bool,
}

/// Response body of `POST /analyze`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    pub brand: String,
    pub caption: String,
    pub hashtags: Vec<String>,
    pub is_urgent: bool,
    pub image_url: String,
    pub filename: String,
}

impl AnalysisResult {
    pub fn new(fields: AnalysisFields, image_url: String, filename: String) -> Self {
        Self {
            brand: fields.brand,
            caption: fields.caption,
            hashtags: fields.hashtags,
            is_urgent: fields.is_urgent,
            image_url,
            filename,
        }
    }
}

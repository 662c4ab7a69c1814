//! Model output normalizer
//!
//! Generative models are asked for strict JSON but frequently wrap it in prose
//! or code fences, omit fields or use the wrong types. Recovery is split into
//! two steps:
//!
//! * [`extract_json_object`] is fallible and locates a JSON object in raw text.
//! * [`normalize`] is total and coerces whatever that object holds into
//!   [`AnalysisFields`] with a non-empty brand and exactly
//!   [`HASHTAG_COUNT`] hashtags.

use serde_json::{Map, Value};
use social_os_core::models::{AnalysisFields, HASHTAG_COUNT, UNKNOWN_BRAND};
use social_os_core::AppError;

/// Hashtags appended, in order, when the model returns fewer than
/// [`HASHTAG_COUNT`]. Led by the location tag.
pub const DEFAULT_HASHTAGS: [&str; HASHTAG_COUNT] = [
    "#BukitBintang",
    "#KualaLumpur",
    "#Nightlife",
    "#FoodAndDrinks",
    "#EventNight",
    "#KLFoodie",
    "#WeekendVibes",
    "#LiveMusic",
    "#PartyTime",
    "#SocialScene",
];

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// No brace-delimited span exists in the text.
    #[error("Model response did not contain valid JSON.")]
    NoJsonObject,

    /// A brace-delimited span exists but is not valid JSON.
    #[error("Failed to parse model JSON output: {0}")]
    Malformed(String),
}

impl From<ParseError> for AppError {
    fn from(err: ParseError) -> Self {
        AppError::Parse(err.to_string())
    }
}

/// Locate a JSON object in raw model text.
///
/// The trimmed text is parsed directly first. If that fails or does not yield
/// an object, the span from the first `{` to the last `}` is parsed instead.
pub fn extract_json_object(raw_text: &str) -> Result<Map<String, Value>, ParseError> {
    let trimmed = raw_text.trim();

    if let Ok(Value::Object(map)) = serde_json::from_str::<Value>(trimmed) {
        return Ok(map);
    }

    let (start, end) = match (trimmed.find('{'), trimmed.rfind('}')) {
        (Some(start), Some(end)) if end > start => (start, end),
        _ => return Err(ParseError::NoJsonObject),
    };

    match serde_json::from_str::<Value>(&trimmed[start..=end]) {
        Ok(Value::Object(map)) => Ok(map),
        Ok(_) => Err(ParseError::NoJsonObject),
        Err(e) => Err(ParseError::Malformed(e.to_string())),
    }
}

/// Coerce a parsed model object into analysis fields. Never fails.
pub fn normalize(parsed: &Map<String, Value>) -> AnalysisFields {
    let brand = parsed
        .get("brand")
        .and_then(stringify)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| UNKNOWN_BRAND.to_string());

    let caption = parsed
        .get("caption")
        .and_then(stringify)
        .map(|s| s.trim().to_string())
        .unwrap_or_default();

    let hashtags = match parsed.get("hashtags") {
        Some(Value::Array(items)) => items
            .iter()
            .filter_map(stringify)
            .map(|tag| tag.trim().to_string())
            .filter(|tag| !tag.is_empty())
            .collect(),
        Some(Value::String(text)) => text
            .split_whitespace()
            .filter(|token| token.starts_with('#'))
            .map(str::to_string)
            .collect(),
        _ => Vec::new(),
    };

    let is_urgent = parsed.get("is_urgent").map(is_truthy).unwrap_or(false);

    AnalysisFields {
        brand,
        caption,
        hashtags: backfill_hashtags(hashtags),
        is_urgent,
    }
}

/// Extract and normalize in one step.
pub fn parse_model_output(raw_text: &str) -> Result<AnalysisFields, ParseError> {
    let parsed = extract_json_object(raw_text)?;
    Ok(normalize(&parsed))
}

/// Pad with [`DEFAULT_HASHTAGS`] not already present, then truncate, so the
/// result always holds exactly [`HASHTAG_COUNT`] tags.
pub fn backfill_hashtags(mut hashtags: Vec<String>) -> Vec<String> {
    if hashtags.len() < HASHTAG_COUNT {
        for tag in DEFAULT_HASHTAGS {
            if !hashtags.iter().any(|existing| existing == tag) {
                hashtags.push(tag.to_string());
            }
            if hashtags.len() == HASHTAG_COUNT {
                break;
            }
        }
    }
    hashtags.truncate(HASHTAG_COUNT);
    hashtags
}

/// Lenient truthiness: `null`, `false`, zero, and empty strings, arrays or
/// objects are false; everything else is true.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map(|f| f != 0.0).unwrap_or(true),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}

/// String form of a JSON scalar; `null` counts as absent.
fn stringify(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::String(s) => Some(s.clone()),
        other => Some(other.to_string()),
    }
}

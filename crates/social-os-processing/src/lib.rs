//! Social OS Processing Library
//!
//! Pure transforms applied around the AI call: upload validation, the fixed
//! prompt text, and the normalizer that turns free-form model output into
//! well-formed analysis fields.

pub mod normalizer;
pub mod prompt;
pub mod validator;

pub use normalizer::{
    backfill_hashtags, extract_json_object, is_truthy, normalize, parse_model_output,
    ParseError, DEFAULT_HASHTAGS,
};
pub use prompt::{RESPONSE_FORMAT_INSTRUCTION, SYSTEM_PROMPT};
pub use validator::{UploadValidator, ValidationError};

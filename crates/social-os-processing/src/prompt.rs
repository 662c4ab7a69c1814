//! Fixed prompt text sent with every poster analysis.

/// Persona and task description, sent as the system instruction.
pub const SYSTEM_PROMPT: &str = "You are the AI Social Media Manager for Vishra Holdings. You manage 3 brands:
1. Dravidian (Nightlife, Indian, Upscale)
2. Fire & Ice (Sports Bar, Loud, Energetic)
3. Barley & Hops (Pub, Casual, Sports)

Task: Analyze the uploaded event poster.
Output a JSON object with:
- brand: Which venue is this for?
- caption: A highly engaging Instagram caption with emojis matching the venue's vibe.
- hashtags: 10 relevant tags (include #BukitBintang).
- is_urgent: Boolean (True if event is today/tomorrow).";

/// User-turn instruction placed before the inline image.
pub const RESPONSE_FORMAT_INSTRUCTION: &str = "Return only a strict JSON object with keys: brand, caption, hashtags, is_urgent. hashtags must be an array of exactly 10 hashtag strings.";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prompt_names_every_field() {
        for key in ["brand", "caption", "hashtags", "is_urgent"] {
            assert!(SYSTEM_PROMPT.contains(key));
            assert!(RESPONSE_FORMAT_INSTRUCTION.contains(key));
        }
        assert!(RESPONSE_FORMAT_INSTRUCTION.contains("exactly 10"));
    }
}

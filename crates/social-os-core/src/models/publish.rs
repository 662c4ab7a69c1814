use serde::{Deserialize, Deserializer, Serialize};

/// Where on Instagram the image is published.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublishTarget {
    #[default]
    Post,
    Story,
}

impl PublishTarget {
    pub fn as_str(&self) -> &'static str {
        match self {
            PublishTarget::Post => "post",
            PublishTarget::Story => "story",
        }
    }
}

// Anything other than "story" publishes a regular feed post.
impl<'de> Deserialize<'de> for PublishTarget {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Option::<String>::deserialize(deserializer)?;
        Ok(match raw.as_deref().map(str::trim) {
            Some(t) if t.eq_ignore_ascii_case("story") => PublishTarget::Story,
            _ => PublishTarget::Post,
        })
    }
}

/// Request body of `POST /publish`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishRequest {
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub caption: String,
    /// Brand name used to route to a brand-specific account.
    #[serde(default)]
    pub brand: Option<String>,
    #[serde(default)]
    pub target: PublishTarget,
}

/// Response body of a successful `POST /publish`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PublishResponse {
    pub success: bool,
    pub target: PublishTarget,
    pub media_id: String,
    pub instagram_post_id: String,
    pub detail: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_publish_request_defaults() {
        let req: PublishRequest =
            serde_json::from_str(r#"{"image_url": "https://x/a.jpg", "caption": "Hi"}"#).unwrap();
        assert_eq!(req.target, PublishTarget::Post);
        assert!(req.brand.is_none());
    }

    #[test]
    fn test_publish_target_parsing() {
        let req: PublishRequest = serde_json::from_str(
            r#"{"image_url": "u", "caption": "c", "target": "story"}"#,
        )
        .unwrap();
        assert_eq!(req.target, PublishTarget::Story);

        let req: PublishRequest =
            serde_json::from_str(r#"{"image_url": "u", "caption": "c", "target": "reel"}"#)
                .unwrap();
        assert_eq!(req.target, PublishTarget::Post);

        let req: PublishRequest =
            serde_json::from_str(r#"{"image_url": "u", "caption": "c", "target": null}"#)
                .unwrap();
        assert_eq!(req.target, PublishTarget::Post);
    }

    #[test]
    fn test_publish_response_shape() {
        let response = PublishResponse {
            success: true,
            target: PublishTarget::Post,
            media_id: "17890".to_string(),
            instagram_post_id: "17999".to_string(),
            detail: "Post published successfully to Instagram.".to_string(),
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], true);
        assert_eq!(json["target"], "post");
        assert_eq!(json["media_id"], "17890");
        assert_eq!(json["instagram_post_id"], "17999");
    }
}

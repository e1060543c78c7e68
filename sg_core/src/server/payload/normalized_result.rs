use serde::{Deserialize, Serialize};

/// The single output contract of the gateway, whatever provider served the
/// request. Exactly one field is set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct NormalizedResult {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_base64: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub video_base64: Option<String>,
}

impl NormalizedResult {
    pub fn for_text(text: String) -> Self {
        NormalizedResult {
            text: Some(text),
            ..Default::default()
        }
    }

    pub fn for_image_base64(image_base64: String) -> Self {
        NormalizedResult {
            image_base64: Some(image_base64),
            ..Default::default()
        }
    }

    pub fn for_video_url(video_url: String) -> Self {
        NormalizedResult {
            video_url: Some(video_url),
            ..Default::default()
        }
    }

    pub fn for_video_base64(video_base64: String) -> Self {
        NormalizedResult {
            video_base64: Some(video_base64),
            ..Default::default()
        }
    }
}

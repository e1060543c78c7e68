use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateTextRequest {
    // missing topic is reported as a validation error, not a rejected body
    #[serde(default)]
    pub topic: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub platform: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub keywords: Option<String>,
}

impl GenerateTextRequest {
    pub fn for_topic(topic: impl Into<String>) -> Self {
        GenerateTextRequest {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// `None` when the topic is empty or whitespace only.
    pub fn get_topic(&self) -> Option<&str> {
        let topic = self.topic.trim();
        if topic.is_empty() { None } else { Some(topic) }
    }
}

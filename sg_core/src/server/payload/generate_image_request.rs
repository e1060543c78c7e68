use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct GenerateImageRequest {
    #[serde(default)]
    pub prompt: Option<String>,
}

impl GenerateImageRequest {
    pub fn new(prompt: impl Into<String>) -> Self {
        GenerateImageRequest {
            prompt: Some(prompt.into()),
        }
    }

    /// `None` when the prompt is absent, empty or whitespace only.
    pub fn get_prompt(&self) -> Option<&str> {
        self.prompt
            .as_deref()
            .map(str::trim)
            .filter(|prompt| !prompt.is_empty())
    }
}

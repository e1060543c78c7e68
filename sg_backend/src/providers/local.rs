use super::chat_completion::{ChatCompletionRequest, join_url};
use super::error::{ErrorProvider, Result};
use super::normalize::{extract_chat_text, extract_model_ids, text_or_placeholder};
use super::upstream::{parse_json, read_body};
use super::{ProviderKind, TextProvider};
use crate::config::LocalConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::{info, warn};

const PROVIDER: &str = "local inference server";

/// An OpenAI-compatible inference server on the local machine.
///
/// Each completion first lists the loaded models and uses the first one.
#[derive(Debug, Clone)]
pub struct LocalClient {
    client: Client,
    config: LocalConfig,
}

impl LocalClient {
    pub fn new(client: Client, config: LocalConfig) -> Self {
        LocalClient { client, config }
    }

    pub async fn list_models(&self) -> Result<Vec<String>> {
        let url = join_url(&self.config.base_url, "models");
        let result = self.client.get(&url).send().await;
        let body = read_body(PROVIDER, &url, result).await?;
        Ok(extract_model_ids(&parse_json(PROVIDER, body)?))
    }
}

#[async_trait]
impl TextProvider for LocalClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Local
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let models = self.list_models().await?;
        let Some(model) = models.into_iter().next() else {
            warn!("Local inference server at {} has no models loaded", self.config.base_url);
            return Err(ErrorProvider::NoModelsAvailable);
        };

        let url = join_url(&self.config.base_url, "chat/completions");
        info!("Requesting local completion with model {model}");
        let request = ChatCompletionRequest::for_prompt(model, prompt);
        let result = self.client.post(&url).json(&request).send().await;
        let body = read_body(PROVIDER, &url, result).await?;
        let result = parse_json(PROVIDER, body)?;
        Ok(text_or_placeholder(extract_chat_text(&result)))
    }
}

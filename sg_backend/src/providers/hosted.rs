use super::chat_completion::{ChatCompletionRequest, join_url};
use super::error::{ErrorProvider, Result};
use super::normalize::{extract_chat_text, text_or_placeholder};
use super::upstream::{parse_json, read_body};
use super::{ProviderKind, TextProvider};
use crate::config::HostedConfig;
use async_trait::async_trait;
use reqwest::Client;
use tracing::info;

const PROVIDER: &str = "hosted API";

/// An OpenAI-compatible hosted inference API authenticated with a bearer key.
#[derive(Debug, Clone)]
pub struct HostedClient {
    client: Client,
    config: HostedConfig,
}

impl HostedClient {
    pub fn new(client: Client, config: HostedConfig) -> Self {
        HostedClient { client, config }
    }
}

#[async_trait]
impl TextProvider for HostedClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Hosted
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ErrorProvider::MissingCredentials("Hosted API"))?;
        let url = join_url(&self.config.base_url, "chat/completions");
        let request = ChatCompletionRequest::for_prompt(self.config.model.clone(), prompt);

        info!("Requesting completion from {url} with model {}", self.config.model);
        let result = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&request)
            .send()
            .await;
        let body = read_body(PROVIDER, &url, result).await?;
        let result = parse_json(PROVIDER, body)?;
        Ok(text_or_placeholder(extract_chat_text(&result)))
    }
}

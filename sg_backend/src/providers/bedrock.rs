use super::chat_completion::{MAX_TOKENS, TEMPERATURE, TOP_P};
use super::error::{ErrorProvider, Result};
use super::normalize::{extract_first_image, extract_nova_text, text_or_placeholder};
use super::sigv4::{SigningParams, encode_path_segment, sign_post_json};
use super::upstream::{parse_json, read_body};
use super::{ImageProvider, ProviderKind, TextProvider};
use crate::config::BedrockConfig;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::{Client, Url};
use serde_json::{Value, json};
use sg_core::format::prompt::build_image_prompt;
use tracing::{debug, info};

const PROVIDER: &str = "Bedrock";
const SERVICE: &str = "bedrock";
const CONTENT_TYPE: &str = "application/json";

/// Client for the Bedrock runtime `InvokeModel` API: Nova Pro for text and
/// Nova Canvas for images.
#[derive(Debug, Clone)]
pub struct BedrockClient {
    client: Client,
    config: BedrockConfig,
}

impl BedrockClient {
    pub fn new(client: Client, config: BedrockConfig) -> Self {
        BedrockClient { client, config }
    }

    pub fn text_request_body(prompt: &str) -> Value {
        json!({
            "messages": [
                { "role": "user", "content": [ { "text": prompt } ] }
            ],
            "inferenceConfig": {
                "temperature": TEMPERATURE,
                "maxTokens": MAX_TOKENS,
                "topP": TOP_P,
            }
        })
    }

    pub fn image_request_body(prompt: &str) -> Value {
        json!({
            "taskType": "TEXT_IMAGE",
            "textToImageParams": { "text": build_image_prompt(prompt) },
            "imageGenerationConfig": {
                "numberOfImages": 1,
                "width": 1024,
                "height": 1024,
                "cfgScale": 8.0,
            }
        })
    }

    /// `POST {endpoint}/model/{model_id}/invoke`, signed with SigV4.
    async fn invoke(&self, model_id: &str, body: &Value) -> Result<Value> {
        let credentials = self
            .config
            .credentials
            .as_ref()
            .ok_or(ErrorProvider::MissingCredentials("AWS"))?;

        let endpoint = Url::parse(&self.config.endpoint)
            .map_err(|e| ErrorProvider::InvalidEndpoint(format!("{}: {e}", self.config.endpoint)))?;
        let host = match (endpoint.host_str(), endpoint.port()) {
            (Some(host), Some(port)) => format!("{host}:{port}"),
            (Some(host), None) => host.to_string(),
            (None, _) => return Err(ErrorProvider::InvalidEndpoint(self.config.endpoint.clone())),
        };
        let path = format!(
            "{}/model/{}/invoke",
            endpoint.path().trim_end_matches('/'),
            encode_path_segment(model_id)
        );
        let url = format!(
            "{}://{host}{path}",
            endpoint.scheme()
        );

        let payload = serde_json::to_vec(body)?;
        let params = SigningParams {
            credentials,
            region: &self.config.region,
            service: SERVICE,
            time: Utc::now(),
        };
        let signed = sign_post_json(&params, &host, &path, CONTENT_TYPE, &payload)?;

        info!("Invoking Bedrock model {model_id}");
        let mut request = self
            .client
            .post(&url)
            .header("content-type", CONTENT_TYPE)
            .header("accept", CONTENT_TYPE);
        for (name, value) in signed {
            request = request.header(name, value);
        }
        let result = request.body(payload).send().await;
        let body = read_body(PROVIDER, &url, result).await?;
        parse_json(PROVIDER, body)
    }
}

#[async_trait]
impl TextProvider for BedrockClient {
    fn kind(&self) -> ProviderKind {
        ProviderKind::Bedrock
    }

    async fn complete(&self, prompt: &str) -> Result<String> {
        let body = Self::text_request_body(prompt);
        let result = self.invoke(&self.config.text_model, &body).await?;
        Ok(text_or_placeholder(extract_nova_text(&result)))
    }
}

#[async_trait]
impl ImageProvider for BedrockClient {
    fn name(&self) -> &'static str {
        "Nova Canvas"
    }

    async fn generate(&self, prompt: &str) -> Result<String> {
        let body = Self::image_request_body(prompt);
        let result = self.invoke(&self.config.image_model, &body).await?;
        match extract_first_image(&result) {
            Some(image) => Ok(image),
            None => {
                debug!("Nova Canvas raw response: {result}");
                let upstream = result
                    .get("error")
                    .and_then(Value::as_str)
                    .map(str::to_string);
                Err(ErrorProvider::NoImageReturned(upstream))
            }
        }
    }
}

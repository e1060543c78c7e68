use crate::config::{GatewayConfig, ImageSource};
use crate::error::{ErrorBackend, Result};
use crate::providers::bedrock::BedrockClient;
use crate::providers::demo::{DemoImage, DemoVideo};
use crate::providers::hosted::HostedClient;
use crate::providers::local::LocalClient;
use crate::providers::normalize::NO_RESPONSE;
use crate::providers::{ImageProvider, ProviderKind, TextProvider};
use reqwest::Client;
use sg_core::format::post::format_post;
use sg_core::format::prompt::build_text_prompt;
use sg_core::server::payload::generate_image_request::GenerateImageRequest;
use sg_core::server::payload::generate_text_request::GenerateTextRequest;
use sg_core::server::payload::normalized_result::NormalizedResult;
use sg_core::types::generation_kind::GenerationKind;
use std::sync::Arc;
use tracing::info;

/// The provider gateway: one strategy per request kind, chosen from the
/// configuration when the service is built.
#[derive(Clone)]
pub struct GenerationService {
    text_provider: Arc<dyn TextProvider>,
    image_provider: Arc<dyn ImageProvider>,
    video: DemoVideo,
}

impl GenerationService {
    pub fn new(
        text_provider: Arc<dyn TextProvider>,
        image_provider: Arc<dyn ImageProvider>,
        video: DemoVideo,
    ) -> Self {
        Self {
            text_provider,
            image_provider,
            video,
        }
    }

    pub fn from_config(config: &GatewayConfig, client: Client) -> Self {
        let text_provider: Arc<dyn TextProvider> = match config.resolve_text_provider() {
            ProviderKind::Bedrock => Arc::new(BedrockClient::new(
                client.clone(),
                config.bedrock.clone(),
            )),
            ProviderKind::Hosted => {
                Arc::new(HostedClient::new(client.clone(), config.hosted.clone()))
            }
            ProviderKind::Local => Arc::new(LocalClient::new(client.clone(), config.local.clone())),
        };
        let image_provider: Arc<dyn ImageProvider> = match config.resolve_image_source() {
            ImageSource::Bedrock => Arc::new(BedrockClient::new(client, config.bedrock.clone())),
            ImageSource::Demo => Arc::new(DemoImage::new(&config.assets_dir)),
        };
        info!("Image source: {}", image_provider.name());
        Self::new(
            text_provider,
            image_provider,
            DemoVideo::new(&config.assets_dir),
        )
    }

    pub fn text_provider_kind(&self) -> ProviderKind {
        self.text_provider.kind()
    }

    pub async fn generate_text(&self, req: GenerateTextRequest) -> Result<NormalizedResult> {
        if req.get_topic().is_none() {
            return Err(ErrorBackend::Validation("Topic is required".into()));
        }
        let prompt = build_text_prompt(&req);
        let raw = self
            .text_provider
            .complete(&prompt)
            .await
            .map_err(ErrorBackend::generation(GenerationKind::Text))?;

        let text = if self.text_provider.kind().formats_output() && raw != NO_RESPONSE {
            format_post(&raw, req.keywords.as_deref())
        } else {
            raw
        };
        Ok(NormalizedResult::for_text(text))
    }

    pub async fn generate_image(&self, req: GenerateImageRequest) -> Result<NormalizedResult> {
        let Some(prompt) = req.get_prompt() else {
            return Err(ErrorBackend::Validation("Prompt is required".into()));
        };
        let image = self
            .image_provider
            .generate(prompt)
            .await
            .map_err(ErrorBackend::generation(GenerationKind::Image))?;
        Ok(NormalizedResult::for_image_base64(image))
    }

    pub async fn generate_video(&self) -> NormalizedResult {
        self.video.load().await
    }
}

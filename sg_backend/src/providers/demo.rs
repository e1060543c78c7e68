use super::ImageProvider;
use super::error::{ErrorProvider, Result};
use crate::utils::demo_asset::DemoAsset;
use async_trait::async_trait;
use sg_core::server::default_config::{DEMO_IMAGE_FILE, DEMO_VIDEO_FILE, DEMO_VIDEO_URL};
use sg_core::server::payload::normalized_result::NormalizedResult;
use std::path::Path;
use tracing::warn;

/// Serves the pre-baked demo image and ignores the prompt.
#[derive(Debug, Clone)]
pub struct DemoImage {
    asset: DemoAsset,
}

impl DemoImage {
    pub fn new(assets_dir: &Path) -> Self {
        DemoImage {
            asset: DemoAsset::new(assets_dir, DEMO_IMAGE_FILE),
        }
    }
}

#[async_trait]
impl ImageProvider for DemoImage {
    fn name(&self) -> &'static str {
        "demo image"
    }

    async fn generate(&self, _prompt: &str) -> Result<String> {
        self.asset
            .load_base64()
            .await?
            .ok_or_else(|| ErrorProvider::DemoAssetMissing {
                kind: "image",
                path: self.asset.path().display().to_string(),
            })
    }
}

/// Canned video: the stored demo clip when there is one, the public sample
/// URL otherwise.
#[derive(Debug, Clone)]
pub struct DemoVideo {
    asset: DemoAsset,
}

impl DemoVideo {
    pub fn new(assets_dir: &Path) -> Self {
        DemoVideo {
            asset: DemoAsset::new(assets_dir, DEMO_VIDEO_FILE),
        }
    }

    pub async fn load(&self) -> NormalizedResult {
        match self.asset.load_base64().await {
            Ok(Some(video)) => NormalizedResult::for_video_base64(video),
            Ok(None) => NormalizedResult::for_video_url(DEMO_VIDEO_URL.to_string()),
            Err(e) => {
                warn!(
                    "Failed to read demo video {}: {e}",
                    self.asset.path().display()
                );
                NormalizedResult::for_video_url(DEMO_VIDEO_URL.to_string())
            }
        }
    }
}

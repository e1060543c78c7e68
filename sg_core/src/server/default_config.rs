pub const DEFAULT_SERVER_BACKEND_HOST: &str = "0.0.0.0";
pub const DEFAULT_SERVER_BACKEND_PORT: &str = "3000";
pub const DEFAULT_SERVER_BACKEND_PROTOCOL: &str = "http";

pub const DEFAULT_AWS_REGION: &str = "us-east-1";
pub const DEFAULT_BEDROCK_TEXT_MODEL: &str = "amazon.nova-pro-v1:0";
pub const DEFAULT_BEDROCK_IMAGE_MODEL: &str = "amazon.nova-canvas-v1:0";

pub const DEFAULT_HOSTED_API_BASE_URL: &str = "https://openrouter.ai/api/v1";
pub const DEFAULT_HOSTED_API_MODEL: &str = "openai/gpt-4o-mini";
pub const DEFAULT_LOCAL_INFERENCE_URL: &str = "http://localhost:1234/v1";

pub const DEFAULT_ASSETS_DIR: &str = "assets";
pub const DEFAULT_STATIC_DIR: &str = "public";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 60;
pub const DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS: u64 = 10;

pub const DEMO_IMAGE_FILE: &str = "demo_image.png";
pub const DEMO_VIDEO_FILE: &str = "demo_video.mp4";
pub const DEMO_VIDEO_URL: &str =
    "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4";

/// Request bodies are capped at 50 MiB.
pub const MAX_REQUEST_BODY_BYTES: usize = 50 * 1024 * 1024;

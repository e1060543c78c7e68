use crate::error::{ErrorBackend, Result};
use crate::providers::ProviderKind;
use sg_core::server::default_config::{
    DEFAULT_ASSETS_DIR, DEFAULT_AWS_REGION, DEFAULT_BEDROCK_IMAGE_MODEL,
    DEFAULT_BEDROCK_TEXT_MODEL, DEFAULT_HOSTED_API_BASE_URL, DEFAULT_HOSTED_API_MODEL,
    DEFAULT_LOCAL_INFERENCE_URL, DEFAULT_SERVER_BACKEND_HOST, DEFAULT_SERVER_BACKEND_PORT,
    DEFAULT_STATIC_DIR, DEFAULT_UPSTREAM_TIMEOUT_SECS,
};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextProviderChoice {
    Auto,
    Bedrock,
    Hosted,
    Local,
}

impl FromStr for TextProviderChoice {
    type Err = ErrorBackend;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(TextProviderChoice::Auto),
            "bedrock" => Ok(TextProviderChoice::Bedrock),
            "hosted" => Ok(TextProviderChoice::Hosted),
            "local" => Ok(TextProviderChoice::Local),
            other => Err(ErrorBackend::Configuration(format!(
                "TEXT_PROVIDER must be one of auto, bedrock, hosted, local (got {other})"
            ))),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSourceChoice {
    Auto,
    Bedrock,
    Demo,
}

impl FromStr for ImageSourceChoice {
    type Err = ErrorBackend;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(ImageSourceChoice::Auto),
            "bedrock" => Ok(ImageSourceChoice::Bedrock),
            "demo" => Ok(ImageSourceChoice::Demo),
            other => Err(ErrorBackend::Configuration(format!(
                "IMAGE_SOURCE must be one of auto, bedrock, demo (got {other})"
            ))),
        }
    }
}

/// Where `/api/generate-image` gets its picture from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSource {
    Bedrock,
    Demo,
}

#[derive(Clone, PartialEq, Eq)]
pub struct AwsCredentials {
    pub access_key_id: String,
    pub secret_access_key: String,
    pub session_token: Option<String>,
}

impl fmt::Debug for AwsCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AwsCredentials")
            .field("access_key_id", &self.access_key_id)
            .field("secret_access_key", &"<redacted>")
            .field("session_token", &self.session_token.as_ref().map(|_| "<redacted>"))
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct BedrockConfig {
    pub region: String,
    pub endpoint: String,
    pub text_model: String,
    pub image_model: String,
    pub credentials: Option<AwsCredentials>,
}

#[derive(Clone)]
pub struct HostedConfig {
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
}

impl fmt::Debug for HostedConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("HostedConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .finish()
    }
}

#[derive(Debug, Clone)]
pub struct LocalConfig {
    pub base_url: String,
}

/// Process-wide settings, read once at startup and never mutated.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    pub host: String,
    pub port: u16,
    pub bedrock: BedrockConfig,
    pub hosted: HostedConfig,
    pub local: LocalConfig,
    pub text_provider: TextProviderChoice,
    pub image_source: ImageSourceChoice,
    pub assets_dir: PathBuf,
    pub static_dir: PathBuf,
    pub upstream_timeout: Duration,
}

impl GatewayConfig {
    /// Loads `.env` when present, then reads the process environment.
    pub fn from_env() -> Result<Self> {
        let _ = dotenv::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key/value source. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let get_or = |key: &str, default: &str| get(key).unwrap_or_else(|| default.to_string());

        let port = get_or("PORT", DEFAULT_SERVER_BACKEND_PORT);
        let port = port.parse::<u16>().map_err(|_| {
            ErrorBackend::Configuration(format!("PORT must be a port number (got {port})"))
        })?;

        let upstream_timeout = match get("UPSTREAM_TIMEOUT_SECS") {
            Some(secs) => secs.parse::<u64>().map_err(|_| {
                ErrorBackend::Configuration(format!(
                    "UPSTREAM_TIMEOUT_SECS must be a number of seconds (got {secs})"
                ))
            })?,
            None => DEFAULT_UPSTREAM_TIMEOUT_SECS,
        };

        let credentials = match (get("AWS_ACCESS_KEY_ID"), get("AWS_SECRET_ACCESS_KEY")) {
            (Some(access_key_id), Some(secret_access_key)) => Some(AwsCredentials {
                access_key_id,
                secret_access_key,
                session_token: get("AWS_SESSION_TOKEN"),
            }),
            _ => None,
        };
        let region = get_or("AWS_REGION", DEFAULT_AWS_REGION);
        let endpoint = get("BEDROCK_ENDPOINT")
            .unwrap_or_else(|| format!("https://bedrock-runtime.{region}.amazonaws.com"));

        let config = GatewayConfig {
            host: get_or("SERVER_BACKEND_HOST", DEFAULT_SERVER_BACKEND_HOST),
            port,
            bedrock: BedrockConfig {
                region,
                endpoint,
                text_model: get_or("BEDROCK_TEXT_MODEL", DEFAULT_BEDROCK_TEXT_MODEL),
                image_model: get_or("BEDROCK_IMAGE_MODEL", DEFAULT_BEDROCK_IMAGE_MODEL),
                credentials,
            },
            hosted: HostedConfig {
                api_key: get("HOSTED_API_KEY"),
                base_url: get_or("HOSTED_API_BASE_URL", DEFAULT_HOSTED_API_BASE_URL),
                model: get_or("HOSTED_API_MODEL", DEFAULT_HOSTED_API_MODEL),
            },
            local: LocalConfig {
                base_url: get_or("LOCAL_INFERENCE_URL", DEFAULT_LOCAL_INFERENCE_URL),
            },
            text_provider: get_or("TEXT_PROVIDER", "auto").parse()?,
            image_source: get_or("IMAGE_SOURCE", "auto").parse()?,
            assets_dir: PathBuf::from(get_or("ASSETS_DIR", DEFAULT_ASSETS_DIR)),
            static_dir: PathBuf::from(get_or("STATIC_DIR", DEFAULT_STATIC_DIR)),
            upstream_timeout: Duration::from_secs(upstream_timeout),
        };
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.upstream_timeout.is_zero() {
            return Err(ErrorBackend::Configuration(
                "UPSTREAM_TIMEOUT_SECS must be at least 1".into(),
            ));
        }
        let has_aws = self.bedrock.credentials.is_some();
        if self.text_provider == TextProviderChoice::Bedrock && !has_aws {
            return Err(ErrorBackend::Configuration(
                "TEXT_PROVIDER=bedrock requires AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY".into(),
            ));
        }
        if self.text_provider == TextProviderChoice::Hosted && self.hosted.api_key.is_none() {
            return Err(ErrorBackend::Configuration(
                "TEXT_PROVIDER=hosted requires HOSTED_API_KEY".into(),
            ));
        }
        if self.image_source == ImageSourceChoice::Bedrock && !has_aws {
            return Err(ErrorBackend::Configuration(
                "IMAGE_SOURCE=bedrock requires AWS_ACCESS_KEY_ID and AWS_SECRET_ACCESS_KEY".into(),
            ));
        }
        Ok(())
    }

    /// The text backend for this process.
    ///
    /// In auto mode a hosted API key wins, then AWS credentials, then the
    /// local inference server. There is no fallback between them at call time.
    pub fn resolve_text_provider(&self) -> ProviderKind {
        match self.text_provider {
            TextProviderChoice::Bedrock => ProviderKind::Bedrock,
            TextProviderChoice::Hosted => ProviderKind::Hosted,
            TextProviderChoice::Local => ProviderKind::Local,
            TextProviderChoice::Auto => {
                if self.hosted.api_key.is_some() {
                    ProviderKind::Hosted
                } else if self.bedrock.credentials.is_some() {
                    ProviderKind::Bedrock
                } else {
                    ProviderKind::Local
                }
            }
        }
    }

    pub fn resolve_image_source(&self) -> ImageSource {
        match self.image_source {
            ImageSourceChoice::Bedrock => ImageSource::Bedrock,
            ImageSourceChoice::Demo => ImageSource::Demo,
            ImageSourceChoice::Auto if self.bedrock.credentials.is_some() => ImageSource::Bedrock,
            ImageSourceChoice::Auto => ImageSource::Demo,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> Result<GatewayConfig> {
        let env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        GatewayConfig::from_lookup(|key| env.get(key).cloned())
    }

    const AWS: [(&str, &str); 2] = [
        ("AWS_ACCESS_KEY_ID", "AKIDEXAMPLE"),
        ("AWS_SECRET_ACCESS_KEY", "secret"),
    ];

    #[test]
    fn test_defaults() {
        let config = config_from(&[]).unwrap();
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.bedrock.region, "us-east-1");
        assert_eq!(
            config.bedrock.endpoint,
            "https://bedrock-runtime.us-east-1.amazonaws.com"
        );
        assert_eq!(config.bedrock.text_model, "amazon.nova-pro-v1:0");
        assert_eq!(config.upstream_timeout, Duration::from_secs(60));
        assert_eq!(config.resolve_text_provider(), ProviderKind::Local);
        assert_eq!(config.resolve_image_source(), ImageSource::Demo);
    }

    #[test]
    fn test_hosted_key_wins_in_auto_mode() {
        let mut pairs = AWS.to_vec();
        pairs.push(("HOSTED_API_KEY", "sk-test"));
        let config = config_from(&pairs).unwrap();
        assert_eq!(config.resolve_text_provider(), ProviderKind::Hosted);
        assert_eq!(config.resolve_image_source(), ImageSource::Bedrock);
    }

    #[test]
    fn test_aws_credentials_select_bedrock() {
        let config = config_from(&AWS).unwrap();
        assert_eq!(config.resolve_text_provider(), ProviderKind::Bedrock);
    }

    #[test]
    fn test_empty_values_are_unset() {
        let config = config_from(&[("HOSTED_API_KEY", "  "), ("PORT", "")]).unwrap();
        assert!(config.hosted.api_key.is_none());
        assert_eq!(config.port, 3000);
        assert_eq!(config.resolve_text_provider(), ProviderKind::Local);
    }

    #[test]
    fn test_region_drives_endpoint() {
        let config = config_from(&[("AWS_REGION", "eu-west-3")]).unwrap();
        assert_eq!(
            config.bedrock.endpoint,
            "https://bedrock-runtime.eu-west-3.amazonaws.com"
        );
    }

    #[test]
    fn test_forced_provider() {
        let config = config_from(&[("TEXT_PROVIDER", "Local"), ("HOSTED_API_KEY", "k")]).unwrap();
        assert_eq!(config.resolve_text_provider(), ProviderKind::Local);
    }

    #[test]
    fn test_invalid_values() {
        assert!(matches!(
            config_from(&[("PORT", "http")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("TEXT_PROVIDER", "gpt")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("UPSTREAM_TIMEOUT_SECS", "soon")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("UPSTREAM_TIMEOUT_SECS", "0")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("TEXT_PROVIDER", "bedrock")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("TEXT_PROVIDER", "hosted")]),
            Err(ErrorBackend::Configuration(_))
        ));
        assert!(matches!(
            config_from(&[("IMAGE_SOURCE", "bedrock")]),
            Err(ErrorBackend::Configuration(_))
        ));
    }

    #[test]
    fn test_secrets_are_redacted() {
        let mut pairs = AWS.to_vec();
        pairs.push(("HOSTED_API_KEY", "sk-test"));
        let printed = format!("{:?}", config_from(&pairs).unwrap());
        assert!(!printed.contains("sk-test"));
        assert!(!printed.contains("\"secret\""));
    }
}

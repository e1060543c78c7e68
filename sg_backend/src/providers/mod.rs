pub mod bedrock;
pub mod chat_completion;
pub mod demo;
pub mod error;
pub mod hosted;
pub mod local;
pub mod normalize;
pub mod sigv4;
mod upstream;

use async_trait::async_trait;
use error::Result;
use std::fmt;

/// The closed set of text backends the gateway can talk to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderKind {
    Bedrock,
    Hosted,
    Local,
}

impl ProviderKind {
    /// Whether raw completions are reshaped into a bulleted post.
    pub fn formats_output(&self) -> bool {
        match self {
            ProviderKind::Bedrock => false,
            ProviderKind::Hosted | ProviderKind::Local => true,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ProviderKind::Bedrock => "bedrock",
            ProviderKind::Hosted => "hosted",
            ProviderKind::Local => "local",
        };
        f.write_str(name)
    }
}

/// One text backend. `complete` issues exactly one generation call and
/// returns the normalized completion, or the `"No response"` placeholder.
#[async_trait]
pub trait TextProvider: Send + Sync {
    fn kind(&self) -> ProviderKind;

    async fn complete(&self, prompt: &str) -> Result<String>;
}

/// One image backend. Returns the picture as base64.
#[async_trait]
pub trait ImageProvider: Send + Sync {
    fn name(&self) -> &'static str;

    async fn generate(&self, prompt: &str) -> Result<String>;
}

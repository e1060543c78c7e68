use thiserror::Error;

pub type Result<T> = std::result::Result<T, ErrorProvider>;

fn upstream_suffix(upstream: &Option<String>) -> String {
    upstream
        .as_ref()
        .map(|msg| format!(" Upstream said: {msg}"))
        .unwrap_or_default()
}

/// Failure of a single outbound call. Nothing here is retried.
#[derive(Debug, Error)]
pub enum ErrorProvider {
    #[error("HTTP request to {provider} failed: {source}")]
    Http {
        provider: &'static str,
        #[source]
        source: reqwest::Error,
    },

    #[error("Could not connect to {provider} at {url}")]
    ConnectionRefused { provider: &'static str, url: String },

    #[error("{provider} returned status {status}: {body}")]
    UpstreamStatus {
        provider: &'static str,
        status: u16,
        body: String,
    },

    #[error("Malformed response from {provider}: {message}")]
    MalformedResponse {
        provider: &'static str,
        message: String,
        raw: String,
    },

    #[error("Invalid endpoint {0}")]
    InvalidEndpoint(String),

    #[error("No models available on the local inference server")]
    NoModelsAvailable,

    #[error("No image returned from Nova Canvas. Try a more descriptive prompt.{}", upstream_suffix(.0))]
    NoImageReturned(Option<String>),

    #[error("{0} credentials are not configured")]
    MissingCredentials(&'static str),

    #[error("Demo {kind} not found at {path}")]
    DemoAssetMissing { kind: &'static str, path: String },

    #[error("Failed to sign request: {0}")]
    Signing(String),

    #[error("Failed to encode request: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    IO(#[from] std::io::Error),
}

impl ErrorProvider {
    /// Raw upstream body for responses that could not be parsed.
    pub fn raw(&self) -> Option<&str> {
        match self {
            ErrorProvider::MalformedResponse { raw, .. } => Some(raw.as_str()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_image_message() {
        assert_eq!(
            ErrorProvider::NoImageReturned(None).to_string(),
            "No image returned from Nova Canvas. Try a more descriptive prompt."
        );
        assert_eq!(
            ErrorProvider::NoImageReturned(Some("blocked by filter".into())).to_string(),
            "No image returned from Nova Canvas. Try a more descriptive prompt. Upstream said: blocked by filter"
        );
    }
}

use thiserror::Error;
pub type Result<T> = std::result::Result<T, ErrorCli>;

fn detail_suffix(details: &Option<String>) -> String {
    details
        .as_ref()
        .map(|d| format!(" ({d})"))
        .unwrap_or_default()
}

#[derive(Error, Debug)]
pub enum ErrorCli {
    #[error(transparent)]
    Core(#[from] sg_core::error::ErrorCore),

    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Could not connect to server at {0}. Is it running?")]
    ConnectionRefused(String),

    #[error("Server answered {status}: {error}{}", detail_suffix(.details))]
    Backend {
        status: u16,
        error: String,
        details: Option<String>,
    },

    #[error("Unexpected response from server: {0}")]
    UnexpectedResponse(String),

    #[error("Failed to decode base64 payload: {0}")]
    Decode(#[from] base64::DecodeError),
}

use super::error::{ErrorProvider, Result};
use reqwest::Response;
use serde_json::Value;

/// Reads the body of an upstream response, turning transport failures and
/// non-2xx statuses into `ErrorProvider`.
pub(crate) async fn read_body(
    provider: &'static str,
    url: &str,
    res: std::result::Result<Response, reqwest::Error>,
) -> Result<String> {
    let res = res.map_err(|e| to_provider_error(provider, url, e))?;
    let status = res.status();
    let body = res
        .text()
        .await
        .map_err(|e| to_provider_error(provider, url, e))?;
    if !status.is_success() {
        return Err(ErrorProvider::UpstreamStatus {
            provider,
            status: status.as_u16(),
            body,
        });
    }
    Ok(body)
}

/// Parses an upstream body, keeping the raw text when it is not JSON.
pub(crate) fn parse_json(provider: &'static str, body: String) -> Result<Value> {
    serde_json::from_str::<Value>(&body).map_err(|e| ErrorProvider::MalformedResponse {
        provider,
        message: e.to_string(),
        raw: body,
    })
}

fn to_provider_error(provider: &'static str, url: &str, e: reqwest::Error) -> ErrorProvider {
    if e.is_connect() {
        ErrorProvider::ConnectionRefused {
            provider,
            url: url.to_string(),
        }
    } else {
        ErrorProvider::Http { provider, source: e }
    }
}

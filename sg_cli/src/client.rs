use crate::error::{ErrorCli, Result};
use reqwest::{Client, Response};
use sg_core::server::payload::error_response::ErrorResponse;
use sg_core::server::payload::generate_image_request::GenerateImageRequest;
use sg_core::server::payload::generate_text_request::GenerateTextRequest;
use sg_core::server::payload::normalized_result::NormalizedResult;
use sg_core::server::routes::{BackendApiGenerate, BackendApiHealth};
use std::time::Duration;

const REQUEST_TIMEOUT_SECS: u64 = 120;

pub struct CliClient {
    client: Client,
    base_url_api: String,
}

impl CliClient {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;
        Ok(CliClient {
            client,
            base_url_api: format!("{}{}", base_url.trim_end_matches('/'), "/api"),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url_api, path)
    }

    async fn handle_response(
        &self,
        res: std::result::Result<Response, reqwest::Error>,
    ) -> Result<String> {
        let res = match res {
            Ok(res) => res,
            Err(e) if e.is_connect() => {
                return Err(ErrorCli::ConnectionRefused(self.base_url_api.clone()));
            }
            Err(e) => return Err(ErrorCli::Http(e)),
        };
        let status = res.status();
        let text = res.text().await?;
        if status.is_success() {
            return Ok(text);
        }
        match serde_json::from_str::<ErrorResponse>(&text) {
            Ok(body) => Err(ErrorCli::Backend {
                status: status.as_u16(),
                error: body.error,
                details: body.details,
            }),
            Err(_) => Err(ErrorCli::Backend {
                status: status.as_u16(),
                error: text,
                details: None,
            }),
        }
    }

    fn parse_result(text: &str) -> Result<NormalizedResult> {
        let result = serde_json::from_str::<NormalizedResult>(text)
            .map_err(sg_core::error::ErrorCore::from)?;
        Ok(result)
    }

    pub async fn ping(&self) -> Result<()> {
        let url = self.url(BackendApiHealth::Ping.path().as_str());
        let result = self.client.get(&url).send().await;
        self.handle_response(result).await?;
        Ok(())
    }

    pub async fn generate_text(&self, request: &GenerateTextRequest) -> Result<NormalizedResult> {
        let url = self.url(BackendApiGenerate::Text.path().as_str());
        let result = self.client.post(&url).json(request).send().await;
        Self::parse_result(&self.handle_response(result).await?)
    }

    pub async fn generate_image(&self, request: &GenerateImageRequest) -> Result<NormalizedResult> {
        let url = self.url(BackendApiGenerate::Image.path().as_str());
        let result = self.client.post(&url).json(request).send().await;
        Self::parse_result(&self.handle_response(result).await?)
    }

    pub async fn generate_video(&self) -> Result<NormalizedResult> {
        let url = self.url(BackendApiGenerate::Video.path().as_str());
        let result = self.client.post(&url).send().await;
        Self::parse_result(&self.handle_response(result).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::Json;
    use axum::http::StatusCode;
    use axum::routing::{get, post};
    use serde_json::json;

    async fn spawn_gateway(router: axum::Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_text_and_ping() {
        let router = axum::Router::new()
            .route("/api/ping", get(|| async { StatusCode::OK }))
            .route(
                "/api/generate-text",
                post(|| async { Json(json!({ "text": "- Hello." })) }),
            );
        let client = CliClient::new(&spawn_gateway(router).await).unwrap();

        client.ping().await.unwrap();
        let result = client
            .generate_text(&GenerateTextRequest::for_topic("hello"))
            .await
            .unwrap();
        assert_eq!(result.text.as_deref(), Some("- Hello."));
    }

    #[tokio::test]
    async fn test_backend_error_is_parsed() {
        let router = axum::Router::new().route(
            "/api/generate-image",
            post(|| async {
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({ "error": "Image generation failed", "details": "Demo image not found" })),
                )
            }),
        );
        let client = CliClient::new(&spawn_gateway(router).await).unwrap();

        let err = client
            .generate_image(&GenerateImageRequest::new("a fox"))
            .await
            .unwrap_err();
        assert_eq!(
            err.to_string(),
            "Server answered 500: Image generation failed (Demo image not found)"
        );
    }

    #[tokio::test]
    async fn test_server_down() {
        let client = CliClient::new("http://127.0.0.1:9").unwrap();
        assert!(matches!(
            client.ping().await.unwrap_err(),
            ErrorCli::ConnectionRefused(_)
        ));
    }
}

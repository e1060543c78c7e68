use crate::application::generation::service::GenerationService;
use crate::config::GatewayConfig;
use crate::error::{ErrorBackend, Result};
use crate::interfaces::{generate, ping};
use crate::server::app_state::AppState;
use axum::extract::DefaultBodyLimit;
use axum::handler::HandlerWithoutStateExt;
use http::StatusCode;
use reqwest::Client;
use sg_core::server::default_config::{
    DEFAULT_SERVER_BACKEND_PROTOCOL, DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS, MAX_REQUEST_BODY_BYTES,
};
use sg_core::server::routes::all_backend_api_paths;
use std::sync::Arc;
use std::time::Duration;
use tower_http::services::ServeDir;
use tower_http::trace::{
    DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer,
};
use tracing::{Level, error, info};

/// Simple fallback handler for unmatched routes.
async fn fallback() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "Not Found")
}

/// Shared outbound client. Every upstream call is bounded by the configured
/// timeout.
pub fn build_http_client(config: &GatewayConfig) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.upstream_timeout)
        .connect_timeout(Duration::from_secs(DEFAULT_UPSTREAM_CONNECT_TIMEOUT_SECS))
        .build()?;
    Ok(client)
}

/// Builds the full router: `/api` routes, static files for everything else,
/// request tracing and the body size limit.
pub fn build_router(app_state: Arc<AppState>) -> axum::Router {
    let routes_api = axum::Router::new()
        .merge(generate::route::routes())
        .merge(ping::route::routes())
        .with_state(app_state.clone());

    let static_files =
        ServeDir::new(&app_state.config.static_dir).not_found_service(fallback.into_service());

    axum::Router::new()
        .nest("/api", routes_api)
        .fallback_service(static_files)
        .layer(DefaultBodyLimit::max(MAX_REQUEST_BODY_BYTES))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
                .on_failure(DefaultOnFailure::new().level(Level::ERROR)),
        )
}

/// Starts the gateway.
///
/// # Arguments
/// * `config` - Settings read once at startup; shared read-only by every request.
///
/// # Returns
/// * `Result<()>` - `Ok` when the server stops cleanly, an `ErrorBackend` if it cannot bind or serve.
#[tokio::main]
pub async fn http_server_backend(config: GatewayConfig) -> Result<()> {
    let client = build_http_client(&config)?;
    let service_generation = GenerationService::from_config(&config, client);
    info!(
        "Text generation served by the {} provider",
        service_generation.text_provider_kind()
    );
    let app_state = Arc::new(AppState::new(Arc::new(config), service_generation));

    for path in all_backend_api_paths() {
        info!("Route {path}");
    }
    let router = build_router(app_state.clone());

    let host = &app_state.config.host;
    let port = app_state.config.port;
    let listener = match tokio::net::TcpListener::bind(format!("{host}:{port}")).await {
        Ok(listener) => {
            info!("Starting HTTP server on {DEFAULT_SERVER_BACKEND_PROTOCOL}://{host}:{port}");
            listener
        }
        Err(err) => {
            error!("Failed to bind to {host}:{port}. {}", err);
            return Err(ErrorBackend::from(err));
        }
    };
    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::test_upstream::spawn_upstream;
    use axum::Json;
    use axum::body::Body;
    use axum::extract::State;
    use axum::http::Request;
    use axum::routing::{get, post};
    use serde_json::{Value, json};
    use std::collections::HashMap;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tempfile::TempDir;
    use tower::ServiceExt;

    struct TestApp {
        router: axum::Router,
        _dir: TempDir,
    }

    fn app_with(pairs: &[(&str, String)]) -> TestApp {
        let dir = tempfile::tempdir().unwrap();
        let mut env: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect();
        let root = dir.path().display().to_string();
        env.entry("STATIC_DIR".into()).or_insert_with(|| root.clone());
        env.entry("ASSETS_DIR".into()).or_insert(root);
        env.entry("LOCAL_INFERENCE_URL".into())
            .or_insert_with(|| "http://127.0.0.1:9/v1".into());

        let config = GatewayConfig::from_lookup(|key| env.get(key).cloned()).unwrap();
        let client = build_http_client(&config).unwrap();
        let service = GenerationService::from_config(&config, client);
        let state = Arc::new(AppState::new(Arc::new(config), service));
        TestApp {
            router: build_router(state),
            _dir: dir,
        }
    }

    async fn call(router: axum::Router, method: &str, uri: &str, body: Option<&str>) -> (StatusCode, String) {
        let mut request = Request::builder().method(method).uri(uri);
        if body.is_some() {
            request = request.header("content-type", "application/json");
        }
        let request = request
            .body(body.map(|b| Body::from(b.to_string())).unwrap_or_else(Body::empty))
            .unwrap();
        let response = router.oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        (status, String::from_utf8(bytes.to_vec()).unwrap())
    }

    fn parse(body: &str) -> Value {
        serde_json::from_str(body).unwrap()
    }

    /// Local inference mock that counts every request it receives.
    async fn spawn_local(models: Value) -> (String, Arc<AtomicUsize>) {
        let hits = Arc::new(AtomicUsize::new(0));
        let router = axum::Router::new()
            .route(
                "/v1/models",
                get(move |State(hits): State<Arc<AtomicUsize>>| {
                    let models = models.clone();
                    async move {
                        hits.fetch_add(1, Ordering::SeqCst);
                        Json(models)
                    }
                }),
            )
            .route(
                "/v1/chat/completions",
                post(|State(hits): State<Arc<AtomicUsize>>| async move {
                    hits.fetch_add(1, Ordering::SeqCst);
                    Json(json!({ "choices": [ { "message": { "content": "Local post." } } ] }))
                }),
            )
            .with_state(hits.clone());
        (format!("{}/v1", spawn_upstream(router).await), hits)
    }

    #[tokio::test]
    async fn test_ping() {
        let app = app_with(&[]);
        let (status, body) = call(app.router, "GET", "/api/ping", None).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let app = app_with(&[]);
        let (status, body) = call(app.router, "GET", "/nothing-here.txt", None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, "Not Found");
    }

    #[tokio::test]
    async fn test_static_files_are_served() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("index.html"), "<h1>hi</h1>").unwrap();
        let app = app_with(&[("STATIC_DIR", dir.path().display().to_string())]);
        let (status, body) = call(app.router, "GET", "/index.html", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "<h1>hi</h1>");
    }

    #[tokio::test]
    async fn test_image_requires_prompt() {
        for body in [r#"{}"#, r#"{"prompt":""}"#, r#"{"prompt":"   "}"#] {
            let app = app_with(&[]);
            let (status, body) = call(app.router, "POST", "/api/generate-image", Some(body)).await;
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(parse(&body), json!({ "error": "Prompt is required" }));
        }
    }

    #[tokio::test]
    async fn test_demo_image_missing_is_server_error() {
        let app = app_with(&[]);
        let (status, body) =
            call(app.router, "POST", "/api/generate-image", Some(r#"{"prompt":"a fox"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse(&body);
        assert_eq!(body["error"], "Image generation failed");
        assert!(body["details"].as_str().unwrap().starts_with("Demo image not found"));
    }

    #[tokio::test]
    async fn test_video_without_body_is_idempotent() {
        let app = app_with(&[]);
        let (status, first) = call(app.router.clone(), "POST", "/api/generate-video", None).await;
        let (_, second) = call(app.router, "POST", "/api/generate-video", None).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(first, second);
        assert_eq!(
            parse(&first),
            json!({ "video_url": "https://interactive-examples.mdn.mozilla.net/media/cc0-videos/flower.mp4" })
        );
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let app = app_with(&[]);
        let (status, body) = call(app.router, "POST", "/api/generate-text", Some("{topic")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(parse(&body)["error"].is_string());
    }

    #[tokio::test]
    async fn test_local_without_models_is_server_error() {
        let (url, hits) = spawn_local(json!({ "data": [] })).await;
        let app = app_with(&[("LOCAL_INFERENCE_URL", url)]);
        let (status, body) =
            call(app.router, "POST", "/api/generate-text", Some(r#"{"topic":"AI"}"#)).await;

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        let body = parse(&body);
        assert_eq!(body["error"], "Text generation failed");
        assert!(body["details"].as_str().unwrap().contains("No models available"));
        assert!(body.get("text").is_none());
        // the model listing only, never a completion
        assert_eq!(hits.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn test_local_text_is_formatted() {
        let (url, hits) = spawn_local(json!({ "data": [ { "id": "m" } ] })).await;
        let app = app_with(&[("LOCAL_INFERENCE_URL", url)]);
        let (status, body) = call(
            app.router,
            "POST",
            "/api/generate-text",
            Some(r#"{"topic":"AI","keywords":"ai,tools"}"#),
        )
        .await;

        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            parse(&body),
            json!({ "text": "Your social media post:\n\n- Local post.\n\n#ai #tools" })
        );
        assert_eq!(hits.load(Ordering::SeqCst), 2);
    }

    #[tokio::test]
    async fn test_hosted_key_never_touches_local() {
        let (local_url, local_hits) = spawn_local(json!({ "data": [ { "id": "m" } ] })).await;
        let hosted = axum::Router::new().route(
            "/chat/completions",
            post(|| async {
                Json(json!({ "choices": [ { "message": { "content": "Hosted post." } } ] }))
            }),
        );
        let hosted_url = spawn_upstream(hosted).await;
        let app = app_with(&[
            ("LOCAL_INFERENCE_URL", local_url),
            ("HOSTED_API_KEY", "sk-test".into()),
            ("HOSTED_API_BASE_URL", hosted_url),
        ]);

        let (status, body) =
            call(app.router, "POST", "/api/generate-text", Some(r#"{"topic":"AI"}"#)).await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(
            parse(&body)["text"],
            "Your social media post:\n\n- Hosted post."
        );
        assert_eq!(local_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_hosted_failure_does_not_fall_back() {
        let (local_url, local_hits) = spawn_local(json!({ "data": [ { "id": "m" } ] })).await;
        let app = app_with(&[
            ("LOCAL_INFERENCE_URL", local_url),
            ("HOSTED_API_KEY", "sk-test".into()),
            ("HOSTED_API_BASE_URL", "http://127.0.0.1:9".into()),
        ]);

        let (status, body) =
            call(app.router, "POST", "/api/generate-text", Some(r#"{"topic":"AI"}"#)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(parse(&body)["error"], "Text generation failed");
        assert_eq!(local_hits.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_missing_topic_is_bad_request() {
        let app = app_with(&[]);
        let (status, body) = call(app.router, "POST", "/api/generate-text", Some("{}")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(parse(&body), json!({ "error": "Topic is required" }));
    }
}

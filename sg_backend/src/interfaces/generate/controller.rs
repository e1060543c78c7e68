use crate::error::ResultAPI;
use crate::server::app_state::AppState;
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::response::IntoResponse;
use sg_core::server::payload::generate_image_request::GenerateImageRequest;
use sg_core::server::payload::generate_text_request::GenerateTextRequest;
use std::sync::Arc;

pub async fn generate_text_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<GenerateTextRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let result = state.service_generation.generate_text(req).await?;
    Ok(Json(result).into_response())
}

pub async fn generate_image_handler(
    State(state): State<Arc<AppState>>,
    req: std::result::Result<Json<GenerateImageRequest>, JsonRejection>,
) -> ResultAPI {
    let req = req?.0;
    let result = state.service_generation.generate_image(req).await?;
    Ok(Json(result).into_response())
}

/// The request body, if any, is ignored.
pub async fn generate_video_handler(State(state): State<Arc<AppState>>) -> ResultAPI {
    let result = state.service_generation.generate_video().await;
    Ok(Json(result).into_response())
}

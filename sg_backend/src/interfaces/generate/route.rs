use crate::interfaces::generate::controller::{
    generate_image_handler, generate_text_handler, generate_video_handler,
};
use crate::server::app_state::AppState;
use axum::routing::post;
use sg_core::server::routes::BackendApiGenerate;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route(
            BackendApiGenerate::Text.path().as_str(),
            post(generate_text_handler),
        )
        .route(
            BackendApiGenerate::Image.path().as_str(),
            post(generate_image_handler),
        )
        .route(
            BackendApiGenerate::Video.path().as_str(),
            post(generate_video_handler),
        )
}

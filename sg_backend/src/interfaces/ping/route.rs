use crate::interfaces::ping::controller::ping;
use crate::server::app_state::AppState;
use axum::routing::get;
use sg_core::server::routes::BackendApiHealth;
use std::sync::Arc;

pub fn routes() -> axum::Router<Arc<AppState>> {
    axum::Router::new().route(BackendApiHealth::Ping.path().as_str(), get(ping))
}

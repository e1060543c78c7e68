use crate::application::generation::service::GenerationService;
use crate::config::GatewayConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GatewayConfig>,
    pub service_generation: Arc<GenerationService>,
}

impl AppState {
    pub fn new(config: Arc<GatewayConfig>, service_generation: GenerationService) -> Self {
        AppState {
            config,
            service_generation: Arc::new(service_generation),
        }
    }
}

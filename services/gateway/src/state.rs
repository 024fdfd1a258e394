use crate::config::GatewayConfig;
use risk_engine::RiskEngine;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub engine: RiskEngine,
    pub config: Arc<GatewayConfig>,
}

impl AppState {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            engine: RiskEngine::new(),
            config: Arc::new(config),
        }
    }
}

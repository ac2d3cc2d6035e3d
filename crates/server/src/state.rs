//! Shared application state

use std::sync::Arc;

use tourbot_config::Settings;
use tourbot_engine::ChatEngine;

/// State handed to every request handler
#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<ChatEngine>,
    pub settings: Arc<Settings>,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            engine: Arc::new(ChatEngine::new(&settings)),
            settings: Arc::new(settings),
        }
    }
}

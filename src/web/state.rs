use crate::services::PostStore;
use crate::Config;
use std::sync::Arc;

pub struct AppState {
    pub config: Config,
    pub store: Arc<dyn PostStore>,
}

impl AppState {
    pub fn new(config: Config, store: Arc<dyn PostStore>) -> Self {
        Self { config, store }
    }
}

use std::sync::Arc;

use media_status::StatusRegistry;

#[derive(Clone)]
pub struct AppState {
    pub registry: Arc<StatusRegistry>
}

impl AppState {
    pub fn new(registry: StatusRegistry) -> Self {
        Self {
            registry: Arc::new(registry)
        }
    }
}

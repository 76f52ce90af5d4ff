use crate::modules::events::adapters::outbound::event_store::EventStore;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub events: Arc<dyn EventStore>,
}

impl AppState {
    pub fn new(events: Arc<dyn EventStore>) -> Self {
        Self { events }
    }
}

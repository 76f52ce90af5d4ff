// Port for the event collection.
//
// Handlers only ever reach the collection through this trait. Every lookup acts
// on the first element whose ID matches; IDs are not required to be unique.

use async_trait::async_trait;
use thiserror::Error;

use crate::modules::events::core::event::{Event, EventUpdate};

#[derive(Debug, Error)]
pub enum EventStoreError {
    #[error("backend error: {0}")]
    Backend(String),
}

#[async_trait]
pub trait EventStore: Send + Sync {
    /// All events in insertion order.
    async fn list(&self) -> Result<Vec<Event>, EventStoreError>;

    async fn find(&self, id: &str) -> Result<Option<Event>, EventStoreError>;

    async fn append(&self, event: Event) -> Result<(), EventStoreError>;

    /// Replaces Title and Description of the first match in place and returns the updated record.
    async fn update_fields(
        &self,
        id: &str,
        update: EventUpdate,
    ) -> Result<Option<Event>, EventStoreError>;

    /// Removes the first match, keeping the order of the rest. `false` when nothing matched.
    async fn remove(&self, id: &str) -> Result<bool, EventStoreError>;
}

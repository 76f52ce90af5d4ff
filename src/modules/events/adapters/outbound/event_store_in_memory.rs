// In memory implementation of the EventStore port.
//
// Purpose
// - The only store the service runs with; nothing survives a restart.
//
// Responsibilities
// - Keep events in insertion order in a single Vec.
// - Serialize access with one RwLock so each operation is atomic.

use crate::modules::events::adapters::outbound::event_store::{EventStore, EventStoreError};
use crate::modules::events::core::event::{Event, EventUpdate, seed_events};
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryEventStore {
    inner: RwLock<Vec<Event>>,
    is_offline: bool,
}

impl InMemoryEventStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the two events the service starts with.
    pub fn seeded() -> Self {
        Self::with_events(seed_events())
    }

    pub fn with_events(events: Vec<Event>) -> Self {
        Self {
            inner: RwLock::new(events),
            is_offline: false,
        }
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self) -> Result<(), EventStoreError> {
        if self.is_offline {
            return Err(EventStoreError::Backend("Event store offline".into()));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl EventStore for InMemoryEventStore {
    async fn list(&self) -> Result<Vec<Event>, EventStoreError> {
        self.ensure_online()?;
        Ok(self.inner.read().await.clone())
    }

    async fn find(&self, id: &str) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let guard = self.inner.read().await;
        Ok(guard.iter().find(|event| event.id == id).cloned())
    }

    async fn append(&self, event: Event) -> Result<(), EventStoreError> {
        self.ensure_online()?;
        self.inner.write().await.push(event);
        Ok(())
    }

    async fn update_fields(
        &self,
        id: &str,
        update: EventUpdate,
    ) -> Result<Option<Event>, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        Ok(guard.iter_mut().find(|event| event.id == id).map(|event| {
            event.title = update.title;
            event.description = update.description;
            event.clone()
        }))
    }

    async fn remove(&self, id: &str) -> Result<bool, EventStoreError> {
        self.ensure_online()?;
        let mut guard = self.inner.write().await;
        match guard.iter().position(|event| event.id == id) {
            Some(index) => {
                guard.remove(index);
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

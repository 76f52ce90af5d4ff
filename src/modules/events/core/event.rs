use serde::Serialize;

/// The single domain record. Field order here is the wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Event {
    #[serde(rename = "ID")]
    pub id: String,
    #[serde(rename = "Title")]
    pub title: String,
    #[serde(rename = "Description")]
    pub description: String,
}

impl Event {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Replacement fields accepted by an update. The ID is never part of it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EventUpdate {
    pub title: String,
    pub description: String,
}

pub fn seed_events() -> Vec<Event> {
    vec![
        Event::new("1", "Introduction to Golang", "intro stuff"),
        Event::new("2", "A nice title", "Some description goes here"),
    ]
}

// JSON codec for events.
//
// Encoding is compact with the field order ID, Title, Description.
// Decoding reads the body as a JSON object and picks the known keys out of it:
// unknown keys are ignored, a repeated key keeps its last value, and a missing,
// null or non-string value leaves that one field empty. Only a body that is not
// JSON, or not a JSON object, is malformed.

use serde_json::{Map, Value};
use thiserror::Error;

use crate::modules::events::core::event::{Event, EventUpdate};

const ID: &str = "ID";
const TITLE: &str = "Title";
const DESCRIPTION: &str = "Description";

#[derive(Debug, Error)]
pub enum CodecError {
    #[error("malformed event body: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("event body is not a JSON object")]
    NotAnObject,
}

pub fn encode_event(event: &Event) -> String {
    // A struct of three strings cannot fail to serialize.
    serde_json::to_string(event).unwrap_or_default()
}

pub fn encode_events(events: &[Event]) -> String {
    serde_json::to_string(events).unwrap_or_else(|_| "[]".to_string())
}

pub fn decode_event(body: &[u8]) -> Result<Event, CodecError> {
    let object = decode_object(body)?;
    Ok(Event {
        id: string_field(&object, ID),
        title: string_field(&object, TITLE),
        description: string_field(&object, DESCRIPTION),
    })
}

pub fn decode_event_update(body: &[u8]) -> Result<EventUpdate, CodecError> {
    let object = decode_object(body)?;
    Ok(EventUpdate {
        title: string_field(&object, TITLE),
        description: string_field(&object, DESCRIPTION),
    })
}

fn decode_object(body: &[u8]) -> Result<Map<String, Value>, CodecError> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Object(object) => Ok(object),
        _ => Err(CodecError::NotAnObject),
    }
}

fn string_field(object: &Map<String, Value>, key: &str) -> String {
    match object.get(key) {
        Some(Value::String(value)) => value.clone(),
        _ => String::new(),
    }
}

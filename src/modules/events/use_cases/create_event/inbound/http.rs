use axum::{body::Bytes, extract::State, http::StatusCode, response::Response};

use crate::modules::events::core::codec::{decode_event, encode_event};
use crate::modules::events::core::event::Event;
use crate::shared::http::{prompted_json_response, store_failure};
use crate::shell::state::AppState;

pub const DECODE_PROMPT: &str = " Enter event and description";

/// An undecodable body is not rejected: the prompt is written, an empty event
/// is appended and the request still answers 201.
pub async fn handle(State(state): State<AppState>, body: Bytes) -> Response {
    let (event, prompt) = match decode_event(&body) {
        Ok(event) => (event, None),
        Err(err) => {
            tracing::warn!(error = %err, "create body could not be decoded");
            (Event::default(), Some(DECODE_PROMPT))
        }
    };

    if let Err(err) = state.events.append(event.clone()).await {
        return store_failure(err);
    }
    tracing::info!(id = %event.id, "event created");

    prompted_json_response(StatusCode::CREATED, prompt, encode_event(&event))
}

// Response helpers shared by the inbound HTTP adapters.

use axum::{
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::modules::events::adapters::outbound::event_store::EventStoreError;

const JSON: &str = "application/json";
const TEXT: &str = "text/plain; charset=utf-8";

pub fn json_response(status: StatusCode, body: String) -> Response {
    (status, [(header::CONTENT_TYPE, JSON)], body).into_response()
}

/// Body that opens with a plain-text hint for a body that could not be decoded,
/// followed by the JSON payload. Without a prompt this is a plain JSON response.
pub fn prompted_json_response(status: StatusCode, prompt: Option<&str>, body: String) -> Response {
    match prompt {
        None => json_response(status, body),
        Some(prompt) => {
            (status, [(header::CONTENT_TYPE, TEXT)], format!("{prompt}{body}")).into_response()
        }
    }
}

pub fn store_failure(err: EventStoreError) -> Response {
    tracing::error!(error = %err, "event store failure");
    StatusCode::INTERNAL_SERVER_ERROR.into_response()
}

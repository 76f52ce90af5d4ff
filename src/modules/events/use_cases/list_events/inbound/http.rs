use axum::{extract::State, http::StatusCode, response::Response};

use crate::modules::events::core::codec::encode_events;
use crate::shared::http::{json_response, store_failure};
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>) -> Response {
    match state.events.list().await {
        Ok(events) => json_response(StatusCode::OK, encode_events(&events)),
        Err(err) => store_failure(err),
    }
}

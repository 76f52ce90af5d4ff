use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::core::codec::encode_event;
use crate::shared::http::{json_response, store_failure};
use crate::shell::state::AppState;

/// A miss is answered with an empty 200, not a 404.
pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.events.find(&id).await {
        Ok(Some(event)) => json_response(StatusCode::OK, encode_event(&event)),
        Ok(None) => {
            tracing::debug!(%id, "event not found");
            StatusCode::OK.into_response()
        }
        Err(err) => store_failure(err),
    }
}

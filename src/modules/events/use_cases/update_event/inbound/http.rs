use axum::{
    body::Bytes,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::modules::events::core::codec::{decode_event_update, encode_event};
use crate::modules::events::core::event::EventUpdate;
use crate::shared::http::{prompted_json_response, store_failure};
use crate::shell::state::AppState;

pub const DECODE_PROMPT: &str =
    "Kindly enter data with the event title and description only in order to update";

/// Only Title and Description change. An undecodable body blanks both after
/// writing the prompt. A miss answers 200 with nothing but the prompt, if any.
pub async fn handle(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Bytes,
) -> Response {
    let (update, prompt) = match decode_event_update(&body) {
        Ok(update) => (update, None),
        Err(err) => {
            tracing::warn!(%id, error = %err, "update body could not be decoded");
            (EventUpdate::default(), Some(DECODE_PROMPT))
        }
    };

    match state.events.update_fields(&id, update).await {
        Ok(Some(event)) => {
            tracing::info!(%id, "event updated");
            prompted_json_response(StatusCode::OK, prompt, encode_event(&event))
        }
        Ok(None) => {
            tracing::debug!(%id, "event to update not found");
            match prompt {
                Some(prompt) => (StatusCode::OK, prompt).into_response(),
                None => StatusCode::OK.into_response(),
            }
        }
        Err(err) => store_failure(err),
    }
}

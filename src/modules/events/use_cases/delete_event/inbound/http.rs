use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::shared::http::store_failure;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    match state.events.remove(&id).await {
        Ok(true) => {
            tracing::info!(%id, "event deleted");
            (
                StatusCode::OK,
                format!("The event with ID {id} has been deleted successfully"),
            )
                .into_response()
        }
        Ok(false) => {
            tracing::debug!(%id, "event to delete not found");
            StatusCode::OK.into_response()
        }
        Err(err) => store_failure(err),
    }
}

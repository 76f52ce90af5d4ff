use axum::{
    Router,
    extract::DefaultBodyLimit,
    routing::{any, get, post},
};
use tower_http::{normalize_path::NormalizePath, trace::TraceLayer};

use crate::modules::events::use_cases::create_event::inbound::http as create_http;
use crate::modules::events::use_cases::delete_event::inbound::http as delete_http;
use crate::modules::events::use_cases::get_event::inbound::http as get_http;
use crate::modules::events::use_cases::home::inbound::http as home_http;
use crate::modules::events::use_cases::list_events::inbound::http as list_http;
use crate::modules::events::use_cases::update_event::inbound::http as update_http;
use crate::shell::state::AppState;

/// Bodies are read whole; there is no size cap.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", any(home_http::handle))
        .route("/event", post(create_http::handle))
        .route("/events", get(list_http::handle))
        .route(
            "/event/{id}",
            get(get_http::handle)
                .patch(update_http::handle)
                .delete(delete_http::handle),
        )
        .layer(DefaultBodyLimit::disable())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// The router with trailing slashes trimmed before routing, so `/events/` is `/events`.
pub fn app(state: AppState) -> NormalizePath<Router> {
    NormalizePath::trim_trailing_slash(router(state))
}

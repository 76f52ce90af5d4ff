use anyhow::Context;
use axum::{ServiceExt, extract::Request};
use std::sync::Arc;

use events_api::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use events_api::shell::config::AppConfig;
use events_api::shell::http::app;
use events_api::shell::state::AppState;
use events_api::shell::telemetry;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = AppConfig::from_env().context("failed to load configuration")?;
    telemetry::init(&config.log_filter);

    let state = AppState::new(Arc::new(InMemoryEventStore::seeded()));

    let addr = config.addr();
    let listener = match tokio::net::TcpListener::bind(&addr).await {
        Ok(listener) => listener,
        Err(err) => {
            tracing::error!(%addr, error = %err, "failed to bind listener");
            return Err(err).with_context(|| format!("failed to bind {addr}"));
        }
    };

    tracing::info!("Webserver running on http://{}", addr);
    axum::serve(listener, ServiceExt::<Request>::into_make_service(app(state))).await?;
    Ok(())
}

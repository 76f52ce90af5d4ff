// Composition root for the events service.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the in-memory event store.
// - Wire the store into the HTTP routes.

pub mod config;
pub mod http;
pub mod state;
pub mod telemetry;

use crate::modules::events::adapters::outbound::event_store_in_memory::InMemoryEventStore;
use crate::shell::http::app;
use crate::shell::state::AppState;
use crate::tests::fixtures::events::EventBuilder;
use axum::body::Body;
use axum::http::{Method, Request, StatusCode};
use http_body_util::BodyExt;
use rstest::{fixture, rstest};
use std::sync::Arc;
use tower::ServiceExt;

const SEEDED: &str = r#"[{"ID":"1","Title":"Introduction to Golang","Description":"intro stuff"},{"ID":"2","Title":"A nice title","Description":"Some description goes here"}]"#;

#[fixture]
fn state() -> AppState {
    AppState::new(Arc::new(InMemoryEventStore::seeded()))
}

async fn send(
    state: &AppState,
    method: Method,
    uri: &str,
    body: impl Into<Body>,
) -> (StatusCode, String) {
    let response = app(state.clone())
        .oneshot(
            Request::builder()
                .method(method)
                .uri(uri)
                .header("content-type", "application/json")
                .body(body.into())
                .unwrap(),
        )
        .await
        .unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, String::from_utf8(bytes.to_vec()).unwrap())
}

#[rstest]
#[tokio::test]
async fn creates_lists_and_deletes_an_event(state: AppState) {
    let created = EventBuilder::new()
        .id("666")
        .title("Evil Number")
        .description("NUmber of the beast")
        .build_json();
    assert_eq!(
        created,
        r#"{"ID":"666","Title":"Evil Number","Description":"NUmber of the beast"}"#
    );

    let (status, body) = send(&state, Method::POST, "/event", created.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, created);

    let (status, body) = send(&state, Method::GET, "/events", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    let expected = format!("{},{}]", SEEDED.trim_end_matches(']'), created);
    assert_eq!(body, expected);

    let (status, body) = send(&state, Method::DELETE, "/event/666", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "The event with ID 666 has been deleted successfully");

    let (status, body) = send(&state, Method::GET, "/events", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, SEEDED);
}

#[rstest]
#[tokio::test]
async fn updates_keep_the_id_and_position(state: AppState) {
    let (status, body) = send(
        &state,
        Method::PATCH,
        "/event/1",
        r#"{"Title":"Introduction to Rust","Description":"borrowing"}"#,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(
        body,
        r#"{"ID":"1","Title":"Introduction to Rust","Description":"borrowing"}"#
    );

    let (_, body) = send(&state, Method::GET, "/events", Body::empty()).await;
    let listed: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(listed[0]["ID"], "1");
    assert_eq!(listed[0]["Title"], "Introduction to Rust");
    assert_eq!(listed[1]["ID"], "2");

    let (_, body) = send(&state, Method::GET, "/event/1", Body::empty()).await;
    assert_eq!(
        body,
        r#"{"ID":"1","Title":"Introduction to Rust","Description":"borrowing"}"#
    );
}

#[rstest]
#[tokio::test]
async fn repeated_listing_is_stable(state: AppState) {
    let (_, first) = send(&state, Method::GET, "/events", Body::empty()).await;
    let (_, second) = send(&state, Method::GET, "/events", Body::empty()).await;
    assert_eq!(first, SEEDED);
    assert_eq!(first, second);
}

#[rstest]
#[tokio::test]
async fn misses_answer_200_with_an_empty_body(state: AppState) {
    for method in [Method::GET, Method::DELETE] {
        let (status, body) = send(&state, method, "/event/404", Body::empty()).await;
        assert_eq!(status, StatusCode::OK);
        assert!(body.is_empty());
    }
    let (status, body) = send(&state, Method::PATCH, "/event/404", r#"{"Title":"t"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.is_empty());

    let (_, body) = send(&state, Method::GET, "/events", Body::empty()).await;
    assert_eq!(body, SEEDED);
}

#[rstest]
#[case(Method::GET, "/events/")]
#[case(Method::GET, "/event/1/")]
#[tokio::test]
async fn trailing_slashes_are_ignored(
    state: AppState,
    #[case] method: Method,
    #[case] uri: &str,
) {
    let (status, body) = send(&state, method, uri, Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert!(!body.is_empty());
}

#[rstest]
#[case(Method::PUT, "/events", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::GET, "/event", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::POST, "/event/1", StatusCode::METHOD_NOT_ALLOWED)]
#[case(Method::GET, "/nowhere", StatusCode::NOT_FOUND)]
#[tokio::test]
async fn unrouted_requests_are_rejected_by_the_router(
    state: AppState,
    #[case] method: Method,
    #[case] uri: &str,
    #[case] expected: StatusCode,
) {
    let (status, _) = send(&state, method, uri, Body::empty()).await;
    assert_eq!(status, expected);
}

#[rstest]
#[tokio::test]
async fn bodies_over_two_mebibytes_are_accepted(state: AppState) {
    let title = "x".repeat(3 * 1024 * 1024);
    let created = EventBuilder::new().id("big").title(title.clone()).build_json();

    let (status, body) = send(&state, Method::POST, "/event", created.clone()).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, created);

    let patch = format!(r#"{{"Title":"{title}","Description":"d"}}"#);
    let (status, body) = send(&state, Method::PATCH, "/event/big", patch).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body.starts_with(r#"{"ID":"big""#));

    let (_, body) = send(&state, Method::GET, "/event/big", Body::empty()).await;
    let fetched: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(fetched["Title"].as_str().map(str::len), Some(title.len()));
    assert_eq!(fetched["Description"], "d");
}

#[rstest]
#[tokio::test]
async fn home_welcomes_any_method(state: AppState) {
    let (status, body) = send(&state, Method::POST, "/", Body::empty()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, "Welcome home!");
}

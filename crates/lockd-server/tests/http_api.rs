use std::sync::Arc;
use std::time::Duration;

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use lockd_engine::LockEngine;

// These exercise the built `Router` directly via `oneshot`, avoiding a
// bound TCP port, mirroring the original HTTP test suite's scenarios
// (double acquire -> 200 NOOP, missing auth -> 401, unknown lock -> 404).
#[path = "../src/auth.rs"]
mod auth;
#[path = "../src/config.rs"]
mod config;
#[path = "../src/http/mod.rs"]
mod http;
#[path = "../src/state.rs"]
mod state;

use config::Config;
use state::AppState;

fn test_state(authentication: Option<&str>) -> AppState {
	let engine = Arc::new(LockEngine::new(Duration::from_millis(20)));
	let mut config = Config::test();
	config.authentication = authentication.map(str::to_string);
	AppState {
		engine,
		credential: config.credential(),
	}
}

async fn body_json(response: axum::response::Response) -> Value {
	let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
	serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn put_then_put_is_idempotent_noop() {
	let state = test_state(None);
	let router = http::router_for_tests(state);

	let body = json!({"priority": 1, "timeout": 1, "type": "exclusive"}).to_string();
	let make_req = || {
		Request::builder()
			.method("PUT")
			.uri("/locks/L/A")
			.header(header::CONTENT_TYPE, "application/json")
			.body(Body::from(body.clone()))
			.unwrap()
	};

	let first = router.clone().oneshot(make_req()).await.unwrap();
	assert_eq!(first.status(), StatusCode::CREATED);

	let second = router.clone().oneshot(make_req()).await.unwrap();
	assert_eq!(second.status(), StatusCode::OK);
}

#[tokio::test]
async fn get_unknown_lock_is_404() {
	let state = test_state(None);
	let router = http::router_for_tests(state);

	let response = router
		.oneshot(Request::builder().uri("/locks/nope").body(Body::empty()).unwrap())
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_authorization_is_401() {
	let state = test_state(Some("alice:hunter2"));
	let router = http::router_for_tests(state);

	let response = router.oneshot(Request::builder().uri("/locks").body(Body::empty()).unwrap()).await.unwrap();
	assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
	assert!(response.headers().contains_key(header::WWW_AUTHENTICATE));
}

#[tokio::test]
async fn correct_authorization_passes_through() {
	let state = test_state(Some("alice:hunter2"));
	let router = http::router_for_tests(state);

	let credential = base64::Engine::encode(&base64::engine::general_purpose::STANDARD, "alice:hunter2");
	let response = router
		.oneshot(
			Request::builder()
				.uri("/locks")
				.header(header::AUTHORIZATION, format!("Basic {credential}"))
				.body(Body::empty())
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn put_missing_body_is_400() {
	let state = test_state(None);
	let router = http::router_for_tests(state);

	let response = router
		.oneshot(
			Request::builder()
				.method("PUT")
				.uri("/locks/L/A")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from("{}"))
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn patch_unknown_client_is_404_with_message_body() {
	let state = test_state(None);
	let router = http::router_for_tests(state);

	let response = router
		.oneshot(
			Request::builder()
				.method("PATCH")
				.uri("/locks/L/nobody")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(json!({"priority": 3}).to_string()))
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(response.status(), StatusCode::NOT_FOUND);
	let body = body_json(response).await;
	assert!(body["message"].as_str().unwrap().contains("no lock"));
}

#[tokio::test]
async fn get_single_after_release_is_empty_array_not_404() {
	let state = test_state(None);
	let router = http::router_for_tests(state);

	let put = router
		.clone()
		.oneshot(
			Request::builder()
				.method("PUT")
				.uri("/locks/L/A")
				.header(header::CONTENT_TYPE, "application/json")
				.body(Body::from(json!({"priority": 1, "timeout": 1, "type": "exclusive"}).to_string()))
				.unwrap(),
		)
		.await
		.unwrap();
	assert_eq!(put.status(), StatusCode::CREATED);

	let delete = router
		.clone()
		.oneshot(Request::builder().method("DELETE").uri("/locks/L/A").body(Body::empty()).unwrap())
		.await
		.unwrap();
	assert_eq!(delete.status(), StatusCode::OK);

	let get_lock = router.clone().oneshot(Request::builder().uri("/locks/L").body(Body::empty()).unwrap()).await.unwrap();
	assert_eq!(get_lock.status(), StatusCode::OK);
	assert_eq!(body_json(get_lock).await, json!([]));

	let get_holder = router.oneshot(Request::builder().uri("/holders/L").body(Body::empty()).unwrap()).await.unwrap();
	assert_eq!(get_holder.status(), StatusCode::OK);
	assert_eq!(body_json(get_holder).await, json!([]));
}

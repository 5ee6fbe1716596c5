use axum::extract::{Request, State};
use axum::http::header::{AUTHORIZATION, WWW_AUTHENTICATE};
use axum::http::{HeaderValue, StatusCode};
use axum::middleware::Next;
use axum::response::{IntoResponse, Response};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::state::AppState;

/// Reject the request with 401 before it ever reaches a handler when a
/// credential is configured and the caller's `Authorization` header doesn't
/// match it. This is the short-circuit the source implementation was
/// missing: `next.run` is only ever called once the check has passed.
pub async fn require_basic_auth(State(state): State<AppState>, request: Request, next: Next) -> Response {
	let Some((user, password)) = &state.credential else {
		return next.run(request).await;
	};

	let authorized = request
		.headers()
		.get(AUTHORIZATION)
		.and_then(|value| value.to_str().ok())
		.and_then(|value| value.strip_prefix("Basic "))
		.and_then(|encoded| BASE64.decode(encoded).ok())
		.and_then(|decoded| String::from_utf8(decoded).ok())
		.is_some_and(|decoded| decoded == format!("{user}:{password}"));

	if authorized {
		next.run(request).await
	} else {
		(StatusCode::UNAUTHORIZED, [(WWW_AUTHENTICATE, HeaderValue::from_static("Basic, charset=\"UTF-8\""))]).into_response()
	}
}

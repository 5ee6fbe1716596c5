use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;

use lockd_engine::EngineError;

use crate::http::error::{Error, Result};
use crate::http::extract::ValidatedJson;
use crate::http::schema::{AcquireBody, MessageBody};
use crate::state::AppState;

/// `PUT /locks/{name}/{client}` — blocks (off the reactor, via
/// `spawn_blocking`) until granted or the caller's timeout elapses.
/// `RepeatedAcquire` is folded into a 200 NOOP rather than propagated as an
/// error: PUT is meant to be safely retryable by a client unsure whether
/// its previous acquire landed.
pub async fn put_lock(
	State(state): State<AppState>,
	Path((name, client)): Path<(String, String)>,
	ValidatedJson(body): ValidatedJson<AcquireBody>,
) -> Result<(StatusCode, Json<MessageBody>)> {
	let engine = state.engine;
	let timeout = Duration::from_secs(body.timeout);

	let outcome = tokio::task::spawn_blocking(move || engine.acquire(&name, &client, body.lock_type, body.priority, timeout))
		.await
		.expect("acquire worker thread panicked");

	match outcome {
		Ok(_request) => Ok((StatusCode::CREATED, Json(MessageBody::new("granted")))),
		Err(EngineError::RepeatedAcquire { .. }) => Ok((StatusCode::OK, Json(MessageBody::new("NOOP: already queued")))),
		Err(other) => Err(Error::Engine(other)),
	}
}

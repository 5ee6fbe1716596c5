use axum::extract::{Path, State};
use axum::Json;

use lockd_engine::{EngineError, LockRequest};

use crate::http::error::{Error, Result};
use crate::state::AppState;

/// `GET /locks/{name}` — the request queue for a single lock, or 404 if
/// the name is unknown. A known lock with an empty queue (e.g. acquired
/// then released) still returns `200 []`.
pub async fn get_lock(State(state): State<AppState>, Path(name): Path<String>) -> Result<Json<Vec<LockRequest>>> {
	let (mut requests, _holders) = state.engine.get_state();
	requests
		.remove(&name)
		.map(Json)
		.ok_or_else(|| Error::Engine(EngineError::NotFound(format!("no lock of name [{name}] found"))))
}

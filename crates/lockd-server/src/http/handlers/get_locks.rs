use axum::extract::State;
use axum::Json;

use lockd_engine::LockRequest;
use std::collections::HashMap;

use crate::state::AppState;

/// `GET /locks` — every lock name with a non-empty request queue.
pub async fn get_locks(State(state): State<AppState>) -> Json<HashMap<String, Vec<LockRequest>>> {
	let (requests, _holders) = state.engine.get_state();
	Json(requests)
}

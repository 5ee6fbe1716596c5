use axum::extract::State;
use axum::Json;

use lockd_engine::LockHold;
use std::collections::HashMap;

use crate::state::AppState;

/// `GET /holders` — every lock name currently held by at least one client.
pub async fn get_holders(State(state): State<AppState>) -> Json<HashMap<String, Vec<LockHold>>> {
	let (_requests, holders) = state.engine.get_state();
	Json(holders)
}

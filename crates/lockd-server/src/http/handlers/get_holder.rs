use axum::extract::{Path, State};
use axum::Json;

use lockd_engine::{EngineError, LockHold};

use crate::http::error::{Error, Result};
use crate::state::AppState;

/// `GET /holders/{name}` — the holder set for a single lock, or 404 if the
/// name is unknown. A known lock with no current holders (e.g. released)
/// still returns `200 []`.
pub async fn get_holder(State(state): State<AppState>, Path(name): Path<String>) -> Result<Json<Vec<LockHold>>> {
	let (_requests, mut holders) = state.engine.get_state();
	holders
		.remove(&name)
		.map(Json)
		.ok_or_else(|| Error::Engine(EngineError::NotFound(format!("lock [{name}] does not exist or is not being held"))))
}

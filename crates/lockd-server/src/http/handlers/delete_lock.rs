use axum::extract::{Path, State};
use axum::Json;

use crate::http::error::Result;
use crate::http::schema::MessageBody;
use crate::state::AppState;

/// `DELETE /locks/{name}/{client}` — not idempotent; a second call reports
/// NotFound (404).
pub async fn delete_lock(State(state): State<AppState>, Path((name, client)): Path<(String, String)>) -> Result<Json<MessageBody>> {
	state.engine.release(&name, &client)?;
	Ok(Json(MessageBody::new(format!("released [{name}] for [{client}]"))))
}

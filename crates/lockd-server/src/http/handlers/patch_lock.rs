use axum::extract::{Path, State};
use axum::Json;

use crate::http::error::Result;
use crate::http::extract::ValidatedJson;
use crate::http::schema::{PatchBody, PatchResponse};
use crate::state::AppState;

/// `PATCH /locks/{name}/{client}` — repositions the client's queued
/// request; holders are unaffected.
pub async fn patch_lock(
	State(state): State<AppState>,
	Path((name, client)): Path<(String, String)>,
	ValidatedJson(body): ValidatedJson<PatchBody>,
) -> Result<Json<PatchResponse>> {
	let old_priority = state.engine.modify_priority(&name, &client, body.priority)?;
	Ok(Json(PatchResponse {
		old_priority,
		message: format!("priority for [{client}] on [{name}] changed to {}", body.priority),
	}))
}

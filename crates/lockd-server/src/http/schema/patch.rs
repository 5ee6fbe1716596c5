use serde::{Deserialize, Serialize};

/// `PATCH /locks/{name}/{client}` body.
#[derive(Debug, Deserialize)]
pub struct PatchBody {
	pub priority: i64,
}

#[derive(Serialize)]
pub struct PatchResponse {
	pub old_priority: i64,
	pub message: String,
}

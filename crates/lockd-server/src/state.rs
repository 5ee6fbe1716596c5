use std::sync::Arc;

use lockd_engine::LockEngine;

#[derive(Clone)]
pub struct AppState {
	pub engine: Arc<LockEngine>,
	pub credential: Option<(String, String)>,
}

use axum::routing::{get, patch};
use axum::Router;

use crate::http::handlers::{delete_lock, get_lock, get_locks, patch_lock, put_lock};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
	Router::new()
		.route("/locks", get(get_locks))
		.route("/locks/:name", get(get_lock))
		.route("/locks/:name/:client", patch(patch_lock).put(put_lock).delete(delete_lock))
}

use axum::routing::get;
use axum::Router;

use crate::http::handlers::{get_holder, get_holders};
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
	Router::new().route("/holders", get(get_holders)).route("/holders/:name", get(get_holder))
}

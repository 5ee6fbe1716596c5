mod auth;
mod config;
mod http;
mod logging;
mod state;

use std::sync::Arc;

use config::Config;
use lockd_engine::LockEngine;
use state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
	let config = Config::parsed();
	logging::init(&config);

	let engine = Arc::new(LockEngine::new(config.interval));
	let state = AppState {
		engine,
		credential: config.credential(),
	};

	http::serve(config, state).await
}

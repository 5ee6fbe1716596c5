use std::net::SocketAddr;

use axum::http::StatusCode;
use axum::middleware::from_fn_with_state;
use axum::Json;
use axum::Router;
use tower::ServiceBuilder;
use tower_http::cors::CorsLayer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::auth::require_basic_auth;
use crate::config::Config;
use crate::http::routes;
use crate::http::schema::MessageBody;
use crate::state::AppState;

const MAX_BODY_BYTES: usize = 64 * 1024;

async fn not_found() -> (StatusCode, Json<MessageBody>) {
	(StatusCode::NOT_FOUND, Json(MessageBody::new("no such route")))
}

fn router(state: AppState) -> Router {
	Router::new()
		.merge(routes::locks::routes())
		.merge(routes::holders::routes())
		.fallback(not_found)
		.layer(
			ServiceBuilder::new()
				.layer(TraceLayer::new_for_http())
				.layer(CorsLayer::permissive())
				.layer(RequestBodyLimitLayer::new(MAX_BODY_BYTES))
				.layer(from_fn_with_state(state.clone(), require_basic_auth)),
		)
		.with_state(state)
}

#[cfg(test)]
#[must_use]
pub fn router_for_tests(state: AppState) -> Router {
	router(state)
}

/// Bind and serve. Plaintext HTTP unless `config.certificate` names a PEM
/// bundle containing both certificate and private key, in which case the
/// listener speaks TLS via `axum-server`'s rustls backend.
pub async fn serve(config: Config, state: AppState) -> anyhow::Result<()> {
	let addr = SocketAddr::from(([0, 0, 0, 0], config.port));
	let app = router(state);

	if let Some(cert_path) = &config.certificate {
		let tls_config = axum_server::tls_rustls::RustlsConfig::from_pem_file(cert_path, cert_path).await?;
		tracing::info!(%addr, cert = %cert_path.display(), "serving lockd over TLS");
		axum_server::bind_rustls(addr, tls_config).serve(app.into_make_service()).await?;
	} else {
		let listener = tokio::net::TcpListener::bind(addr).await?;
		tracing::info!(%addr, "serving lockd");
		axum::serve(listener, app).await?;
	}

	Ok(())
}

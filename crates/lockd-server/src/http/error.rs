use axum::body::Body;
use axum::http::{Response, StatusCode};
use axum::response::IntoResponse;
use axum::Json;
use serde::Serialize;

use lockd_engine::EngineError;

/// Adapter-level error: every engine error kind plus the adapter's own
/// "the request itself was bad" case. Mirrors `nest::http::Error` /
/// `file_host::error::FileHostError` — a `thiserror` enum with its own
/// `status_code` and a JSON `{"message": ...}` body on `IntoResponse`.
#[derive(thiserror::Error, Debug)]
pub enum Error {
	#[error(transparent)]
	Engine(#[from] EngineError),

	#[error("{0}")]
	BadRequest(String),
}

#[derive(Serialize)]
struct ErrorBody {
	message: String,
}

impl Error {
	const fn status_code(&self) -> StatusCode {
		match self {
			Self::Engine(EngineError::RepeatedAcquire { .. }) => StatusCode::CONFLICT,
			Self::Engine(EngineError::NotFound(_)) => StatusCode::NOT_FOUND,
			Self::Engine(EngineError::Timeout { .. }) => StatusCode::REQUEST_TIMEOUT,
			Self::Engine(EngineError::InvalidArgument) => StatusCode::INTERNAL_SERVER_ERROR,
			Self::BadRequest(_) => StatusCode::BAD_REQUEST,
		}
	}
}

impl IntoResponse for Error {
	fn into_response(self) -> Response<Body> {
		if matches!(self, Self::Engine(EngineError::InvalidArgument)) {
			tracing::error!(error = ?self, "unexpected engine failure");
		}

		(self.status_code(), Json(ErrorBody { message: self.to_string() })).into_response()
	}
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

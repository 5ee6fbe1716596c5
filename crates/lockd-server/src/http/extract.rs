use axum::extract::rejection::JsonRejection;
use axum::extract::{FromRequest, Request};
use axum::Json;

use crate::http::error::Error;

/// Thin wrapper around `axum::Json` that turns extraction failures
/// (missing/malformed fields, non-JSON body) into the adapter's own
/// `BadRequest` (400) rather than axum's default 422.
pub struct ValidatedJson<T>(pub T);

impl<S, T> FromRequest<S> for ValidatedJson<T>
where
	Json<T>: FromRequest<S, Rejection = JsonRejection>,
	S: Send + Sync,
{
	type Rejection = Error;

	async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
		let Json(value) = Json::<T>::from_request(req, state).await.map_err(|rejection| Error::BadRequest(rejection.body_text()))?;
		Ok(Self(value))
	}
}

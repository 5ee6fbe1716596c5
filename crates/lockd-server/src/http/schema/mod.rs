mod acquire;
mod patch;

pub use acquire::AcquireBody;
pub use patch::{PatchBody, PatchResponse};

use serde::Serialize;

#[derive(Serialize)]
pub struct MessageBody {
	pub message: String,
}

impl MessageBody {
	pub fn new(message: impl Into<String>) -> Self {
		Self { message: message.into() }
	}
}

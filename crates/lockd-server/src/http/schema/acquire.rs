use lockd_engine::LockType;
use serde::Deserialize;

/// `PUT /locks/{name}/{client}` body. `lock_type` accepts either wire name
/// ("type" in the short-form PUT body, "lock_type" in the fuller request
/// representation described alongside GET responses).
#[derive(Debug, Deserialize)]
pub struct AcquireBody {
	pub priority: i64,
	#[serde(default = "default_timeout")]
	pub timeout: u64,
	#[serde(rename = "type", alias = "lock_type")]
	pub lock_type: LockType,
}

const fn default_timeout() -> u64 {
	10
}

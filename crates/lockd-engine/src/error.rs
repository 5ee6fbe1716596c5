#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
	#[error("acquire request on [{name}] by [{client}] already exists")]
	RepeatedAcquire { name: String, client: String },

	#[error("{0}")]
	NotFound(String),

	#[error("{client} request on lock {name} exceeded timeout of {timeout_secs}s")]
	Timeout { name: String, client: String, timeout_secs: u64 },

	#[error("unknown lock type")]
	InvalidArgument,
}

pub type Result<T, E = EngineError> = std::result::Result<T, E>;

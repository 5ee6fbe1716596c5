//! In-memory, thread-safe lock arbitration engine: request queues, holder
//! sets, grantability rules, blocking acquire with per-caller timeouts, and
//! mid-queue priority mutation. Transport-agnostic — nothing here knows
//! about HTTP, JSON, or the CLI; see `lockd-server` for that.

mod engine;
mod error;
mod types;

pub use engine::LockEngine;
pub use error::{EngineError, Result};
pub use types::{LockHold, LockRequest, LockType};

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Two-member totally ordered lock mode. Exclusive is the minimum rank;
/// adding a finer-grained mode is a matter of inserting a variant at the
/// right rank, nothing else in the engine depends on there being exactly two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LockType {
	Exclusive,
	Shared,
}

impl LockType {
	/// Lower rank beats higher rank. No `lock_type` has a rank lower than
	/// `Exclusive`.
	#[must_use]
	pub const fn rank(self) -> u8 {
		match self {
			Self::Exclusive => 0,
			Self::Shared => 1,
		}
	}
}

/// A pending or active queue entry for one `(lock name, client)` pair.
///
/// Field declaration order is load-bearing: the derived `Ord` compares
/// fields in order, which is exactly the `(priority, request_timestamp,
/// lock_type, client)` composite sort key the engine's invariants require.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LockRequest {
	pub priority: i64,
	pub request_timestamp: DateTime<FixedOffset>,
	pub lock_type: LockType,
	pub client: String,
}

/// An active grant. Field order mirrors the source's `(lock_type, client,
/// acquire_timestamp)` tuple so holder lists stay deterministically ordered
/// too, even though no invariant depends on holder order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct LockHold {
	pub lock_type: LockType,
	pub client: String,
	pub acquire_timestamp: DateTime<FixedOffset>,
}

pub(crate) fn now() -> DateTime<FixedOffset> {
	chrono::Local::now().fixed_offset()
}

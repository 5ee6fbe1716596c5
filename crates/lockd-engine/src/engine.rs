use std::collections::HashMap;
use std::sync::{Condvar, Mutex};
use std::time::{Duration, Instant};

use crate::error::{EngineError, Result};
use crate::types::{now, LockHold, LockRequest, LockType};

/// Insert `item` into `list` keeping it sorted ascending, mirroring
/// Python's `bisect.insort`.
fn insort<T: Ord>(list: &mut Vec<T>, item: T) {
	let index = list.binary_search(&item).unwrap_or_else(|i| i);
	list.insert(index, item);
}

/// Remove the first (and, under the engine's invariants, only) entry
/// belonging to `client`. Returns `true` if an entry was removed.
fn remove_client<T>(list: &mut Vec<T>, client: &str, client_of: impl Fn(&T) -> &str) -> bool {
	if let Some(index) = list.iter().position(|item| client_of(item) == client) {
		list.remove(index);
		true
	} else {
		false
	}
}

#[derive(Default)]
struct EngineState {
	requests: HashMap<String, Vec<LockRequest>>,
	holders: HashMap<String, Vec<LockHold>>,
}

/// The in-memory lock arbitration engine. One instance is shared (behind an
/// `Arc`) across every caller for the process lifetime; all state lives
/// behind a single mutex, exactly as spec'd.
pub struct LockEngine {
	state: Mutex<EngineState>,
	condvar: Condvar,
	wakeup_interval: Duration,
}

impl LockEngine {
	#[must_use]
	pub fn new(wakeup_interval: Duration) -> Self {
		Self {
			state: Mutex::new(EngineState::default()),
			condvar: Condvar::new(),
			wakeup_interval,
		}
	}

	/// Attempt to acquire `name` for `client`. Blocks the calling thread
	/// until grantable or `timeout` elapses. Callers on an async runtime
	/// should run this inside `spawn_blocking`.
	pub fn acquire(&self, name: &str, client: &str, lock_type: LockType, priority: i64, timeout: Duration) -> Result<LockRequest> {
		{
			let mut state = self.state.lock().unwrap();
			let requests = state.requests.entry(name.to_string()).or_default();
			if requests.iter().any(|r| r.client == client) {
				return Err(EngineError::RepeatedAcquire {
					name: name.to_string(),
					client: client.to_string(),
				});
			}
			insort(
				requests,
				LockRequest {
					priority,
					request_timestamp: now(),
					lock_type,
					client: client.to_string(),
				},
			);
			self.condvar.notify_all();
		}

		let start = Instant::now();
		let mut state = self.state.lock().unwrap();
		loop {
			if Self::is_grantable(&state, name, client, lock_type) {
				break;
			}

			let elapsed = start.elapsed();
			if elapsed >= timeout {
				let requests = state.requests.entry(name.to_string()).or_default();
				remove_client(requests, client, |r| &r.client);
				return Err(EngineError::Timeout {
					name: name.to_string(),
					client: client.to_string(),
					timeout_secs: timeout.as_secs(),
				});
			}

			let wait_for = self.wakeup_interval.min(timeout - elapsed);
			let (guard, _timeout_result) = self.condvar.wait_timeout(state, wait_for).unwrap();
			state = guard;
		}

		let hold = LockHold {
			lock_type,
			client: client.to_string(),
			acquire_timestamp: now(),
		};
		insort(state.holders.entry(name.to_string()).or_default(), hold);
		self.condvar.notify_all();

		let granted_request = state.requests[name]
			.iter()
			.find(|r| r.client == client)
			.cloned()
			.expect("client's own request vanished from the queue between grant and lookup");
		Ok(granted_request)
	}

	/// Granted iff:
	/// - Exclusive: no current holder, and this client leads the queue.
	/// - Shared: no holder and no queued predecessor outranks (has a lower
	///   rank than) Shared.
	fn is_grantable(state: &EngineState, name: &str, client: &str, lock_type: LockType) -> bool {
		let requests = state.requests.get(name).map(Vec::as_slice).unwrap_or(&[]);
		let holders = state.holders.get(name).map(Vec::as_slice).unwrap_or(&[]);

		match lock_type {
			LockType::Exclusive => holders.is_empty() && requests.first().map_or(false, |r| r.client == client),
			LockType::Shared => {
				let no_outranking_holder = !holders.iter().any(|h| h.lock_type.rank() < lock_type.rank());
				let no_outranking_predecessor = !requests.iter().take_while(|r| r.client != client).any(|r| r.lock_type.rank() < lock_type.rank());
				no_outranking_holder && no_outranking_predecessor
			}
		}
	}

	/// Release `client`'s hold and queue entry on `name`.
	pub fn release(&self, name: &str, client: &str) -> Result<()> {
		let mut state = self.state.lock().unwrap();

		let requests_empty = state.requests.get(name).map_or(true, Vec::is_empty);
		if requests_empty {
			return Err(EngineError::NotFound(format!("no lock of name [{name}] found")));
		}
		let holders_empty = state.holders.get(name).map_or(true, Vec::is_empty);
		if holders_empty {
			return Err(EngineError::NotFound(format!("lock [{name}] does not exist or is not being held")));
		}

		let holders = state.holders.get_mut(name).unwrap();
		if !remove_client(holders, client, |h| &h.client) {
			return Err(EngineError::NotFound(format!("client [{client}] cannot release lock [{name}] as it is not holding it")));
		}

		let requests = state.requests.get_mut(name).unwrap();
		if !remove_client(requests, client, |r| &r.client) {
			return Err(EngineError::NotFound(format!("no client [{client}] against lock [{name}] found")));
		}

		self.condvar.notify_all();
		Ok(())
	}

	/// Atomically reposition `client`'s request in `name`'s queue, refreshing
	/// its timestamp, and return the priority it previously held. Positional
	/// index within the queue (including index 0) never skips this.
	pub fn modify_priority(&self, name: &str, client: &str, new_priority: i64) -> Result<i64> {
		let mut state = self.state.lock().unwrap();
		let requests = state
			.requests
			.get_mut(name)
			.ok_or_else(|| EngineError::NotFound(format!("no lock of name [{name}] found")))?;

		let index = requests
			.iter()
			.position(|r| r.client == client)
			.ok_or_else(|| EngineError::NotFound(format!("no client of name [{client}] found")))?;

		let old = requests.remove(index);
		let old_priority = old.priority;
		insort(
			requests,
			LockRequest {
				priority: new_priority,
				request_timestamp: now(),
				lock_type: old.lock_type,
				client: old.client,
			},
		);

		self.condvar.notify_all();
		Ok(old_priority)
	}

	/// A coherent, deep-copied snapshot of both mappings. The clone happens
	/// under the mutex so no mutation can interleave between reading
	/// `requests` and `holders`.
	#[must_use]
	pub fn get_state(&self) -> (HashMap<String, Vec<LockRequest>>, HashMap<String, Vec<LockHold>>) {
		let state = self.state.lock().unwrap();
		(state.requests.clone(), state.holders.clone())
	}
}

use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Parser, Clone, Debug, Serialize, Deserialize)]
#[command(author, version, about = "HTTP lock coordination service", long_about = None)]
pub struct Config {
	/// Poll/wakeup interval for the acquire wait loop, in seconds.
	#[arg(short, long, env = "LOCKD_INTERVAL", default_value = "1", value_parser = parse_duration_secs)]
	pub interval: Duration,

	/// Port to listen on.
	#[arg(short, long, env = "LOCKD_PORT", default_value = "8000")]
	pub port: u16,

	/// Optional `user:password` credential. When set, every request must
	/// carry a matching HTTP Basic `Authorization` header.
	#[arg(short, long, env = "LOCKD_AUTHENTICATION", value_name = "user:password")]
	pub authentication: Option<String>,

	/// Optional TLS certificate path. When set, serve HTTPS instead of
	/// plain HTTP. Expects a PEM file containing both the certificate
	/// chain and the private key.
	#[arg(short, long, env = "LOCKD_CERTIFICATE")]
	pub certificate: Option<PathBuf>,

	/// Emit logs as JSON instead of pretty-printed text.
	#[arg(long, env = "LOCKD_LOG_JSON", default_value_t = false)]
	pub log_json: bool,
}

impl Config {
	#[must_use]
	pub fn parsed() -> Self {
		Self::parse()
	}

	/// The decoded `(user, password)` pair, if authentication is configured.
	#[must_use]
	pub fn credential(&self) -> Option<(String, String)> {
		let raw = self.authentication.as_ref()?;
		let (user, password) = raw.split_once(':')?;
		Some((user.to_string(), password.to_string()))
	}

	#[cfg(test)]
	pub fn test() -> Self {
		Self {
			interval: Duration::from_millis(50),
			port: 0,
			authentication: None,
			certificate: None,
			log_json: false,
		}
	}
}

fn parse_duration_secs(s: &str) -> Result<Duration, std::num::ParseIntError> {
	s.parse::<u64>().map(Duration::from_secs)
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn defaults() {
		let config = Config::try_parse_from(["lockd"]).unwrap();
		assert_eq!(config.interval, Duration::from_secs(1));
		assert_eq!(config.port, 8000);
		assert!(config.authentication.is_none());
		assert!(config.certificate.is_none());
	}

	#[test]
	fn parses_credential() {
		let config = Config::try_parse_from(["lockd", "--authentication", "alice:hunter2"]).unwrap();
		assert_eq!(config.credential(), Some(("alice".to_string(), "hunter2".to_string())));
	}

	#[test]
	fn malformed_credential_has_no_pair() {
		let config = Config::try_parse_from(["lockd", "--authentication", "no-colon-here"]).unwrap();
		assert_eq!(config.credential(), None);
	}

	#[test]
	fn custom_interval_and_port() {
		let config = Config::try_parse_from(["lockd", "--interval", "5", "--port", "9001"]).unwrap();
		assert_eq!(config.interval, Duration::from_secs(5));
		assert_eq!(config.port, 9001);
	}
}

use tracing_subscriber::filter::EnvFilter;
use tracing_subscriber::fmt::format::JsonFields;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::Layer;

use crate::config::Config;

/// Install the process-wide `tracing` subscriber. Mirrors the teacher's
/// `RUST_LOG`-driven `EnvFilter` setup, with a JSON formatter available via
/// `--log-json` for environments that ship logs to a collector instead of a
/// terminal.
pub fn init(config: &Config) {
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

	let registry = tracing_subscriber::registry();
	if config.log_json {
		registry
			.with(
				tracing_subscriber::fmt::layer()
					.fmt_fields(JsonFields::default())
					.event_format(tracing_subscriber::fmt::format().json().flatten_event(true).with_span_list(false))
					.with_filter(filter),
			)
			.init();
	} else {
		registry.with(tracing_subscriber::fmt::layer().event_format(tracing_subscriber::fmt::format().pretty()).with_filter(filter)).init();
	}
}

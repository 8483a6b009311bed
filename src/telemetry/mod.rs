//! Telemetry initialization: structured logging for host applications

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialise the tracing subscriber.
///
/// Library code only emits `tracing` events; a host application calls this
/// once at startup (or installs its own subscriber instead). `log_format`
/// selects between plain text and JSON output.
pub fn init(log_format: &str) {
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "arcadia_notify=info".into());

    let registry = tracing_subscriber::registry().with(env_filter);

    if log_format == "json" {
        // Flatten event fields so `message` is consistently top-level
        let fmt_layer = tracing_subscriber::fmt::layer().json().flatten_event(true);
        registry.with(fmt_layer).init();
    } else {
        let fmt_layer = tracing_subscriber::fmt::layer();
        registry.with(fmt_layer).init();
    }
}

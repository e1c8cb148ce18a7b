//! Tracing initialization and subscriber setup.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Fallback filter when neither `RUST_LOG` nor an explicit level is given.
const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Parameters
///
/// * `trace_level` - Filter directive used when `RUST_LOG` is unset or invalid
///
/// # Initialization Behavior
///
/// - Writes to stderr, leaving stdout to the caller
/// - An unparsable `trace_level` falls back to `"info"`
/// - Idempotent: safe to call multiple times (only first call takes effect)
pub fn init_tracing(trace_level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::try_new(trace_level.unwrap_or(DEFAULT_LEVEL))
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    });

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_initialization_is_harmless() {
        init_tracing(Some("debug"));
        init_tracing(Some("not a level [["));
        tracing::debug!("still fine");
    }
}

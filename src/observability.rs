use anyhow::Result;
use tracing_subscriber::{EnvFilter, Layer, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ObservabilityConfig;

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when set. A `log_format` of
/// `json` emits one structured object per line, anything else prints
/// human readable lines with targets and line numbers.
pub fn init_observability(config: &ObservabilityConfig) -> Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    if config.log_format.eq_ignore_ascii_case("json") {
        tracing_subscriber::registry()
            .with(fmt::layer().json().with_filter(env_filter))
            .try_init()?;
    } else {
        tracing_subscriber::registry()
            .with(
                fmt::layer()
                    .with_target(true)
                    .with_thread_ids(true)
                    .with_line_number(true)
                    .with_filter(env_filter),
            )
            .try_init()?;
    }

    tracing::info!(
        service.name = env!("CARGO_PKG_NAME"),
        service.version = env!("CARGO_PKG_VERSION"),
        log.format = %config.log_format,
        "Observability initialized"
    );

    Ok(())
}

use tracing_subscriber::EnvFilter;

use crate::config::LogConfig;

/// Installs the global fmt subscriber. `RUST_LOG` wins over the configured
/// filter when set.
pub fn init(config: &LogConfig) {
  let filter =
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

  tracing_subscriber::fmt().with_env_filter(filter).init();
}

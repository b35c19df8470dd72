//! Logging and tracing utilities

use crate::config::{LogConfig, LogFormat};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize tracing with the configuration found in the environment
pub fn init_tracing() {
    init_tracing_with(&LogConfig::from_env());
}

/// Initialize tracing with an explicit configuration
///
/// Does nothing if a global subscriber is already installed, so tests and
/// binaries can call it more than once.
pub fn init_tracing_with(config: &LogConfig) {
    let filter = EnvFilter::try_new(&config.filter).unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Text => registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .try_init(),
        LogFormat::Json => registry
            .with(
                tracing_subscriber::fmt::layer()
                    .json()
                    .with_writer(std::io::stderr),
            )
            .try_init(),
    };

    if result.is_err() {
        tracing::debug!("tracing subscriber already installed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_twice_is_harmless() {
        let config = LogConfig::default().with_filter("not a valid [directive");
        init_tracing_with(&config);
        init_tracing_with(&LogConfig::default().with_format(LogFormat::Json));
    }
}

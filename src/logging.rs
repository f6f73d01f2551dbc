// SPDX-License-Identifier: MPL-2.0
//! Tracing subscriber setup.

use crate::config::{LoggingConfig, DEFAULT_LOG_FILTER};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Picks the filter directive: `RUST_LOG`, then the config file, then the default.
fn filter_for(config: &LoggingConfig) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let directive = config.filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER);
        EnvFilter::try_new(directive).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER))
    })
}

/// Installs the global subscriber, writing to stderr.
///
/// Returns `false` if a subscriber was already installed.
pub fn init(config: &LoggingConfig) -> bool {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .with(filter_for(config))
        .try_init()
        .is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Tests below read or change RUST_LOG
    static ENV_MUTEX: Mutex<()> = Mutex::new(());

    #[test]
    fn invalid_directive_falls_back_to_default() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        let config = LoggingConfig {
            filter: Some("notification_center=loud".to_string()),
        };

        assert_eq!(filter_for(&config).to_string(), DEFAULT_LOG_FILTER);
    }

    #[test]
    fn config_directive_is_used_without_rust_log() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::remove_var(EnvFilter::DEFAULT_ENV);
        let config = LoggingConfig {
            filter: Some("notification_center=debug".to_string()),
        };

        assert_eq!(filter_for(&config).to_string(), "notification_center=debug");
    }

    #[test]
    fn rust_log_takes_precedence_over_config() {
        let _lock = ENV_MUTEX.lock().unwrap();
        std::env::set_var(EnvFilter::DEFAULT_ENV, "warn");
        let config = LoggingConfig {
            filter: Some("notification_center=debug".to_string()),
        };

        let filter = filter_for(&config).to_string();
        std::env::remove_var(EnvFilter::DEFAULT_ENV);

        assert_eq!(filter, "warn");
    }

    #[test]
    fn second_init_reports_existing_subscriber() {
        let _lock = ENV_MUTEX.lock().unwrap();
        let config = LoggingConfig::default();
        let _ = init(&config);
        assert!(!init(&config));
    }
}

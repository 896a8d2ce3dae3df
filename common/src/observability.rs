use crate::Result;
use serde::Deserialize;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

#[derive(Deserialize, Debug, Default)]
pub struct ObservabilityConfig {
    #[serde(default)]
    pub json_log: bool,
    pub sentry_dsn: Option<String>,
    #[serde(default)]
    pub debug_mode: bool,
    /// Send log lines to stderr, leaving stdout for program output
    #[serde(default)]
    pub log_to_stderr: bool,
}

impl ObservabilityConfig {
    pub fn from_envvar() -> Result<ObservabilityConfig> {
        Ok(envy::from_env()?)
    }
}

/// Keeps the sentry client alive; events are flushed when it is dropped at the end of `main`.
pub struct ObservabilityGuard {
    #[cfg(feature = "use-sentry")]
    _sentry: Option<sentry::ClientInitGuard>,
}

pub fn configure_observability(config: &ObservabilityConfig) -> Result<ObservabilityGuard> {
    #[cfg(feature = "use-sentry")]
    let sentry_guard = match &config.sentry_dsn {
        Some(dsn) => Some(sentry::init(sentry::ClientOptions {
            dsn: Some(dsn.parse()?),
            debug: config.debug_mode,
            release: sentry::release_name!(),
            ..Default::default()
        })),
        None => None,
    };

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let registry = tracing_subscriber::registry().with(filter);

    #[cfg(feature = "use-sentry")]
    let registry = {
        use sentry_tracing::EventFilter;

        registry.with(sentry_tracing::layer().event_filter(|meta| match *meta.level() {
            tracing::Level::ERROR | tracing::Level::WARN => EventFilter::Exception,
            _ => EventFilter::Ignore,
        }))
    };

    let writer = if config.log_to_stderr {
        BoxMakeWriter::new(std::io::stderr)
    } else {
        BoxMakeWriter::new(std::io::stdout)
    };

    if config.json_log {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(writer))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(writer))
            .init();
    }

    Ok(ObservabilityGuard {
        #[cfg(feature = "use-sentry")]
        _sentry: sentry_guard,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: ObservabilityConfig =
            envy::from_iter(Vec::<(String, String)>::new()).unwrap();

        assert!(!config.json_log);
        assert!(!config.log_to_stderr);
        assert!(config.sentry_dsn.is_none());
    }

    #[test]
    fn test_config_from_env() {
        let config: ObservabilityConfig = envy::from_iter(vec![
            ("JSON_LOG".to_owned(), "true".to_owned()),
            ("SENTRY_DSN".to_owned(), "https://key@sentry.example.com/1".to_owned()),
        ])
        .unwrap();

        assert!(config.json_log);
        assert_eq!(
            config.sentry_dsn.as_deref(),
            Some("https://key@sentry.example.com/1")
        );
    }
}

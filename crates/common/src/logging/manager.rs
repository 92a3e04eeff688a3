//! Logging initialization.

use tracing::{info, Level};
use tracing_appender::rolling::RollingFileAppender;
use tracing_subscriber::{
    fmt::layer, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer,
};

use super::{error::LoggingError, types::LoggerConfig};

/// Builds the level filter: INFO unless `RUST_LOG` says otherwise, plus any extra directives.
pub fn build_filter(directives: &[String]) -> Result<EnvFilter, LoggingError> {
    let mut filt = EnvFilter::builder()
        .with_default_directive(Level::INFO.into())
        .from_env_lossy();

    for directive in directives {
        let parsed = directive
            .parse()
            .map_err(|_| LoggingError::InvalidDirective(directive.clone()))?;
        filt = filt.add_directive(parsed);
    }

    Ok(filt)
}

/// Installs the global subscriber described by `config`.
///
/// Fails if a global subscriber is already installed.
pub fn init(config: LoggerConfig) -> Result<(), LoggingError> {
    let filt = build_filter(&config.extra_directives)?;

    // Configure stdout logging with JSON or compact format
    let stdout_sub = if config.stdout_config.json_format {
        layer()
            .json()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(build_filter(&config.extra_directives)?)
            .boxed()
    } else {
        layer()
            .compact()
            .with_span_events(config.stdout_config.fmt_span.clone())
            .with_filter(build_filter(&config.extra_directives)?)
            .boxed()
    };

    // Build optional file logging layer
    let file_layer = match config.file_logging_config.as_ref() {
        Some(file_config) => {
            let file_appender = RollingFileAppender::builder()
                .rotation(file_config.rotation.clone())
                .filename_prefix(&file_config.file_name_prefix)
                .build(&file_config.directory)?;

            let file_layer = if file_config.json_format {
                layer()
                    .json()
                    .with_writer(file_appender)
                    .with_ansi(false) // No color codes in files
                    .with_filter(filt)
                    .boxed()
            } else {
                layer()
                    .compact()
                    .with_writer(file_appender)
                    .with_ansi(false) // No color codes in files
                    .with_filter(filt)
                    .boxed()
            };
            Some(file_layer)
        }
        None => None,
    };

    tracing_subscriber::registry()
        .with(stdout_sub)
        .with(file_layer)
        .try_init()
        .map_err(|e| LoggingError::AlreadyInitialized(e.to_string()))?;

    info!(
        service_name = %config.service_name,
        file_logging = config.file_logging_config.is_some(),
        "logging initialized"
    );

    Ok(())
}

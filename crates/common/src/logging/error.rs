use thiserror::Error;

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("invalid log filter directive: {0}")]
    InvalidDirective(String),

    #[error("failed to open log file: {0}")]
    FileAppender(#[from] tracing_appender::rolling::InitError),

    #[error("global subscriber already installed: {0}")]
    AlreadyInitialized(String),
}

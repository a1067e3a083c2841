//! Error types for the logging facade

use super::log_level::LogLevel;

pub type Result<T> = std::result::Result<T, MonologError>;

#[derive(Debug, thiserror::Error)]
pub enum MonologError {
    /// Invalid configuration with details
    #[error("Invalid configuration for {component}: {message}")]
    InvalidConfiguration { component: String, message: String },

    /// No handler claimed a record and unhandled records are not allowed
    #[error("No handlers available to handle {level} record")]
    Unhandled { level: LogLevel },

    /// Raised on purpose by a crash-for-visibility handler
    ///
    /// `cause` holds the rendered text of the record's cause, not the error
    /// value itself, so [`std::error::Error::source`] is `None`.
    #[error("{message}")]
    Crashed {
        message: String,
        cause: Option<String>,
    },

    /// Handler failure with the handler's name
    #[error("Handler '{handler}' failed: {message}")]
    Handler { handler: String, message: String },

    /// IO error with context
    #[error("IO error while {operation}: {message}")]
    IoOperation {
        operation: String,
        message: String,
        #[source]
        source: std::io::Error,
    },

    /// Generic IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

impl MonologError {
    /// Create an invalid configuration error
    pub fn config(component: impl Into<String>, message: impl Into<String>) -> Self {
        MonologError::InvalidConfiguration {
            component: component.into(),
            message: message.into(),
        }
    }

    pub fn unhandled(level: LogLevel) -> Self {
        MonologError::Unhandled { level }
    }

    pub fn crashed(message: impl Into<String>, cause: Option<String>) -> Self {
        MonologError::Crashed {
            message: message.into(),
            cause,
        }
    }

    /// Create a handler error
    pub fn handler(handler: impl Into<String>, message: impl Into<String>) -> Self {
        MonologError::Handler {
            handler: handler.into(),
            message: message.into(),
        }
    }

    /// Create an IO operation error with context
    pub fn io_operation(
        operation: impl Into<String>,
        message: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        MonologError::IoOperation {
            operation: operation.into(),
            message: message.into(),
            source,
        }
    }

    pub fn is_unhandled(&self) -> bool {
        matches!(self, MonologError::Unhandled { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_creation() {
        let err = MonologError::config("Monolog", "no handlers");
        assert!(matches!(err, MonologError::InvalidConfiguration { .. }));

        let err = MonologError::unhandled(LogLevel::Info);
        assert!(err.is_unhandled());

        let err = MonologError::handler("console", "stdout closed");
        assert!(matches!(err, MonologError::Handler { .. }));
    }

    #[test]
    fn test_error_display() {
        let err = MonologError::config("Monolog", "You are required to add at least one handler");
        assert_eq!(
            err.to_string(),
            "Invalid configuration for Monolog: You are required to add at least one handler"
        );

        let err = MonologError::unhandled(LogLevel::Warn);
        assert_eq!(err.to_string(), "No handlers available to handle WARN record");

        let err = MonologError::crashed("disk full", Some("ENOSPC".to_string()));
        assert_eq!(err.to_string(), "disk full");
    }

    #[test]
    fn test_crashed_keeps_cause_as_text() {
        let err = MonologError::crashed("disk full", Some("ENOSPC".to_string()));
        assert!(std::error::Error::source(&err).is_none());
        match err {
            MonologError::Crashed { cause, .. } => assert_eq!(cause.as_deref(), Some("ENOSPC")),
            other => panic!("expected crash, got {:?}", other),
        }
    }

    #[test]
    fn test_io_operation_error() {
        let io_err = std::io::Error::new(std::io::ErrorKind::NotFound, "missing");
        let err = MonologError::io_operation("reading config", "cannot open monolog.json", io_err);

        assert!(err.to_string().contains("reading config"));
        assert!(std::error::Error::source(&err).is_some());
    }
}

//! Declarative chain configuration
//!
//! A [`MonologConfig`] describes a handler chain in JSON so it can live in a
//! config file instead of code:
//!
//! ```json
//! {
//!   "allow_unhandled": false,
//!   "handlers": [
//!     { "kind": "crashy", "levels": ["fatal"] },
//!     { "kind": "console", "tag": "app", "levels": "info,warn,error", "colors": false },
//!     { "kind": "null", "levels": "*" }
//!   ]
//! }
//! ```
//!
//! Handlers are chained in the order they are listed.

use crate::core::{Handler, LevelSet, Monolog, MonologError, Result, TimestampFormat};
use crate::handlers::{ConsoleHandler, CrashyHandler, NullHandler, OutputFormat};
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_true() -> bool {
    true
}

fn default_timestamp() -> Option<TimestampFormat> {
    Some(TimestampFormat::default())
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case", deny_unknown_fields)]
pub enum HandlerConfig {
    Console {
        tag: String,
        levels: LevelSet,
        #[serde(default = "default_true")]
        colors: bool,
        #[serde(default)]
        format: OutputFormat,
        /// `null` disables the timestamp prefix
        #[serde(default = "default_timestamp")]
        timestamp: Option<TimestampFormat>,
    },
    Null {
        levels: LevelSet,
    },
    Crashy {
        levels: LevelSet,
    },
}

impl HandlerConfig {
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] for a console handler
    /// whose custom timestamp format is not valid strftime.
    pub fn validate(&self) -> Result<()> {
        match self {
            HandlerConfig::Console {
                timestamp: Some(timestamp),
                ..
            } => timestamp.validate(),
            _ => Ok(()),
        }
    }

    pub fn build(&self) -> Result<Box<dyn Handler>> {
        self.validate()?;

        let handler: Box<dyn Handler> = match self {
            HandlerConfig::Console {
                tag,
                levels,
                colors,
                format,
                timestamp,
            } => {
                let handler = ConsoleHandler::new(tag.clone(), *levels)
                    .with_colors(*colors)
                    .with_output_format(*format);
                match timestamp {
                    Some(timestamp) => Box::new(handler.with_timestamp_format(timestamp.clone())),
                    None => Box::new(handler.without_timestamp()),
                }
            }
            HandlerConfig::Null { levels } => Box::new(NullHandler::new(*levels)),
            HandlerConfig::Crashy { levels } => Box::new(CrashyHandler::new(*levels)),
        };

        Ok(handler)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MonologConfig {
    #[serde(default = "default_true")]
    pub allow_unhandled: bool,
    #[serde(default)]
    pub handlers: Vec<HandlerConfig>,
}

impl Default for MonologConfig {
    fn default() -> Self {
        Self {
            allow_unhandled: true,
            handlers: Vec::new(),
        }
    }
}

impl MonologConfig {
    /// Parse a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::JsonError`] for malformed JSON, unknown keys,
    /// or unknown level names, and [`MonologError::InvalidConfiguration`]
    /// for an invalid custom timestamp format.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        self.handlers.iter().try_for_each(HandlerConfig::validate)
    }

    /// Read and parse a JSON configuration file.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|e| {
            MonologError::io_operation(
                "reading monolog config",
                format!("cannot read '{}'", path.display()),
                e,
            )
        })?;

        Self::from_json(&json)
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Build the configured chain.
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] when no handler is listed
    /// or a handler is invalid.
    pub fn build(&self) -> Result<Monolog> {
        let handlers = self
            .handlers
            .iter()
            .map(HandlerConfig::build)
            .collect::<Result<Vec<_>>>()?;
        Monolog::with_policy(handlers, self.allow_unhandled)
    }
}

//! Timestamp formatting for sinks that stamp their output
//!
//! Records carry no time of their own; a sink takes the time when it writes.

use super::error::{MonologError, Result};
use chrono::format::{Item, StrftimeItems};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Write;

/// Timestamp format options
///
/// # Examples
///
/// ```
/// use monolog::TimestampFormat;
/// use chrono::Utc;
///
/// let format = TimestampFormat::Iso8601;
/// let timestamp = format.format(&Utc::now()).unwrap();
/// assert!(timestamp.ends_with('Z'));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TimestampFormat {
    /// ISO 8601 with milliseconds: `2025-01-08T10:30:45.123Z`
    #[default]
    Iso8601,

    /// RFC 3339 format: `2025-01-08T10:30:45.123456+00:00`
    Rfc3339,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    Custom(String),
}

impl TimestampFormat {
    /// Check that a custom strftime string only uses known specifiers.
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] for an unknown or
    /// incomplete specifier such as `%Q`.
    pub fn validate(&self) -> Result<()> {
        match self {
            TimestampFormat::Custom(format_str) => {
                if StrftimeItems::new(format_str).any(|item| matches!(item, Item::Error)) {
                    return Err(Self::invalid(format_str));
                }
                Ok(())
            }
            _ => Ok(()),
        }
    }

    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] when a custom format
    /// cannot be rendered.
    pub fn format(&self, datetime: &DateTime<Utc>) -> Result<String> {
        match self {
            TimestampFormat::Iso8601 => Ok(datetime.format("%Y-%m-%dT%H:%M:%S%.3fZ").to_string()),
            TimestampFormat::Rfc3339 => Ok(datetime.to_rfc3339()),
            TimestampFormat::UnixMillis => Ok(datetime.timestamp_millis().to_string()),
            TimestampFormat::Custom(format_str) => {
                // chrono signals a bad specifier with fmt::Error
                let mut out = String::new();
                write!(out, "{}", datetime.format(format_str))
                    .map_err(|_| Self::invalid(format_str))?;
                Ok(out)
            }
        }
    }

    /// Format the current time
    pub fn now(&self) -> Result<String> {
        self.format(&Utc::now())
    }

    fn invalid(format_str: &str) -> MonologError {
        MonologError::config(
            "TimestampFormat",
            format!("invalid strftime format '{}'", format_str),
        )
    }
}

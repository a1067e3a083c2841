//! Analytics handler
//!
//! Turns log records into analytics hits: errors and fatals become
//! exception reports, and trace records that carry a screen or an event
//! become screen views or tracked events. The delivery itself is left to a
//! [`Tracker`] implementation.

use crate::core::{Handler, HandlerOutcome, LogLevel, LogMessage, Record, Result};
use std::fmt;

/// A screen view to report, logged at trace level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedScreen {
    name: String,
}

impl TrackedScreen {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

impl fmt::Display for TrackedScreen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "screen {}", self.name)
    }
}

impl LogMessage for TrackedScreen {
    fn display_name(&self) -> Option<&str> {
        Some(self.name.as_str())
    }
}

/// A user interaction to report, logged at trace level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackedEvent {
    pub category: String,
    pub action: String,
    pub label: Option<String>,
    pub value: Option<i64>,
}

impl TrackedEvent {
    pub fn new(category: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            category: category.into(),
            action: action.into(),
            label: None,
            value: None,
        }
    }

    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    #[must_use]
    pub fn with_value(mut self, value: i64) -> Self {
        self.value = Some(value);
        self
    }
}

impl fmt::Display for TrackedEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "event {}/{}", self.category, self.action)?;
        if let Some(label) = &self.label {
            write!(f, " ({})", label)?;
        }
        Ok(())
    }
}

impl LogMessage for TrackedEvent {}

/// Destination for analytics hits.
pub trait Tracker: Send + Sync {
    fn send_exception(&self, description: &str, fatal: bool) -> Result<()>;

    fn send_screen(&self, name: &str) -> Result<()>;

    fn send_event(&self, event: &TrackedEvent) -> Result<()>;
}

/// Reports error, fatal, and trace records to a [`Tracker`].
///
/// This handler is not level gated: which levels it acts on is fixed. Every
/// other level is passed.
pub struct AnalyticsHandler<T> {
    tracker: T,
}

impl<T: Tracker> AnalyticsHandler<T> {
    pub fn new(tracker: T) -> Self {
        Self { tracker }
    }

    pub fn tracker(&self) -> &T {
        &self.tracker
    }

    fn describe(record: &Record<'_>) -> String {
        let message = record
            .message()
            .map_or_else(|| "NULL".to_string(), |m| m.to_string());

        match record.cause() {
            Some(cause) => format!("{}:{}", message, cause),
            None => message,
        }
    }

    /// Screens are recognized by display name, events by type. Anything else
    /// is still counted as handled.
    fn track_trace(&self, record: &Record<'_>) -> Result<()> {
        let Some(message) = record.message() else {
            return Ok(());
        };

        if let Some(name) = message.display_name() {
            return self.tracker.send_screen(name);
        }
        if let Some(event) = message.downcast_ref::<TrackedEvent>() {
            return self.tracker.send_event(event);
        }

        Ok(())
    }
}

impl<T: Tracker> Handler for AnalyticsHandler<T> {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        match record.level() {
            LogLevel::Error => {
                self.tracker.send_exception(&Self::describe(record), false)?;
                Ok(HandlerOutcome::Handled)
            }
            LogLevel::Fatal => {
                self.tracker.send_exception(&Self::describe(record), true)?;
                Ok(HandlerOutcome::Handled)
            }
            LogLevel::Trace => {
                self.track_trace(record)?;
                Ok(HandlerOutcome::Handled)
            }
            LogLevel::Debug | LogLevel::Info | LogLevel::Warn => Ok(HandlerOutcome::Passed),
        }
    }

    fn name(&self) -> &str {
        "analytics"
    }
}

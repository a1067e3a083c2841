//! Log record structure

use super::log_level::LogLevel;
use super::message::LogMessage;
use std::error::Error;
use std::fmt;

/// Everything that was passed to a single logging call.
///
/// A record borrows its message and cause from the caller, lives for the
/// duration of one dispatch, and is never mutated.
#[derive(Clone, Copy)]
pub struct Record<'a> {
    level: LogLevel,
    message: Option<&'a dyn LogMessage>,
    cause: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Record<'a> {
    pub fn new(
        level: LogLevel,
        message: Option<&'a dyn LogMessage>,
        cause: Option<&'a (dyn Error + 'static)>,
    ) -> Self {
        Self {
            level,
            message,
            cause,
        }
    }

    /// The severity level that the message was logged with.
    #[inline]
    pub fn level(&self) -> LogLevel {
        self.level
    }

    /// The value that was logged, if any.
    #[inline]
    pub fn message(&self) -> Option<&'a dyn LogMessage> {
        self.message
    }

    /// Optional root error that caused the state being logged.
    #[inline]
    pub fn cause(&self) -> Option<&'a (dyn Error + 'static)> {
        self.cause
    }

    /// The message as sinks show it: its display name, its `Display`
    /// rendering, or `absent` when no message was logged.
    pub fn displayed_message(&self, absent: &str) -> String {
        match self.message {
            Some(message) => message.displayed().into_owned(),
            None => absent.to_string(),
        }
    }
}

/// Causes are compared by identity; `dyn Error` has no value equality.
fn same_cause(a: Option<&(dyn Error + 'static)>, b: Option<&(dyn Error + 'static)>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => std::ptr::addr_eq(a, b),
        _ => false,
    }
}

fn same_message(a: Option<&dyn LogMessage>, b: Option<&dyn LogMessage>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => a.message_eq(b),
        _ => false,
    }
}

impl PartialEq for Record<'_> {
    fn eq(&self, other: &Self) -> bool {
        self.level == other.level
            && same_message(self.message, other.message)
            && same_cause(self.cause, other.cause)
    }
}

impl fmt::Debug for Record<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Record")
            .field("level", &self.level)
            .field("message", &self.message)
            .field("cause", &self.cause.map(|c| c.to_string()))
            .finish()
    }
}

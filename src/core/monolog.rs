//! The logging facade
//!
//! [`Monolog`] owns an ordered chain of handlers. Every logging call becomes
//! a [`Record`] that is offered to each handler in turn until one of them
//! returns [`HandlerOutcome::Finished`] or the chain is exhausted.
//!
//! When no handler claims a record the outcome depends on `allow_unhandled`:
//! with it set (the default) the record is silently dropped, without it the
//! call fails with [`MonologError::Unhandled`]. Turning it off during
//! development makes sure every level has somewhere to go.

use super::{
    error::{MonologError, Result},
    handler::{Handler, HandlerOutcome},
    log_level::LogLevel,
    message::LogMessage,
    record::Record,
};
use std::error::Error;
use std::fmt;

pub struct Monolog {
    handlers: Vec<Box<dyn Handler>>,
    allow_unhandled: bool,
}

impl Monolog {
    /// Create a facade that tolerates unhandled records.
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] if `handlers` is empty.
    pub fn new(handlers: Vec<Box<dyn Handler>>) -> Result<Self> {
        Self::with_policy(handlers, true)
    }

    /// Create a facade with an explicit unhandled-record policy.
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] if `handlers` is empty,
    /// whatever the value of `allow_unhandled`.
    pub fn with_policy(handlers: Vec<Box<dyn Handler>>, allow_unhandled: bool) -> Result<Self> {
        if handlers.is_empty() {
            return Err(MonologError::config(
                "Monolog",
                "You are required to add at least one handler",
            ));
        }

        Ok(Self {
            handlers,
            allow_unhandled,
        })
    }

    pub fn allows_unhandled(&self) -> bool {
        self.allow_unhandled
    }

    pub fn handler_count(&self) -> usize {
        self.handlers.len()
    }

    /// Names of the handlers, in chain order.
    pub fn handler_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.handlers.iter().map(|h| h.name())
    }

    /// Log a message with the specified level.
    ///
    /// `cause` is the optional root error behind the state being described.
    /// This is the only entry point that accepts an absent message; the level
    /// helpers always carry one.
    ///
    /// ```
    /// use monolog::prelude::*;
    /// use std::io;
    ///
    /// let logger = Monolog::new(vec![Box::new(NullHandler::new(LevelSet::all()))]).unwrap();
    /// let cause = io::Error::new(io::ErrorKind::Other, "connection reset");
    ///
    /// logger.emit(LogLevel::Debug, None, None).unwrap();
    /// logger.emit(LogLevel::Error, None, Some(&cause)).unwrap();
    /// logger.emit(LogLevel::Info, Some(&"ready"), None).unwrap();
    /// ```
    pub fn emit(
        &self,
        level: LogLevel,
        message: Option<&dyn LogMessage>,
        cause: Option<&(dyn Error + 'static)>,
    ) -> Result<()> {
        let record = Record::new(level, message, cause);
        self.dispatch(&record)
    }

    /// Send a record through the chain of handlers until finished.
    ///
    /// A handler error stops the walk and is returned as is.
    pub fn dispatch(&self, record: &Record<'_>) -> Result<()> {
        let mut claimed = false;

        for handler in &self.handlers {
            let outcome = handler.dispatch(record)?;

            if outcome.stops_chain() {
                return Ok(());
            }
            claimed |= outcome.is_claimed();
        }

        if !claimed && !self.allow_unhandled {
            return Err(MonologError::unhandled(record.level()));
        }

        Ok(())
    }

    pub fn log(&self, level: LogLevel, message: impl LogMessage) -> Result<()> {
        self.emit(level, Some(&message), None)
    }

    pub fn log_with_cause(
        &self,
        level: LogLevel,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.emit(level, Some(&message), Some(cause))
    }

    pub fn trace(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Trace, message)
    }

    pub fn trace_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Trace, message, cause)
    }

    pub fn debug(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Debug, message)
    }

    pub fn debug_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Debug, message, cause)
    }

    pub fn info(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Info, message)
    }

    pub fn info_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Info, message, cause)
    }

    pub fn warn(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Warn, message)
    }

    pub fn warn_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Warn, message, cause)
    }

    pub fn error(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Error, message)
    }

    pub fn error_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Error, message, cause)
    }

    pub fn fatal(&self, message: impl LogMessage) -> Result<()> {
        self.log(LogLevel::Fatal, message)
    }

    pub fn fatal_with_cause(
        &self,
        message: impl LogMessage,
        cause: &(dyn Error + 'static),
    ) -> Result<()> {
        self.log_with_cause(LogLevel::Fatal, message, cause)
    }
}

impl fmt::Debug for Monolog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Monolog")
            .field("handlers", &self.handler_names().collect::<Vec<_>>())
            .field("allow_unhandled", &self.allow_unhandled)
            .finish()
    }
}

/// Builder for creating a [`Monolog`] with a fluent API
///
/// # Example
///
/// ```
/// use monolog::prelude::*;
///
/// let logger = Monolog::builder()
///     .handler(NullHandler::new(LevelSet::all()))
///     .allow_unhandled(false)
///     .build()
///     .unwrap();
///
/// logger.info("Server started").unwrap();
/// ```
pub struct MonologBuilder {
    handlers: Vec<Box<dyn Handler>>,
    allow_unhandled: bool,
}

impl MonologBuilder {
    /// Create a new builder with no handlers that allows unhandled records
    #[must_use]
    pub fn new() -> Self {
        Self {
            handlers: Vec::new(),
            allow_unhandled: true,
        }
    }

    /// Append a handler to the end of the chain
    #[must_use]
    pub fn handler<H: Handler + 'static>(mut self, handler: H) -> Self {
        self.handlers.push(Box::new(handler));
        self
    }

    /// Append an already boxed handler to the end of the chain
    #[must_use]
    pub fn boxed(mut self, handler: Box<dyn Handler>) -> Self {
        self.handlers.push(handler);
        self
    }

    #[must_use]
    pub fn allow_unhandled(mut self, allow: bool) -> Self {
        self.allow_unhandled = allow;
        self
    }

    /// Build the configured [`Monolog`]
    ///
    /// # Errors
    ///
    /// Returns [`MonologError::InvalidConfiguration`] if no handler was added.
    pub fn build(self) -> Result<Monolog> {
        Monolog::with_policy(self.handlers, self.allow_unhandled)
    }
}

impl Default for MonologBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Monolog {
    /// Create a builder for Monolog
    #[must_use]
    pub fn builder() -> MonologBuilder {
        MonologBuilder::new()
    }
}

//! Handler trait for record output destinations

use super::{error::Result, record::Record};
use std::sync::Arc;

/// How a handler dealt with a record, and whether the chain should continue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandlerOutcome {
    /// The handler did not act; continue with the next handler.
    Passed,
    /// The handler acted; continue with the next handler.
    Handled,
    /// The handler acted; stop the chain.
    Finished,
}

impl HandlerOutcome {
    /// Whether the handler acted on the record.
    #[inline]
    pub fn is_claimed(self) -> bool {
        !matches!(self, HandlerOutcome::Passed)
    }

    #[inline]
    pub fn stops_chain(self) -> bool {
        matches!(self, HandlerOutcome::Finished)
    }
}

/// Result of an action that was allowed to run.
///
/// An action cannot pass: it either handles the record or handles it and
/// ends the chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ActionOutcome {
    Handled,
    Finished,
}

impl From<ActionOutcome> for HandlerOutcome {
    fn from(outcome: ActionOutcome) -> Self {
        match outcome {
            ActionOutcome::Handled => HandlerOutcome::Handled,
            ActionOutcome::Finished => HandlerOutcome::Finished,
        }
    }
}

/// A link in the dispatch chain.
///
/// Errors returned from `dispatch` propagate out of the logging call
/// unchanged and stop the chain.
pub trait Handler: Send + Sync {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome>;

    fn name(&self) -> &str {
        "handler"
    }
}

impl<H: Handler + ?Sized> Handler for Box<H> {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        (**self).dispatch(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<H: Handler + ?Sized> Handler for Arc<H> {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        (**self).dispatch(record)
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

/// The customization point of a [`LevelGated`] handler.
pub trait Action: Send + Sync {
    fn act(&self, record: &Record<'_>) -> Result<ActionOutcome>;
}

impl<F> Action for F
where
    F: Fn(&Record<'_>) -> Result<ActionOutcome> + Send + Sync,
{
    fn act(&self, record: &Record<'_>) -> Result<ActionOutcome> {
        self(record)
    }
}

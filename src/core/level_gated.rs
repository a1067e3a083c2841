//! Level-gated handlers
//!
//! [`LevelGated`] pairs an [`Action`] with the set of levels it is enabled
//! for. Records at any other level are passed along without touching the
//! action, so a handler can never act on a level it was not configured for.

use super::{
    error::Result,
    handler::{Action, ActionOutcome, Handler, HandlerOutcome},
    level_set::LevelSet,
    record::Record,
};

pub struct LevelGated<A> {
    levels: LevelSet,
    action: A,
    name: String,
}

impl<A: Action> LevelGated<A> {
    pub fn new(levels: impl Into<LevelSet>, action: A) -> Self {
        Self {
            levels: levels.into(),
            action,
            name: "level_gated".to_string(),
        }
    }

    /// Set the name reported by [`Handler::name`].
    #[must_use]
    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn levels(&self) -> LevelSet {
        self.levels
    }

    pub fn action(&self) -> &A {
        &self.action
    }

    pub fn action_mut(&mut self) -> &mut A {
        &mut self.action
    }
}

impl<F> LevelGated<F>
where
    F: Fn(&Record<'_>) -> Result<ActionOutcome> + Send + Sync,
{
    /// Gate a closure.
    ///
    /// # Example
    ///
    /// ```
    /// use monolog::{ActionOutcome, LevelGated, LogLevel, Monolog, Record};
    ///
    /// fn report(record: &Record<'_>) -> monolog::Result<ActionOutcome> {
    ///     eprintln!("{}", record.displayed_message("null"));
    ///     Ok(ActionOutcome::Handled)
    /// }
    ///
    /// let handler = LevelGated::from_fn([LogLevel::Error], report);
    ///
    /// let logger = Monolog::new(vec![Box::new(handler)]).unwrap();
    /// logger.error("disk full").unwrap();
    /// ```
    pub fn from_fn(levels: impl Into<LevelSet>, action: F) -> Self {
        Self::new(levels, action)
    }
}

impl<A: Action> Handler for LevelGated<A> {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        if !self.levels.contains(record.level()) {
            return Ok(HandlerOutcome::Passed);
        }

        self.action.act(record).map(HandlerOutcome::from)
    }

    fn name(&self) -> &str {
        &self.name
    }
}

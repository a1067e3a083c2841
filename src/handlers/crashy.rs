//! Handler that fails the logging call on purpose
//!
//! Meant for development builds: chaining a `CrashyHandler` enabled for
//! `{Error, Fatal}` turns every error log into an error returned to the
//! caller, so problems cannot scroll by unnoticed.

use crate::core::{
    Action, ActionOutcome, Handler, HandlerOutcome, LevelGated, LevelSet, MonologError, Record,
    Result,
};

struct Crash;

impl Action for Crash {
    fn act(&self, record: &Record<'_>) -> Result<ActionOutcome> {
        let message = record.displayed_message("null");
        let cause = record.cause().map(|c| c.to_string());

        Err(MonologError::crashed(message, cause))
    }
}

pub struct CrashyHandler {
    gate: LevelGated<Crash>,
}

impl CrashyHandler {
    pub fn new(levels: impl Into<LevelSet>) -> Self {
        Self {
            gate: LevelGated::new(levels, Crash).named("crashy"),
        }
    }

    pub fn levels(&self) -> LevelSet {
        self.gate.levels()
    }
}

impl Handler for CrashyHandler {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        self.gate.dispatch(record)
    }

    fn name(&self) -> &str {
        self.gate.name()
    }
}

//! Handler that claims records without writing them anywhere

use crate::core::{
    Action, ActionOutcome, Handler, HandlerOutcome, LevelGated, LevelSet, Record, Result,
};

struct Discard;

impl Action for Discard {
    fn act(&self, _record: &Record<'_>) -> Result<ActionOutcome> {
        Ok(ActionOutcome::Handled)
    }
}

/// Marks every record at its enabled levels as handled and does nothing else.
///
/// Useful at the end of a strict chain to declare that certain levels are
/// knowingly ignored.
pub struct NullHandler {
    gate: LevelGated<Discard>,
}

impl NullHandler {
    pub fn new(levels: impl Into<LevelSet>) -> Self {
        Self {
            gate: LevelGated::new(levels, Discard).named("null"),
        }
    }

    pub fn levels(&self) -> LevelSet {
        self.gate.levels()
    }
}

impl Handler for NullHandler {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        self.gate.dispatch(record)
    }

    fn name(&self) -> &str {
        self.gate.name()
    }
}

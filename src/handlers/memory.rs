//! In-memory capture handler
//!
//! Keeps an owned copy of every record it handles. Mostly useful in tests:
//! share it through an `Arc` and inspect it after logging.

use crate::core::{
    Action, ActionOutcome, Handler, HandlerOutcome, LevelGated, LevelSet, LogLevel, Record, Result,
};
use parking_lot::Mutex;

/// Owned snapshot of a [`Record`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedRecord {
    pub level: LogLevel,
    pub message: Option<String>,
    pub display_name: Option<String>,
    pub cause: Option<String>,
}

impl CapturedRecord {
    pub fn capture(record: &Record<'_>) -> Self {
        Self {
            level: record.level(),
            message: record.message().map(|m| m.to_string()),
            display_name: record
                .message()
                .and_then(|m| m.display_name())
                .map(str::to_string),
            cause: record.cause().map(|c| c.to_string()),
        }
    }
}

struct Capture {
    records: Mutex<Vec<CapturedRecord>>,
    outcome: ActionOutcome,
}

impl Action for Capture {
    fn act(&self, record: &Record<'_>) -> Result<ActionOutcome> {
        self.records.lock().push(CapturedRecord::capture(record));
        Ok(self.outcome)
    }
}

/// # Example
///
/// ```
/// use monolog::handlers::MemoryHandler;
/// use monolog::{LevelSet, LogLevel, Monolog};
/// use std::sync::Arc;
///
/// let memory = Arc::new(MemoryHandler::new(LevelSet::all()));
/// let logger = Monolog::builder()
///     .handler(Arc::clone(&memory))
///     .build()
///     .unwrap();
///
/// logger.warn("low disk").unwrap();
/// assert_eq!(memory.levels_seen(), vec![LogLevel::Warn]);
/// ```
pub struct MemoryHandler {
    gate: LevelGated<Capture>,
}

impl MemoryHandler {
    /// Capture records at `levels` and let the chain continue.
    pub fn new(levels: impl Into<LevelSet>) -> Self {
        Self::with_outcome(levels, ActionOutcome::Handled)
    }

    /// Capture records at `levels` and answer with `outcome`.
    pub fn with_outcome(levels: impl Into<LevelSet>, outcome: ActionOutcome) -> Self {
        let capture = Capture {
            records: Mutex::new(Vec::new()),
            outcome,
        };

        Self {
            gate: LevelGated::new(levels, capture).named("memory"),
        }
    }

    pub fn records(&self) -> Vec<CapturedRecord> {
        self.gate.action().records.lock().clone()
    }

    /// Levels of the captured records, in capture order.
    pub fn levels_seen(&self) -> Vec<LogLevel> {
        self.gate
            .action()
            .records
            .lock()
            .iter()
            .map(|r| r.level)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.gate.action().records.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.gate.action().records.lock().clear();
    }
}

impl Handler for MemoryHandler {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        self.gate.dispatch(record)
    }

    fn name(&self) -> &str {
        self.gate.name()
    }
}

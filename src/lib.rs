//! # Monolog
//!
//! A leveled logging facade that drives every record through an ordered
//! chain of handlers.
//!
//! ## Features
//!
//! - **Handler Chain**: each handler passes, handles, or finishes a record
//! - **Level Gating**: handlers act only on the levels they are enabled for
//! - **Strict Mode**: optionally fail any call that no handler claimed
//! - **Thread Safe**: the facade holds no mutable state and needs no lock
//!
//! ## Example
//!
//! ```
//! use monolog::prelude::*;
//!
//! let logger = Monolog::builder()
//!     .handler(CrashyHandler::new([LogLevel::Fatal]))
//!     .handler(NullHandler::new(LevelSet::all()))
//!     .allow_unhandled(false)
//!     .build()
//!     .unwrap();
//!
//! logger.info("starting").unwrap();
//! assert!(logger.fatal("out of memory").is_err());
//! ```

pub mod config;
pub mod core;
pub mod handlers;
pub mod macros;

pub mod prelude {
    pub use crate::config::{HandlerConfig, MonologConfig};
    pub use crate::core::{
        Action, ActionOutcome, Handler, HandlerMetrics, HandlerOutcome, LevelGated, LevelSet,
        LogLevel, LogMessage, Metered, Monolog, MonologBuilder, MonologError, Record, Result,
        TimestampFormat,
    };
    pub use crate::handlers::{ConsoleHandler, CrashyHandler, MemoryHandler, NullHandler};
}

pub use config::{HandlerConfig, MonologConfig};
pub use core::{
    Action, ActionOutcome, Handler, HandlerMetrics, HandlerOutcome, LevelGated, LevelSet,
    LogLevel, LogMessage, Metered, Monolog, MonologBuilder, MonologError, Record, Result,
    TimestampFormat,
};

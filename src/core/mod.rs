//! Core facade types and traits

pub mod error;
pub mod handler;
pub mod level_gated;
pub mod level_set;
pub mod log_level;
pub mod message;
pub mod metrics;
pub mod monolog;
pub mod record;
pub mod timestamp;

pub use error::{MonologError, Result};
pub use handler::{Action, ActionOutcome, Handler, HandlerOutcome};
pub use level_gated::LevelGated;
pub use level_set::LevelSet;
pub use log_level::LogLevel;
pub use message::LogMessage;
pub use metrics::{HandlerMetrics, Metered};
pub use monolog::{Monolog, MonologBuilder};
pub use record::Record;
pub use timestamp::TimestampFormat;

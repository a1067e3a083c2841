//! Handler implementations

pub mod analytics;
pub mod console;
pub mod crashy;
pub mod memory;
pub mod null;

pub use analytics::{AnalyticsHandler, TrackedEvent, TrackedScreen, Tracker};
pub use console::{ConsoleHandler, ConsoleStream, OutputFormat};
pub use crashy::CrashyHandler;
pub use memory::{CapturedRecord, MemoryHandler};
pub use null::NullHandler;

pub use crate::core::Handler;

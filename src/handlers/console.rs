//! Console handler implementation

use crate::core::{
    Action, ActionOutcome, Handler, HandlerOutcome, LevelGated, LevelSet, LogLevel, MonologError,
    Record, Result, TimestampFormat,
};
#[cfg(feature = "console")]
use colored::Colorize;
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Line format written by [`ConsoleHandler`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// `[timestamp] [LEVEL] tag - message: cause`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Standard stream a level is written to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConsoleStream {
    Stdout,
    Stderr,
}

impl ConsoleStream {
    pub fn for_level(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace | LogLevel::Debug | LogLevel::Info | LogLevel::Warn => {
                ConsoleStream::Stdout
            }
            LogLevel::Error | LogLevel::Fatal => ConsoleStream::Stderr,
        }
    }
}

enum Target {
    Std,
    Writer(Mutex<Box<dyn Write + Send>>),
}

struct ConsoleWriter {
    tag: String,
    use_colors: bool,
    timestamp_format: Option<TimestampFormat>,
    output_format: OutputFormat,
    target: Target,
}

impl ConsoleWriter {
    /// Replace line breaks and tabs so one record is always one line.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    fn level_label(&self, level: LogLevel) -> String {
        let label = format!("{:5}", level.to_str());

        #[cfg(feature = "console")]
        {
            if self.use_colors && matches!(self.target, Target::Std) {
                return label.color(level.color_code()).to_string();
            }
        }

        label
    }

    fn format_text(&self, record: &Record<'_>) -> Result<String> {
        let mut line = String::new();

        if let Some(format) = &self.timestamp_format {
            line.push_str(&format!("[{}] ", format.now()?));
        }

        line.push_str(&format!(
            "[{}] {} - {}",
            self.level_label(record.level()),
            self.tag,
            Self::sanitize(&record.displayed_message("null"))
        ));

        if let Some(cause) = record.cause() {
            line.push_str(": ");
            line.push_str(&Self::sanitize(&cause.to_string()));
        }

        Ok(line)
    }

    fn format_json(&self, record: &Record<'_>) -> Result<String> {
        let timestamp = self.timestamp_format.as_ref().map(TimestampFormat::now).transpose()?;
        let value = serde_json::json!({
            "timestamp": timestamp,
            "level": record.level().to_str(),
            "tag": self.tag,
            "message": record.message().map(|m| m.displayed().into_owned()),
            "cause": record.cause().map(|c| c.to_string()),
        });

        Ok(serde_json::to_string(&value)?)
    }

    fn write_line(&self, level: LogLevel, line: &str) -> std::io::Result<()> {
        match &self.target {
            Target::Std => match ConsoleStream::for_level(level) {
                ConsoleStream::Stdout => writeln!(std::io::stdout().lock(), "{}", line),
                ConsoleStream::Stderr => writeln!(std::io::stderr().lock(), "{}", line),
            },
            Target::Writer(writer) => {
                let mut writer = writer.lock();
                writeln!(writer, "{}", line)?;
                writer.flush()
            }
        }
    }
}

impl Action for ConsoleWriter {
    fn act(&self, record: &Record<'_>) -> Result<ActionOutcome> {
        let line = match self.output_format {
            OutputFormat::Text => self.format_text(record)?,
            OutputFormat::Json => self.format_json(record)?,
        };

        self.write_line(record.level(), &line).map_err(|e| {
            MonologError::io_operation("writing console record", e.to_string(), e)
        })?;

        Ok(ActionOutcome::Handled)
    }
}

/// Writes records at its enabled levels to the console.
///
/// Trace through warn go to stdout, error and fatal to stderr. Messages are
/// shown by display name when they have one.
///
/// # Example
///
/// ```
/// use monolog::handlers::{ConsoleHandler, OutputFormat};
/// use monolog::{LevelSet, LogLevel};
///
/// let handler = ConsoleHandler::new("app", LevelSet::at_least(LogLevel::Info))
///     .with_colors(false)
///     .with_output_format(OutputFormat::Json);
/// ```
pub struct ConsoleHandler {
    gate: LevelGated<ConsoleWriter>,
}

impl ConsoleHandler {
    pub fn new(tag: impl Into<String>, levels: impl Into<LevelSet>) -> Self {
        let writer = ConsoleWriter {
            tag: tag.into(),
            use_colors: true,
            timestamp_format: Some(TimestampFormat::default()),
            output_format: OutputFormat::default(),
            target: Target::Std,
        };

        Self {
            gate: LevelGated::new(levels, writer).named("console"),
        }
    }

    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.gate.action_mut().use_colors = use_colors;
        self
    }

    #[must_use]
    pub fn with_output_format(mut self, format: OutputFormat) -> Self {
        self.gate.action_mut().output_format = format;
        self
    }

    #[must_use]
    pub fn with_timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.gate.action_mut().timestamp_format = Some(format);
        self
    }

    /// Set a custom timestamp format using a strftime-compatible format string
    ///
    /// An invalid format is not rejected here; every write then fails with
    /// [`MonologError::InvalidConfiguration`]. Use
    /// [`TimestampFormat::validate`] to check it up front.
    #[must_use]
    pub fn with_custom_timestamp(self, format_str: &str) -> Self {
        self.with_timestamp_format(TimestampFormat::Custom(format_str.to_string()))
    }

    #[must_use]
    pub fn without_timestamp(mut self) -> Self {
        self.gate.action_mut().timestamp_format = None;
        self
    }

    /// Write every line to `writer` instead of stdout/stderr.
    ///
    /// Colors are never applied to a custom writer.
    #[must_use]
    pub fn with_writer<W: Write + Send + 'static>(mut self, writer: W) -> Self {
        self.gate.action_mut().target = Target::Writer(Mutex::new(Box::new(writer)));
        self
    }

    pub fn tag(&self) -> &str {
        &self.gate.action().tag
    }

    /// Whether level labels are colored. Only takes effect on the standard
    /// streams with the `console` feature enabled.
    pub fn uses_colors(&self) -> bool {
        self.gate.action().use_colors
    }

    pub fn levels(&self) -> LevelSet {
        self.gate.levels()
    }
}

impl Handler for ConsoleHandler {
    fn dispatch(&self, record: &Record<'_>) -> Result<HandlerOutcome> {
        self.gate.dispatch(record)
    }

    fn name(&self) -> &str {
        self.gate.name()
    }
}

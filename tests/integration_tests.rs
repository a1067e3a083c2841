//! Integration tests for the logging facade
//!
//! These tests verify:
//! - Chain ordering and short-circuiting
//! - The unhandled-record policy
//! - Level gating through the public API
//! - Error propagation out of handlers
//! - Configuration files

use monolog::handlers::{AnalyticsHandler, MemoryHandler, TrackedEvent, TrackedScreen, Tracker};
use monolog::prelude::*;
use parking_lot::Mutex;
use std::fs;
use std::io;
use std::panic::AssertUnwindSafe;
use std::sync::Arc;
use tempfile::TempDir;

/// Records every action invocation so tests can check who ran.
fn tracing_action(
    name: &'static str,
    outcome: ActionOutcome,
    trail: &Arc<Mutex<Vec<&'static str>>>,
) -> impl Fn(&Record<'_>) -> monolog::Result<ActionOutcome> + Send + Sync {
    let trail = Arc::clone(trail);
    move |_record: &Record<'_>| -> monolog::Result<ActionOutcome> {
        trail.lock().push(name);
        Ok(outcome)
    }
}

#[test]
fn test_disk_full_scenario() {
    // A is enabled for {error}, B for {error, fatal}; nothing else is allowed through.
    let trail = Arc::new(Mutex::new(Vec::new()));
    let a = LevelGated::from_fn(
        [LogLevel::Error],
        tracing_action("A", ActionOutcome::Handled, &trail),
    );
    let b = LevelGated::from_fn(
        [LogLevel::Error, LogLevel::Fatal],
        tracing_action("B", ActionOutcome::Handled, &trail),
    );

    let logger = Monolog::builder()
        .handler(a)
        .handler(b)
        .allow_unhandled(false)
        .build()
        .expect("two handlers");

    logger
        .emit(LogLevel::Error, Some(&"disk full"), None)
        .expect("error is handled");
    assert_eq!(*trail.lock(), vec!["A", "B"]);

    let err = logger
        .emit(LogLevel::Info, Some(&"starting"), None)
        .expect_err("info has no handler");
    assert!(matches!(err, MonologError::Unhandled { level: LogLevel::Info }));
    assert_eq!(*trail.lock(), vec!["A", "B"], "no action may run for info");
}

#[test]
fn test_finished_stops_later_handlers() {
    let first = Arc::new(MemoryHandler::with_outcome(
        LevelSet::all(),
        ActionOutcome::Finished,
    ));
    let second = Arc::new(MemoryHandler::new(LevelSet::all()));

    let logger = Monolog::builder()
        .handler(Arc::clone(&first))
        .handler(Arc::clone(&second))
        .allow_unhandled(false)
        .build()
        .unwrap();

    logger.warn("only once").unwrap();

    assert_eq!(first.len(), 1);
    assert!(second.is_empty());
}

#[test]
fn test_finished_without_prior_claim_is_not_unhandled() {
    let skipped = Arc::new(MemoryHandler::new([LogLevel::Fatal]));
    let finisher = Arc::new(MemoryHandler::with_outcome(
        [LogLevel::Debug],
        ActionOutcome::Finished,
    ));
    let never = Arc::new(MemoryHandler::new(LevelSet::all()));

    let logger = Monolog::builder()
        .handler(Arc::clone(&skipped))
        .handler(Arc::clone(&finisher))
        .handler(Arc::clone(&never))
        .allow_unhandled(false)
        .build()
        .unwrap();

    logger.debug("finish me").unwrap();
    assert!(skipped.is_empty());
    assert_eq!(finisher.len(), 1);
    assert!(never.is_empty());
}

#[test]
fn test_every_handler_runs_when_handled() {
    let handlers: Vec<Arc<MemoryHandler>> = (0..4)
        .map(|i| {
            let levels = if i % 2 == 0 {
                LevelSet::all()
            } else {
                LevelSet::empty()
            };
            Arc::new(MemoryHandler::new(levels))
        })
        .collect();

    let mut builder = Monolog::builder().allow_unhandled(false);
    for handler in &handlers {
        builder = builder.handler(Arc::clone(handler));
    }
    let logger = builder.build().unwrap();

    logger.info("broadcast").unwrap();
    let counts: Vec<usize> = handlers.iter().map(|h| h.len()).collect();
    assert_eq!(counts, vec![1, 0, 1, 0]);
}

#[test]
fn test_lenient_policy_drops_unclaimed_records() {
    let memory = Arc::new(MemoryHandler::new([LogLevel::Error]));
    let logger = Monolog::new(vec![Box::new(Arc::clone(&memory))]).unwrap();

    for level in LogLevel::ALL {
        logger.log(level, "anything").unwrap();
    }
    assert_eq!(memory.levels_seen(), vec![LogLevel::Error]);
}

#[test]
fn test_empty_chain_is_a_configuration_error() {
    for allow in [true, false] {
        let err = Monolog::with_policy(Vec::new(), allow).unwrap_err();
        assert!(matches!(err, MonologError::InvalidConfiguration { .. }));
    }
}

#[test]
fn test_crashy_handler_aborts_the_call() {
    let before = Arc::new(MemoryHandler::new(LevelSet::all()));
    let after = Arc::new(MemoryHandler::new(LevelSet::all()));

    let logger = Monolog::builder()
        .handler(Arc::clone(&before))
        .handler(CrashyHandler::new([LogLevel::Error, LogLevel::Fatal]))
        .handler(Arc::clone(&after))
        .build()
        .unwrap();

    let cause = io::Error::new(io::ErrorKind::Other, "ENOSPC");
    let err = logger.error_with_cause("disk full", &cause).unwrap_err();

    match err {
        MonologError::Crashed { message, cause } => {
            assert_eq!(message, "disk full");
            assert_eq!(cause.as_deref(), Some("ENOSPC"));
        }
        other => panic!("expected crash, got {:?}", other),
    }
    assert_eq!(before.len(), 1);
    assert!(after.is_empty(), "handlers after a failure must not run");

    logger.info("still fine").unwrap();
    assert_eq!(after.len(), 1);
}

#[test]
fn test_metered_handler_counts_outcomes() {
    let metered = Metered::new(NullHandler::new([LogLevel::Warn, LogLevel::Error]));
    let metrics = metered.metrics();
    let logger = Monolog::new(vec![Box::new(metered)]).unwrap();

    logger.info("a").unwrap();
    logger.warn("b").unwrap();
    logger.error("c").unwrap();

    assert_eq!(metrics.passed_count(), 1);
    assert_eq!(metrics.handled_count(), 2);
    assert_eq!(metrics.total(), 3);
}

#[test]
fn test_record_identity_seen_by_handlers() {
    let memory = Arc::new(MemoryHandler::new(LevelSet::all()));
    let logger = Monolog::builder()
        .handler(Arc::clone(&memory))
        .build()
        .unwrap();

    logger.trace(TrackedScreen::new("Checkout")).unwrap();
    logger.emit(LogLevel::Warn, None, None).unwrap();

    let records = memory.records();
    assert_eq!(records[0].display_name.as_deref(), Some("Checkout"));
    assert_eq!(records[1].message, None);
    assert_eq!(records[1].cause, None);
}

#[test]
fn test_analytics_in_chain() {
    #[derive(Default)]
    struct Counting {
        exceptions: Mutex<Vec<(String, bool)>>,
    }

    impl Tracker for Counting {
        fn send_exception(&self, description: &str, fatal: bool) -> monolog::Result<()> {
            self.exceptions.lock().push((description.to_string(), fatal));
            Ok(())
        }

        fn send_screen(&self, _name: &str) -> monolog::Result<()> {
            Ok(())
        }

        fn send_event(&self, _event: &TrackedEvent) -> monolog::Result<()> {
            Ok(())
        }
    }

    let analytics = Arc::new(AnalyticsHandler::new(Counting::default()));
    let logger = Monolog::builder()
        .handler(Arc::clone(&analytics))
        .allow_unhandled(false)
        .build()
        .unwrap();

    logger.fatal("out of memory").unwrap();
    assert!(logger.info("not reported").unwrap_err().is_unhandled());
    assert_eq!(
        *analytics.tracker().exceptions.lock(),
        vec![("out of memory".to_string(), true)]
    );
}

#[test]
fn test_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("monolog.json");
    fs::write(
        &path,
        r#"{
            "allow_unhandled": false,
            "handlers": [
                { "kind": "crashy", "levels": ["fatal"] },
                { "kind": "null", "levels": "trace,debug,info,warn,error" }
            ]
        }"#,
    )
    .expect("Failed to write config");

    let logger = MonologConfig::from_file(&path)
        .expect("valid config")
        .build()
        .expect("non-empty chain");

    for level in [
        LogLevel::Trace,
        LogLevel::Debug,
        LogLevel::Info,
        LogLevel::Warn,
        LogLevel::Error,
    ] {
        logger.log(level, "ok").unwrap();
    }
    assert!(matches!(
        logger.fatal("boom"),
        Err(MonologError::Crashed { .. })
    ));
}

#[test]
fn test_absent_message_at_every_level() {
    let memory = Arc::new(MemoryHandler::new(LevelSet::all()));
    let logger = Monolog::builder()
        .handler(Arc::clone(&memory))
        .allow_unhandled(false)
        .build()
        .unwrap();
    let cause = io::Error::new(io::ErrorKind::Other, "reset");

    for level in LogLevel::ALL {
        logger.emit(level, None, Some(&cause)).unwrap();
    }

    let records = memory.records();
    assert_eq!(records.len(), LogLevel::ALL.len());
    assert!(records.iter().all(|r| r.message.is_none()));
    assert!(records.iter().all(|r| r.cause.as_deref() == Some("reset")));
}

#[test]
fn test_bad_timestamp_config_file_is_rejected() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("monolog.json");
    fs::write(
        &path,
        r#"{
            "handlers": [
                { "kind": "console", "tag": "app", "levels": "*", "timestamp": { "custom": "%Q" } }
            ]
        }"#,
    )
    .expect("Failed to write config");

    let err = MonologConfig::from_file(&path).unwrap_err();
    assert!(matches!(err, MonologError::InvalidConfiguration { .. }));
}

#[test]
fn test_bad_timestamp_in_code_fails_calls_without_panicking() {
    let logger = Monolog::builder()
        .handler(
            ConsoleHandler::new("app", LevelSet::all())
                .with_custom_timestamp("%Q")
                .with_writer(io::sink()),
        )
        .build()
        .unwrap();

    let result = std::panic::catch_unwind(AssertUnwindSafe(|| logger.info("hello")));
    let err = result.expect("logging must not panic").unwrap_err();
    assert!(matches!(err, MonologError::InvalidConfiguration { .. }));
}

#[test]
fn test_missing_config_file() {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let err = MonologConfig::from_file(temp_dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, MonologError::IoOperation { .. }));
    assert!(err.to_string().contains("absent.json"));
}

//! Property-based tests for monolog using proptest

use monolog::prelude::*;
use proptest::prelude::*;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn any_level() -> impl Strategy<Value = LogLevel> {
    prop_oneof![
        Just(LogLevel::Trace),
        Just(LogLevel::Debug),
        Just(LogLevel::Info),
        Just(LogLevel::Warn),
        Just(LogLevel::Error),
        Just(LogLevel::Fatal),
    ]
}

fn any_level_set() -> impl Strategy<Value = LevelSet> {
    prop::collection::vec(any_level(), 0..6).prop_map(|levels| levels.into_iter().collect())
}

fn any_action_outcome() -> impl Strategy<Value = ActionOutcome> {
    prop_oneof![Just(ActionOutcome::Handled), Just(ActionOutcome::Finished)]
}

// ============================================================================
// LogLevel / LevelSet Tests
// ============================================================================

proptest! {
    /// Test that LogLevel string conversions roundtrip correctly
    #[test]
    fn test_log_level_str_roundtrip(level in any_level()) {
        let parsed: LogLevel = level.to_str().parse().unwrap();
        prop_assert_eq!(level, parsed);

        let lower: LogLevel = level.to_str().to_lowercase().parse().unwrap();
        prop_assert_eq!(level, lower);
    }

    /// Test that LogLevel Display matches to_str
    #[test]
    fn test_log_level_display(level in any_level()) {
        prop_assert_eq!(format!("{}", level), level.to_str());
    }

    /// Test that arbitrary strings never panic the level parser
    #[test]
    fn test_log_level_parse_no_panic(s in "\\PC*") {
        let _ = s.parse::<LogLevel>();
        let _ = s.parse::<LevelSet>();
    }

    /// Membership is exactly the levels that were inserted
    #[test]
    fn test_level_set_membership(levels in prop::collection::vec(any_level(), 0..10)) {
        let set: LevelSet = levels.iter().copied().collect();

        for level in LogLevel::ALL {
            prop_assert_eq!(set.contains(level), levels.contains(&level));
        }
        prop_assert_eq!(set.is_empty(), levels.is_empty());
        prop_assert!(set.len() <= LogLevel::ALL.len());
    }

    /// Test that LevelSet Display output parses back to the same set
    #[test]
    fn test_level_set_display_roundtrip(set in any_level_set()) {
        let text = set.to_string();
        let inner = text.trim_start_matches('{').trim_end_matches('}');
        let parsed: LevelSet = inner.parse().unwrap();
        prop_assert_eq!(set, parsed);
    }

    /// Test that LevelSet survives a JSON roundtrip
    #[test]
    fn test_level_set_serde(set in any_level_set()) {
        let json = serde_json::to_string(&set).unwrap();
        let parsed: LevelSet = serde_json::from_str(&json).unwrap();
        prop_assert_eq!(set, parsed);
    }

    /// `at_least` is the threshold special case of a level set
    #[test]
    fn test_at_least_matches_ordering(min in any_level(), level in any_level()) {
        prop_assert_eq!(LevelSet::at_least(min).contains(level), level >= min);
    }
}

// ============================================================================
// Chain Dispatch Tests
// ============================================================================

struct Step {
    levels: LevelSet,
    outcome: ActionOutcome,
    calls: Arc<AtomicUsize>,
}

fn build_chain(plan: &[(LevelSet, ActionOutcome)], allow_unhandled: bool) -> (Monolog, Vec<Step>) {
    let steps: Vec<Step> = plan
        .iter()
        .map(|&(levels, outcome)| Step {
            levels,
            outcome,
            calls: Arc::new(AtomicUsize::new(0)),
        })
        .collect();

    let mut builder = Monolog::builder().allow_unhandled(allow_unhandled);
    for step in &steps {
        let calls = Arc::clone(&step.calls);
        let outcome = step.outcome;
        builder = builder.handler(LevelGated::from_fn(
            step.levels,
            move |_record: &Record<'_>| -> monolog::Result<ActionOutcome> {
                calls.fetch_add(1, Ordering::SeqCst);
                Ok(outcome)
            },
        ));
    }

    (builder.build().unwrap(), steps)
}

/// Reference model of a single dispatch: which steps run, and whether the
/// call succeeds.
fn expected_dispatch(steps: &[Step], level: LogLevel, allow_unhandled: bool) -> (Vec<usize>, bool) {
    let mut calls = vec![0; steps.len()];
    let mut claimed = false;

    for (i, step) in steps.iter().enumerate() {
        if !step.levels.contains(level) {
            continue;
        }
        calls[i] = 1;
        match step.outcome {
            ActionOutcome::Finished => return (calls, true),
            ActionOutcome::Handled => claimed = true,
        }
    }

    (calls, claimed || allow_unhandled)
}

proptest! {
    /// Dispatch visits handlers in order, stops at Finished, and applies the
    /// unhandled policy only when nothing claimed the record.
    #[test]
    fn test_chain_matches_model(
        plan in prop::collection::vec((any_level_set(), any_action_outcome()), 1..8),
        level in any_level(),
        allow_unhandled in any::<bool>(),
    ) {
        let (logger, steps) = build_chain(&plan, allow_unhandled);
        let (expected_calls, expected_ok) = expected_dispatch(&steps, level, allow_unhandled);

        let result = logger.log(level, "payload");

        let actual_calls: Vec<usize> = steps
            .iter()
            .map(|s| s.calls.load(Ordering::SeqCst))
            .collect();
        prop_assert_eq!(actual_calls, expected_calls);
        prop_assert_eq!(result.is_ok(), expected_ok);

        if let Err(err) = result {
            prop_assert!(err.is_unhandled());
        }
    }

    /// A disabled level never reaches an action
    #[test]
    fn test_disabled_level_never_acts(set in any_level_set(), level in any_level()) {
        prop_assume!(!set.contains(level));
        let (logger, steps) = build_chain(&[(set, ActionOutcome::Handled)], true);

        logger.log(level, "ignored").unwrap();
        prop_assert_eq!(steps[0].calls.load(Ordering::SeqCst), 0);
    }
}

// ============================================================================
// Record Tests
// ============================================================================

proptest! {
    /// Records with the same level, equal messages and the same cause are equal
    #[test]
    fn test_record_equality(level in any_level(), text in ".*", other in ".*") {
        let cause = io::Error::new(io::ErrorKind::Other, "cause");
        let a = text.clone();
        let b = text.clone();
        let c = other.clone();

        let left = Record::new(level, Some(&a), Some(&cause));
        let right = Record::new(level, Some(&b), Some(&cause));
        prop_assert_eq!(left, right);

        let changed = Record::new(level, Some(&c), Some(&cause));
        prop_assert_eq!(left == changed, text == other);
    }

    /// Causes compare by identity, even when their text matches
    #[test]
    fn test_record_cause_identity(level in any_level(), text in "[a-z]{1,12}") {
        let first = io::Error::new(io::ErrorKind::Other, text.clone());
        let second = io::Error::new(io::ErrorKind::Other, text);

        let left = Record::new(level, None, Some(&first));
        let right = Record::new(level, None, Some(&second));
        prop_assert_ne!(left, right);
    }
}

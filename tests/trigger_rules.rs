// tests/trigger_rules.rs

use gatedag::trigger::{evaluate, TriggerOutcome, UpstreamState};
use gatedag_test_utils::builders::{all_failed_map, all_success_map, StateMapBuilder};
use gatedag_test_utils::init_tracing;

/// {A: Success, B: Failed}: the canonical mixed snapshot.
fn mixed_map() -> gatedag::UpstreamStateMap {
    StateMapBuilder::new()
        .with("A", UpstreamState::Success)
        .with("B", UpstreamState::Failed)
        .build()
}

#[test]
fn all_successful_proceeds_when_all_upstreams_succeeded() {
    init_tracing();
    let map = all_success_map(&["A", "B", "C"]);

    assert_eq!(evaluate("all_successful", &map).unwrap(), TriggerOutcome::Proceed);
}

#[test]
fn all_success_snapshot_decides_each_rule_as_expected() {
    init_tracing();
    let map = all_success_map(&["A", "B"]);

    assert_eq!(evaluate("all_successful", &map).unwrap(), TriggerOutcome::Proceed);
    assert_eq!(evaluate("any_successful", &map).unwrap(), TriggerOutcome::Proceed);
    assert!(matches!(
        evaluate("all_failed", &map).unwrap(),
        TriggerOutcome::Fail(_)
    ));
    assert!(matches!(
        evaluate("any_failed", &map).unwrap(),
        TriggerOutcome::Fail(_)
    ));
}

#[test]
fn all_successful_fails_on_any_failure() {
    init_tracing();
    let map = mixed_map();

    match evaluate("all_successful", &map).unwrap() {
        TriggerOutcome::Fail(reason) => {
            assert!(reason.contains("all_successful"));
            assert!(reason.contains("not all upstream tasks succeeded"));
        }
        other => panic!("Expected Fail, got: {:?}", other),
    }
}

#[test]
fn all_failed_proceeds_only_when_every_upstream_failed() {
    init_tracing();

    let failed = all_failed_map(&["A", "B"]);
    assert_eq!(evaluate("all_failed", &failed).unwrap(), TriggerOutcome::Proceed);

    match evaluate("all_failed", &mixed_map()).unwrap() {
        TriggerOutcome::Fail(reason) => {
            assert!(reason.contains("not all upstream tasks failed"));
        }
        other => panic!("Expected Fail, got: {:?}", other),
    }
}

#[test]
fn any_rules_on_mixed_map() {
    init_tracing();
    let map = mixed_map();

    assert_eq!(evaluate("any_successful", &map).unwrap(), TriggerOutcome::Proceed);
    assert_eq!(evaluate("any_failed", &map).unwrap(), TriggerOutcome::Proceed);
}

#[test]
fn any_successful_fails_when_nothing_succeeded() {
    init_tracing();
    let map = all_failed_map(&["A", "B"]);

    match evaluate("any_successful", &map).unwrap() {
        TriggerOutcome::Fail(reason) => {
            assert!(reason.contains("no upstream tasks succeeded"));
        }
        other => panic!("Expected Fail, got: {:?}", other),
    }
}

#[test]
fn any_failed_fails_when_nothing_failed() {
    init_tracing();
    let map = all_success_map(&["A", "B"]);

    match evaluate("any_failed", &map).unwrap() {
        TriggerOutcome::Fail(reason) => {
            assert!(reason.contains("no upstream tasks failed"));
        }
        other => panic!("Expected Fail, got: {:?}", other),
    }
}

#[test]
fn all_finished_proceeds_regardless_of_outcome_mix() {
    init_tracing();

    // Mixed successes and failures are fine as long as everything finished.
    assert_eq!(evaluate("all_finished", &mixed_map()).unwrap(), TriggerOutcome::Proceed);
}

#[test]
fn all_finished_fails_when_an_upstream_is_still_pending_or_running() {
    init_tracing();

    for unfinished in [UpstreamState::Pending, UpstreamState::Running] {
        let map = StateMapBuilder::new()
            .with("A", UpstreamState::Success)
            .with("B", unfinished)
            .build();

        match evaluate("all_finished", &map).unwrap() {
            TriggerOutcome::Fail(reason) => {
                assert!(reason.contains("not all upstream tasks finished"));
            }
            other => panic!("Expected Fail for {:?}, got: {:?}", unfinished, other),
        }
    }
}

#[test]
fn manual_only_always_declines_without_failing() {
    init_tracing();

    for map in [
        StateMapBuilder::new().build(),
        all_success_map(&["A"]),
        all_failed_map(&["A", "B"]),
        mixed_map(),
    ] {
        match evaluate("manual_only", &map).unwrap() {
            TriggerOutcome::DontRun(reason) => {
                assert!(reason.contains("manual_only"));
            }
            other => panic!("Expected DontRun, got: {:?}", other),
        }
    }
}

#[test]
fn empty_map_asymmetry_between_all_and_any() {
    init_tracing();
    let empty = StateMapBuilder::new().build();

    // Universal quantifiers are vacuously true on an empty snapshot...
    assert_eq!(evaluate("all_successful", &empty).unwrap(), TriggerOutcome::Proceed);
    assert_eq!(evaluate("all_failed", &empty).unwrap(), TriggerOutcome::Proceed);
    assert_eq!(evaluate("all_finished", &empty).unwrap(), TriggerOutcome::Proceed);

    // ...while existential ones are vacuously false.
    assert!(matches!(
        evaluate("any_successful", &empty).unwrap(),
        TriggerOutcome::Fail(_)
    ));
    assert!(matches!(
        evaluate("any_failed", &empty).unwrap(),
        TriggerOutcome::Fail(_)
    ));
}

#[test]
fn skipped_counts_as_success_and_trigger_failed_as_failure() {
    init_tracing();

    let skipped_only = StateMapBuilder::new()
        .with("A", UpstreamState::Success)
        .with("B", UpstreamState::Skipped)
        .build();
    assert_eq!(
        evaluate("all_successful", &skipped_only).unwrap(),
        TriggerOutcome::Proceed
    );
    assert!(matches!(
        evaluate("any_failed", &skipped_only).unwrap(),
        TriggerOutcome::Fail(_)
    ));

    let trigger_failed = StateMapBuilder::new()
        .with("A", UpstreamState::Failed)
        .with("B", UpstreamState::TriggerFailed)
        .build();
    assert_eq!(
        evaluate("all_failed", &trigger_failed).unwrap(),
        TriggerOutcome::Proceed
    );
    assert!(matches!(
        evaluate("any_successful", &trigger_failed).unwrap(),
        TriggerOutcome::Fail(_)
    ));
}

#[test]
fn state_predicates_partition_finished_states() {
    init_tracing();

    let finished = [
        UpstreamState::Success,
        UpstreamState::Failed,
        UpstreamState::Skipped,
        UpstreamState::TriggerFailed,
    ];

    for state in finished {
        assert!(state.is_finished(), "{state:?} should be finished");
        assert!(
            state.is_successful() != state.is_failed(),
            "{state:?} must be exactly one of successful/failed"
        );
    }

    for state in [UpstreamState::Pending, UpstreamState::Running] {
        assert!(!state.is_finished());
        assert!(!state.is_successful());
        assert!(!state.is_failed());
    }
}

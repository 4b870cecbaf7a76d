// src/trigger/rules.rs

//! The rule functions.
//!
//! Each rule is a pure function over the upstream state snapshot. Reason
//! strings name the rule and the violated condition so the scheduler can
//! record them verbatim on the task.

use crate::trigger::outcome::TriggerOutcome;
use crate::trigger::state::UpstreamStateMap;

/// Proceeds as long as every upstream task is finished, whatever the mix of
/// successes and failures.
///
/// The finishedness check is a precondition rather than a policy: the caller
/// is supposed to invoke triggers only once all upstream tasks have reached a
/// terminal state, so an unfinished entry here is a scheduler bug. It
/// degrades to `Fail` (not a silent skip) to surface that early.
pub fn all_finished(upstream: &UpstreamStateMap) -> TriggerOutcome {
    if !upstream.values().all(|s| s.is_finished()) {
        return TriggerOutcome::Fail(
            "trigger was \"all_finished\" but not all upstream tasks finished".to_string(),
        );
    }
    TriggerOutcome::Proceed
}

/// Never runs automatically.
///
/// The task can still be run by an operator-initiated override, but that
/// override must short-circuit before trigger evaluation; this rule itself
/// unconditionally declines, without marking the task as failed.
pub fn manual_only(_upstream: &UpstreamStateMap) -> TriggerOutcome {
    TriggerOutcome::DontRun("trigger is manual_only".to_string())
}

/// Proceeds if all upstream tasks were successful.
///
/// Skipped counts as success, TriggerFailed as failure. Vacuously true on an
/// empty map.
pub fn all_successful(upstream: &UpstreamStateMap) -> TriggerOutcome {
    if !upstream.values().all(|s| s.is_successful()) {
        return TriggerOutcome::Fail(
            "trigger was \"all_successful\" but not all upstream tasks succeeded".to_string(),
        );
    }
    TriggerOutcome::Proceed
}

/// Proceeds if all upstream tasks failed. Vacuously true on an empty map.
pub fn all_failed(upstream: &UpstreamStateMap) -> TriggerOutcome {
    if !upstream.values().all(|s| s.is_failed()) {
        return TriggerOutcome::Fail(
            "trigger was \"all_failed\" but not all upstream tasks failed".to_string(),
        );
    }
    TriggerOutcome::Proceed
}

/// Proceeds if at least one upstream task was successful.
///
/// Vacuously false on an empty map: with nothing upstream there is no success
/// to observe, so the rule fails.
pub fn any_successful(upstream: &UpstreamStateMap) -> TriggerOutcome {
    if !upstream.values().any(|s| s.is_successful()) {
        return TriggerOutcome::Fail(
            "trigger was \"any_successful\" but no upstream tasks succeeded".to_string(),
        );
    }
    TriggerOutcome::Proceed
}

/// Proceeds if at least one upstream task failed. Vacuously false on an
/// empty map.
pub fn any_failed(upstream: &UpstreamStateMap) -> TriggerOutcome {
    if !upstream.values().any(|s| s.is_failed()) {
        return TriggerOutcome::Fail(
            "trigger was \"any_failed\" but no upstream tasks failed".to_string(),
        );
    }
    TriggerOutcome::Proceed
}

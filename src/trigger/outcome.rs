// src/trigger/outcome.rs

//! The three-way decision a trigger rule produces.

/// Result of evaluating a trigger rule against an upstream state snapshot.
///
/// All data-dependent negative decisions are values of this type, never
/// errors: the scheduler pattern-matches the variant to drive the task's own
/// state transition and cannot accidentally let a decision escape as an
/// unhandled error. The error channel is reserved for configuration mistakes
/// (see [`crate::errors::GatedagError::UnknownTrigger`]).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerOutcome {
    /// Begin task execution.
    Proceed,
    /// Transition the task to Skipped with the reason recorded.
    ///
    /// A deliberate skip, not an error; downstream reporting must never show
    /// it alongside failures.
    DontRun(String),
    /// Transition the task to TriggerFailed with the reason recorded.
    ///
    /// An expected, structured result of the rule's decision logic; a
    /// terminal task outcome, not an engine crash.
    Fail(String),
}

impl TriggerOutcome {
    /// Whether the task should run.
    pub fn is_proceed(&self) -> bool {
        matches!(self, TriggerOutcome::Proceed)
    }

    /// Reason attached to a `DontRun` or `Fail` decision.
    pub fn reason(&self) -> Option<&str> {
        match self {
            TriggerOutcome::Proceed => None,
            TriggerOutcome::DontRun(reason) | TriggerOutcome::Fail(reason) => Some(reason),
        }
    }
}

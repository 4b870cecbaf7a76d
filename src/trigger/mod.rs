// src/trigger/mod.rs

//! Trigger rules: pure decision functions for upstream-gated task scheduling.
//!
//! - [`state`] classifies one upstream task's condition and derives the
//!   success/failure predicates the rules are written against.
//! - [`outcome`] defines the three-way decision a rule produces.
//! - [`rules`] contains the rule functions themselves.
//! - [`catalog`] maps rule names (and aliases) to implementations and holds
//!   the construction-time [`TriggerGate`].

pub mod catalog;
pub mod outcome;
pub mod rules;
pub mod state;

pub use catalog::{evaluate, resolve, rule_names, TriggerFn, TriggerGate, DEFAULT_TRIGGER};
pub use outcome::TriggerOutcome;
pub use state::{UpstreamState, UpstreamStateMap};

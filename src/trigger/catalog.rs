// src/trigger/catalog.rs

//! Name-to-rule lookup.
//!
//! Aliases go through the same table as canonical names, so `always_run` and
//! `all_finished` are provably the same function, not copies that could
//! drift. The table is enumerable so config validation and docs can list the
//! accepted names.

use tracing::debug;

use crate::errors::{GatedagError, Result};
use crate::trigger::outcome::TriggerOutcome;
use crate::trigger::rules;
use crate::trigger::state::UpstreamStateMap;

/// Signature shared by every rule in the catalog.
pub type TriggerFn = fn(&UpstreamStateMap) -> TriggerOutcome;

/// Rule applied when a task's config names none.
pub const DEFAULT_TRIGGER: &str = "all_successful";

/// Canonical rules, in the order they are documented.
const RULES: &[(&str, TriggerFn)] = &[
    ("all_successful", rules::all_successful),
    ("all_failed", rules::all_failed),
    ("any_successful", rules::any_successful),
    ("any_failed", rules::any_failed),
    ("all_finished", rules::all_finished),
    ("manual_only", rules::manual_only),
];

/// Alias -> canonical name.
const ALIASES: &[(&str, &str)] = &[
    ("always_run", "all_finished"),
    ("never_run", "manual_only"),
];

/// Resolve a name (canonical or alias) to its canonical table entry.
fn lookup(name: &str) -> Option<(&'static str, TriggerFn)> {
    let canonical = match RULES.iter().find(|(n, _)| *n == name) {
        Some((n, _)) => *n,
        None => {
            let (_, target) = ALIASES.iter().find(|(alias, _)| *alias == name)?;
            *target
        }
    };
    RULES
        .iter()
        .find(|(n, _)| *n == canonical)
        .map(|(n, rule)| (*n, *rule))
}

/// Resolve a rule name to its implementation.
///
/// Unknown names are a configuration mistake, reported as
/// [`GatedagError::UnknownTrigger`], never as a `Fail` outcome.
pub fn resolve(name: &str) -> Result<TriggerFn> {
    lookup(name)
        .map(|(_, rule)| rule)
        .ok_or_else(|| GatedagError::UnknownTrigger(name.to_string()))
}

/// All accepted rule names: canonical names first, then aliases.
pub fn rule_names() -> impl Iterator<Item = &'static str> {
    RULES
        .iter()
        .map(|(name, _)| *name)
        .chain(ALIASES.iter().map(|(alias, _)| *alias))
}

/// Evaluate a named rule against an upstream state snapshot.
///
/// This is the sole evaluation entry point for callers that keep the rule as
/// a config string. Schedulers that resolve rules once per flow should prefer
/// [`TriggerGate`], which moves the name lookup to construction time.
pub fn evaluate(rule_name: &str, upstream: &UpstreamStateMap) -> Result<TriggerOutcome> {
    Ok(TriggerGate::new(rule_name)?.check(upstream))
}

/// A trigger rule resolved at flow-construction time.
///
/// `new` performs the catalog lookup, so a misspelled rule name in config
/// surfaces when the flow is built rather than when the task first becomes
/// runnable. `check` is pure and cheap; a gate can be shared across threads
/// and evaluated concurrently.
#[derive(Debug, Clone, Copy)]
pub struct TriggerGate {
    name: &'static str,
    rule: TriggerFn,
}

impl TriggerGate {
    /// Look up a rule by canonical name or alias.
    pub fn new(name: &str) -> Result<Self> {
        let (canonical, rule) = lookup(name)
            .ok_or_else(|| GatedagError::UnknownTrigger(name.to_string()))?;
        Ok(Self {
            name: canonical,
            rule,
        })
    }

    /// Canonical name of the bound rule (aliases are normalised away).
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Apply the bound rule to an upstream state snapshot.
    pub fn check(&self, upstream: &UpstreamStateMap) -> TriggerOutcome {
        let outcome = (self.rule)(upstream);

        match &outcome {
            TriggerOutcome::Proceed => {
                debug!(rule = self.name, upstream = upstream.len(), "trigger passed");
            }
            TriggerOutcome::DontRun(reason) => {
                debug!(rule = self.name, reason = %reason, "trigger declined to run");
            }
            TriggerOutcome::Fail(reason) => {
                debug!(rule = self.name, reason = %reason, "trigger failed");
            }
        }

        outcome
    }
}

impl Default for TriggerGate {
    fn default() -> Self {
        TriggerGate::new(DEFAULT_TRIGGER).expect("default trigger always resolves")
    }
}

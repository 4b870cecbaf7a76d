// src/lib.rs

//! Trigger gating for DAG task schedulers.
//!
//! A scheduler that tracks task states and dependency graphs calls into this
//! crate at one branch point: a task's upstream dependencies have all
//! reached some state, and the task's configured trigger rule decides
//! whether it runs, is skipped, or is marked trigger-failed. Everything else
//! (state persistence, retries, topological scheduling, execution) belongs
//! to the embedding engine.

pub mod config;
pub mod errors;
pub mod logging;
pub mod trigger;

use std::collections::HashMap;

use tracing::debug;

use crate::config::ConfigFile;
use crate::errors::Result;
use crate::trigger::TriggerGate;

pub use crate::trigger::{evaluate, TriggerOutcome, UpstreamState, UpstreamStateMap};

/// Canonical task name type used throughout the crate.
pub type TaskName = String;

/// Resolve every task's trigger rule up front.
///
/// This is the construction-time pass an embedding scheduler runs once per
/// flow: each task gets a [`TriggerGate`] bound to its effective rule
/// (its own `trigger`, or `[config].default_trigger`). Rule names were
/// already checked during config validation, so on a validated
/// [`ConfigFile`] this cannot fail; the `Result` is kept for callers that
/// assemble configs programmatically.
pub fn build_gates(cfg: &ConfigFile) -> Result<HashMap<TaskName, TriggerGate>> {
    let default = cfg.config.default_trigger.as_str();
    let mut gates = HashMap::new();

    for (name, task) in cfg.task.iter() {
        let rule = task.effective_trigger(default);
        let gate = TriggerGate::new(rule)?;
        debug!(task = %name, rule = gate.name(), "bound trigger gate");
        gates.insert(name.clone(), gate);
    }

    Ok(gates)
}

/// Names of tasks with no `after` dependencies.
///
/// Schedulers typically seed a flow run from these.
pub fn root_tasks(cfg: &ConfigFile) -> Vec<TaskName> {
    cfg.task
        .iter()
        .filter(|(_, task)| task.after.is_empty())
        .map(|(name, _)| name.clone())
        .collect()
}

// src/config/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::config::model::{ConfigFile, RawConfigFile};
use crate::errors::{GatedagError, Result};
use crate::trigger::{self, TriggerGate};

impl TryFrom<RawConfigFile> for ConfigFile {
    type Error = crate::errors::GatedagError;

    fn try_from(raw: RawConfigFile) -> std::result::Result<Self, Self::Error> {
        validate_raw_config(&raw)?;
        Ok(ConfigFile::new_unchecked(raw.config, raw.task))
    }
}

fn validate_raw_config(cfg: &RawConfigFile) -> Result<()> {
    ensure_has_tasks(cfg)?;
    validate_triggers(cfg)?;
    validate_task_dependencies(cfg)?;
    validate_dag(cfg)?;
    Ok(())
}

fn ensure_has_tasks(cfg: &RawConfigFile) -> Result<()> {
    if cfg.task.is_empty() {
        return Err(GatedagError::ConfigError(
            "config must contain at least one [task.<name>] section".to_string(),
        ));
    }
    Ok(())
}

/// Every trigger name, including the global default, must resolve in the
/// catalog. A misspelled rule is a config bug and has to surface here, at
/// construction time, not when the task first becomes runnable.
fn validate_triggers(cfg: &RawConfigFile) -> Result<()> {
    if TriggerGate::new(&cfg.config.default_trigger).is_err() {
        return Err(GatedagError::ConfigError(format!(
            "[config].default_trigger names unknown trigger rule '{}' (known rules: {})",
            cfg.config.default_trigger,
            known_rules(),
        )));
    }

    for (name, task) in cfg.task.iter() {
        if let Some(rule) = task.trigger.as_deref() {
            if TriggerGate::new(rule).is_err() {
                return Err(GatedagError::ConfigError(format!(
                    "task '{}' names unknown trigger rule '{}' (known rules: {})",
                    name,
                    rule,
                    known_rules(),
                )));
            }
        }
    }
    Ok(())
}

fn known_rules() -> String {
    trigger::rule_names().collect::<Vec<_>>().join(", ")
}

fn validate_task_dependencies(cfg: &RawConfigFile) -> Result<()> {
    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            if !cfg.task.contains_key(dep) {
                return Err(GatedagError::ConfigError(format!(
                    "task '{}' has unknown dependency '{}' in `after`",
                    name, dep
                )));
            }
            if dep == name {
                return Err(GatedagError::ConfigError(format!(
                    "task '{}' cannot depend on itself in `after`",
                    name
                )));
            }
        }
    }
    Ok(())
}

fn validate_dag(cfg: &RawConfigFile) -> Result<()> {
    // Build a simple petgraph graph from the tasks and their dependencies.
    //
    // Edge direction: dep -> task
    // For:
    //   [task.B]
    //   after = ["A"]
    // we add edge A -> B.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for name in cfg.task.keys() {
        graph.add_node(name.as_str());
    }

    for (name, task) in cfg.task.iter() {
        for dep in task.after.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    // A topological sort will fail if there is a cycle.
    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => {
            let node = cycle.node_id();
            Err(GatedagError::DagCycle(format!(
                "cycle detected in task DAG involving task '{}'",
                node
            )))
        }
    }
}

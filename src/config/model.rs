// src/config/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

use crate::trigger::DEFAULT_TRIGGER;

/// Top-level configuration as read from a TOML file, before validation.
///
/// ```toml
/// [config]
/// default_trigger = "all_successful"
///
/// [task.deploy]
/// after = ["build", "test"]
///
/// [task.cleanup]
/// after = ["deploy"]
/// trigger = "all_finished"
/// ```
///
/// All sections are optional and have defaults.
#[derive(Debug, Clone, Deserialize)]
pub struct RawConfigFile {
    /// Global behaviour config from `[config]`.
    #[serde(default)]
    pub config: ConfigSection,

    /// All tasks from `[task.<name>]`.
    ///
    /// Keys are the *task names* (e.g. `"build"`, `"deploy"`).
    #[serde(default)]
    pub task: BTreeMap<String, TaskConfig>,
}

/// Validated configuration.
///
/// Can only be obtained through `ConfigFile::try_from(raw)` (see
/// `validate.rs`), so holding one is proof that every trigger name resolves
/// and the dependency graph is a DAG.
#[derive(Debug, Clone)]
pub struct ConfigFile {
    pub config: ConfigSection,
    pub task: BTreeMap<String, TaskConfig>,
}

impl ConfigFile {
    /// Construct without validation. Only `validate.rs` should call this,
    /// after the checks have passed.
    pub(crate) fn new_unchecked(
        config: ConfigSection,
        task: BTreeMap<String, TaskConfig>,
    ) -> Self {
        Self { config, task }
    }
}

/// `[config]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ConfigSection {
    /// Trigger rule applied to tasks that do not name one.
    #[serde(default = "default_trigger_name")]
    pub default_trigger: String,
}

fn default_trigger_name() -> String {
    DEFAULT_TRIGGER.to_string()
}

impl Default for ConfigSection {
    fn default() -> Self {
        Self {
            default_trigger: default_trigger_name(),
        }
    }
}

/// `[task.<name>]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TaskConfig {
    /// Upstream dependencies: this task is gated on the tasks listed here.
    ///
    /// This is the TOML `after = ["A", "B"]` field.
    #[serde(default)]
    pub after: Vec<String>,

    /// Optional per-task trigger rule name (canonical name or alias).
    ///
    /// If `None`, the task uses `[config].default_trigger`.
    #[serde(default)]
    pub trigger: Option<String>,
}

impl TaskConfig {
    /// The trigger name this task actually uses, given the configured default.
    pub fn effective_trigger<'a>(&'a self, default: &'a str) -> &'a str {
        self.trigger.as_deref().unwrap_or(default)
    }
}

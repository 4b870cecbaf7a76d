#![allow(dead_code)]

use std::collections::BTreeMap;
use gatedag::config::{ConfigFile, ConfigSection, RawConfigFile, TaskConfig};
use gatedag::{UpstreamState, UpstreamStateMap};

/// Builder for `ConfigFile` to simplify test setup.
pub struct ConfigFileBuilder {
    config: RawConfigFile,
}

impl ConfigFileBuilder {
    pub fn new() -> Self {
        Self {
            config: RawConfigFile {
                config: ConfigSection::default(),
                task: BTreeMap::new(),
            },
        }
    }

    pub fn with_task(mut self, name: &str, task: TaskConfig) -> Self {
        self.config.task.insert(name.to_string(), task);
        self
    }

    pub fn with_default_trigger(mut self, rule: &str) -> Self {
        self.config.config.default_trigger = rule.to_string();
        self
    }

    pub fn build(self) -> ConfigFile {
        ConfigFile::try_from(self.config).expect("Failed to build valid config from builder")
    }

    /// Like `build`, but surfaces the validation error instead of panicking.
    pub fn try_build(self) -> gatedag::errors::Result<ConfigFile> {
        ConfigFile::try_from(self.config)
    }
}

impl Default for ConfigFileBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for `TaskConfig`.
pub struct TaskConfigBuilder {
    task: TaskConfig,
}

impl TaskConfigBuilder {
    pub fn new() -> Self {
        Self {
            task: TaskConfig {
                after: vec![],
                trigger: None,
            },
        }
    }

    pub fn after(mut self, dep: &str) -> Self {
        self.task.after.push(dep.to_string());
        self
    }

    pub fn trigger(mut self, rule: &str) -> Self {
        self.task.trigger = Some(rule.to_string());
        self
    }

    pub fn build(self) -> TaskConfig {
        self.task
    }
}

impl Default for TaskConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for upstream state snapshots.
pub struct StateMapBuilder {
    map: UpstreamStateMap,
}

impl StateMapBuilder {
    pub fn new() -> Self {
        Self {
            map: UpstreamStateMap::new(),
        }
    }

    pub fn with(mut self, task: &str, state: UpstreamState) -> Self {
        self.map.insert(task.to_string(), state);
        self
    }

    pub fn build(self) -> UpstreamStateMap {
        self.map
    }
}

impl Default for StateMapBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// A snapshot where every named task succeeded.
pub fn all_success_map(tasks: &[&str]) -> UpstreamStateMap {
    tasks
        .iter()
        .map(|t| (t.to_string(), UpstreamState::Success))
        .collect()
}

/// A snapshot where every named task failed.
pub fn all_failed_map(tasks: &[&str]) -> UpstreamStateMap {
    tasks
        .iter()
        .map(|t| (t.to_string(), UpstreamState::Failed))
        .collect()
}

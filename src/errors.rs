// src/errors.rs

//! Crate-wide error aliases and helpers.
//!
//! Trigger decisions (`Fail`/`DontRun`) are ordinary values of
//! [`crate::trigger::TriggerOutcome`] and never travel this channel; errors
//! here indicate configuration or caller mistakes.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GatedagError {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("Unknown trigger rule: {0}")]
    UnknownTrigger(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Cycle detected in DAG: {0}")]
    DagCycle(String),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub use anyhow::Error;
pub type Result<T> = std::result::Result<T, GatedagError>;

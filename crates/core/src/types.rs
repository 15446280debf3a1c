//! Core data types shared across the engine.

use serde::{Deserialize, Serialize};

/// A project directory declared in `fed.json`.
///
/// Only `name` and `groups` are interpreted by the engine; every other key on
/// the record is kept verbatim in `extra` so modules can read it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Directory {
    pub name: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub groups: Vec<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl Directory {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_groups(name: impl Into<String>, groups: &[&str]) -> Self {
        Self {
            name: name.into(),
            groups: groups.iter().map(|g| g.to_string()).collect(),
            ..Default::default()
        }
    }
}

/// Outcome of dispatching one command against one directory.
///
/// Returned by value from the matching handler and dropped once the directory
/// has been processed, so no flag can leak into the next iteration.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Decision {
    /// Effective command to execute; `None` launches no subprocess.
    pub command: Option<String>,
    /// Keep the invoking process's working directory instead of switching to
    /// the target directory.
    pub prevent_browse: bool,
    /// Suppress the directory banner.
    pub prevent_default_echo: bool,
    /// Terminate the whole run after this directory.
    pub stop_iteration: bool,
}

impl Decision {
    /// Pass the command through untouched, all flags down.
    pub fn passthrough(command: &str) -> Self {
        Self {
            command: Some(command.to_string()),
            ..Default::default()
        }
    }

    /// Fully handled in-process: no subprocess, no banner, stop iterating.
    pub fn handled() -> Self {
        Self {
            command: None,
            prevent_browse: true,
            prevent_default_echo: true,
            stop_iteration: true,
        }
    }
}

//! Loading of the `fed.json` directory configuration.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::{Error, Result};
use crate::graph::DirectoryGraph;
use crate::types::Directory;

pub const CONFIG_FILE: &str = "fed.json";

/// Parsed `fed.json`: an ordered list of directory records under `dirs`.
#[derive(Debug, Deserialize)]
pub struct DirsConfig {
    pub dirs: Vec<Directory>,
}

impl DirsConfig {
    /// Path of the configuration file in `dir`, if one exists.
    pub fn find(dir: &Path) -> Option<PathBuf> {
        let path = dir.join(CONFIG_FILE);
        path.is_file().then_some(path)
    }

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::Config(format!("`{CONFIG_FILE}` requires a `dirs` array: {e}"))
        })
    }

    pub fn into_graph(self) -> DirectoryGraph {
        let mut graph = DirectoryGraph::default();
        for dir in self.dirs {
            graph.register(dir);
        }
        graph
    }
}

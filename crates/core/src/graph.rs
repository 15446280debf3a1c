//! Directory and group registration and selector resolution.

use std::collections::HashMap;

use crate::error::{Error, Result};
use crate::types::Directory;

/// Stores the declared directories and the group membership derived from
/// their `groups` fields.
///
/// Directory and group names share a single selector namespace: `resolve`
/// answers each selector against groups first, then single directories.
#[derive(Debug, Default)]
pub struct DirectoryGraph {
    dirs: Vec<Directory>,
    index: HashMap<String, usize>,
    groups: HashMap<String, Vec<String>>,
}

impl DirectoryGraph {
    /// Insert a directory by name (last write wins) and append it to every
    /// group it declares, preserving insertion order within each group.
    pub fn register(&mut self, dir: Directory) {
        for group in &dir.groups {
            self.groups
                .entry(group.clone())
                .or_default()
                .push(dir.name.clone());
        }
        match self.index.get(&dir.name) {
            Some(&pos) => self.dirs[pos] = dir,
            None => {
                self.index.insert(dir.name.clone(), self.dirs.len());
                self.dirs.push(dir);
            }
        }
    }

    /// Whether the selector names a known directory or group.
    pub fn contains(&self, selector: &str) -> bool {
        self.index.contains_key(selector) || self.groups.contains_key(selector)
    }

    pub fn get(&self, name: &str) -> Option<&Directory> {
        self.index.get(name).map(|&pos| &self.dirs[pos])
    }

    pub fn is_empty(&self) -> bool {
        self.dirs.is_empty()
    }

    /// Flatten the selector list into an ordered directory sequence.
    ///
    /// A group selector contributes its full member list in registration
    /// order; a directory selector contributes that directory. The result may
    /// contain repeats; removing directories already processed is the
    /// orchestrator's job. An empty selector list resolves to all directories
    /// in declared order.
    pub fn resolve(&self, selectors: &[String]) -> Result<Vec<&Directory>> {
        if selectors.is_empty() {
            return Ok(self.dirs.iter().collect());
        }

        let mut resolved = Vec::new();
        for selector in selectors {
            if let Some(members) = self.groups.get(selector) {
                resolved.extend(members.iter().filter_map(|name| self.get(name)));
            } else if let Some(dir) = self.get(selector) {
                resolved.push(dir);
            } else {
                return Err(Error::UnknownSelector(selector.clone()));
            }
        }
        Ok(resolved)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_graph() -> DirectoryGraph {
        let mut graph = DirectoryGraph::default();
        graph.register(Directory::with_groups("frontend", &["web"]));
        graph.register(Directory::with_groups("backend", &["web", "services"]));
        graph.register(Directory::named("docs"));
        graph
    }

    fn names(dirs: &[&Directory]) -> Vec<String> {
        dirs.iter().map(|d| d.name.clone()).collect()
    }

    #[test]
    fn empty_selectors_resolve_to_all_in_declared_order() {
        let graph = sample_graph();
        let resolved = graph.resolve(&[]).unwrap();
        assert_eq!(names(&resolved), ["frontend", "backend", "docs"]);
    }

    #[test]
    fn group_selector_expands_in_registration_order() {
        let graph = sample_graph();
        let resolved = graph.resolve(&["web".to_string()]).unwrap();
        assert_eq!(names(&resolved), ["frontend", "backend"]);
    }

    #[test]
    fn mixed_selectors_may_repeat_directories() {
        let graph = sample_graph();
        let resolved = graph
            .resolve(&["backend".to_string(), "web".to_string()])
            .unwrap();
        // Dedup happens downstream, at the point of first occurrence.
        assert_eq!(names(&resolved), ["backend", "frontend", "backend"]);
    }

    #[test]
    fn unknown_selector_is_an_error() {
        let graph = sample_graph();
        let err = graph.resolve(&["missing".to_string()]).unwrap_err();
        assert!(matches!(err, Error::UnknownSelector(name) if name == "missing"));
    }

    #[test]
    fn duplicate_name_keeps_last_registration() {
        let mut graph = sample_graph();
        let mut replacement = Directory::named("docs");
        replacement
            .extra
            .insert("setup".to_string(), serde_json::json!(". env.sh"));
        graph.register(replacement);

        let docs = graph.get("docs").unwrap();
        assert_eq!(
            docs.extra.get("setup").and_then(|v| v.as_str()),
            Some(". env.sh")
        );
        // Position in the declared order is unchanged.
        let resolved = graph.resolve(&[]).unwrap();
        assert_eq!(names(&resolved), ["frontend", "backend", "docs"]);
    }

    #[test]
    fn selector_namespace_covers_groups_and_directories() {
        let graph = sample_graph();
        assert!(graph.contains("web"));
        assert!(graph.contains("docs"));
        assert!(!graph.contains("deploy"));
    }
}

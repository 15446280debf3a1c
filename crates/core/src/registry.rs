//! The `fed_modules.json` module registry.
//!
//! The registry is an ordered JSON array of `{"name": ...}` records kept in
//! two places: a global copy under the user's configuration directory and a
//! per-project copy next to `fed.json`. Names resolve against the built-in
//! factory table in [`crate::modules::builtin`]; a name that resolves to
//! nothing is reported and skipped, never fatal.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::Result;
use crate::modules::{Module, builtin};

pub const REGISTRY_FILE: &str = "fed_modules.json";

/// One registry entry: a module name resolvable to a handler.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModuleEntry {
    pub name: String,
}

/// Locations of the global and per-project registry files.
#[derive(Debug, Clone)]
pub struct ModuleRegistry {
    global_dir: PathBuf,
    local_dir: PathBuf,
}

impl ModuleRegistry {
    pub fn new(global_dir: PathBuf, local_dir: PathBuf) -> Self {
        Self {
            global_dir,
            local_dir,
        }
    }

    /// Registry rooted at the invocation directory plus the user-wide
    /// configuration location.
    pub fn from_env(cwd: &Path) -> Self {
        let global_dir = dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("/var/local"))
            .join("fed");
        Self::new(global_dir, cwd.to_path_buf())
    }

    fn path(&self, global: bool) -> PathBuf {
        let dir = if global {
            &self.global_dir
        } else {
            &self.local_dir
        };
        dir.join(REGISTRY_FILE)
    }

    fn read_entries(path: &Path) -> Vec<ModuleEntry> {
        let Ok(contents) = fs::read_to_string(path) else {
            return Vec::new();
        };
        match serde_json::from_str(&contents) {
            Ok(entries) => entries,
            Err(err) => {
                warn!(path = %path.display(), %err, "ignoring unreadable module registry");
                Vec::new()
            }
        }
    }

    /// Instantiate the registered modules, global registry first, then the
    /// per-project one, preserving each file's order. Names with no matching
    /// factory warn and are skipped.
    pub fn load(&self) -> Vec<Box<dyn Module>> {
        let mut loaded: Vec<Box<dyn Module>> = Vec::new();
        for global in [true, false] {
            for entry in Self::read_entries(&self.path(global)) {
                match builtin::create(&entry.name) {
                    Some(module) => loaded.push(module),
                    None => {
                        warn!(module = %entry.name, "module failed to load");
                        eprintln!("WARNING: unknown fed module `{}`", entry.name);
                    }
                }
            }
        }
        loaded
    }

    /// Register names not already present; returns the ones actually added.
    pub fn add(&self, names: &[String], global: bool) -> Result<Vec<String>> {
        let path = self.path(global);
        let mut entries = Self::read_entries(&path);
        let mut added = Vec::new();

        for name in names {
            if !entries.iter().any(|e| &e.name == name) {
                entries.push(ModuleEntry { name: name.clone() });
                added.push(name.clone());
            }
        }

        if !added.is_empty() {
            if let Some(parent) = path.parent() {
                fs::create_dir_all(parent)?;
            }
            fs::write(&path, serde_json::to_string(&entries)?)?;
        }
        Ok(added)
    }

    /// Unregister names; returns the ones actually removed.
    pub fn remove(&self, names: &[String], global: bool) -> Result<Vec<String>> {
        let path = self.path(global);
        let entries = Self::read_entries(&path);
        let (removed, kept): (Vec<_>, Vec<_>) = entries
            .into_iter()
            .partition(|e| names.contains(&e.name));

        let removed: Vec<String> = removed.into_iter().map(|e| e.name).collect();
        if !removed.is_empty() {
            fs::write(&path, serde_json::to_string(&kept)?)?;
        }
        Ok(removed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn registry(tmp: &tempfile::TempDir) -> ModuleRegistry {
        ModuleRegistry::new(tmp.path().join("global"), tmp.path().join("local"))
    }

    fn strings(names: &[&str]) -> Vec<String> {
        names.iter().map(|n| n.to_string()).collect()
    }

    #[test]
    fn add_creates_the_registry_file_and_dedups() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let registry = registry(&tmp);
        fs::create_dir_all(tmp.path().join("local"))?;

        let added = registry.add(&strings(&["skip-list", "skip-list"]), false)?;
        assert_eq!(added, ["skip-list"]);

        // A second add of the same name is a no-op.
        let added = registry.add(&strings(&["skip-list"]), false)?;
        assert!(added.is_empty());

        let entries =
            ModuleRegistry::read_entries(&tmp.path().join("local").join(REGISTRY_FILE));
        assert_eq!(entries.len(), 1);
        Ok(())
    }

    #[test]
    fn global_flag_selects_the_global_file() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let registry = registry(&tmp);

        registry.add(&strings(&["setup-env"]), true)?;
        // The global directory is created on demand.
        assert!(tmp.path().join("global").join(REGISTRY_FILE).is_file());
        assert!(!tmp.path().join("local").join(REGISTRY_FILE).exists());
        Ok(())
    }

    #[test]
    fn remove_round_trip() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let registry = registry(&tmp);
        fs::create_dir_all(tmp.path().join("local"))?;

        registry.add(&strings(&["setup-env", "skip-list"]), false)?;
        let removed = registry.remove(&strings(&["setup-env", "absent"]), false)?;
        assert_eq!(removed, ["setup-env"]);

        let entries =
            ModuleRegistry::read_entries(&tmp.path().join("local").join(REGISTRY_FILE));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].name, "skip-list");
        Ok(())
    }

    #[test]
    fn remove_without_a_registry_is_empty() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let removed = registry(&tmp).remove(&strings(&["setup-env"]), false)?;
        assert!(removed.is_empty());
        Ok(())
    }

    #[test]
    fn load_skips_unknown_names() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let registry = registry(&tmp);
        fs::create_dir_all(tmp.path().join("local"))?;
        registry.add(&strings(&["no-such-module", "skip-list"]), false)?;

        let loaded = registry.load();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].name(), "skip-list");
        Ok(())
    }

    #[test]
    fn load_orders_global_before_local() -> Result<()> {
        let tmp = tempfile::tempdir()?;
        let registry = registry(&tmp);
        fs::create_dir_all(tmp.path().join("local"))?;
        registry.add(&strings(&["setup-env"]), true)?;
        registry.add(&strings(&["skip-list"]), false)?;

        let loaded = registry.load();
        let names: Vec<_> = loaded.iter().map(|m| m.name()).collect();
        assert_eq!(names, ["setup-env", "skip-list"]);
        Ok(())
    }
}

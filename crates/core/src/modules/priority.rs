//! Built-in handler for the reserved `fed-*` command family.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::Result;
use crate::registry::ModuleRegistry;
use crate::types::{Decision, Directory};

use super::Module;

static RESERVED: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^fed-(list|modules|add-modules|rm-modules)").unwrap());
static VERBOSE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s(-v|--verbose)").unwrap());

/// Intercepts the reserved commands (and the empty command) ahead of every
/// other handler, so no user module or subprocess ever sees them.
///
/// A leading token that begins with the reserved prefix without being an
/// exact reserved name (`fed-listing`, say) passes through unchanged.
pub struct PriorityModule {
    registry: ModuleRegistry,
    /// User module names in chain order, for `fed-modules`.
    module_names: Vec<String>,
}

impl PriorityModule {
    pub fn new(registry: ModuleRegistry, module_names: Vec<String>) -> Self {
        Self {
            registry,
            module_names,
        }
    }

    fn usage(&self) -> Decision {
        println!("usage: fed [directories...] <command>");
        println!();
        println!("Requires a `fed.json` file at the root of the directory.");
        println!("Executes <command> in each directory listed in `fed.json`.");
        println!();
        println!("  [directories...]\tDirectories or groups to run in.");
        println!("  When not specified, iterate on all directories.");
        println!("  <command>       \tArbitrary shell command to execute.");
        println!();
        println!("Reserved `fed` commands:");
        println!("  fed [directories...] fed-list [-v|--verbose]\tList all directories.");
        println!("  fed fed-modules\tList all registered fed modules.");
        println!("  fed fed-add-modules <modules...> [-g|--global]\tRegister fed modules.");
        println!("  fed fed-rm-modules <modules...> [-g|--global]\tUnregister fed modules.");
        Decision::handled()
    }

    fn list_modules(&self) -> Decision {
        if self.module_names.is_empty() {
            println!("No fed modules registered.");
        } else {
            for name in &self.module_names {
                println!("{name}");
            }
        }
        Decision::handled()
    }

    /// One line per directory; with `-v` the full record is dumped as JSON.
    /// Runs for every resolved directory, so iteration is not stopped.
    fn list_directory(&self, command: &str, dir: &Directory) -> Result<Decision> {
        let mut msg = dir.name.clone();
        if VERBOSE.is_match(command) {
            msg.push('\n');
            msg.push_str(&serde_json::to_string_pretty(dir)?);
            msg.push('\n');
        }
        println!("{msg}");
        Ok(Decision {
            command: None,
            prevent_browse: true,
            prevent_default_echo: true,
            stop_iteration: false,
        })
    }

    fn add_modules(&self, command: &str) -> Result<Decision> {
        let added = self
            .registry
            .add(&module_args(command), is_global(command))?;
        if added.is_empty() {
            eprintln!("No module to add");
        } else {
            println!("Fed modules: \"{}\" added.", added.join(", "));
        }
        Ok(Decision::handled())
    }

    fn remove_modules(&self, command: &str) -> Result<Decision> {
        let removed = self
            .registry
            .remove(&module_args(command), is_global(command))?;
        if removed.is_empty() {
            eprintln!("No module to remove");
        } else {
            println!("Fed modules: \"{}\" removed.", removed.join(", "));
        }
        Ok(Decision::handled())
    }
}

impl Module for PriorityModule {
    fn name(&self) -> &str {
        "fed-priority"
    }

    fn can_do(&self, command: &str, _dir: &Directory) -> bool {
        command.is_empty() || RESERVED.is_match(command)
    }

    fn get_command(&self, command: &str, dir: &Directory) -> Result<Decision> {
        let trimmed = command.trim();
        if trimmed.is_empty() {
            return Ok(self.usage());
        }
        match trimmed.split_whitespace().next().unwrap_or("") {
            "fed-modules" => Ok(self.list_modules()),
            "fed-add-modules" => self.add_modules(command),
            "fed-rm-modules" => self.remove_modules(command),
            "fed-list" => self.list_directory(command, dir),
            _ => Ok(Decision::passthrough(command)),
        }
    }

    fn internal(&self) -> bool {
        true
    }
}

/// Non-option arguments after the command name.
fn module_args(command: &str) -> Vec<String> {
    command
        .split_whitespace()
        .skip(1)
        .filter(|token| !token.starts_with('-'))
        .map(|token| token.to_string())
        .collect()
}

fn is_global(command: &str) -> bool {
    command
        .split_whitespace()
        .skip(1)
        .any(|token| token == "-g" || token == "--global")
}

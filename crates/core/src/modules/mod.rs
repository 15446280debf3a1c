//! The module chain: ordered handlers that decide what runs in each
//! directory.

pub mod builtin;
mod fallback;
mod priority;

pub use fallback::FallbackModule;
pub use priority::PriorityModule;

use tracing::debug;

use crate::error::{Error, Result};
use crate::registry::ModuleRegistry;
use crate::types::{Decision, Directory};

/// A handler consulted for every (command, directory) pair.
///
/// Handlers are tried in chain order; the first one whose `can_do` answers
/// true decides the outcome for that directory and the rest are never
/// consulted. Everything a handler decides travels in the returned
/// [`Decision`]; handlers must not keep per-invocation state.
pub trait Module: Send + Sync {
    fn name(&self) -> &str;

    /// Whether this handler wants the command for this directory.
    fn can_do(&self, command: &str, dir: &Directory) -> bool;

    /// Decide the effective command and execution flags.
    fn get_command(&self, command: &str, dir: &Directory) -> Result<Decision>;

    /// Internal handlers are hidden from the `fed-modules` listing.
    fn internal(&self) -> bool {
        false
    }
}

/// First-match-wins chain: the priority handler, then user modules (most
/// recently loaded first), then the catch-all fallback.
pub struct ModuleChain {
    modules: Vec<Box<dyn Module>>,
}

impl ModuleChain {
    /// Assemble the full chain. `user_modules` is expected in load order and
    /// is reversed so the most recently loaded handler is consulted first.
    pub fn assemble(registry: ModuleRegistry, user_modules: Vec<Box<dyn Module>>) -> Self {
        Self::build(registry, user_modules, true)
    }

    /// Chain of only the priority handler, for runs without a `fed.json`.
    /// The user modules are consulted for their names only, so `fed-modules`
    /// still lists them.
    pub fn priority_only(registry: ModuleRegistry, user_modules: Vec<Box<dyn Module>>) -> Self {
        Self::build(registry, user_modules, false)
    }

    fn build(
        registry: ModuleRegistry,
        mut user_modules: Vec<Box<dyn Module>>,
        full: bool,
    ) -> Self {
        user_modules.reverse();
        let names = user_modules
            .iter()
            .map(|m| m.name().to_string())
            .collect();

        let mut modules: Vec<Box<dyn Module>> = Vec::with_capacity(user_modules.len() + 2);
        modules.push(Box::new(PriorityModule::new(registry, names)));
        if full {
            modules.extend(user_modules);
            modules.push(Box::new(FallbackModule));
        }
        Self { modules }
    }

    /// Chain from raw handlers. The caller is responsible for terminating the
    /// chain with a handler that always matches.
    pub fn from_modules(modules: Vec<Box<dyn Module>>) -> Self {
        Self { modules }
    }

    /// Whether any handler accepts the command for this directory.
    pub fn accepts(&self, command: &str, dir: &Directory) -> bool {
        self.modules.iter().any(|m| m.can_do(command, dir))
    }

    /// Walk the chain and return the first matching handler's decision.
    pub fn dispatch(&self, command: &str, dir: &Directory) -> Result<Decision> {
        for module in &self.modules {
            if module.can_do(command, dir) {
                debug!(module = module.name(), dir = %dir.name, "dispatching");
                return module.get_command(command, dir);
            }
        }
        // Unreachable with an assembled chain; the fallback always matches.
        Err(Error::Internal(format!(
            "no handler accepted command `{command}`"
        )))
    }
}

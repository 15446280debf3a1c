//! Sequencing across the resolved directory list.

use std::collections::HashSet;

use tracing::debug;

use crate::error::Result;
use crate::exec::{ExecRequest, Executor};
use crate::graph::DirectoryGraph;
use crate::modules::ModuleChain;
use crate::types::Directory;

/// Drives one run: resolve the selectors, dedup, dispatch each directory
/// through the chain, hand the outcome to the executor, stop early when a
/// handler says so.
pub struct Orchestrator<'a> {
    graph: &'a DirectoryGraph,
    chain: &'a ModuleChain,
    executor: &'a dyn Executor,
}

impl<'a> Orchestrator<'a> {
    pub fn new(
        graph: &'a DirectoryGraph,
        chain: &'a ModuleChain,
        executor: &'a dyn Executor,
    ) -> Self {
        Self {
            graph,
            chain,
            executor,
        }
    }

    pub fn run(&self, selectors: &[String], command: &str) -> Result<()> {
        let directories = self.graph.resolve(selectors)?;
        let mut done: HashSet<&str> = HashSet::new();
        let mut printed = false;

        for dir in directories {
            // A directory reachable through several selectors runs once, at
            // its first occurrence.
            if !done.insert(dir.name.as_str()) {
                debug!(dir = %dir.name, "already processed, skipping");
                continue;
            }

            let decision = self.chain.dispatch(command, dir)?;
            let banner = !decision.prevent_default_echo;
            self.executor.execute(&ExecRequest {
                command: decision.command.as_deref().unwrap_or(""),
                dir: &dir.name,
                prevent_browse: decision.prevent_browse,
                banner,
                separator: banner && printed,
            })?;
            if banner {
                printed = true;
            }

            if decision.stop_iteration {
                debug!(dir = %dir.name, "handler requested stop");
                break;
            }
        }
        Ok(())
    }
}

/// No-configuration fallback: serve the reserved commands against an empty
/// directory context, or show the usage text.
pub fn run_without_config(chain: &ModuleChain, command: &str) -> Result<()> {
    let dir = Directory::default();
    if chain.accepts(command, &dir) {
        chain.dispatch(command, &dir)?;
    } else {
        chain.dispatch("", &dir)?;
    }
    Ok(())
}

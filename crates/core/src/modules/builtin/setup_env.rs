//! Prepends a per-directory setup line to the command.

use crate::error::Result;
use crate::modules::Module;
use crate::types::{Decision, Directory};

pub const NAME: &str = "setup-env";

/// Runs the directory's `setup` metadata line ahead of the requested command
/// in the same shell invocation, e.g. sourcing an environment file before a
/// build.
pub struct SetupEnvModule;

fn setup_line(dir: &Directory) -> Option<&str> {
    dir.extra.get("setup").and_then(|value| value.as_str())
}

impl Module for SetupEnvModule {
    fn name(&self) -> &str {
        NAME
    }

    fn can_do(&self, command: &str, dir: &Directory) -> bool {
        !command.is_empty() && setup_line(dir).is_some()
    }

    fn get_command(&self, command: &str, dir: &Directory) -> Result<Decision> {
        match setup_line(dir) {
            Some(setup) => Ok(Decision::passthrough(&format!("{setup} && {command}"))),
            None => Ok(Decision::passthrough(command)),
        }
    }
}

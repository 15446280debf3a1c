//! Catch-all handler terminating every dispatch.

use crate::error::Result;
use crate::types::{Decision, Directory};

use super::Module;

/// Always matches and passes the command through with all flags down,
/// guaranteeing the chain ends with a decision.
pub struct FallbackModule;

impl Module for FallbackModule {
    fn name(&self) -> &str {
        "fed-fallback"
    }

    fn can_do(&self, _command: &str, _dir: &Directory) -> bool {
        true
    }

    fn get_command(&self, command: &str, _dir: &Directory) -> Result<Decision> {
        Ok(Decision::passthrough(command))
    }

    fn internal(&self) -> bool {
        true
    }
}

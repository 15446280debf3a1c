//! Suppresses listed commands for a directory while keeping the banner.

use crate::error::Result;
use crate::modules::Module;
use crate::types::{Decision, Directory};

pub const NAME: &str = "skip-list";

/// Matches when the command's leading word appears in the directory's `skip`
/// metadata array and returns no command, so the banner still shows the
/// directory was visited but nothing executes there.
pub struct SkipListModule;

fn is_skipped(command: &str, dir: &Directory) -> bool {
    let Some(head) = command.split_whitespace().next() else {
        return false;
    };
    dir.extra
        .get("skip")
        .and_then(|value| value.as_array())
        .is_some_and(|list| list.iter().any(|entry| entry.as_str() == Some(head)))
}

impl Module for SkipListModule {
    fn name(&self) -> &str {
        NAME
    }

    fn can_do(&self, command: &str, dir: &Directory) -> bool {
        is_skipped(command, dir)
    }

    fn get_command(&self, _command: &str, _dir: &Directory) -> Result<Decision> {
        Ok(Decision::default())
    }
}

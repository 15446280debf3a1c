//! Per-call strategy for shells without statement chaining.
//!
//! Banner text goes straight to the console and the command runs as one
//! shell call with its working directory passed explicitly, so no restore
//! step is needed.

use std::env;

use tracing::debug;

use crate::error::Result;

use super::{ExecRequest, Executor, exit_error, shell_command};

const RULE: &str = "-------------------------------------------";

pub struct DiscreteExecutor;

impl Executor for DiscreteExecutor {
    fn execute(&self, request: &ExecRequest) -> Result<()> {
        if request.banner {
            if request.separator {
                println!();
                println!();
            }
            println!("On {}...", request.dir);
            println!("{RULE}");
        }
        if request.command.is_empty() {
            return Ok(());
        }

        let cwd = env::current_dir()?;
        let working_dir = if request.prevent_browse {
            cwd
        } else {
            cwd.join(request.dir)
        };
        debug!(command = %request.command, dir = %working_dir.display(), "running command");

        let mut cmd = shell_command(request.command);
        cmd.current_dir(working_dir);
        let status = cmd.status()?;
        if status.success() {
            Ok(())
        } else {
            Err(exit_error(request.dir, status))
        }
    }
}

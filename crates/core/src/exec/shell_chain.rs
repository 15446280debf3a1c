//! Single-shell-call strategy for platforms with statement chaining.

use tracing::debug;

use crate::error::Result;

use super::{ExecRequest, Executor, exit_error, quote_token, shell_command};

/// Chains separator echo, banner echo, `cd`, the command and the directory
/// restore into one shell line and runs it in a single blocking call. A
/// failing statement stops the chain, so the command's exit status is the
/// one that surfaces.
pub struct ShellChainExecutor;

impl ShellChainExecutor {
    /// Compose the chained line, or `None` when there is nothing to run.
    pub fn compose(request: &ExecRequest) -> Option<String> {
        let mut parts: Vec<String> = Vec::new();
        if request.banner {
            if request.separator {
                parts.push(r#"echo """#.to_string());
            }
            parts.push(format!(r#"echo "On {}...""#, request.dir));
        }
        if !request.command.is_empty() {
            if !request.prevent_browse {
                parts.push(format!("cd {}", quote_token(request.dir)));
            }
            parts.push(request.command.to_string());
            if !request.prevent_browse {
                parts.push("cd -".to_string());
            }
        }
        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" && "))
        }
    }
}

impl Executor for ShellChainExecutor {
    fn execute(&self, request: &ExecRequest) -> Result<()> {
        let Some(line) = Self::compose(request) else {
            return Ok(());
        };
        debug!(%line, "running shell chain");
        let status = shell_command(&line).status()?;
        if status.success() {
            Ok(())
        } else {
            Err(exit_error(request.dir, status))
        }
    }
}

//! Platform execution strategies.
//!
//! One strategy per host family: shells with statement chaining get the whole
//! directory step (banner echo, `cd`, command, restore) as a single shell
//! call; Windows gets the banner printed directly and the command run with an
//! explicit working directory.

mod discrete;
mod shell_chain;

pub use discrete::DiscreteExecutor;
pub use shell_chain::ShellChainExecutor;

use std::process::Command;

use crate::error::{Error, Result};

/// One directory's worth of work, as decided by the orchestrator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecRequest<'a> {
    /// Effective command text; empty launches no subprocess.
    pub command: &'a str,
    /// Target directory name, relative to the invocation directory.
    pub dir: &'a str,
    /// Run in the invoking process's working directory instead of the
    /// target's.
    pub prevent_browse: bool,
    /// Emit the banner identifying the directory.
    pub banner: bool,
    /// Emit a blank separator line ahead of the banner.
    pub separator: bool,
}

/// Runs one directory's command, blocking until it exits. Implementations
/// inherit the invoking process's stdio and environment.
pub trait Executor {
    fn execute(&self, request: &ExecRequest) -> Result<()>;
}

/// Pick the strategy for the host platform.
pub fn platform_executor() -> Box<dyn Executor> {
    if cfg!(windows) {
        Box::new(DiscreteExecutor)
    } else {
        Box::new(ShellChainExecutor)
    }
}

/// Blocking shell invocation for `line`, inheriting stdio and environment.
pub(crate) fn shell_command(line: &str) -> Command {
    if cfg!(windows) {
        let mut cmd = Command::new("cmd");
        cmd.args(["/C", line]);
        cmd
    } else {
        let mut cmd = Command::new("sh");
        cmd.args(["-c", line]);
        cmd
    }
}

pub(crate) fn exit_error(dir: &str, status: std::process::ExitStatus) -> Error {
    Error::CommandFailed {
        dir: dir.to_string(),
        code: status.code().unwrap_or(1),
    }
}

/// Join argv tokens into command text.
///
/// Quoting lives here rather than in the argument parser because each
/// platform quotes its own way; a token carrying whitespace or a statement
/// separator would otherwise fall apart inside the shell call.
pub fn join_tokens(tokens: &[String]) -> String {
    tokens
        .iter()
        .map(|token| quote_token(token))
        .collect::<Vec<_>>()
        .join(" ")
}

pub(crate) fn quote_token(token: &str) -> String {
    let needs_quoting = token
        .chars()
        .any(|c| c.is_whitespace() || matches!(c, ';' | '&' | '|'));
    if !needs_quoting {
        return token.to_string();
    }
    if cfg!(windows) {
        format!("\"{}\"", token.replace('"', "\\\""))
    } else {
        format!("'{}'", token.replace('\'', r"'\''"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(tokens: &[&str]) -> Vec<String> {
        tokens.iter().map(|t| t.to_string()).collect()
    }

    #[test]
    fn plain_tokens_join_with_spaces() {
        assert_eq!(join_tokens(&strings(&["git", "status"])), "git status");
        assert_eq!(join_tokens(&[]), "");
    }

    #[cfg(not(windows))]
    #[test]
    fn tokens_with_whitespace_or_separators_are_quoted() {
        assert_eq!(
            join_tokens(&strings(&["git", "commit", "-m", "fix the build"])),
            "git commit -m 'fix the build'"
        );
        assert_eq!(join_tokens(&strings(&["echo", "a;b"])), "echo 'a;b'");
    }

    #[cfg(not(windows))]
    #[test]
    fn embedded_single_quotes_survive() {
        assert_eq!(
            join_tokens(&strings(&["echo", "it's done"])),
            r"echo 'it'\''s done'"
        );
    }
}

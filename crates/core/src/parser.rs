//! Splits raw argv tokens into directory selectors and command text.

use crate::exec;
use crate::graph::DirectoryGraph;

/// A parsed invocation: leading selector tokens plus the remaining command
/// text.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Invocation {
    pub selectors: Vec<String>,
    pub command: String,
}

/// Tokens are consumed as selectors for as long as each names a known
/// directory or group; the first token that does not begins the command
/// text. A command word that happens to collide with a directory name is
/// therefore consumed as a selector; long-standing behavior, pinned by the
/// tests below rather than fixed.
pub fn split_invocation(graph: &DirectoryGraph, args: &[String]) -> Invocation {
    let mut selectors = Vec::new();
    let mut rest = args;
    while let [head, tail @ ..] = rest {
        if !graph.contains(head) {
            break;
        }
        selectors.push(head.clone());
        rest = tail;
    }
    Invocation {
        selectors,
        command: exec::join_tokens(rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Directory;

    fn graph() -> DirectoryGraph {
        let mut graph = DirectoryGraph::default();
        graph.register(Directory::with_groups("api", &["web"]));
        graph.register(Directory::with_groups("ui", &["web"]));
        graph.register(Directory::named("docs"));
        graph
    }

    fn split(args: &[&str]) -> Invocation {
        let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
        split_invocation(&graph(), &args)
    }

    #[test]
    fn leading_known_names_become_selectors() {
        let invocation = split(&["web", "docs", "git", "status"]);
        assert_eq!(invocation.selectors, ["web", "docs"]);
        assert_eq!(invocation.command, "git status");
    }

    #[test]
    fn no_selectors_means_the_whole_line_is_the_command() {
        let invocation = split(&["git", "status"]);
        assert!(invocation.selectors.is_empty());
        assert_eq!(invocation.command, "git status");
    }

    #[test]
    fn no_arguments_is_an_empty_command() {
        let invocation = split(&[]);
        assert!(invocation.selectors.is_empty());
        assert!(invocation.command.is_empty());
    }

    #[test]
    fn matching_stops_at_the_first_unknown_token() {
        // "docs" is a known name but appears after the boundary, so it is
        // part of the command.
        let invocation = split(&["api", "cat", "docs"]);
        assert_eq!(invocation.selectors, ["api"]);
        assert_eq!(invocation.command, "cat docs");
    }

    #[test]
    fn command_word_matching_a_directory_is_a_selector() {
        // The first token names a directory, so it is consumed as a selector
        // even though the user may have meant a command called `docs`.
        let invocation = split(&["docs", "--build"]);
        assert_eq!(invocation.selectors, ["docs"]);
        assert_eq!(invocation.command, "--build");
    }
}

use std::env;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;

use fed_core::{
    DirsConfig, Error, ModuleChain, ModuleRegistry, Orchestrator, exec, orchestrator, parser,
    platform_executor,
};

/// Run a shell command in every directory listed in `fed.json`
#[derive(Parser)]
#[command(name = "fed", version)]
#[command(disable_help_flag = true)]
struct Cli {
    /// Directory/group selectors followed by the command to run
    #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
    args: Vec<String>,
}

fn main() -> Result<()> {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let cwd = env::current_dir().context("cannot determine the invocation directory")?;

    let registry = ModuleRegistry::from_env(&cwd);
    let user_modules = registry.load();

    let Some(config_path) = DirsConfig::find(&cwd) else {
        // Without a fed.json only the reserved commands are served.
        debug!("no fed.json found, serving reserved commands only");
        let chain = ModuleChain::priority_only(registry, user_modules);
        let command = exec::join_tokens(&cli.args);
        return finish(orchestrator::run_without_config(&chain, &command));
    };

    let config = DirsConfig::load_from_file(&config_path)?;
    let graph = config.into_graph();
    let invocation = parser::split_invocation(&graph, &cli.args);
    debug!(
        selectors = ?invocation.selectors,
        command = %invocation.command,
        "parsed invocation"
    );

    let chain = ModuleChain::assemble(registry, user_modules);
    let executor = platform_executor();
    let orchestrator = Orchestrator::new(&graph, &chain, executor.as_ref());
    finish(orchestrator.run(&invocation.selectors, &invocation.command))
}

/// Map engine failures to the process exit contract: a failed subprocess
/// exits with the child's code, everything else reports and exits 1.
fn finish(result: fed_core::Result<()>) -> Result<()> {
    match result {
        Ok(()) => Ok(()),
        Err(err @ Error::CommandFailed { .. }) => {
            eprintln!("fed: {err}");
            std::process::exit(err.exit_code());
        }
        Err(err) => Err(err.into()),
    }
}

//! CLI module containing the main entry point logic.

use crate::{commands, completion, executor};
use clap::Parser as ClapParser;

const PKG_VERSION: &str = env!("CARGO_PKG_VERSION");

/// CLI arguments for the devrun tool.
#[derive(ClapParser)]
#[command(name = "devrun")]
#[command(version = PKG_VERSION)]
#[command(about = "Developer task dispatcher for the local star-account stack", long_about = None)]
struct Cli {
    /// Command to run (see --list for the available names)
    #[arg(value_name = "COMMAND")]
    command: Option<String>,

    /// List all available commands and the shell line each one runs
    #[arg(short, long)]
    list: bool,

    /// Print the command table as JSON
    #[arg(long)]
    inspect: bool,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    generate_completion: Option<completion::Shell>,

    /// Install shell completion (automatically detects shell if omitted)
    #[arg(long, value_name = "SHELL")]
    install_completion: Option<Option<completion::Shell>>,
}

/// Main CLI logic.
///
/// Flags short-circuit; otherwise the positional name goes to the
/// dispatcher, which owns all failure reporting.
pub fn run_cli() {
    let cli = Cli::parse();

    if let Some(shell_opt) = cli.install_completion {
        completion::install_completion_interactive(shell_opt, completion::get_home_dir);
        return;
    }

    if let Some(shell) = cli.generate_completion {
        completion::generate_completion_script(shell);
        return;
    }

    if cli.list {
        commands::list_commands();
        return;
    }

    if cli.inspect {
        commands::print_inspect();
        return;
    }

    executor::dispatch_and_report(cli.command.as_deref());
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_cli_takes_a_single_positional_name() {
        let cli = Cli::parse_from(["devrun", "migrateup"]);
        assert_eq!(cli.command.as_deref(), Some("migrateup"));
        assert!(!cli.list);
        assert!(!cli.inspect);
    }

    #[test]
    fn test_cli_accepts_no_arguments() {
        let cli = Cli::parse_from(["devrun"]);
        assert!(cli.command.is_none());
    }
}

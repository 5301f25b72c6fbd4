//! Shell completion generation and installation.

use clap::ValueEnum;
use std::fs;
use std::path::{Path, PathBuf};

// The command set is fixed, so the scripts are plain constants.

const BASH_COMPLETION: &str = r#"#!/usr/bin/env bash
# Bash completion script for devrun
_devrun_complete() {
    local cur="${COMP_WORDS[COMP_CWORD]}"
    local commands="init createdb dropdb migrateup migratedown sqlc server"
    local flags="--list --inspect --generate-completion --install-completion --help --version"
    if [[ "$cur" == -* ]]; then
        COMPREPLY=( $(compgen -W "$flags" -- "$cur") )
    else
        COMPREPLY=( $(compgen -W "$commands" -- "$cur") )
    fi
}
complete -F _devrun_complete devrun
"#;

const ZSH_COMPLETION: &str = r#"#compdef devrun
_devrun() {
    local -a commands
    commands=(
        'init:Start the star-postgres container'
        'createdb:Create the star_account database'
        'dropdb:Drop the star_account database'
        'migrateup:Apply all pending forward migrations'
        'migratedown:Roll back all applied migrations'
        'sqlc:Regenerate typed query code'
        'server:Build and run the service'
    )
    _describe 'command' commands
}
_devrun "$@"
"#;

const FISH_COMPLETION: &str = r#"# Fish completion script for devrun
complete -c devrun -f
complete -c devrun -n __fish_use_subcommand -a init -d 'Start the star-postgres container'
complete -c devrun -n __fish_use_subcommand -a createdb -d 'Create the star_account database'
complete -c devrun -n __fish_use_subcommand -a dropdb -d 'Drop the star_account database'
complete -c devrun -n __fish_use_subcommand -a migrateup -d 'Apply all pending forward migrations'
complete -c devrun -n __fish_use_subcommand -a migratedown -d 'Roll back all applied migrations'
complete -c devrun -n __fish_use_subcommand -a sqlc -d 'Regenerate typed query code'
complete -c devrun -n __fish_use_subcommand -a server -d 'Build and run the service'
complete -c devrun -s l -l list -d 'List available commands'
complete -c devrun -l inspect -d 'Print the command table as JSON'
"#;

const POWERSHELL_COMPLETION: &str = r#"# PowerShell completion script for devrun
Register-ArgumentCompleter -Native -CommandName devrun -ScriptBlock {
    param($wordToComplete)
    'init','createdb','dropdb','migrateup','migratedown','sqlc','server' |
        Where-Object { $_ -like "$wordToComplete*" } |
        ForEach-Object { [System.Management.Automation.CompletionResult]::new($_, $_, 'ParameterValue', $_) }
}
"#;

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    #[value(name = "powershell", alias = "pwsh")]
    PowerShell,
}

impl Shell {
    /// Returns the lowercase name of the shell.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Shell::Bash => "bash",
            Shell::Zsh => "zsh",
            Shell::Fish => "fish",
            Shell::PowerShell => "powershell",
        }
    }

    /// Returns the completion script content for this shell.
    #[must_use]
    pub fn completion_script(self) -> &'static str {
        match self {
            Shell::Bash => BASH_COMPLETION,
            Shell::Zsh => ZSH_COMPLETION,
            Shell::Fish => FISH_COMPLETION,
            Shell::PowerShell => POWERSHELL_COMPLETION,
        }
    }

    /// Detect shell from the SHELL environment variable.
    #[must_use]
    pub fn detect() -> Option<Shell> {
        let shell_var = std::env::var("SHELL").ok()?;
        if shell_var.contains("bash") {
            Some(Shell::Bash)
        } else if shell_var.contains("zsh") {
            Some(Shell::Zsh)
        } else if shell_var.contains("fish") {
            Some(Shell::Fish)
        } else if shell_var.contains("pwsh") || shell_var.contains("powershell") {
            Some(Shell::PowerShell)
        } else {
            None
        }
    }

    /// Where the completion file lands under the user's home directory,
    /// and what it is named there.
    fn install_target(self, home: &Path) -> (PathBuf, &'static str) {
        match self {
            Shell::Bash => (
                home.join(".local/share/bash-completion/completions"),
                "devrun",
            ),
            Shell::Zsh => (home.join(".zsh/completion"), "_devrun"),
            Shell::Fish => (home.join(".config/fish/completions"), "devrun.fish"),
            #[cfg(windows)]
            Shell::PowerShell => (home.join("Documents/PowerShell/Scripts"), "devrun.ps1"),
            #[cfg(not(windows))]
            Shell::PowerShell => (home.join(".config/powershell"), "devrun.ps1"),
        }
    }
}

/// Generate shell completion script for the specified shell.
pub fn generate_completion_script(shell: Shell) {
    print!("{}", shell.completion_script());
}

/// Install shell completion, detecting the shell if not specified.
pub fn install_completion_interactive(
    shell_opt: Option<Shell>,
    get_home_dir: impl Fn() -> Option<PathBuf>,
) {
    let shell = shell_opt.or_else(Shell::detect).unwrap_or_else(|| {
        crate::fatal_error(
            "Could not detect shell. Please specify: --install-completion <SHELL>\nSupported shells: bash, zsh, fish, powershell",
        )
    });

    let home = get_home_dir()
        .unwrap_or_else(|| crate::fatal_error("Error: Could not determine home directory"));

    let (comp_dir, filename) = shell.install_target(&home);
    let comp_file = write_completion_file(&comp_dir, filename, shell.completion_script());

    println!("Installed completion to {}", comp_file.display());
    match shell {
        Shell::Bash => println!("Restart your shell or run: source ~/.bashrc"),
        Shell::Zsh => {
            println!("Make sure ~/.zshrc contains:");
            println!("  fpath=(~/.zsh/completion $fpath)");
            println!("  autoload -Uz compinit && compinit");
        }
        Shell::Fish => println!("Completions load automatically on next fish startup."),
        Shell::PowerShell => {
            println!("Add the following line to your PowerShell profile:");
            println!("  . \"{}\"", comp_file.display());
        }
    }
}

/// Get the user's home directory in a cross-platform way.
#[must_use]
pub fn get_home_dir() -> Option<PathBuf> {
    if let Some(home) = std::env::var_os("HOME") {
        return Some(PathBuf::from(home));
    }
    if let Some(userprofile) = std::env::var_os("USERPROFILE") {
        return Some(PathBuf::from(userprofile));
    }
    None
}

/// Write a completion file to the specified directory, creating the
/// directory if needed.
fn write_completion_file(comp_dir: &PathBuf, filename: &str, content: &str) -> PathBuf {
    if let Err(e) = fs::create_dir_all(comp_dir) {
        crate::fatal_error(&format!("Error creating completion directory: {e}"));
    }

    let comp_file = comp_dir.join(filename);
    if let Err(e) = fs::write(&comp_file, content) {
        crate::fatal_error(&format!("Error writing completion file: {e}"));
    }

    comp_file
}

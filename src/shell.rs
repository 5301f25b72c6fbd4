//! Host shell resolution and command-line execution.

use std::process::{Command, ExitStatus, Stdio};

/// Environment variable overriding the shell used to run command lines.
pub const SHELL_ENV_VAR: &str = "DEVRUN_SHELL";

/// The shell program and the flag that makes it run a command string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellInvocation {
    pub program: String,
    pub command_flag: &'static str,
}

/// Resolve the shell to run command lines with.
///
/// `DEVRUN_SHELL` wins when set. Otherwise PowerShell on Windows (pwsh if
/// found on PATH, falling back to powershell) and `sh` on Unix-like systems.
#[must_use]
pub fn resolve() -> ShellInvocation {
    if let Ok(custom_shell) = std::env::var(SHELL_ENV_VAR) {
        let command_flag =
            if custom_shell.contains("pwsh") || custom_shell.contains("powershell") {
                "-Command"
            } else {
                "-c"
            };
        return ShellInvocation {
            program: custom_shell,
            command_flag,
        };
    }

    if cfg!(target_os = "windows") {
        let program = if which::which("pwsh").is_ok() {
            "pwsh".to_string()
        } else {
            "powershell".to_string()
        };
        ShellInvocation {
            program,
            command_flag: "-Command",
        }
    } else {
        ShellInvocation {
            program: "sh".to_string(),
            command_flag: "-c",
        }
    }
}

/// Run a command line in the resolved shell, inheriting stdio, and block
/// until it completes.
///
/// # Errors
/// Returns an error only if the shell itself cannot be spawned. The child's
/// exit status, success or not, comes back to the caller.
pub fn run_line(line: &str) -> Result<ExitStatus, Box<dyn std::error::Error>> {
    let shell = resolve();
    let status = Command::new(&shell.program)
        .arg(shell.command_flag)
        .arg(line)
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()?;
    Ok(status)
}

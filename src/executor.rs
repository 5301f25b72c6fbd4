//! The dispatcher: one table lookup, at most one shell invocation.

use crate::{commands, shell};

/// Fixed message printed on any dispatch failure.
pub const FAILURE_MESSAGE: &str = "command execution failed.";

/// Look up `name` in the command table and run its line through the host
/// shell, blocking until the child completes.
///
/// # Errors
/// - the name is not in the table (nothing is spawned)
/// - the shell itself could not be spawned
/// - the spawned command exited with a nonzero status
pub fn dispatch(name: &str) -> Result<(), Box<dyn std::error::Error>> {
    let spec =
        commands::lookup(name).ok_or_else(|| format!("unknown command: {name}"))?;
    let status = shell::run_line(spec.line)?;
    if !status.success() {
        return Err(format!("command exited with {status}").into());
    }
    Ok(())
}

/// Dispatch and report the outcome.
///
/// A missing name is the same failure as an unknown one. Any failure prints
/// the fixed message to stdout; the process still exits normally, and on
/// success the dispatcher adds nothing to whatever the child printed.
pub fn dispatch_and_report(name: Option<&str>) {
    let outcome = match name {
        Some(name) => dispatch(name),
        None => Err("missing command name".into()),
    };
    if outcome.is_err() {
        println!("{}", FAILURE_MESSAGE);
    }
}

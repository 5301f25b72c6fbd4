//! # devrun
//!
//! A fixed-table task dispatcher for the local star-account development stack.
//! Each command name maps to a compiled-in shell command line: the database
//! container, create/drop of the database, schema migrations, query code
//! generation, and the service itself.

pub mod cli;
pub mod commands;
pub mod completion;
pub mod executor;
pub mod shell;

/// Print an error message and exit with code 1.
pub fn fatal_error(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

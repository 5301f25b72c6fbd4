//! # devrun
//!
//! Developer task dispatcher for the local star-account stack.
//! Run `devrun init` to start the Postgres container, `devrun createdb` /
//! `devrun dropdb` to manage the database, `devrun migrateup` /
//! `devrun migratedown` for schema migrations, `devrun sqlc` to regenerate
//! query code, and `devrun server` to build and run the service.
//!
//! `devrun --list` shows every command together with the shell line it runs.

/// Entry point for the CLI tool.
fn main() {
    devrun::cli::run_cli();
}

//! CLI module for flightdb
//!
//! Provides command-line interface for:
//! - serve: Load the data files and serve the HTTP API
//! - check: Load the data files and print table counts

mod args;
mod commands;
mod errors;
mod io;

pub use args::{Cli, Command};
pub use commands::{check, init_tracing, run, run_command, serve, Config};
pub use errors::{CliError, CliErrorCode, CliResult};
pub use io::{write_response, write_response_to};

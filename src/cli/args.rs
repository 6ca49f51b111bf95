//! CLI argument definitions using clap
//!
//! Commands:
//! - flightdb serve [--config <path>] [--data-dir <dir>] [--host <host>] [--port <port>] [--allowed-origin <origin>]
//! - flightdb check [--config <path>] [--data-dir <dir>]

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// flightdb - In-memory flight network store with a JSON API
#[derive(Parser, Debug)]
#[command(name = "flightdb")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load the data files and serve the HTTP API
    Serve {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding airlines.dat, airports.dat and routes.dat
        #[arg(long, env = "FLIGHTDB_DATA_DIR")]
        data_dir: Option<PathBuf>,

        /// Host to bind to
        #[arg(long)]
        host: Option<String>,

        /// Port to bind to
        #[arg(long, env = "PORT")]
        port: Option<u16>,

        /// Origin allowed by CORS ("*" for any)
        #[arg(long, env = "ALLOWED_ORIGIN")]
        allowed_origin: Option<String>,
    },

    /// Load the data files, print table counts and exit
    Check {
        /// Path to JSON configuration file
        #[arg(long)]
        config: Option<PathBuf>,

        /// Directory holding airlines.dat, airports.dat and routes.dat
        #[arg(long, env = "FLIGHTDB_DATA_DIR")]
        data_dir: Option<PathBuf>,
    },
}

impl Cli {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_serve_flags() {
        let cli = Cli::try_parse_from([
            "flightdb",
            "serve",
            "--data-dir",
            "/data",
            "--port",
            "9000",
            "--allowed-origin",
            "*",
        ])
        .unwrap();

        match cli.command {
            Command::Serve {
                data_dir,
                port,
                allowed_origin,
                host,
                ..
            } => {
                assert_eq!(data_dir, Some(PathBuf::from("/data")));
                assert_eq!(port, Some(9000));
                assert_eq!(allowed_origin.as_deref(), Some("*"));
                assert_eq!(host, None);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_invalid_port() {
        let result = Cli::try_parse_from(["flightdb", "serve", "--port", "not-a-port"]);
        assert!(result.is_err());
    }
}

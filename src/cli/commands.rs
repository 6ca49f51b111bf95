//! CLI command implementations
//!
//! Both commands follow the same boot sequence:
//! 1. Resolve configuration (file, then flags and env vars)
//! 2. Load the three data files into a store
//! 3. Serve or report

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::http_server::{HttpServer, ServerConfig};
use crate::loader::load_dataset;
use crate::storage::{FlightStore, SharedStore};

use super::args::Command;
use super::errors::{CliError, CliResult};
use super::io::write_response;

/// Configuration file structure
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Directory holding the data files (optional, default ".")
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            server: ServerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from file
    pub fn load(path: &Path) -> CliResult<Self> {
        let content = fs::read_to_string(path)
            .map_err(|e| CliError::config_error(format!("Failed to read config: {}", e)))?;

        let config: Config = serde_json::from_str(&content)
            .map_err(|e| CliError::config_error(format!("Invalid config JSON: {}", e)))?;

        config.validate()?;

        Ok(config)
    }

    /// Load from `path` when given, otherwise start from defaults
    pub fn resolve(path: Option<&Path>) -> CliResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    fn validate(&self) -> CliResult<()> {
        if self.server.host.trim().is_empty() {
            return Err(CliError::config_error("server.host must not be empty"));
        }
        Ok(())
    }
}

/// Main CLI entry point
///
/// Parses arguments and dispatches to the appropriate command.
/// This is the only function that main.rs should call.
pub fn run() -> CliResult<()> {
    let cli = super::args::Cli::parse_args();
    init_tracing();
    run_command(cli.command)
}

/// Run the appropriate command based on CLI args
pub fn run_command(cmd: Command) -> CliResult<()> {
    match cmd {
        Command::Serve {
            config,
            data_dir,
            host,
            port,
            allowed_origin,
        } => {
            let mut config = Config::resolve(config.as_deref())?;
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(origin) = allowed_origin {
                config.server.cors_origins = vec![origin];
            }
            serve(config)
        }
        Command::Check { config, data_dir } => {
            let mut config = Config::resolve(config.as_deref())?;
            if let Some(dir) = data_dir {
                config.data_dir = dir;
            }
            check(&config)
        }
    }
}

/// Install the global `tracing` subscriber.
///
/// Filter comes from `RUST_LOG`, default `info`. Logs go to stderr so stdout
/// stays machine readable.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    // A subscriber may already be installed (tests, embedding); keep it.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Load the data files and run the HTTP server until shutdown
pub fn serve(config: Config) -> CliResult<()> {
    let store = load_store(&config.data_dir)?;
    let server = HttpServer::with_config(config.server, SharedStore::new(store));

    // Start the async runtime and run the server
    let rt = tokio::runtime::Runtime::new()
        .map_err(|e| CliError::serve_failed(format!("Failed to create tokio runtime: {}", e)))?;

    rt.block_on(async {
        server
            .start()
            .await
            .map_err(|e| CliError::serve_failed(format!("HTTP server failed: {}", e)))
    })?;

    Ok(())
}

/// Load the data files and print table counts
pub fn check(config: &Config) -> CliResult<()> {
    let store = load_store(&config.data_dir)?;
    write_response(&store.stats())
}

fn load_store(data_dir: &Path) -> CliResult<FlightStore> {
    info!(data_dir = %data_dir.display(), "loading flight data");
    let store = load_dataset(data_dir)?;

    let stats = store.stats();
    info!(
        airlines = stats.airlines,
        airports = stats.airports,
        routes = stats.routes,
        "flight data loaded"
    );
    Ok(store)
}

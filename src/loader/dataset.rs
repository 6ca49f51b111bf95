//! Startup load of the three data files into a store

use std::fs::File;
use std::io::{self, BufReader};
use std::path::{Path, PathBuf};

use tracing::{info, warn};

use crate::storage::FlightStore;

use super::errors::{LoaderError, LoaderResult};
use super::reader::{read_airlines, read_airports, read_routes};

pub const AIRLINES_FILE: &str = "airlines.dat";
pub const AIRPORTS_FILE: &str = "airports.dat";
pub const ROUTES_FILE: &str = "routes.dat";

/// Locations of the three data files
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataFiles {
    pub airlines: PathBuf,
    pub airports: PathBuf,
    pub routes: PathBuf,
}

impl DataFiles {
    /// Standard file names inside `dir`
    pub fn in_dir(dir: &Path) -> Self {
        Self {
            airlines: dir.join(AIRLINES_FILE),
            airports: dir.join(AIRPORTS_FILE),
            routes: dir.join(ROUTES_FILE),
        }
    }
}

/// Load the standard data files from `dir`
pub fn load_dataset(dir: &Path) -> LoaderResult<FlightStore> {
    load_files(&DataFiles::in_dir(dir))
}

/// Load all three files, then build the indexes once.
///
/// A missing file is logged and treated as empty; any other read failure
/// aborts the load.
pub fn load_files(files: &DataFiles) -> LoaderResult<FlightStore> {
    let airlines = read_file(&files.airlines, read_airlines)?;
    info!(count = airlines.len(), path = %files.airlines.display(), "loaded airlines");

    let airports = read_file(&files.airports, read_airports)?;
    info!(count = airports.len(), path = %files.airports.display(), "loaded airports");

    let routes = read_file(&files.routes, read_routes)?;
    info!(count = routes.len(), path = %files.routes.display(), "loaded routes");

    Ok(FlightStore::from_records(airlines, airports, routes))
}

fn read_file<T, F>(path: &Path, read: F) -> LoaderResult<Vec<T>>
where
    F: FnOnce(BufReader<File>) -> io::Result<Vec<T>>,
{
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            warn!(path = %path.display(), "data file not found, starting with an empty table");
            return Ok(Vec::new());
        }
        Err(e) => return Err(LoaderError::io(path, e)),
    };

    read(BufReader::new(file)).map_err(|e| LoaderError::io(path, e))
}

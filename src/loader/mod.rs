//! Bulk loader for the flat data files
//!
//! Reads `airlines.dat`, `airports.dat` and `routes.dat` once at startup.
//! Tables are filled first and the code indexes are built once afterwards.

mod dataset;
mod errors;
mod fields;
mod reader;

pub use dataset::{load_dataset, load_files, DataFiles, AIRLINES_FILE, AIRPORTS_FILE, ROUTES_FILE};
pub use errors::{LoaderError, LoaderResult};
pub use fields::{decode_field, is_null_field, NULL_MARKER};
pub use reader::{read_airlines, read_airports, read_routes, MIN_COLUMNS};

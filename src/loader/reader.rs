//! Row readers for the airline, airport and route files
//!
//! Files are split with the `csv` crate into byte records, so invalid UTF-8
//! never fails a whole file. Rows with fewer than `MIN_COLUMNS` fields, or
//! without a usable primary id, are skipped. Other absent fields fall back to
//! empty strings and zeros.

use std::io::{self, Read};

use tracing::warn;

use crate::schema::{Airline, Airport, Route};

use super::fields::{decode_field, float, int, text};

/// Minimum number of columns for a row to be considered
pub const MIN_COLUMNS: usize = 8;

/// Decoded rows; only I/O failures surface as errors
fn rows<R: Read>(reader: R) -> impl Iterator<Item = io::Result<Vec<String>>> {
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(reader)
        .into_byte_records()
        .filter_map(|record| match record {
            Ok(record) => (record.len() >= MIN_COLUMNS)
                .then(|| Ok(record.iter().map(decode_field).collect::<Vec<String>>())),
            Err(e) => match e.into_kind() {
                csv::ErrorKind::Io(e) => Some(Err(e)),
                kind => {
                    warn!(error = ?kind, "skipping malformed row");
                    None
                }
            },
        })
}

/// Columns: id, name, alias, iata, icao, callsign, country, active
pub fn read_airlines<R: Read>(reader: R) -> io::Result<Vec<Airline>> {
    let mut airlines = Vec::new();
    for row in rows(reader) {
        let f = row?;
        let Some(id) = int(&f[0]) else { continue };

        airlines.push(Airline {
            id,
            name: text(&f[1]),
            alias: text(&f[2]),
            iata: text(&f[3]),
            icao: text(&f[4]),
            callsign: text(&f[5]),
            country: text(&f[6]),
            active: text(&f[7]),
        });
    }
    Ok(airlines)
}

/// Columns: id, name, city, country, iata, icao, latitude, longitude, ...
pub fn read_airports<R: Read>(reader: R) -> io::Result<Vec<Airport>> {
    let mut airports = Vec::new();
    for row in rows(reader) {
        let f = row?;
        let Some(id) = int(&f[0]) else { continue };

        airports.push(Airport {
            id,
            name: text(&f[1]),
            city: text(&f[2]),
            country: text(&f[3]),
            iata: text(&f[4]),
            icao: text(&f[5]),
            latitude: float(&f[6]),
            longitude: float(&f[7]),
        });
    }
    Ok(airports)
}

/// Columns: airline code, airline id, source code, source id,
/// destination code, destination id, codeshare, stops, ...
///
/// Only the ids and the stop count are kept.
pub fn read_routes<R: Read>(reader: R) -> io::Result<Vec<Route>> {
    let mut routes = Vec::new();
    for row in rows(reader) {
        let f = row?;
        let (Some(airline_id), Some(src_airport_id), Some(dst_airport_id)) =
            (int(&f[1]), int(&f[3]), int(&f[5]))
        else {
            continue;
        };

        routes.push(Route {
            airline_id,
            src_airport_id,
            dst_airport_id,
            stops: int(&f[7]).unwrap_or(0),
        });
    }
    Ok(routes)
}

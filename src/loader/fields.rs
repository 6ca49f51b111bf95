//! Field decoding for the flat data files
//!
//! Raw field bytes are decoded lossily, so a stray non-UTF-8 byte only
//! affects the field it appears in. `\N` and empty fields count as absent.

/// Marker the data files use for a missing value
pub const NULL_MARKER: &str = "\\N";

/// Decode raw field bytes, replacing invalid UTF-8 with U+FFFD
pub fn decode_field(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}

/// True for the `\N` marker and for empty fields
pub fn is_null_field(field: &str) -> bool {
    field.is_empty() || field == NULL_MARKER
}

/// Field as a string, empty when absent
pub fn text(field: &str) -> String {
    if is_null_field(field) {
        String::new()
    } else {
        field.to_string()
    }
}

/// Field as an integer; `None` when absent or unparseable
pub fn int(field: &str) -> Option<i32> {
    if is_null_field(field) {
        return None;
    }
    field.trim().parse().ok()
}

/// Field as a float, 0.0 when absent or unparseable
pub fn float(field: &str) -> f64 {
    if is_null_field(field) {
        return 0.0;
    }
    field.trim().parse().unwrap_or(0.0)
}

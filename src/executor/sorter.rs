//! Result ordering for reports
//!
//! Every ordering ends in a tie-break on something unique (record id or
//! group label) so output is deterministic regardless of hash map order.

use std::cmp::Ordering;

use crate::schema::{Airport, Record};

/// A hub airport with its leg distances
#[derive(Debug, Clone, Copy)]
pub struct HubLegs<'a> {
    pub hub: &'a Airport,
    pub leg1_km: f64,
    pub leg2_km: f64,
    pub total_km: f64,
}

/// Sorts query results
pub struct ResultSorter;

impl ResultSorter {
    /// Ascending by IATA code (empty first), then by id.
    pub fn sort_by_code<R: Record>(records: &mut [&R]) {
        records.sort_by(|a, b| Self::compare_code(*a, *b));
    }

    /// Descending by count, then ascending by IATA code, then by id.
    pub fn sort_by_count_then_code<R: Record>(rows: &mut [(&R, usize)]) {
        rows.sort_by(|(a, a_count), (b, b_count)| {
            b_count
                .cmp(a_count)
                .then_with(|| Self::compare_code(*a, *b))
        });
    }

    /// Descending by count, then ascending by label.
    pub fn sort_by_count_then_label(rows: &mut [(&str, usize)]) {
        rows.sort_by(|(a, a_count), (b, b_count)| b_count.cmp(a_count).then_with(|| a.cmp(b)));
    }

    /// Ascending by total distance, then by hub code.
    pub fn sort_by_total_distance(hubs: &mut [HubLegs<'_>]) {
        hubs.sort_by(|a, b| {
            a.total_km
                .total_cmp(&b.total_km)
                .then_with(|| Self::compare_code(a.hub, b.hub))
        });
    }

    fn compare_code<R: Record>(a: &R, b: &R) -> Ordering {
        a.code().cmp(b.code()).then_with(|| a.id().cmp(&b.id()))
    }
}

//! Shared data-shaping helpers for the analyzers: year filtering, histogram
//! construction and display rounding.

use crate::domain::model::WorkRecord;
use std::collections::BTreeMap;

/// Publication years at or before 1900 are treated as catalog noise, years in
/// the future as data errors; both are discarded before any year-based math.
pub fn is_valid_year(year: i32, current_year: i32) -> bool {
    year > 1900 && year <= current_year
}

/// All valid publication years, one entry per work, in input order.
pub fn valid_years(works: &[WorkRecord], current_year: i32) -> Vec<i32> {
    works
        .iter()
        .filter_map(|w| w.publication_year)
        .filter(|&y| is_valid_year(y, current_year))
        .collect()
}

/// Year -> publication count over the given (already filtered) years.
pub fn year_histogram(years: &[i32]) -> BTreeMap<i32, u32> {
    let mut histogram = BTreeMap::new();
    for &year in years {
        *histogram.entry(year).or_insert(0) += 1;
    }
    histogram
}

/// Rounding for display stability; internal computation stays full-precision.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

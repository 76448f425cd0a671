//! Citation-distribution metrics: dispersion and recency statistics over an
//! author's publication list.

use crate::core::shaping::{is_valid_year, round1, round3};
use crate::domain::model::{CitationMetrics, WorkRecord};

/// Works published within this many years of `current_year` count as recent.
const RECENT_WINDOW_YEARS: i32 = 5;

/// Compute citation metrics over all supplied works. Citation statistics are
/// not filtered by year validity; only the recency percentage looks at years.
/// An empty list yields all-zero metrics.
pub fn citation_metrics(
    works: &[WorkRecord],
    h_index: u32,
    works_count: u32,
    current_year: i32,
) -> CitationMetrics {
    if works.is_empty() {
        return CitationMetrics::default();
    }

    let mut counts: Vec<u64> = works.iter().map(|w| w.cited_by_count).collect();
    counts.sort_unstable();
    let n = counts.len();
    let total: u64 = counts.iter().sum();

    let mean = total as f64 / n as f64;
    let median = if n % 2 == 0 {
        (counts[n / 2 - 1] + counts[n / 2]) as f64 / 2.0
    } else {
        counts[n / 2] as f64
    };

    // Share of all citations held by the top decile (at least one work).
    let top_k = (n / 10).max(1);
    let top_sum: u64 = counts.iter().rev().take(top_k).sum();
    let concentration = if total == 0 {
        0.0
    } else {
        top_sum as f64 / total as f64 * 100.0
    };

    let recent = works
        .iter()
        .filter(|w| {
            w.publication_year
                .is_some_and(|y| is_valid_year(y, current_year) && y >= current_year - RECENT_WINDOW_YEARS)
        })
        .count();
    let recent_pct = recent as f64 / n as f64 * 100.0;

    let efficiency = if works_count == 0 {
        0.0
    } else {
        f64::from(h_index) / f64::from(works_count)
    };

    CitationMetrics {
        median_citations: round1(median),
        mean_citations: round1(mean),
        top_decile_concentration_pct: round1(concentration),
        recent_activity_pct: round1(recent_pct),
        h_index_efficiency: round3(efficiency),
    }
}

//! Sustained-activity estimation.
//!
//! Estimates the year an author's sustained publishing began and derives an
//! "academic age" from it, with a multi-factor confidence score. A single
//! early paper followed by years of silence is treated as an outlier rather
//! than the start of a career.

use crate::core::shaping::{is_valid_year, valid_years, year_histogram};
use crate::domain::model::{AcademicAgeResult, AuthorProfile, ConfidenceLevel, WorkRecord};
use std::collections::{BTreeMap, HashSet};

/// Sustained activity = at least this many publications within the window.
const SUSTAINED_MIN_COUNT: u32 = 2;
/// Width in years of the sustained-activity detection window.
const SUSTAINED_WINDOW_YEARS: i32 = 3;
/// Width in years of the early-output window used by the volume and topic
/// components.
const EARLY_WINDOW_YEARS: i32 = 5;

/// Concept-list slice sizes are part of the catalog contract: author profiles
/// rank up to 10 top concepts, works up to 5.
const TOP_AUTHOR_CONCEPTS: usize = 10;
const TOP_WORK_CONCEPTS: usize = 5;
/// At most this many early-window works contribute concepts.
const EARLY_WORKS_SAMPLE: usize = 10;
/// Below this many works the topic component stays neutral.
const MIN_WORKS_FOR_TOPIC: usize = 5;

const TEMPORAL_WEIGHT: f64 = 0.4;
const VOLUME_WEIGHT: f64 = 0.3;
const TOPIC_WEIGHT: f64 = 0.3;

/// Estimate when sustained research activity began and how old the author's
/// academic career is, counted from `current_year`.
///
/// Pure function of its inputs; `current_year` is injectable so results are
/// deterministic in tests.
pub fn estimate_academic_age(
    works: &[WorkRecord],
    profile: &AuthorProfile,
    current_year: i32,
) -> AcademicAgeResult {
    let years = valid_years(works, current_year);
    if years.is_empty() {
        return AcademicAgeResult {
            academic_age: None,
            confidence_score: 0,
            confidence_level: ConfidenceLevel::NotApplicable,
            sustained_start_year: None,
            earliest_year: None,
            excluded_count: 0,
            explanation: vec!["No valid publication years in record".to_string()],
        };
    }

    let histogram = year_histogram(&years);
    let earliest_year = years.iter().copied().min().unwrap_or(current_year);
    let sustained_start_year = detect_sustained_start(&histogram, earliest_year);
    let academic_age = current_year - sustained_start_year;
    let excluded_count = years.iter().filter(|&&y| y < sustained_start_year).count();
    let gap = sustained_start_year - earliest_year;

    let temporal = temporal_component(gap);
    let volume = volume_component(&years, sustained_start_year);
    let topic = topic_component(works, profile, sustained_start_year, current_year);

    // Component buckets are multiples of 0.1 and the weights are 0.4/0.3/0.3,
    // so the weighted sum is always a whole percentage; round() strips float noise.
    let weighted = TEMPORAL_WEIGHT * temporal + VOLUME_WEIGHT * volume + TOPIC_WEIGHT * topic;
    let confidence_score = (weighted * 100.0).round() as u8;

    let mut explanation = Vec::new();
    if excluded_count > 0 {
        explanation.push(format!(
            "Excluded {} publication(s) before sustained activity began in {}",
            excluded_count, sustained_start_year
        ));
    }
    if gap > 5 {
        explanation.push(format!(
            "Gap of {} years between earliest publication ({}) and sustained start ({})",
            gap, earliest_year, sustained_start_year
        ));
    }
    if explanation.is_empty() {
        explanation.push("No early outlier publications detected".to_string());
    }

    AcademicAgeResult {
        academic_age: Some(academic_age),
        confidence_score,
        confidence_level: ConfidenceLevel::from_score(confidence_score),
        sustained_start_year: Some(sustained_start_year),
        earliest_year: Some(earliest_year),
        excluded_count,
        explanation,
    }
}

/// Leftmost publication year whose 3-year window holds enough publications.
/// Candidates are the years that actually carry a publication, scanned in
/// ascending order; sparse records where no window qualifies fall back to the
/// earliest year.
fn detect_sustained_start(histogram: &BTreeMap<i32, u32>, earliest_year: i32) -> i32 {
    histogram
        .keys()
        .copied()
        .find(|&candidate| {
            let window_count: u32 = histogram
                .range(candidate..candidate + SUSTAINED_WINDOW_YEARS)
                .map(|(_, count)| count)
                .sum();
            window_count >= SUSTAINED_MIN_COUNT
        })
        .unwrap_or(earliest_year)
}

/// Large gaps between the earliest record and the sustained start suggest the
/// earliest record is noise.
fn temporal_component(gap: i32) -> f64 {
    match gap {
        0 => 1.0,
        1..=2 => 0.9,
        3..=5 => 0.7,
        6..=10 => 0.5,
        _ => 0.3,
    }
}

/// Publication density in the five years from the sustained start.
fn volume_component(years: &[i32], sustained_start_year: i32) -> f64 {
    let early_count = years
        .iter()
        .filter(|&&y| y >= sustained_start_year && y < sustained_start_year + EARLY_WINDOW_YEARS)
        .count();
    match early_count {
        n if n >= 10 => 1.0,
        n if n >= 5 => 0.8,
        n if n >= 3 => 0.6,
        _ => 0.4,
    }
}

/// Topical overlap between the author's declared top concepts and the concepts
/// of their early-window works. Neutral (0.5) when the profile carries no
/// concepts or the record is too small to judge.
fn topic_component(
    works: &[WorkRecord],
    profile: &AuthorProfile,
    sustained_start_year: i32,
    current_year: i32,
) -> f64 {
    if profile.top_concepts.is_empty() || works.len() < MIN_WORKS_FOR_TOPIC {
        return 0.5;
    }

    let author_labels: HashSet<String> = profile
        .top_concepts
        .iter()
        .take(TOP_AUTHOR_CONCEPTS)
        .map(|c| c.display_name.to_lowercase())
        .collect();

    let early_labels: HashSet<String> = works
        .iter()
        .filter(|w| {
            w.publication_year.is_some_and(|y| {
                is_valid_year(y, current_year)
                    && y >= sustained_start_year
                    && y < sustained_start_year + EARLY_WINDOW_YEARS
            })
        })
        .take(EARLY_WORKS_SAMPLE)
        .flat_map(|w| w.concepts.iter().take(TOP_WORK_CONCEPTS))
        .map(|c| c.display_name.to_lowercase())
        .collect();

    let overlap = author_labels.intersection(&early_labels).count();
    (overlap as f64 / TOP_WORK_CONCEPTS as f64).min(1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::Concept;

    fn work(year: Option<i32>) -> WorkRecord {
        WorkRecord {
            publication_year: year,
            cited_by_count: 0,
            concepts: vec![],
        }
    }

    fn work_with_concepts(year: i32, concepts: &[&str]) -> WorkRecord {
        WorkRecord {
            publication_year: Some(year),
            cited_by_count: 0,
            concepts: concepts.iter().map(|c| Concept::new(*c)).collect(),
        }
    }

    fn profile(top_concepts: &[&str]) -> AuthorProfile {
        AuthorProfile {
            id: "A1".to_string(),
            display_name: "Test Author".to_string(),
            top_concepts: top_concepts.iter().map(|c| Concept::new(*c)).collect(),
            h_index: 10,
            works_count: 20,
            cited_by_count: 500,
        }
    }

    #[test]
    fn test_empty_record_is_not_applicable() {
        let result = estimate_academic_age(&[], &profile(&[]), 2024);

        assert_eq!(result.academic_age, None);
        assert_eq!(result.confidence_score, 0);
        assert_eq!(result.confidence_level, ConfidenceLevel::NotApplicable);
        assert_eq!(result.sustained_start_year, None);
        assert_eq!(result.earliest_year, None);
        assert_eq!(result.excluded_count, 0);
        assert!(result.explanation[0].contains("No valid publication years"));
    }

    #[test]
    fn test_all_invalid_years_is_not_applicable() {
        let works = vec![work(Some(1850)), work(Some(2099)), work(None)];
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.academic_age, None);
        assert_eq!(result.confidence_level, ConfidenceLevel::NotApplicable);
    }

    #[test]
    fn test_early_outlier_is_excluded_from_sustained_start() {
        // One 2005 paper, then real activity from 2012 on.
        let works: Vec<WorkRecord> = [2005, 2012, 2013, 2018, 2019, 2020]
            .iter()
            .map(|&y| work(Some(y)))
            .collect();
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.sustained_start_year, Some(2012));
        assert_eq!(result.earliest_year, Some(2005));
        assert_eq!(result.academic_age, Some(12));
        assert_eq!(result.excluded_count, 1);
        // temporal 0.5 (gap 7), volume 0.4 (2 early works), topic neutral 0.5
        assert_eq!(result.confidence_score, 47);
        assert_eq!(result.confidence_level, ConfidenceLevel::Low);
        assert!(result.explanation.iter().any(|n| n.contains("Excluded 1")));
        assert!(result
            .explanation
            .iter()
            .any(|n| n.contains("Gap of 7 years")));
    }

    #[test]
    fn test_recent_author_starts_at_first_publication() {
        let works = vec![work(Some(2020)), work(Some(2021))];
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.sustained_start_year, Some(2020));
        assert_eq!(result.academic_age, Some(4));
        assert_eq!(result.excluded_count, 0);
        // temporal 1.0, volume 0.4, topic neutral -> 67
        assert_eq!(result.confidence_score, 67);
        assert_eq!(result.confidence_level, ConfidenceLevel::Medium);
        assert!(result.explanation[0].contains("No early outlier"));
    }

    #[test]
    fn test_window_anchors_at_a_publication_year() {
        // A window starting at 2011 would also hold two publications, but
        // 2011 has none of its own; detection anchors at 2012.
        let works: Vec<WorkRecord> = [2005, 2012, 2013].iter().map(|&y| work(Some(y))).collect();
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.sustained_start_year, Some(2012));
        assert_eq!(result.academic_age, Some(12));
    }

    #[test]
    fn test_sparse_record_falls_back_to_earliest_year() {
        // Never two publications within any 3-year window.
        let works = vec![work(Some(2000)), work(Some(2010)), work(Some(2020))];
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.sustained_start_year, Some(2000));
        assert_eq!(result.academic_age, Some(24));
        assert_eq!(result.excluded_count, 0);
    }

    #[test]
    fn test_dense_early_output_scores_high() {
        let mut works: Vec<WorkRecord> = Vec::new();
        for year in 2010..2015 {
            works.push(work(Some(year)));
            works.push(work(Some(year)));
        }
        let result = estimate_academic_age(&works, &profile(&[]), 2024);

        assert_eq!(result.sustained_start_year, Some(2010));
        // temporal 1.0, volume 1.0 (10 early works), topic neutral
        assert_eq!(result.confidence_score, 85);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_topic_overlap_raises_confidence() {
        let early = &["Machine Learning", "Computer Science", "Statistics"];
        let works = vec![
            work_with_concepts(2015, early),
            work_with_concepts(2015, early),
            work_with_concepts(2016, &["Optimization"]),
            work_with_concepts(2017, &["Biology"]),
            work_with_concepts(2018, &["Machine Learning"]),
        ];
        let author = profile(&["machine learning", "computer science", "optimization"]);
        let result = estimate_academic_age(&works, &author, 2024);

        assert_eq!(result.sustained_start_year, Some(2015));
        // Case-insensitive overlap {machine learning, computer science,
        // optimization} -> 3/5 = 0.6 topic component.
        // temporal 1.0, volume 0.8 -> 0.4 + 0.24 + 0.18 = 82
        assert_eq!(result.confidence_score, 82);
        assert_eq!(result.confidence_level, ConfidenceLevel::High);
    }

    #[test]
    fn test_topic_component_neutral_below_five_works() {
        let works = vec![
            work_with_concepts(2020, &["Machine Learning"]),
            work_with_concepts(2021, &["Machine Learning"]),
        ];
        let author = profile(&["Machine Learning"]);
        let result = estimate_academic_age(&works, &author, 2024);

        // Two works only: topic must stay neutral despite a perfect overlap.
        assert_eq!(result.confidence_score, 67);
    }

    #[test]
    fn test_volume_component_monotone_in_early_publications() {
        let base: Vec<i32> = vec![2010, 2011];
        let mut previous = 0;
        for extra in 0usize..12 {
            let mut years = base.clone();
            years.extend(std::iter::repeat(2012).take(extra));
            let works: Vec<WorkRecord> = years.iter().map(|&y| work(Some(y))).collect();
            let result = estimate_academic_age(&works, &profile(&[]), 2024);

            assert_eq!(result.sustained_start_year, Some(2010));
            assert!(result.confidence_score >= previous);
            previous = result.confidence_score;
        }
    }

    #[test]
    fn test_score_and_start_year_bounds() {
        let inputs: Vec<Vec<i32>> = vec![
            vec![2024],
            vec![1901, 1902, 1903],
            vec![2005, 2012, 2013, 2018, 2019, 2020],
            (1990..2024).collect(),
        ];
        for years in inputs {
            let works: Vec<WorkRecord> = years.iter().map(|&y| work(Some(y))).collect();
            let result = estimate_academic_age(&works, &profile(&[]), 2024);

            assert!(result.confidence_score <= 100);
            assert!(result.sustained_start_year >= result.earliest_year);
            assert!(result.academic_age.unwrap() >= 0);
        }
    }

    #[test]
    fn test_idempotent_over_unchanged_input() {
        let works: Vec<WorkRecord> = [2005, 2012, 2013].iter().map(|&y| work(Some(y))).collect();
        let author = profile(&["Physics"]);

        let first = estimate_academic_age(&works, &author, 2024);
        let second = estimate_academic_age(&works, &author, 2024);
        assert_eq!(first, second);
    }
}

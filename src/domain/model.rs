use serde::{Deserialize, Serialize};

/// A single topic label, as attached to works and author profiles by OpenAlex.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Concept {
    pub display_name: String,
}

impl Concept {
    pub fn new(display_name: impl Into<String>) -> Self {
        Self {
            display_name: display_name.into(),
        }
    }
}

/// One publication as supplied by the catalog. The analyzers never mutate it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkRecord {
    pub publication_year: Option<i32>,
    #[serde(default)]
    pub cited_by_count: u64,
    #[serde(default)]
    pub concepts: Vec<Concept>,
}

/// Author profile fields the analyzers and the report renderer depend on.
/// `top_concepts` preserves the catalog's ranking order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthorProfile {
    pub id: String,
    pub display_name: String,
    pub top_concepts: Vec<Concept>,
    pub h_index: u32,
    pub works_count: u32,
    #[serde(default)]
    pub cited_by_count: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    High,
    Medium,
    Low,
    NotApplicable,
}

impl ConfidenceLevel {
    /// Level bands for a 0-100 confidence score. `NotApplicable` is reserved
    /// for the no-data terminal result and never derived from a score.
    pub fn from_score(score: u8) -> Self {
        match score {
            80..=100 => ConfidenceLevel::High,
            60..=79 => ConfidenceLevel::Medium,
            _ => ConfidenceLevel::Low,
        }
    }
}

impl std::fmt::Display for ConfidenceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            ConfidenceLevel::High => "High",
            ConfidenceLevel::Medium => "Medium",
            ConfidenceLevel::Low => "Low",
            ConfidenceLevel::NotApplicable => "N/A",
        };
        write!(f, "{}", label)
    }
}

/// Outcome of the sustained-activity estimate. All year fields are absent when
/// the record contains no usable publication years.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AcademicAgeResult {
    pub academic_age: Option<i32>,
    pub confidence_score: u8,
    pub confidence_level: ConfidenceLevel,
    pub sustained_start_year: Option<i32>,
    pub earliest_year: Option<i32>,
    pub excluded_count: usize,
    pub explanation: Vec<String>,
}

/// Citation-distribution metrics. Percentages are 0-100 with one decimal,
/// the efficiency ratio carries three decimals.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CitationMetrics {
    pub median_citations: f64,
    pub mean_citations: f64,
    pub top_decile_concentration_pct: f64,
    pub recent_activity_pct: f64,
    pub h_index_efficiency: f64,
}

/// Everything the CLI renders for one author.
#[derive(Debug, Clone, Serialize)]
pub struct ScholarReport {
    pub author: AuthorProfile,
    pub academic_age: AcademicAgeResult,
    pub citations: CitationMetrics,
}

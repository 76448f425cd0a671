pub mod academic_age;
pub mod citations;
pub mod report;
pub mod shaping;

pub use crate::domain::model::{
    AcademicAgeResult, AuthorProfile, CitationMetrics, ConfidenceLevel, ScholarReport, WorkRecord,
};
pub use crate::domain::ports::ScholarCatalog;
pub use crate::utils::error::Result;

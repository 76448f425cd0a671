use crate::domain::model::{AuthorProfile, WorkRecord};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Upstream publication catalog, keyed by author identity. Implementations own
/// all network concerns (pagination, rate limiting, page caps); the analysis
/// core only ever sees fully materialized collections.
#[async_trait]
pub trait ScholarCatalog: Send + Sync {
    async fn search_authors(&self, query: &str, per_page: usize) -> Result<Vec<AuthorProfile>>;

    async fn fetch_author(&self, author_id: &str) -> Result<AuthorProfile>;

    async fn fetch_works(&self, author_id: &str) -> Result<Vec<WorkRecord>>;
}

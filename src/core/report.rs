use crate::core::academic_age::estimate_academic_age;
use crate::core::citations::citation_metrics;
use crate::domain::model::{AuthorProfile, ScholarReport};
use crate::domain::ports::ScholarCatalog;
use crate::utils::error::{Result, ScholarError};
use chrono::Datelike;

const SEARCH_RESULTS_PER_PAGE: usize = 20;

/// Runs the full report for one author: resolve the profile, fetch the works,
/// then apply both analyzers over the materialized collections.
pub struct ReportEngine<C: ScholarCatalog> {
    catalog: C,
    current_year: i32,
}

impl<C: ScholarCatalog> ReportEngine<C> {
    pub fn new(catalog: C) -> Self {
        Self::with_current_year(catalog, chrono::Utc::now().year())
    }

    /// Pin the reference year instead of using the wall clock.
    pub fn with_current_year(catalog: C, current_year: i32) -> Self {
        Self {
            catalog,
            current_year,
        }
    }

    pub async fn run(&self, author_ref: &str) -> Result<ScholarReport> {
        tracing::info!("Resolving author: {}", author_ref);
        let author = self.resolve_author(author_ref).await?;
        tracing::info!(
            "Fetching works for {} ({})",
            author.display_name,
            author.id
        );

        let works = self.catalog.fetch_works(&author.id).await?;
        tracing::debug!("Fetched {} works", works.len());

        let academic_age = estimate_academic_age(&works, &author, self.current_year);
        let citations =
            citation_metrics(&works, author.h_index, author.works_count, self.current_year);

        Ok(ScholarReport {
            author,
            academic_age,
            citations,
        })
    }

    /// Accepts either an OpenAlex author ID (optionally as a full URL) or a
    /// free-text name query, in which case the top search hit wins.
    async fn resolve_author(&self, author_ref: &str) -> Result<AuthorProfile> {
        if let Some(id) = as_openalex_author_id(author_ref) {
            return self.catalog.fetch_author(id).await;
        }

        let mut matches = self
            .catalog
            .search_authors(author_ref, SEARCH_RESULTS_PER_PAGE)
            .await?;
        if matches.is_empty() {
            return Err(ScholarError::AuthorNotFound {
                query: author_ref.to_string(),
            });
        }
        Ok(matches.remove(0))
    }
}

/// OpenAlex author IDs look like `A5023888391`, sometimes prefixed with the
/// canonical URL.
fn as_openalex_author_id(author_ref: &str) -> Option<&str> {
    let id = author_ref
        .trim()
        .trim_start_matches("https://openalex.org/");
    let digits = id.strip_prefix('A')?;
    if !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit()) {
        Some(id)
    } else {
        None
    }
}

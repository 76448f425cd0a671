//! OpenAlex catalog client implementing [`ScholarCatalog`].
//!
//! Owns every network concern the analysis core is free of: pagination over
//! the works listing, the polite-pool `User-Agent` header and a hard page
//! ceiling bounding worst-case data volume.

use crate::domain::model::{AuthorProfile, Concept, WorkRecord};
use crate::domain::ports::ScholarCatalog;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::header::USER_AGENT;
use reqwest::Client;
use serde::Deserialize;

pub const DEFAULT_BASE_URL: &str = "https://api.openalex.org";

/// OpenAlex serves at most 200 results per works page.
const WORKS_PER_PAGE: usize = 200;

#[derive(Debug, Clone)]
pub struct OpenAlexClient {
    client: Client,
    base_url: String,
    mailto: String,
    max_pages: usize,
}

impl OpenAlexClient {
    pub fn new(mailto: impl Into<String>, max_pages: usize) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, mailto, max_pages)
    }

    pub fn with_base_url(
        base_url: impl Into<String>,
        mailto: impl Into<String>,
        max_pages: usize,
    ) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into().trim_end_matches('/').to_string(),
            mailto: mailto.into(),
            max_pages,
        }
    }

    /// Polite-pool access: OpenAlex routes requests carrying a contact
    /// address to a faster pool.
    fn user_agent(&self) -> String {
        format!("mailto:{}", self.mailto)
    }
}

#[async_trait]
impl ScholarCatalog for OpenAlexClient {
    async fn search_authors(&self, query: &str, per_page: usize) -> Result<Vec<AuthorProfile>> {
        let url = format!("{}/authors", self.base_url);
        let per_page = per_page.to_string();
        tracing::debug!("Searching authors: {}", query);

        let response = self
            .client
            .get(&url)
            .query(&[("search", query), ("per_page", per_page.as_str())])
            .header(USER_AGENT, self.user_agent())
            .send()
            .await?
            .error_for_status()?;

        let body: ListResponse<ApiAuthor> = response.json().await?;
        tracing::debug!("Author search returned {} of {} hits", body.results.len(), body.meta.count);
        Ok(body.results.into_iter().map(AuthorProfile::from).collect())
    }

    async fn fetch_author(&self, author_id: &str) -> Result<AuthorProfile> {
        let url = format!("{}/authors/{}", self.base_url, author_id);
        tracing::debug!("Fetching author profile: {}", author_id);

        let response = self
            .client
            .get(&url)
            .header(USER_AGENT, self.user_agent())
            .send()
            .await?
            .error_for_status()?;

        let body: ApiAuthor = response.json().await?;
        Ok(body.into())
    }

    async fn fetch_works(&self, author_id: &str) -> Result<Vec<WorkRecord>> {
        let url = format!("{}/works", self.base_url);
        let filter = format!("author.id:{}", author_id);
        let per_page = WORKS_PER_PAGE.to_string();
        let mut works = Vec::new();
        let mut page = 1;

        loop {
            tracing::debug!("Fetching works page {} for {}", page, author_id);
            let page_param = page.to_string();
            let response = self
                .client
                .get(&url)
                .query(&[
                    ("filter", filter.as_str()),
                    ("per-page", per_page.as_str()),
                    ("page", page_param.as_str()),
                ])
                .header(USER_AGENT, self.user_agent())
                .send()
                .await?
                .error_for_status()?;

            let body: ListResponse<ApiWork> = response.json().await?;
            let total = body.meta.count as usize;
            let fetched = body.results.len();
            works.extend(body.results.into_iter().map(WorkRecord::from));

            if fetched == 0 || works.len() >= total {
                break;
            }
            if page >= self.max_pages {
                tracing::warn!(
                    "Works listing capped at {} page(s); {} of {} works fetched",
                    self.max_pages,
                    works.len(),
                    total
                );
                break;
            }
            page += 1;
        }

        Ok(works)
    }
}

// Wire payloads. Absent fields become explicit defaults here, at the boundary;
// the unsigned count types reject negative values during deserialization.

#[derive(Debug, Deserialize)]
struct ListResponse<T> {
    meta: Meta,
    results: Vec<T>,
}

#[derive(Debug, Deserialize)]
struct Meta {
    count: u64,
}

#[derive(Debug, Deserialize)]
struct ApiConcept {
    display_name: String,
}

#[derive(Debug, Deserialize)]
struct ApiWork {
    publication_year: Option<i32>,
    #[serde(default)]
    cited_by_count: u64,
    #[serde(default)]
    concepts: Vec<ApiConcept>,
}

#[derive(Debug, Deserialize)]
struct ApiAuthor {
    id: String,
    display_name: String,
    #[serde(default)]
    works_count: u32,
    #[serde(default)]
    cited_by_count: u64,
    #[serde(default)]
    x_concepts: Vec<ApiConcept>,
    #[serde(default)]
    summary_stats: SummaryStats,
}

#[derive(Debug, Deserialize, Default)]
struct SummaryStats {
    #[serde(default)]
    h_index: u32,
}

impl From<ApiConcept> for Concept {
    fn from(concept: ApiConcept) -> Self {
        Concept::new(concept.display_name)
    }
}

impl From<ApiWork> for WorkRecord {
    fn from(work: ApiWork) -> Self {
        WorkRecord {
            publication_year: work.publication_year,
            cited_by_count: work.cited_by_count,
            concepts: work.concepts.into_iter().map(Concept::from).collect(),
        }
    }
}

impl From<ApiAuthor> for AuthorProfile {
    fn from(author: ApiAuthor) -> Self {
        AuthorProfile {
            // OpenAlex returns the canonical URL form; keep the bare ID for
            // follow-up filter queries.
            id: author
                .id
                .trim_start_matches("https://openalex.org/")
                .to_string(),
            display_name: author.display_name,
            top_concepts: author.x_concepts.into_iter().map(Concept::from).collect(),
            h_index: author.summary_stats.h_index,
            works_count: author.works_count,
            cited_by_count: author.cited_by_count,
        }
    }
}

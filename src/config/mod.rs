use crate::adapters::openalex::DEFAULT_BASE_URL;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_mailto, validate_positive_number, validate_range, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "scholar-metrics")]
#[command(about = "Estimate a scholar's academic age and citation metrics from OpenAlex")]
pub struct CliConfig {
    /// Author name to search for, or an OpenAlex author ID (e.g. A5023888391)
    pub author: String,

    #[arg(long, default_value = DEFAULT_BASE_URL)]
    pub api_endpoint: String,

    /// Contact address sent with every request for polite-pool access
    #[arg(long, default_value = "scholar-metrics@example.com")]
    pub mailto: String,

    /// Hard ceiling on works-listing pages fetched per author
    #[arg(long, default_value = "25")]
    pub max_pages: usize,

    /// Override the reference year (defaults to the current wall-clock year)
    #[arg(long)]
    pub current_year: Option<i32>,

    /// Emit the report as JSON instead of text
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("api_endpoint", &self.api_endpoint)?;
        validate_mailto("mailto", &self.mailto)?;
        validate_positive_number("max_pages", self.max_pages, 1)?;
        if let Some(year) = self.current_year {
            validate_range("current_year", year, 1901, 2100)?;
        }
        Ok(())
    }
}

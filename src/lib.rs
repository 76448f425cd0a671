pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use crate::adapters::openalex::OpenAlexClient;
pub use crate::config::CliConfig;
pub use crate::core::report::ReportEngine;
pub use crate::utils::error::{Result, ScholarError};

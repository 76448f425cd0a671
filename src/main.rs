use clap::Parser;
use scholar_metrics::domain::model::ScholarReport;
use scholar_metrics::utils::{logger, validation::Validate};
use scholar_metrics::{CliConfig, OpenAlexClient, ReportEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting scholar-metrics CLI");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    let client = OpenAlexClient::with_base_url(
        config.api_endpoint.clone(),
        config.mailto.clone(),
        config.max_pages,
    );
    let engine = match config.current_year {
        Some(year) => ReportEngine::with_current_year(client, year),
        None => ReportEngine::new(client),
    };

    match engine.run(&config.author).await {
        Ok(report) => {
            if config.json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Err(e) => {
            tracing::error!("Report failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}

fn print_report(report: &ScholarReport) {
    let author = &report.author;
    let age = &report.academic_age;
    let citations = &report.citations;

    println!("Author: {} ({})", author.display_name, author.id);
    println!(
        "Works: {} | Citations: {} | h-index: {}",
        author.works_count, author.cited_by_count, author.h_index
    );
    println!();

    println!("Academic age");
    match (age.academic_age, age.sustained_start_year) {
        (Some(years), Some(start)) => {
            println!("  Estimated age:  {} years (sustained since {})", years, start);
            if let Some(earliest) = age.earliest_year {
                println!("  Earliest year:  {}", earliest);
            }
        }
        _ => println!("  Estimated age:  undetermined"),
    }
    println!(
        "  Confidence:     {}% ({})",
        age.confidence_score, age.confidence_level
    );
    for note in &age.explanation {
        println!("  - {}", note);
    }
    println!();

    println!("Citation metrics");
    println!("  Mean citations:      {:.1}", citations.mean_citations);
    println!("  Median citations:    {:.1}", citations.median_citations);
    println!(
        "  Top-decile share:    {:.1}%",
        citations.top_decile_concentration_pct
    );
    println!(
        "  Recent activity:     {:.1}%",
        citations.recent_activity_pct
    );
    println!(
        "  h-index efficiency:  {:.3}",
        citations.h_index_efficiency
    );
}

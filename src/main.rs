mod archiver;
mod config;
mod fetcher;
mod models;
mod normalizer;
mod parser;
mod pipeline;
mod ranking;
mod scoring;

use anyhow::Result;
use chrono::Utc;
use tracing_subscriber::EnvFilter;

use crate::config::{RENDER_DATA_PATH, REPORT_PATH, SOURCE_URL};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with_writer(std::io::stderr)
        .init();

    let now = Utc::now();
    let html = fetcher::fetch_html(SOURCE_URL);
    let outcome = pipeline::process(&html, now.date_naive());

    let report = archiver::build_report(&outcome, now.format("%Y-%m-%dT%H:%M:%SZ").to_string());
    archiver::save_to_file(&report, REPORT_PATH)?;

    println!("Total launches parsed: {}", report.total_launches_found);
    println!("Filtered relevant: {}", report.filtered_relevant);
    println!("Top launches saved: {}", report.top_launches);
    println!("JSON saved to: {}", REPORT_PATH);

    archiver::save_to_file(&archiver::render_records(&outcome), RENDER_DATA_PATH)?;
    Ok(())
}

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use crate::config::{SOURCE_URL, TARGET_NICHES};
use crate::models::{LaunchRecord, Report, ReportEntry};
use crate::pipeline::Outcome;

pub fn build_report(outcome: &Outcome, scraped_at: String) -> Report {
    let launches: Vec<ReportEntry> = outcome.top_launches().iter().map(ReportEntry::from).collect();
    Report {
        scraped_at,
        source: SOURCE_URL.to_string(),
        total_launches_found: outcome.total_found,
        filtered_relevant: outcome.filtered.len(),
        top_launches: launches.len(),
        target_niches: TARGET_NICHES.iter().map(|n| n.to_string()).collect(),
        launches,
    }
}

pub fn render_records(outcome: &Outcome) -> Vec<LaunchRecord> {
    outcome.top_launches().iter().map(LaunchRecord::from).collect()
}

/// Pretty-print `value` as JSON to `filename`, replacing any previous file.
pub fn save_to_file<T: Serialize + ?Sized>(value: &T, filename: &str) -> Result<()> {
    let json = serde_json::to_string_pretty(value)
        .with_context(|| format!("serializing {}", filename))?;

    if let Some(parent) = Path::new(filename).parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating {}", parent.display()))?;
    }
    let mut file = File::create(filename).with_context(|| format!("creating {}", filename))?;
    file.write_all(json.as_bytes())
        .with_context(|| format!("writing {}", filename))?;
    info!("wrote {} bytes to {}", json.len(), filename);
    Ok(())
}

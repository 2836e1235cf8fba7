use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeSet;
use std::path::Path;
use tracing::info;

use crate::stats::Classification;
use crate::utils::{format_number, redact_domain};
use crate::Args;

pub fn print_classification(result: &Classification, args: &Args) {
    println!("\n--- Ad Scraper Log Classification ---");
    println!(
        "Domains classified: {}",
        format_number(result.total_domains() as u32)
    );

    print_domain_section("Advertisers with no active ads", &result.no_ads, args.redact);
    print_domain_section("Advertisers with active ads", &result.active_ads, args.redact);
    print_domain_section("Non-advertisers", &result.non_advertisers, args.redact);

    println!("\nAdvertiser count verification:");
    println!(
        "- Classified advertisers (no ads + active ads): {}",
        format_number(result.classified_advertisers() as u32)
    );
    println!(
        "- Distinct creative IDs fetched: {}",
        format_number(result.distinct_creative_ids as u32)
    );
}

fn print_domain_section(title: &str, domains: &BTreeSet<String>, redact: bool) {
    println!("\n{} ({}):", title, format_number(domains.len() as u32));

    if domains.is_empty() {
        println!("None found.");
        return;
    }

    for domain in domains {
        let display_domain = if redact {
            redact_domain(domain)
        } else {
            domain.to_string()
        };
        println!("- {}", display_domain);
    }
}

#[derive(Serialize)]
struct ExportRow<'a> {
    #[serde(rename = "Domain")]
    domain: &'a str,
    #[serde(rename = "Classification")]
    classification: &'a str,
}

/// Export all classified domains as two-column CSV, one row per domain.
/// The header row is written even when the partition is empty.
pub fn write_csv(result: &Classification, path: &Path) -> Result<()> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_path(path)
        .with_context(|| format!("Failed to create CSV file at {:?}", path))?;
    writer.write_record(["Domain", "Classification"])?;

    let mut row_count = 0u32;
    for (domain, label) in result.rows() {
        writer.serialize(ExportRow {
            domain,
            classification: label.as_str(),
        })?;
        row_count += 1;
    }
    writer.flush()?;

    info!(
        action = "export",
        component = "csv_export",
        row_count,
        path = ?path,
        "Wrote classification CSV"
    );
    Ok(())
}

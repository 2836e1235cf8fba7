use anyhow::Result;
use std::collections::BTreeSet;
use std::time::Instant;
use tracing::info;

use crate::markers::LogMarkers;
use crate::stats::Classification;
use crate::{domain, input, Args};

/// Partition the supplied canonical domains into no-active-ads advertisers,
/// active-ads advertisers, and non-advertisers based on log markers.
///
/// A zero-result line is authoritative: a domain showing both a zero-result
/// line and a processing-error line lands in `no_ads`. Domains the log
/// mentions but the caller did not supply are ignored.
pub fn classify(domains: &BTreeSet<String>, log_text: &str) -> Result<Classification> {
    let start_time = Instant::now();
    info!(
        action = "start",
        component = "log_scan",
        domain_count = domains.len(),
        log_bytes = log_text.len(),
        "Scanning log for classification markers"
    );

    let markers = LogMarkers::new()?;
    let zero_results = markers.zero_result_domains(log_text);
    let processing_errors = markers.processing_error_domains(log_text);
    let creative_ids = markers.creative_ids(log_text);

    info!(
        action = "scan",
        component = "log_scan",
        zero_result_domains = zero_results.len(),
        error_domains = processing_errors.len(),
        creative_ids = creative_ids.len(),
        "Marker scan completed"
    );

    let mut result = Classification {
        distinct_creative_ids: creative_ids.len(),
        ..Classification::default()
    };

    for domain in domains {
        if zero_results.contains(domain) {
            result.no_ads.insert(domain.clone());
        } else if processing_errors.contains(domain) {
            result.active_ads.insert(domain.clone());
        } else {
            result.non_advertisers.insert(domain.clone());
        }
    }

    let scan_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "log_scan",
        no_ads = result.no_ads.len(),
        active_ads = result.active_ads.len(),
        non_advertisers = result.non_advertisers.len(),
        duration_ms = scan_time.as_millis(),
        "Classification partition completed"
    );

    Ok(result)
}

/// End-to-end run: read the domain list and log from disk, parse, classify.
pub fn run_classification(args: &Args) -> Result<Classification> {
    let total_start_time = Instant::now();
    info!(
        action = "start",
        component = "classification",
        "Starting scraper log classification"
    );

    let domain_text = input::read_domain_list(&args.domains)?;
    let domains = domain::parse_domain_list(&domain_text);
    info!(
        action = "parse",
        component = "domain_list",
        domain_count = domains.len(),
        "Parsed domain list"
    );

    let log_text = input::read_log_text(&args.log)?;
    let result = classify(&domains, &log_text)?;

    let total_time = total_start_time.elapsed();
    info!(
        action = "complete",
        component = "classification",
        duration_ms = total_time.as_millis(),
        "Classification completed successfully"
    );

    Ok(result)
}

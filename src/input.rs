use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use std::time::Instant;
use tracing::{info, warn};

/// Read the user-supplied domain list as UTF-8 text.
pub fn read_domain_list(path: &Path) -> Result<String> {
    info!(action = "read", component = "domain_list", path = ?path, "Reading domain list");

    if !path.exists() {
        anyhow::bail!("Domain list file not found at {:?}", path);
    }

    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read domain list from {:?}", path))?;

    info!(
        action = "complete",
        component = "domain_list",
        bytes = text.len(),
        "Domain list read"
    );
    Ok(text)
}

/// Read the scraper log with a best-effort decode: invalid UTF-8 byte
/// sequences are replaced rather than aborting the run.
pub fn read_log_text(path: &Path) -> Result<String> {
    let start_time = Instant::now();
    info!(action = "read", component = "log_file", path = ?path, "Reading scraper log");

    if !path.exists() {
        anyhow::bail!("Log file not found at {:?}", path);
    }

    let bytes = fs::read(path).with_context(|| format!("Failed to read log from {:?}", path))?;
    let text = match String::from_utf8(bytes) {
        Ok(text) => text,
        Err(err) => {
            warn!(
                action = "decode",
                component = "log_file",
                "Log contains invalid UTF-8, decoding lossily"
            );
            String::from_utf8_lossy(err.as_bytes()).into_owned()
        }
    };

    let read_time = start_time.elapsed();
    info!(
        action = "complete",
        component = "log_file",
        bytes = text.len(),
        duration_ms = read_time.as_millis(),
        "Scraper log read"
    );
    Ok(text)
}

use anyhow::Result;
use regex::Regex;
use std::collections::HashSet;

use crate::domain::normalize_domain;

/// Compiled marker patterns for one scan over a scraper log.
///
/// Domain tokens pulled out of the log go through the same normalization as
/// the caller's domain list, so membership checks compare canonical keys on
/// both sides instead of enumerating prefix/suffix variants.
pub struct LogMarkers {
    zero_result_line: Regex,
    domain_token: Regex,
    processing_error: Regex,
    creative_id: Regex,
}

impl LogMarkers {
    pub fn new() -> Result<Self> {
        Ok(Self {
            zero_result_line: Regex::new(r"(?i)total results fetched for\s+(.*):\s*0\s*$")?,
            domain_token: Regex::new(
                r"(?i)(?:https?://)?(?:www\.)?[a-z0-9][a-z0-9.-]*\.[a-z]{2,}/?",
            )?,
            processing_error: Regex::new(r#"(?i)error processing\s+"([^"]+)""#)?,
            creative_id: Regex::new(r"Successfully fetched creative ID (CR[0-9]+)")?,
        })
    }

    /// Canonical domains reported with a fetch count of exactly zero.
    pub fn zero_result_domains(&self, log_text: &str) -> HashSet<String> {
        let mut hits = HashSet::new();
        for line in log_text.lines() {
            if let Some(caps) = self.zero_result_line.captures(line) {
                let segment = &caps[1];
                for token in self.domain_token.find_iter(segment) {
                    let canonical = normalize_domain(token.as_str());
                    if !canonical.is_empty() {
                        hits.insert(canonical);
                    }
                }
            }
        }
        hits
    }

    /// Canonical domains named in a quoted processing-error line.
    pub fn processing_error_domains(&self, log_text: &str) -> HashSet<String> {
        self.processing_error
            .captures_iter(log_text)
            .map(|caps| normalize_domain(&caps[1]))
            .filter(|canonical| !canonical.is_empty())
            .collect()
    }

    /// Distinct creative-ID tokens fetched during the scrape.
    pub fn creative_ids(&self, log_text: &str) -> HashSet<String> {
        self.creative_id
            .captures_iter(log_text)
            .map(|caps| caps[1].to_string())
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_result_line_yields_canonical_domain() {
        let markers = LogMarkers::new().unwrap();
        let hits =
            markers.zero_result_domains("Total results fetched for http://www.example.com/: 0");
        assert_eq!(hits.len(), 1);
        assert!(hits.contains("example.com"));
    }

    #[test]
    fn zero_result_requires_exact_zero_count() {
        let markers = LogMarkers::new().unwrap();
        let log = "Total results fetched for example.com: 10\n\
                   Total results fetched for foo.org: 01\n\
                   Total results fetched for bar.net: 0";
        let hits = markers.zero_result_domains(log);
        assert_eq!(hits.len(), 1);
        assert!(hits.contains("bar.net"));
    }

    #[test]
    fn zero_result_matching_is_case_insensitive() {
        let markers = LogMarkers::new().unwrap();
        let hits = markers.zero_result_domains("TOTAL RESULTS FETCHED FOR WWW.EXAMPLE.COM: 0");
        assert!(hits.contains("example.com"));
    }

    #[test]
    fn zero_result_tolerates_surrounding_text() {
        let markers = LogMarkers::new().unwrap();
        let log = "2024-06-01 12:00:00 INFO Total results fetched for query batch example.com page 3: 0";
        let hits = markers.zero_result_domains(log);
        assert!(hits.contains("example.com"));
    }

    #[test]
    fn processing_error_strips_scheme_www_and_slash() {
        let markers = LogMarkers::new().unwrap();
        let log = r#"Error processing "http://www.foo.com/""#;
        let hits = markers.processing_error_domains(log);
        assert_eq!(hits.len(), 1);
        assert!(hits.contains("foo.com"));
    }

    #[test]
    fn processing_error_accepts_bare_domain() {
        let markers = LogMarkers::new().unwrap();
        let hits = markers.processing_error_domains(r#"Error processing "baz.com/""#);
        assert!(hits.contains("baz.com"));
    }

    #[test]
    fn creative_ids_are_deduplicated() {
        let markers = LogMarkers::new().unwrap();
        let log = "Successfully fetched creative ID CR100\n\
                   Successfully fetched creative ID CR100\n\
                   Successfully fetched creative ID CR200";
        let ids = markers.creative_ids(log);
        assert_eq!(ids.len(), 2);
        assert!(ids.contains("CR100"));
        assert!(ids.contains("CR200"));
    }

    #[test]
    fn empty_log_yields_no_markers() {
        let markers = LogMarkers::new().unwrap();
        assert!(markers.zero_result_domains("").is_empty());
        assert!(markers.processing_error_domains("").is_empty());
        assert!(markers.creative_ids("").is_empty());
    }
}

use std::collections::BTreeSet;

/// Canonicalize a domain-like token: trim, lower-case, drop the scheme,
/// drop a leading `www.`, drop a single trailing slash.
///
/// Re-normalizing a canonical domain returns it unchanged, so the same
/// function is safe to apply on both the domain-list side and the
/// log-scanning side.
pub fn normalize_domain(raw: &str) -> String {
    let lowered = raw.trim().to_lowercase();

    let stripped = lowered.strip_prefix("http://").unwrap_or(&lowered);
    let stripped = stripped.strip_prefix("https://").unwrap_or(stripped);
    let stripped = stripped.strip_prefix("www.").unwrap_or(stripped);
    let stripped = stripped.strip_suffix('/').unwrap_or(stripped);

    stripped.to_string()
}

/// Parse a newline-separated domain list into a set of canonical domains.
///
/// Blank lines and tokens that normalize to an empty string (a bare scheme,
/// for example) are skipped. Duplicates collapse.
pub fn parse_domain_list(text: &str) -> BTreeSet<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(normalize_domain)
        .filter(|domain| !domain.is_empty())
        .collect()
}

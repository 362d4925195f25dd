//! Turns one raw blocklist line into a canonical host token.

const HOSTS_PREFIXES: [&str; 2] = ["127.0.0.1 ", "0.0.0.0 "];

/// Returns the host named by `raw`, or `None` for comments, blanks and
/// anything that is not a plain host entry.
///
/// Accepts both hosts-file lines (`0.0.0.0 ads.example.com`) and bare domain
/// lists. Double spaces are collapsed a single time only, so a prefix followed
/// by three or more spaces leaves an empty first field and the line is dropped.
pub fn normalize(raw: &str) -> Option<String> {
    let line = raw.trim();

    if line.is_empty() || line.starts_with('#') || line.starts_with('!') {
        return None;
    }

    // IPv6 entries and URL-style rules.
    if line.contains(':') {
        return None;
    }

    let collapsed = line.replace('\t', " ").replace("  ", " ");

    let mut rest = collapsed.as_str();
    for prefix in HOSTS_PREFIXES {
        if let Some(stripped) = rest.strip_prefix(prefix) {
            rest = stripped;
        }
    }

    let token = rest.split(char::is_whitespace).next().unwrap_or_default();
    if token.is_empty() {
        return None;
    }
    Some(token.to_string())
}

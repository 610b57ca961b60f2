//! String sanitization (a transform, not a pass/fail check).

/// Trim, drop angle brackets, and entity-escape `& " ' /`.
///
/// Ampersands are escaped before the other characters so entities produced
/// here are never double-escaped.
pub fn sanitize_string(input: &str) -> String {
    let trimmed = input.trim();
    let mut out = String::with_capacity(trimmed.len());
    for c in trimmed.chars() {
        match c {
            '<' | '>' => {}
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            other => out.push(other),
        }
    }
    out
}

/// Bound a free-text search query.
///
/// Absent input yields an empty string; otherwise the query is sanitized and
/// then truncated to `max_chars` characters.
pub fn bound_search_query(query: Option<&str>, max_chars: usize) -> String {
    match query {
        None => String::new(),
        Some(raw) => sanitize_string(raw).chars().take(max_chars).collect(),
    }
}

//! Pagination normalization.

use serde::{Deserialize, Serialize};

/// Raw pagination parameters as they arrive on a query string.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct PaginationQuery {
    pub page: Option<String>,
    pub limit: Option<String>,
}

impl PaginationQuery {
    pub fn new(page: impl Into<String>, limit: impl Into<String>) -> Self {
        Self {
            page: Some(page.into()),
            limit: Some(limit.into()),
        }
    }
}

/// Normalized pagination window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Pagination {
    pub page: u64,
    pub limit: u64,
    pub skip: u64,
}

/// Coerce the leading integer out of a string: optional whitespace, optional
/// sign, then digits. Trailing garbage is ignored (`"12abc"` is 12); no digits
/// at all yields `None`. Values beyond `i64` saturate.
pub(crate) fn leading_integer(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, rest) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let digits: &str = {
        let end = rest
            .char_indices()
            .find(|(_, c)| !c.is_ascii_digit())
            .map_or(rest.len(), |(i, _)| i);
        &rest[..end]
    };
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.parse::<i64>().unwrap_or(i64::MAX);
    Some(if negative { -magnitude } else { magnitude })
}

/// Normalize `query` against the configured default and maximum page size.
///
/// Page defaults to 1 and is floored at 1; limit defaults to `default_limit`
/// and is clamped to `[1, max_limit]`; `skip = (page - 1) * limit`.
pub(crate) fn normalize(query: &PaginationQuery, default_limit: u64, max_limit: u64) -> Pagination {
    let max_limit = max_limit.max(1);

    let page = query
        .page
        .as_deref()
        .and_then(leading_integer)
        .map_or(1, |p| u64::try_from(p).unwrap_or(0))
        .max(1);

    let limit = query
        .limit
        .as_deref()
        .and_then(leading_integer)
        .map_or(default_limit, |l| u64::try_from(l).unwrap_or(0))
        .clamp(1, max_limit);

    Pagination {
        page,
        limit,
        skip: (page - 1).saturating_mul(limit),
    }
}

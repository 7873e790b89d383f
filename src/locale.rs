//! Locale derivation and post-filtering.
//!
//! Content paths carry their locale as a path segment; quick links are
//! already localized when their table is built. The filter therefore only
//! ever drops posts, and it never reorders what the matcher ranked.

use crate::types::{EntryKind, MatchResult};

/// Derive the locale of a content path.
///
/// The first path segment is the locale, unless it is the literal `posts` —
/// legacy content nests under `posts/<locale>/...` — in which case the
/// second segment is. Empty paths have no locale.
pub fn derive_locale(path: &str) -> Option<&str> {
    let mut segments = path.split('/').filter(|s| !s.is_empty());
    let first = segments.next()?;
    if first == "posts" {
        segments.next()
    } else {
        Some(first)
    }
}

/// Keep links unconditionally and posts whose derived locale matches.
///
/// Comparison is case-insensitive. Relative order is preserved: filtering
/// narrows the ranking, it never re-ranks. Reapplied on every query change
/// and every locale change, so switching locale with a live query refilters
/// without retyping.
pub fn filter_by_locale(results: Vec<MatchResult>, active: &str) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|result| match result.entry.kind {
            EntryKind::Link => true,
            EntryKind::Post => derive_locale(&result.entry.path)
                .is_some_and(|locale| locale.eq_ignore_ascii_case(active)),
        })
        .collect()
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Snippet extraction: a bounded context window around the first match,
//! split into highlighted and plain runs.
//!
//! The query text is user input and is escaped before it reaches any pattern
//! context — `what?.config[0]` must match those characters literally. This is
//! a mandatory sanitization boundary, not an optimization.
//!
//! All window arithmetic is in **character** offsets; slicing bytes on UTF-8
//! bodies (Korean content, diacritics) would panic mid-codepoint.

use crate::types::{FieldMatch, MatchResult, SnippetRun};
use crate::utils::{char_count, char_find_ci, char_slice};
use regex::RegexBuilder;

/// Characters of context kept on each side of the matched query.
pub const CONTEXT_RADIUS: usize = 60;

/// Fallback truncation length when there is nothing to anchor on.
pub const FALLBACK_LEN: usize = 100;

/// Marker for elided text on either side of the window.
pub const ELLIPSIS: &str = "…";

/// Extract a display snippet from `text` for `query`.
///
/// Anchor preference order:
/// 1. the first span reported under a body-like field (`body.raw` / `body`),
/// 2. a case-insensitive plain-text occurrence of the query,
/// 3. none — fall back to the leading `FALLBACK_LEN` characters, unhighlighted.
///
/// Empty text produces no runs at all. An empty query always takes the
/// fallback path.
pub fn snippet(text: &str, query: &str, matches: &[FieldMatch]) -> Vec<SnippetRun> {
    if text.is_empty() {
        return Vec::new();
    }

    let query = query.trim();
    if query.is_empty() {
        return vec![truncated(text)];
    }

    let anchor = matches
        .iter()
        .filter(|m| crate::types::FieldKey::is_body(m.key.as_str()))
        .find_map(|m| m.spans.first())
        .map(|span| span.start)
        .or_else(|| char_find_ci(text, query));

    let Some(anchor) = anchor else {
        return vec![truncated(text)];
    };

    let total = char_count(text);
    let query_len = char_count(query);
    let start = anchor.saturating_sub(CONTEXT_RADIUS);
    let end = total.min(anchor + query_len + CONTEXT_RADIUS);
    let window = char_slice(text, start, end);

    let mut runs = Vec::new();
    if start > 0 {
        runs.push(SnippetRun::plain(ELLIPSIS));
    }
    runs.extend(split_runs(&window, query));
    if end < total {
        runs.push(SnippetRun::plain(ELLIPSIS));
    }
    runs
}

/// Convenience: snippet for a ranked result, anchored on its body spans.
pub fn snippet_for(result: &MatchResult, query: &str) -> Vec<SnippetRun> {
    match &result.entry.body {
        Some(body) => snippet(body, query, &result.matches),
        None => Vec::new(),
    }
}

fn truncated(text: &str) -> SnippetRun {
    SnippetRun::plain(format!("{}{}", char_slice(text, 0, FALLBACK_LEN), ELLIPSIS))
}

/// Split `window` into alternating runs on case-insensitive literal
/// occurrences of `query`.
///
/// `regex::escape` is what makes metacharacter queries safe here; without it
/// a query like `(` would be a pattern syntax error.
fn split_runs(window: &str, query: &str) -> Vec<SnippetRun> {
    let pattern = RegexBuilder::new(&regex::escape(query))
        .case_insensitive(true)
        .build();

    let Ok(pattern) = pattern else {
        // Escaped literals only fail to compile on pathological size; show
        // the window unhighlighted rather than nothing.
        return vec![SnippetRun::plain(window)];
    };

    let mut runs = Vec::new();
    let mut cursor = 0;
    for m in pattern.find_iter(window) {
        if m.start() > cursor {
            runs.push(SnippetRun::plain(&window[cursor..m.start()]));
        }
        runs.push(SnippetRun::highlight(m.as_str()));
        cursor = m.end();
    }
    if cursor < window.len() {
        runs.push(SnippetRun::plain(&window[cursor..]));
    }
    if runs.is_empty() {
        runs.push(SnippetRun::plain(window));
    }
    runs
}

// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The building blocks of the search corpus and its results.
//!
//! These types define how content entries, quick links, match spans, and admin
//! list responses fit together. Wire shapes use camelCase field names because
//! they round-trip through the same JSON the web frontend consumes.
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **CorpusEntry**: `path` is unique within one merged corpus. The loader
//!   enforces this by dropping later duplicates; everything downstream may
//!   treat `path` as an identifier.
//!
//! - **MatchSpan**: `start < end`, both **character** offsets into the field
//!   value (not bytes). Slicing with byte offsets on UTF-8 text panics on
//!   multi-byte boundaries; see `utils::char_slice`.
//!
//! - **MatchResult**: `matches` is non-empty for every ranked result. An
//!   empty query produces zero results, never a full-corpus dump.

use serde::{Deserialize, Serialize};

// =============================================================================
// CORPUS ENTRIES
// =============================================================================

/// Which kind of corpus entry this is.
///
/// Posts are locale-partitioned by their `path` and filtered against the
/// active locale after every search. Links come from the static per-locale
/// tables and are pre-localized, so they bypass locale filtering entirely.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntryKind {
    Post,
    Link,
}

impl EntryKind {
    /// Lowercase wire name, matching the serde `rename_all` convention.
    pub fn as_str(&self) -> &'static str {
        match self {
            EntryKind::Post => "post",
            EntryKind::Link => "link",
        }
    }
}

/// One searchable entry in the merged corpus.
///
/// Content posts and quick links are normalized into this single shape at
/// corpus build time so the matcher never branches on where an entry came
/// from. Only `title` and `path` are guaranteed; everything else is
/// best-effort metadata from the index payload.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CorpusEntry {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    /// Insertion order is irrelevant for matching; display truncates to the
    /// first three.
    #[serde(default)]
    pub tags: Vec<String>,
    /// Unique identifier and navigation target. The first path segment (or
    /// the second, when the first is the literal `posts`) carries the locale.
    pub path: String,
    #[serde(default)]
    pub date: Option<String>,
    /// Full body text, used for snippet extraction only. Often absent.
    #[serde(default)]
    pub body: Option<String>,
    #[serde(rename = "type")]
    pub kind: EntryKind,
}

/// A row in the static per-locale quick-link tables.
///
/// Converted to a `CorpusEntry` with `kind = Link` when a corpus is built:
/// `name` becomes the title, `keywords` the description, `href` the path.
#[derive(Debug, Clone, Serialize)]
pub struct QuickLink {
    pub name: &'static str,
    pub href: &'static str,
    pub keywords: &'static str,
}

impl QuickLink {
    /// Build the corpus entry for this link.
    pub fn to_entry(&self) -> CorpusEntry {
        CorpusEntry {
            title: self.name.to_string(),
            description: Some(self.keywords.to_string()),
            summary: None,
            tags: Vec::new(),
            path: self.href.to_string(),
            date: None,
            body: None,
            kind: EntryKind::Link,
        }
    }
}

// =============================================================================
// MATCH METADATA
// =============================================================================

/// The searchable fields of a corpus entry.
///
/// Weights live in `matcher::field_weight`. The wire names match what the
/// frontend's highlighter expects (`body.raw` for the body field, because the
/// index payload nests raw text under `body.raw`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKey {
    Title,
    Description,
    Tags,
    Summary,
    #[serde(rename = "body.raw")]
    Body,
}

impl FieldKey {
    /// Wire name for this field.
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldKey::Title => "title",
            FieldKey::Description => "description",
            FieldKey::Tags => "tags",
            FieldKey::Summary => "summary",
            FieldKey::Body => "body.raw",
        }
    }

    /// True for the body-like keys the snippet anchor prefers.
    ///
    /// `body` appears alongside `body.raw` in older index payloads; both
    /// anchor a snippet.
    pub fn is_body(key: &str) -> bool {
        key == "body.raw" || key == "body"
    }
}

/// A matched region within one field value.
///
/// **Character** offsets, end-exclusive. `start < end` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSpan {
    pub start: usize,
    pub end: usize,
}

impl MatchSpan {
    pub fn new(start: usize, end: usize) -> Self {
        debug_assert!(start < end, "empty match span {}..{}", start, end);
        MatchSpan { start, end }
    }

    /// Span length in characters.
    pub fn len(&self) -> usize {
        self.end - self.start
    }
}

/// All match locations the engine found in one field of one entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldMatch {
    pub key: FieldKey,
    pub spans: Vec<MatchSpan>,
}

/// One ranked search hit: the entry plus where the query matched.
///
/// Results are capped to the top 50 per query before locale filtering; the
/// cap is cost control for the render path, not a correctness requirement.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MatchResult {
    pub entry: CorpusEntry,
    pub score: f64,
    pub matches: Vec<FieldMatch>,
}

impl MatchResult {
    /// First span reported under a body-like field, if any.
    ///
    /// The snippet extractor anchors its context window here.
    pub fn first_body_span(&self) -> Option<MatchSpan> {
        self.matches
            .iter()
            .filter(|m| FieldKey::is_body(m.key.as_str()))
            .find_map(|m| m.spans.first())
            .copied()
    }
}

// =============================================================================
// SNIPPET RUNS
// =============================================================================

/// One run of snippet text, highlighted or plain.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SnippetRun {
    pub text: String,
    pub highlighted: bool,
}

impl SnippetRun {
    pub fn plain(text: impl Into<String>) -> Self {
        SnippetRun {
            text: text.into(),
            highlighted: false,
        }
    }

    pub fn highlight(text: impl Into<String>) -> Self {
        SnippetRun {
            text: text.into(),
            highlighted: true,
        }
    }
}

// =============================================================================
// ADMIN LIST WIRE TYPES
// =============================================================================

/// Pagination block of a list endpoint response.
///
/// `total_pages = ceil(total / limit)`; the server computes it, the
/// controller trusts it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

/// Envelope returned by every admin list endpoint.
///
/// `stats` is endpoint-specific (subscriber counts, role breakdowns) and
/// passes through untyped.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListResponse<E> {
    pub items: Vec<E>,
    pub pagination: Pagination,
    #[serde(default)]
    pub stats: serde_json::Value,
}

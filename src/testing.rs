//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::admin::{ListEntity, PAGE_SIZE};
use crate::corpus::Corpus;
use crate::types::{CorpusEntry, EntryKind, ListResponse, MatchResult, Pagination};
use serde::{Deserialize, Serialize};

/// Create a post entry with just a title and path.
///
/// This is the canonical implementation used across all tests.
pub fn make_post(title: &str, path: &str) -> CorpusEntry {
    CorpusEntry {
        title: title.to_string(),
        description: None,
        summary: None,
        tags: Vec::new(),
        path: path.to_string(),
        date: None,
        body: None,
        kind: EntryKind::Post,
    }
}

/// Create a link entry the way the quick-link tables do.
pub fn make_link(title: &str, href: &str, keywords: &str) -> CorpusEntry {
    CorpusEntry {
        title: title.to_string(),
        description: Some(keywords.to_string()),
        summary: None,
        tags: Vec::new(),
        path: href.to_string(),
        date: None,
        body: None,
        kind: EntryKind::Link,
    }
}

/// Wrap an entry as a bare match result (no spans).
pub fn make_result(entry: CorpusEntry) -> MatchResult {
    MatchResult {
        entry,
        score: 1.0,
        matches: Vec::new(),
    }
}

/// Build a corpus directly from entries, skipping the loader.
pub fn corpus_from(entries: Vec<CorpusEntry>, locale: &str) -> Corpus {
    Corpus::from_entries(entries, locale)
}

/// A newsletter subscriber row, as the admin list endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscriber {
    pub id: String,
    pub email: String,
    pub source: String,
    pub is_active: bool,
    pub is_verified: bool,
}

impl ListEntity for Subscriber {
    fn id(&self) -> &str {
        &self.id
    }

    fn flag(&self, field: &str) -> Option<bool> {
        match field {
            "isActive" => Some(self.is_active),
            "isVerified" => Some(self.is_verified),
            _ => None,
        }
    }

    fn set_flag(&mut self, field: &str, value: bool) -> bool {
        match field {
            "isActive" => {
                self.is_active = value;
                true
            }
            "isVerified" => {
                self.is_verified = value;
                true
            }
            _ => false,
        }
    }
}

/// Create a subscriber with deterministic fields.
pub fn make_subscriber(index: usize) -> Subscriber {
    Subscriber {
        id: format!("sub-{}", index),
        email: format!("subscriber{}@example.com", index),
        source: "website".to_string(),
        is_active: true,
        is_verified: false,
    }
}

/// A one-page list response with `count` subscribers.
pub fn subscriber_response(count: usize, page: u32, total: u64) -> ListResponse<Subscriber> {
    ListResponse {
        items: (0..count).map(make_subscriber).collect(),
        pagination: Pagination {
            page,
            limit: PAGE_SIZE,
            total,
            total_pages: (total as f64 / f64::from(PAGE_SIZE)).ceil() as u32,
        },
        stats: serde_json::Value::Null,
    }
}

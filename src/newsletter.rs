//! Newsletter composition: select posts, serialize the send payload.
//!
//! Delivery is someone else's problem — this module's whole obligation is
//! turning chosen corpus entries into the exact JSON the send endpoint
//! expects and parsing whichever of its two response shapes comes back.

use crate::types::{CorpusEntry, EntryKind};
use serde::{Deserialize, Serialize};

/// A post reference included in a newsletter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostRef {
    pub title: String,
    pub url: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
}

impl PostRef {
    /// Reference a post entry. Links are not newsletter material.
    pub fn from_entry(entry: &CorpusEntry) -> Option<PostRef> {
        if entry.kind != EntryKind::Post {
            return None;
        }
        Some(PostRef {
            title: entry.title.clone(),
            url: entry.path.clone(),
            summary: entry.summary.clone(),
            date: entry.date.clone(),
        })
    }
}

/// A composed newsletter, ready to serialize for the send endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewsletterDraft {
    pub subject: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intro_message: Option<String>,
    pub posts: Vec<PostRef>,
}

impl NewsletterDraft {
    pub fn new(subject: impl Into<String>) -> NewsletterDraft {
        NewsletterDraft {
            subject: subject.into(),
            intro_message: None,
            posts: Vec::new(),
        }
    }

    pub fn with_intro(mut self, intro: impl Into<String>) -> NewsletterDraft {
        self.intro_message = Some(intro.into());
        self
    }

    /// Add every selectable post entry, skipping links silently.
    pub fn select(&mut self, entries: &[CorpusEntry]) -> usize {
        let before = self.posts.len();
        self.posts
            .extend(entries.iter().filter_map(PostRef::from_entry));
        self.posts.len() - before
    }

    /// A draft with no posts has nothing to send.
    pub fn is_sendable(&self) -> bool {
        !self.subject.trim().is_empty() && !self.posts.is_empty()
    }

    /// POST body for the send endpoint.
    pub fn payload(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

/// What the send endpoint answered.
///
/// Success and failure use different shapes (`{message, sent, failed,
/// total}` vs `{error}`); the untagged enum tries them in order.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum SendOutcome {
    Sent {
        message: String,
        sent: u32,
        failed: u32,
        total: u32,
    },
    Error {
        error: String,
    },
}

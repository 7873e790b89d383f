//! Corpus loading: fetch the content index, merge in quick links.
//!
//! A corpus is rebuilt on modal open and on every locale change — one load
//! per trigger, issued sequentially, so last-loaded-wins ordering is safe.
//! Loading never fails outward: any I/O, HTTP, or parse problem degrades to
//! an empty corpus with `load_failed` set, and the UI shows its failed state
//! instead of crashing on a missing index.

use crate::error::LoadError;
use crate::links::quick_links;
use crate::types::{CorpusEntry, EntryKind};
use serde::Deserialize;
use std::collections::HashSet;
use std::path::PathBuf;

/// Wire shape of one element of the `search.json` array.
///
/// The payload carries more than we keep (`images`, feed metadata); serde
/// drops unknown fields. `body` nests the raw text one level down.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContentRecord {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub tags: Vec<String>,
    pub path: String,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub locale: Option<String>,
    #[serde(default)]
    pub body: Option<BodyText>,
}

/// The nested body object of a content record.
#[derive(Debug, Clone, Deserialize)]
pub struct BodyText {
    pub raw: String,
}

impl ContentRecord {
    /// Tag this record as a post entry.
    fn into_entry(self) -> CorpusEntry {
        CorpusEntry {
            title: self.title,
            description: self.description,
            summary: self.summary,
            tags: self.tags,
            path: self.path,
            date: self.date,
            body: self.body.map(|b| b.raw),
            kind: EntryKind::Post,
        }
    }
}

/// Where the content index comes from.
///
/// The engine only needs "give me the records or tell me why not"; whether
/// that is a file on disk, an HTTP endpoint, or a test fixture is the
/// caller's business.
pub trait IndexSource {
    fn fetch(&self) -> Result<Vec<ContentRecord>, LoadError>;
}

/// Index source reading a JSON array from disk.
#[derive(Debug, Clone)]
pub struct FileSource {
    path: PathBuf,
}

impl FileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        FileSource { path: path.into() }
    }
}

impl IndexSource for FileSource {
    fn fetch(&self) -> Result<Vec<ContentRecord>, LoadError> {
        let raw = std::fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&raw)?)
    }
}

/// Index source issuing `GET <url>` for the JSON array.
///
/// Non-2xx statuses are load failures; the body is not consulted.
#[cfg(feature = "remote")]
#[derive(Debug, Clone)]
pub struct HttpSource {
    url: String,
}

#[cfg(feature = "remote")]
impl HttpSource {
    pub fn new(url: impl Into<String>) -> Self {
        HttpSource { url: url.into() }
    }
}

#[cfg(feature = "remote")]
impl IndexSource for HttpSource {
    fn fetch(&self) -> Result<Vec<ContentRecord>, LoadError> {
        let response = reqwest::blocking::get(&self.url)
            .map_err(|e| LoadError::Http(e.to_string()))?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        response
            .json::<Vec<ContentRecord>>()
            .map_err(|e| LoadError::Http(e.to_string()))
    }
}

/// The merged, in-memory collection of searchable entries for one locale.
///
/// Read-only after load. Posts come first (index order), then the locale's
/// quick links, deduplicated by `path` with the first occurrence winning.
#[derive(Debug, Clone)]
pub struct Corpus {
    entries: Vec<CorpusEntry>,
    locale: String,
    load_failed: bool,
}

impl Corpus {
    /// Fetch from `source` and merge with the locale's quick links.
    ///
    /// Never fails: a fetch or parse error yields an empty corpus with
    /// `load_failed()` set, and the cause goes to the log.
    pub fn load(source: &dyn IndexSource, locale: &str) -> Corpus {
        match source.fetch() {
            Ok(records) => Corpus::from_records(records, locale),
            Err(e) => {
                tracing::warn!(locale, error = %e, "search index load failed");
                Corpus {
                    entries: Vec::new(),
                    locale: locale.to_string(),
                    load_failed: true,
                }
            }
        }
    }

    /// Build a corpus from already-fetched records plus the locale's links.
    pub fn from_records(records: Vec<ContentRecord>, locale: &str) -> Corpus {
        let mut seen: HashSet<String> = HashSet::new();
        let mut entries: Vec<CorpusEntry> = Vec::with_capacity(records.len());

        let posts = records.into_iter().map(ContentRecord::into_entry);
        let links = quick_links(locale).iter().map(|l| l.to_entry());

        for entry in posts.chain(links) {
            if seen.insert(entry.path.clone()) {
                entries.push(entry);
            } else {
                tracing::warn!(path = %entry.path, "duplicate corpus path dropped");
            }
        }

        tracing::debug!(locale, entries = entries.len(), "corpus built");
        Corpus {
            entries,
            locale: locale.to_string(),
            load_failed: false,
        }
    }

    /// Build a corpus from prebuilt entries (embedding, tests).
    ///
    /// Applies the same path dedup as `from_records` but merges no quick
    /// links; the caller owns the entry list.
    pub fn from_entries(entries: Vec<CorpusEntry>, locale: &str) -> Corpus {
        let mut seen: HashSet<String> = HashSet::new();
        let entries = entries
            .into_iter()
            .filter(|entry| seen.insert(entry.path.clone()))
            .collect();
        Corpus {
            entries,
            locale: locale.to_string(),
            load_failed: false,
        }
    }

    /// An empty corpus (before the first load completes).
    pub fn empty(locale: &str) -> Corpus {
        Corpus {
            entries: Vec::new(),
            locale: locale.to_string(),
            load_failed: false,
        }
    }

    pub fn entries(&self) -> &[CorpusEntry] {
        &self.entries
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    /// True when the last load attempt failed and the UI should show its
    /// loading-failed state. Retried on the next locale change or reopen.
    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

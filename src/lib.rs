//! Client-side search and filtered-list engine.
//!
//! This crate is the logic layer behind a localized site's search modal and
//! its admin tables: load a content index, fuzzy-match queries against
//! weighted fields, filter posts by locale, extract highlighted snippets,
//! and drive debounced, paginated admin lists with optimistic updates.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌─────────────┐
//! │  corpus.rs  │────▶│  matcher.rs  │────▶│  locale.rs  │
//! │ (IndexSource│     │ (SearchEngine│     │ (filter_by_ │
//! │   + links)  │     │   .search)   │     │   locale)   │
//! └─────────────┘     └──────────────┘     └──────┬──────┘
//!                                                 │
//! ┌─────────────┐     ┌──────────────┐     ┌──────▼──────┐
//! │   admin.rs  │     │newsletter.rs │     │ snippet.rs  │
//! │ (ListCtrl,  │     │ (PostRef,    │     │ (highlight  │
//! │  debounce)  │     │  payload)    │     │   runs)     │
//! └─────────────┘     └──────────────┘     └─────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use ferret::{Corpus, FileSource, SearchEngine, filter_by_locale};
//!
//! let corpus = Corpus::load(&FileSource::new("search.json"), "en");
//! let engine = SearchEngine::new(corpus);
//!
//! let results = filter_by_locale(engine.search("bayesian"), "en");
//! ```
//!
//! Nothing here fails outward at a network boundary: a missing index is an
//! empty corpus, a failed list fetch keeps the previous page, a failed
//! toggle rolls back. The worst case is a degraded list, never a crash.

// Module declarations
mod admin;
mod corpus;
mod error;
mod fuzzy;
mod links;
mod locale;
mod matcher;
mod newsletter;
mod snippet;
pub mod testing;
mod types;
mod utils;

// Re-exports for public API
pub use admin::{
    admin_visible, page_window, Debounce, FetchRequest, Filters, ListController, ListEntity,
    SessionStatus, SourceFilter, ToggleRequest, DEBOUNCE_MS, PAGE_SIZE, PAGE_WINDOW,
};
pub use corpus::{BodyText, ContentRecord, Corpus, FileSource, IndexSource};
#[cfg(feature = "remote")]
pub use corpus::HttpSource;
pub use error::{FetchError, LoadError};
pub use fuzzy::bounded_distance;
pub use links::quick_links;
pub use locale::{derive_locale, filter_by_locale};
pub use matcher::{
    field_weight, max_edits, SearchEngine, CHARS_PER_EDIT, MIN_FRAGMENT_LEN, RESULT_CAP,
};
pub use newsletter::{NewsletterDraft, PostRef, SendOutcome};
pub use snippet::{snippet, snippet_for, CONTEXT_RADIUS, ELLIPSIS, FALLBACK_LEN};
pub use types::{
    CorpusEntry, EntryKind, FieldKey, FieldMatch, ListResponse, MatchResult, MatchSpan, Pagination,
    QuickLink, SnippetRun,
};
pub use utils::normalize;

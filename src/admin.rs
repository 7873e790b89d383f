//! Admin list controller: debounced filtering, pagination, optimistic toggles.
//!
//! This is the shared behavior behind every admin table (users, subscribers).
//! The controller owns no rendering and performs no I/O — it turns input
//! events into `FetchRequest`/`ToggleRequest` values and folds the settled
//! results back into its state. The rendering layer subscribes to the state;
//! the transport layer executes the requests. That split is what makes the
//! debounce, pagination, and rollback logic testable with a fake clock and
//! no network.
//!
//! # Ordering
//!
//! Every fetch carries a monotonically increasing token. A settling response
//! is applied only when its token is the latest issued one; anything older
//! is discarded explicitly instead of trusting event-loop ordering.
//!
//! # Failure policy
//!
//! A failed list fetch keeps the last-known-good items and raises
//! `load_failed` — it never clears existing data. A failed toggle reverts
//! the optimistic flip from its snapshot.

use crate::error::FetchError;
use crate::types::ListResponse;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Server-side page size for all admin lists.
pub const PAGE_SIZE: u32 = 20;

/// Quiet period before a filter change fires a fetch.
pub const DEBOUNCE_MS: u64 = 400;

/// Maximum number of page buttons shown at once.
pub const PAGE_WINDOW: u32 = 5;

// =============================================================================
// PAGE WINDOW
// =============================================================================

/// The contiguous window of page numbers to render as buttons.
///
/// At most [`PAGE_WINDOW`] entries:
/// - no pages → no buttons
/// - five or fewer pages → all of them
/// - near the left edge (`current ≤ 3`) → `1..=5`
/// - near the right edge (`current ≥ total - 2`) → the last five
/// - otherwise → centered on `current`, two on each side
pub fn page_window(current: u32, total: u32) -> Vec<u32> {
    if total == 0 {
        return Vec::new();
    }
    if total <= PAGE_WINDOW {
        return (1..=total).collect();
    }
    if current <= 3 {
        return (1..=PAGE_WINDOW).collect();
    }
    if current >= total - 2 {
        return (total - PAGE_WINDOW + 1..=total).collect();
    }
    (current - 2..=current + 2).collect()
}

// =============================================================================
// DEBOUNCE
// =============================================================================

/// Trailing-edge debounce over a caller-supplied millisecond clock.
///
/// Re-triggering within the quiet period restarts the deadline, so a burst
/// of keystrokes fires exactly once, after the last one settles.
#[derive(Debug, Clone)]
pub struct Debounce {
    delay: u64,
    deadline: Option<u64>,
}

impl Debounce {
    pub fn new(delay_ms: u64) -> Debounce {
        Debounce {
            delay: delay_ms,
            deadline: None,
        }
    }

    /// Start (or restart) the quiet period at `now_ms`.
    pub fn trigger(&mut self, now_ms: u64) {
        self.deadline = Some(now_ms + self.delay);
    }

    /// True exactly once, the first time `now_ms` reaches the deadline.
    pub fn fire(&mut self, now_ms: u64) -> bool {
        match self.deadline {
            Some(deadline) if now_ms >= deadline => {
                self.deadline = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.deadline.is_some()
    }
}

// =============================================================================
// FILTERS AND REQUESTS
// =============================================================================

/// Where a subscriber record came from. The categorical filter of the lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SourceFilter {
    #[default]
    All,
    Website,
    Manual,
    Import,
}

impl SourceFilter {
    /// Query-parameter value; `All` sends nothing.
    pub fn as_query(&self) -> Option<&'static str> {
        match self {
            SourceFilter::All => None,
            SourceFilter::Website => Some("website"),
            SourceFilter::Manual => Some("manual"),
            SourceFilter::Import => Some("import"),
        }
    }
}

/// The active filter set of one admin list.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Filters {
    pub search_term: String,
    pub source: SourceFilter,
}

/// One list fetch the transport layer should execute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub token: u64,
    pub page: u32,
    pub filters: Filters,
}

impl FetchRequest {
    /// Query string for the list endpoint, `page` and `limit` always present.
    pub fn query_string(&self) -> String {
        let mut query = format!("page={}&limit={}", self.page, PAGE_SIZE);
        if !self.filters.search_term.is_empty() {
            query.push_str("&search=");
            query.push_str(&urlencode(&self.filters.search_term));
        }
        if let Some(source) = self.filters.source.as_query() {
            query.push_str("&source=");
            query.push_str(source);
        }
        query
    }
}

/// Minimal percent-encoding for query values.
fn urlencode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// One optimistic field update the transport layer should PATCH.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToggleRequest {
    pub id: String,
    pub field: String,
    pub value: bool,
}

impl ToggleRequest {
    /// PATCH body: `{"id": ..., "<field>": <value>}`.
    pub fn payload(&self) -> serde_json::Value {
        let mut body = serde_json::Map::new();
        body.insert(
            "id".to_string(),
            serde_json::Value::String(self.id.clone()),
        );
        body.insert(self.field.clone(), serde_json::Value::Bool(self.value));
        serde_json::Value::Object(body)
    }
}

// =============================================================================
// SESSION GATE
// =============================================================================

/// Authentication state reported by the external session provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionStatus {
    Loading,
    Authenticated,
    Unauthenticated,
}

/// Whether an admin view may render at all.
///
/// Anything short of an authenticated admin renders nothing — the caller
/// redirects. `Loading` is not a maybe; it renders nothing too.
pub fn admin_visible(status: SessionStatus, is_admin: bool) -> bool {
    status == SessionStatus::Authenticated && is_admin
}

// =============================================================================
// LIST ENTITIES
// =============================================================================

/// What the controller needs from a row type.
///
/// Boolean fields are addressed by wire name so one controller serves every
/// admin page; a row reports `None` for fields it doesn't have.
pub trait ListEntity {
    fn id(&self) -> &str;
    fn flag(&self, field: &str) -> Option<bool>;
    /// Returns false when the field is unknown; the controller treats that
    /// as a no-op.
    fn set_flag(&mut self, field: &str, value: bool) -> bool;
}

// =============================================================================
// CONTROLLER
// =============================================================================

/// State container for one admin list page.
pub struct ListController<E> {
    items: Vec<E>,
    page: u32,
    total: u64,
    total_pages: u32,
    filters: Filters,
    staged: Filters,
    debounce: Debounce,
    latest_token: u64,
    loading: bool,
    load_failed: bool,
    stats: serde_json::Value,
    /// Prior values of in-flight optimistic toggles, keyed by (id, field).
    snapshots: HashMap<(String, String), bool>,
}

impl<E: ListEntity> ListController<E> {
    pub fn new() -> ListController<E> {
        ListController {
            items: Vec::new(),
            page: 1,
            total: 0,
            total_pages: 0,
            filters: Filters::default(),
            staged: Filters::default(),
            debounce: Debounce::new(DEBOUNCE_MS),
            latest_token: 0,
            loading: false,
            load_failed: false,
            stats: serde_json::Value::Null,
            snapshots: HashMap::new(),
        }
    }

    /// Initial fetch on page mount.
    pub fn mount(&mut self) -> FetchRequest {
        self.issue()
    }

    /// Search term keystroke. Fetches only after the debounce settles.
    pub fn on_search_input(&mut self, term: &str, now_ms: u64) {
        self.staged.search_term = term.to_string();
        self.debounce.trigger(now_ms);
    }

    /// Categorical filter change. Debounced together with the search term.
    pub fn on_source_filter(&mut self, source: SourceFilter, now_ms: u64) {
        self.staged.source = source;
        self.debounce.trigger(now_ms);
    }

    /// Advance the clock; fires at most one settled filter change.
    ///
    /// A settled change resets the page to 1 and issues a fetch with the
    /// final staged value — intermediate keystrokes never produce requests.
    pub fn tick(&mut self, now_ms: u64) -> Option<FetchRequest> {
        if !self.debounce.fire(now_ms) {
            return None;
        }
        self.filters = self.staged.clone();
        self.page = 1;
        Some(self.issue())
    }

    /// Direct page navigation. Immediate, no debounce.
    pub fn set_page(&mut self, page: u32) -> FetchRequest {
        self.page = page.max(1);
        self.issue()
    }

    fn issue(&mut self) -> FetchRequest {
        self.latest_token += 1;
        self.loading = true;
        FetchRequest {
            token: self.latest_token,
            page: self.page,
            filters: self.filters.clone(),
        }
    }

    /// Fold a settled list fetch back into the state.
    ///
    /// Stale tokens are discarded. Failures keep the previous items and set
    /// the failed flag; the user retries by changing a filter.
    pub fn on_fetch_settled(&mut self, token: u64, result: Result<ListResponse<E>, FetchError>) {
        if token != self.latest_token {
            tracing::debug!(token, latest = self.latest_token, "stale list response discarded");
            return;
        }
        self.loading = false;
        match result {
            Ok(response) => {
                self.items = response.items;
                self.page = response.pagination.page;
                self.total = response.pagination.total;
                self.total_pages = response.pagination.total_pages;
                self.stats = response.stats;
                self.load_failed = false;
            }
            Err(e) => {
                tracing::warn!(error = %e, "list fetch failed, keeping previous items");
                self.load_failed = true;
            }
        }
    }

    /// Optimistically flip a boolean field on one row.
    ///
    /// The prior value is snapshotted before the flip so a failed server
    /// update can roll back. Returns `None` for unknown ids or fields.
    pub fn toggle(&mut self, id: &str, field: &str) -> Option<ToggleRequest> {
        let item = self.items.iter_mut().find(|item| item.id() == id)?;
        let prior = item.flag(field)?;
        item.set_flag(field, !prior);
        self.snapshots
            .entry((id.to_string(), field.to_string()))
            .or_insert(prior);
        Some(ToggleRequest {
            id: id.to_string(),
            field: field.to_string(),
            value: !prior,
        })
    }

    /// Fold a settled toggle back in; failure reverts the optimistic flip.
    pub fn on_toggle_settled(&mut self, id: &str, field: &str, result: Result<(), FetchError>) {
        let snapshot = self.snapshots.remove(&(id.to_string(), field.to_string()));
        if result.is_ok() {
            return;
        }
        if let Some(prior) = snapshot {
            if let Some(item) = self.items.iter_mut().find(|item| item.id() == id) {
                item.set_flag(field, prior);
            }
            tracing::warn!(id, field, "field update failed, optimistic change reverted");
        }
    }

    // Accessors for the rendering layer.

    pub fn items(&self) -> &[E] {
        &self.items
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn filters(&self) -> &Filters {
        &self.filters
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn load_failed(&self) -> bool {
        self.load_failed
    }

    pub fn stats(&self) -> &serde_json::Value {
        &self.stats
    }

    /// Page buttons for the current state.
    pub fn page_buttons(&self) -> Vec<u32> {
        page_window(self.page, self.total_pages)
    }
}

impl<E: ListEntity> Default for ListController<E> {
    fn default() -> Self {
        Self::new()
    }
}

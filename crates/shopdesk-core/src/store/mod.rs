// ── Store plumbing shared by every domain ──
//
// The list cache, the query parameter set, and the processing flag are
// the three pieces every store variant carried in the original console;
// they live here once.

pub mod advertisement;
pub mod domain;
pub mod order;
pub mod reference;
pub mod region;
pub mod user;

use tokio::sync::watch;

// ── List cache ───────────────────────────────────────────────────────

/// Cached list slice for one entity type.
///
/// `data == None` means never fetched. `count == -1` means unknown;
/// it is only overwritten when a list response supplies a non-negative
/// count, while `data` is wholly replaced on every successful fetch.
#[derive(Debug, Clone)]
pub struct ListCache<T> {
    pub data: Option<Vec<T>>,
    pub count: i64,
}

impl<T> Default for ListCache<T> {
    fn default() -> Self {
        Self {
            data: None,
            count: -1,
        }
    }
}

impl<T> ListCache<T> {
    /// Commit a list response: replace the data wholesale, keep the old
    /// count unless the server reported one.
    pub(crate) fn replace(&mut self, items: Vec<T>, count: i64) {
        if count >= 0 {
            self.count = count;
        }
        self.data = Some(items);
    }
}

// ── List query parameters ────────────────────────────────────────────

/// Query parameters accepted by the list endpoints.
#[derive(Debug, Clone, Default)]
pub struct ListParams {
    pub limit: Option<u32>,
    pub offset: Option<u32>,
    pub keyword: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    /// Comma-separated field projection.
    pub fields: Option<String>,
    /// Sort expression, e.g. `-updatedAt`.
    pub order: Option<String>,
}

impl ListParams {
    /// Render the set pairs for the query string (the client appends
    /// the cache-defeating parameter itself).
    pub fn to_query(&self) -> Vec<(String, String)> {
        let mut query = Vec::new();
        if let Some(limit) = self.limit {
            query.push(("limit".to_owned(), limit.to_string()));
        }
        if let Some(offset) = self.offset {
            query.push(("offset".to_owned(), offset.to_string()));
        }
        for (name, value) in [
            ("keyword", &self.keyword),
            ("status", &self.status),
            ("category", &self.category),
            ("fields", &self.fields),
            ("order", &self.order),
        ] {
            if let Some(value) = value {
                query.push((name.to_owned(), value.clone()));
            }
        }
        query
    }
}

// ── Processing flag ──────────────────────────────────────────────────

/// Boolean flag that is `true` exactly while a request of its operation
/// group is outstanding. Backed by a `watch` channel so consumers can
/// await settlement instead of polling.
#[derive(Debug)]
pub struct ProcessingFlag {
    tx: watch::Sender<bool>,
}

impl ProcessingFlag {
    pub(crate) fn new() -> Self {
        let (tx, _) = watch::channel(false);
        Self { tx }
    }

    /// Current value.
    pub fn is_processing(&self) -> bool {
        *self.tx.borrow()
    }

    /// Subscribe to flag transitions (UI gating).
    pub fn subscribe(&self) -> watch::Receiver<bool> {
        self.tx.subscribe()
    }

    /// Raise the flag, returning a guard that lowers it when dropped.
    /// The guard fires on every settlement path, success or failure.
    pub(crate) fn begin(&self) -> ProcessingGuard<'_> {
        self.tx.send_replace(true);
        ProcessingGuard { tx: &self.tx }
    }

    /// Wait until no request of this group is outstanding. Resolves
    /// immediately when the flag is already down.
    pub(crate) async fn settled(&self) {
        let mut rx = self.tx.subscribe();
        // wait_for inspects the current value first, so a settlement
        // that happened before the subscription is never missed.
        let _ = rx.wait_for(|processing| !*processing).await;
    }
}

pub(crate) struct ProcessingGuard<'a> {
    tx: &'a watch::Sender<bool>,
}

impl Drop for ProcessingGuard<'_> {
    fn drop(&mut self) {
        self.tx.send_replace(false);
    }
}

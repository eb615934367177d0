// ── Fetch-once reference caches ──
//
// Reference datasets (statuses, categories) change rarely enough to be
// fetched at most once per session. The original console guarded this
// with a check-then-fetch boolean, which let concurrent callers race
// into duplicate requests (and one module variant misspelled the cached
// field, so its guard never held). `OnceCell` makes the first caller
// install the shared pending fetch; everyone else awaits that handle.

use std::sync::Arc;

use serde::de::DeserializeOwned;
use tokio::sync::OnceCell;

use shopdesk_api::AdminClient;

use crate::error::CoreError;
use crate::model::Status;
use crate::store::ProcessingFlag;

/// A reference dataset populated by at most one network call per
/// session and reused thereafter.
pub struct ReferenceCache<T> {
    client: Arc<AdminClient>,
    path: &'static str,
    /// Key of the array in the response envelope (`statuses`, `categories`).
    key: &'static str,
    cell: OnceCell<Arc<Vec<T>>>,
    processing: ProcessingFlag,
}

impl<T: DeserializeOwned + Send + Sync + 'static> ReferenceCache<T> {
    pub fn new(client: Arc<AdminClient>, path: &'static str, key: &'static str) -> Self {
        Self {
            client,
            path,
            key,
            cell: OnceCell::new(),
            processing: ProcessingFlag::new(),
        }
    }

    /// Return the dataset, fetching it on first use.
    ///
    /// Concurrent callers coalesce onto a single request: whoever
    /// arrives while the first fetch is outstanding awaits the same
    /// pending operation instead of issuing another GET. A failed fetch
    /// leaves the cell empty so the next call retries.
    pub async fn ensure(&self) -> Result<Arc<Vec<T>>, CoreError> {
        if let Some(cached) = self.cell.get() {
            return Ok(Arc::clone(cached));
        }

        self.cell
            .get_or_try_init(|| async {
                let _guard = self.processing.begin();
                let items = self.client.get_reference::<T>(self.path, self.key).await?;
                tracing::debug!(path = self.path, entries = items.len(), "reference data cached");
                Ok::<_, CoreError>(Arc::new(items))
            })
            .await
            .map(Arc::clone)
    }

    /// The dataset if it has already loaded; `None` otherwise.
    ///
    /// Lookups performed through this accessor intentionally resolve to
    /// nothing before the first successful fetch — records enriched that
    /// early carry no label.
    pub fn cached(&self) -> Option<Arc<Vec<T>>> {
        self.cell.get().map(Arc::clone)
    }

    /// Whether the initial fetch is currently outstanding.
    pub fn processing(&self) -> &ProcessingFlag {
        &self.processing
    }
}

/// The application-wide status enumeration (`GET /commons/statuses`).
///
/// One instance is shared by every domain store; the per-module copies
/// of the original console collapse into it.
pub type StatusDirectory = ReferenceCache<Status>;

impl StatusDirectory {
    /// Construct the shared directory.
    pub fn shared(client: Arc<AdminClient>) -> Self {
        Self::new(client, "/commons/statuses", "statuses")
    }
}

// ── Generic domain store ──
//
// One cache + action unit instantiated per entity type. The original
// console duplicated this module per entity with drifting variants;
// the `Entity` trait carries everything that actually differed:
// endpoint set, envelope key, upload-field mapping, derived fields,
// and enrichment.

use std::sync::{Arc, RwLock};

use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::{Map, Value};
use tracing::debug;

use shopdesk_api::AdminClient;

use crate::error::CoreError;
use crate::model::Status;
use crate::store::reference::StatusDirectory;
use crate::store::{ListCache, ListParams, ProcessingFlag};

// ── Entity contract ──────────────────────────────────────────────────

/// Where the upload widget's `files` land in the server record.
#[derive(Debug, Clone, Copy)]
pub enum UploadTarget {
    /// Single-picture field: the first file's URL is written into it.
    Single(&'static str),
    /// Multi-picture field: all file URLs are written into it.
    Multi(&'static str),
}

/// Per-entity configuration of the generic store.
pub trait Entity: DeserializeOwned + Serialize + Clone + Send + Sync + 'static {
    /// Collection endpoint, e.g. `/brands`.
    const COLLECTION: &'static str;
    /// Key of the record array in the list envelope, e.g. `brands`.
    const PLURAL: &'static str;
    /// Upload-field mapping, if the entity carries pictures.
    const UPLOAD: Option<UploadTarget>;
    /// Client-derived fields (wire names) stripped from every outbound
    /// payload — they exist only for display.
    const DERIVED: &'static [&'static str];

    /// Primary key.
    fn id(&self) -> u64;

    /// Attach display fields. An empty `statuses` slice means the
    /// directory has not loaded; the record then keeps no label.
    fn enrich(&mut self, statuses: &[Status]);
}

// ── Store ────────────────────────────────────────────────────────────

/// Cache + actions for one entity type.
///
/// Shared behind an `Arc` by every consumer; all cache commits happen
/// synchronously under a single write-lock acquisition, so a commit is
/// atomic with respect to readers. In-flight requests are tracked by
/// the [`ProcessingFlag`], lowered on every settlement path.
pub struct DomainStore<T: Entity> {
    client: Arc<AdminClient>,
    statuses: Arc<StatusDirectory>,
    list: RwLock<ListCache<T>>,
    processing: ProcessingFlag,
}

impl<T: Entity> DomainStore<T> {
    pub fn new(client: Arc<AdminClient>, statuses: Arc<StatusDirectory>) -> Self {
        Self {
            client,
            statuses,
            list: RwLock::new(ListCache::default()),
            processing: ProcessingFlag::new(),
        }
    }

    /// The processing flag for this store's operation group.
    pub fn processing(&self) -> &ProcessingFlag {
        &self.processing
    }

    /// Snapshot of the cached list (`None` until the first fetch).
    pub fn cached(&self) -> Option<Vec<T>> {
        self.read_cache().data.clone()
    }

    /// Total record count reported by the server, `-1` when unknown.
    pub fn count(&self) -> i64 {
        self.read_cache().count
    }

    fn detail_path(id: u64) -> String {
        format!("{}/{id}", T::COLLECTION)
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, ListCache<T>> {
        self.list.read().expect("list cache lock poisoned")
    }

    fn write_cache(&self) -> std::sync::RwLockWriteGuard<'_, ListCache<T>> {
        self.list.write().expect("list cache lock poisoned")
    }

    fn find_cached(&self, id: u64) -> Option<T> {
        self.read_cache()
            .data
            .as_ref()?
            .iter()
            .find(|record| record.id() == id)
            .cloned()
    }

    // ── Actions ──────────────────────────────────────────────────────

    /// Create a record. Client-only fields are stripped, the server
    /// response is returned as-is, and the list cache is untouched —
    /// callers re-list to see the addition.
    pub async fn add(&self, payload: Map<String, Value>) -> Result<T, CoreError> {
        let mut payload = payload;
        strip_client_fields::<T>(&mut payload);

        let _guard = self.processing.begin();
        let record = self
            .client
            .post_data(T::COLLECTION, &Value::Object(payload))
            .await?;
        Ok(record)
    }

    /// Fetch a page and commit it: the status directory is ensured
    /// first (coalesced, at most one fetch per session), then `data`
    /// is replaced wholesale with the enriched sequence and `count`
    /// updated when the server reported one.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<T>, CoreError> {
        let _guard = self.processing.begin();

        let statuses = self.statuses.ensure().await?;
        let page = self
            .client
            .get_list::<T>(T::COLLECTION, &params.to_query(), T::PLURAL)
            .await?;

        let mut items = page.items;
        for record in &mut items {
            record.enrich(&statuses);
        }

        self.write_cache().replace(items.clone(), page.count);
        debug!(
            entity = T::PLURAL,
            fetched = items.len(),
            count = page.count,
            "list cache replaced"
        );
        Ok(items)
    }

    /// Fetch one record. A cache hit short-circuits without any network
    /// call; a miss — including a never-fetched cache — falls through
    /// to the detail endpoint. The fetched record is enriched with
    /// whatever reference data is loaded and is NOT inserted into the
    /// list cache.
    pub async fn get_by_id(&self, id: u64) -> Result<T, CoreError> {
        if let Some(found) = self.find_cached(id) {
            return Ok(found);
        }

        let _guard = self.processing.begin();
        let mut record: T = self.client.get_data(&Self::detail_path(id)).await?;
        let statuses = self.statuses.cached().unwrap_or_default();
        record.enrich(&statuses);
        Ok(record)
    }

    /// Patch a record. An empty payload (after stripping) is a silent
    /// no-op with zero requests. On success the patch is merged into
    /// the matching cached record in place and re-enriched; an absent
    /// id leaves the cache unchanged. No re-fetch.
    pub async fn update_by_id(&self, id: u64, patch: Map<String, Value>) -> Result<(), CoreError> {
        let mut patch = patch;
        strip_client_fields::<T>(&mut patch);
        if patch.is_empty() {
            return Ok(());
        }

        let _guard = self.processing.begin();
        self.client
            .patch(&Self::detail_path(id), &Value::Object(patch.clone()))
            .await?;
        self.commit_update(id, patch)
    }

    // ── Mutation commits ─────────────────────────────────────────────

    fn commit_update(&self, id: u64, patch: Map<String, Value>) -> Result<(), CoreError> {
        let statuses = self.statuses.cached().unwrap_or_default();

        let mut cache = self.write_cache();
        let Some(data) = cache.data.as_mut() else {
            return Ok(());
        };
        let Some(found) = data.iter_mut().find(|record| record.id() == id) else {
            return Ok(());
        };

        // Overlay the patch on the serialized record, then round-trip
        // back into the typed shape. A shape-incompatible patch fails
        // here instead of silently corrupting the cache.
        let mut value = serde_json::to_value(&*found)
            .map_err(|e| CoreError::Internal(format!("cache merge: {e}")))?;
        if let Value::Object(fields) = &mut value {
            for (key, patched) in patch {
                fields.insert(key, patched);
            }
        }
        let mut merged: T = serde_json::from_value(value)
            .map_err(|e| CoreError::Internal(format!("cache merge: {e}")))?;

        merged.enrich(&statuses);
        *found = merged;
        Ok(())
    }
}

// ── Outbound payload hygiene ─────────────────────────────────────────

/// Strip client-only fields from an outbound payload: resolve the
/// upload widget's `files` into the entity's canonical picture field,
/// then drop every derived display field.
fn strip_client_fields<T: Entity>(payload: &mut Map<String, Value>) {
    let files = payload.remove("files");
    if let (Some(target), Some(Value::Array(files))) = (T::UPLOAD, files) {
        let urls: Vec<Value> = files
            .iter()
            .filter_map(|file| file.get("url").cloned())
            .collect();
        match target {
            UploadTarget::Single(field) => {
                if let Some(url) = urls.into_iter().next() {
                    payload.insert(field.to_owned(), url);
                }
            }
            UploadTarget::Multi(field) => {
                if !urls.is_empty() {
                    payload.insert(field.to_owned(), Value::Array(urls));
                }
            }
        }
    }

    for field in T::DERIVED {
        payload.remove(*field);
    }
}

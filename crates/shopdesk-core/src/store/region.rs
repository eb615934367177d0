// ── Region store ──
//
// The generic store plus the region-category reference cache. Regions
// are maintained by imports on the server side, so the console only
// lists, reads, and patches them.

use std::sync::Arc;

use serde_json::{Map, Value};

use shopdesk_api::AdminClient;

use crate::error::CoreError;
use crate::model::{CategoryOption, Region};
use crate::store::domain::DomainStore;
use crate::store::reference::{ReferenceCache, StatusDirectory};
use crate::store::{ListParams, ProcessingFlag};

pub struct RegionStore {
    store: DomainStore<Region>,
    categories: ReferenceCache<CategoryOption>,
}

impl RegionStore {
    pub fn new(client: Arc<AdminClient>, statuses: Arc<StatusDirectory>) -> Self {
        Self {
            store: DomainStore::new(Arc::clone(&client), statuses),
            categories: ReferenceCache::new(client, "/regions/categories", "categories"),
        }
    }

    /// The hierarchy levels (country, province, …), fetched once per session.
    pub async fn categories(&self) -> Result<Arc<Vec<CategoryOption>>, CoreError> {
        self.categories.ensure().await
    }

    pub fn processing(&self) -> &ProcessingFlag {
        self.store.processing()
    }

    pub fn cached(&self) -> Option<Vec<Region>> {
        self.store.cached()
    }

    pub fn count(&self) -> i64 {
        self.store.count()
    }

    pub async fn list(&self, params: &ListParams) -> Result<Vec<Region>, CoreError> {
        self.store.list(params).await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Region, CoreError> {
        self.store.get_by_id(id).await
    }

    pub async fn update_by_id(&self, id: u64, patch: Map<String, Value>) -> Result<(), CoreError> {
        self.store.update_by_id(id, patch).await
    }
}

// ── Advertisement store ──
//
// The generic store plus the placement-category reference cache.

use std::sync::Arc;

use serde_json::{Map, Value};

use shopdesk_api::AdminClient;

use crate::error::CoreError;
use crate::model::{Advertisement, CategoryOption};
use crate::store::domain::DomainStore;
use crate::store::reference::{ReferenceCache, StatusDirectory};
use crate::store::{ListParams, ProcessingFlag};

pub struct AdvertisementStore {
    store: DomainStore<Advertisement>,
    categories: ReferenceCache<CategoryOption>,
}

impl AdvertisementStore {
    pub fn new(client: Arc<AdminClient>, statuses: Arc<StatusDirectory>) -> Self {
        Self {
            store: DomainStore::new(Arc::clone(&client), statuses),
            categories: ReferenceCache::new(client, "/advertisement-categories", "categories"),
        }
    }

    /// Placement categories (home banner, side bar, …), fetched once
    /// per session.
    pub async fn categories(&self) -> Result<Arc<Vec<CategoryOption>>, CoreError> {
        self.categories.ensure().await
    }

    pub fn processing(&self) -> &ProcessingFlag {
        self.store.processing()
    }

    pub fn cached(&self) -> Option<Vec<Advertisement>> {
        self.store.cached()
    }

    pub fn count(&self) -> i64 {
        self.store.count()
    }

    pub async fn add(&self, payload: Map<String, Value>) -> Result<Advertisement, CoreError> {
        self.store.add(payload).await
    }

    pub async fn list(&self, params: &ListParams) -> Result<Vec<Advertisement>, CoreError> {
        self.store.list(params).await
    }

    pub async fn get_by_id(&self, id: u64) -> Result<Advertisement, CoreError> {
        self.store.get_by_id(id).await
    }

    pub async fn update_by_id(&self, id: u64, patch: Map<String, Value>) -> Result<(), CoreError> {
        self.store.update_by_id(id, patch).await
    }
}

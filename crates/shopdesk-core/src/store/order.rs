// ── Order store ──
//
// Orders key on the serial number and are read-only from the console,
// so they carry their own store instead of the id-keyed generic one.
// The order status enumeration is a separate endpoint and follows the
// same fetch-once contract as every other reference dataset.

use std::sync::{Arc, RwLock};

use shopdesk_api::AdminClient;

use crate::error::CoreError;
use crate::model::{Order, Status};
use crate::store::reference::ReferenceCache;
use crate::store::{ListCache, ListParams, ProcessingFlag};

const ORDERS: &str = "/orders";

pub struct OrderStore {
    client: Arc<AdminClient>,
    statuses: ReferenceCache<Status>,
    list: RwLock<ListCache<Order>>,
    processing: ProcessingFlag,
}

impl OrderStore {
    pub fn new(client: Arc<AdminClient>) -> Self {
        Self {
            statuses: ReferenceCache::new(Arc::clone(&client), "/orders/statuses", "statuses"),
            client,
            list: RwLock::new(ListCache::default()),
            processing: ProcessingFlag::new(),
        }
    }

    pub fn processing(&self) -> &ProcessingFlag {
        &self.processing
    }

    pub fn cached(&self) -> Option<Vec<Order>> {
        self.read_cache().data.clone()
    }

    pub fn count(&self) -> i64 {
        self.read_cache().count
    }

    fn read_cache(&self) -> std::sync::RwLockReadGuard<'_, ListCache<Order>> {
        self.list.read().expect("order cache lock poisoned")
    }

    /// Order status enumeration, fetched once per session.
    pub async fn statuses(&self) -> Result<Arc<Vec<Status>>, CoreError> {
        self.statuses.ensure().await
    }

    /// Fetch a page of orders and commit it (wholesale replacement,
    /// conditional count). Status labels resolve once the enumeration
    /// has loaded.
    pub async fn list(&self, params: &ListParams) -> Result<Vec<Order>, CoreError> {
        let _guard = self.processing.begin();

        let statuses = self.statuses.ensure().await?;
        let page = self
            .client
            .get_list::<Order>(ORDERS, &params.to_query(), "orders")
            .await?;

        let mut items = page.items;
        for order in &mut items {
            order.enrich(&statuses);
        }

        self.list
            .write()
            .expect("order cache lock poisoned")
            .replace(items.clone(), page.count);
        Ok(items)
    }

    /// Fetch one order by serial number. A cached order short-circuits
    /// without a network call; a miss fetches the detail endpoint
    /// (which includes the sub-order lines) without touching the cache.
    pub async fn get_by_sn(&self, sn: &str) -> Result<Order, CoreError> {
        let found = self
            .read_cache()
            .data
            .as_ref()
            .and_then(|orders| orders.iter().find(|order| order.sn == sn).cloned());
        if let Some(found) = found {
            return Ok(found);
        }

        let _guard = self.processing.begin();
        let mut order: Order = self.client.get_data(&format!("{ORDERS}/{sn}")).await?;
        let statuses = self.statuses.cached().unwrap_or_default();
        order.enrich(&statuses);
        Ok(order)
    }
}

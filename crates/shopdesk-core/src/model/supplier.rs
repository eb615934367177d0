// ── Supplier domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::Status;
use crate::store::domain::{Entity, UploadTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Supplier {
    pub id: u64,
    pub name: String,
    pub status: i32,
    pub contact: String,
    pub mobile: String,
    /// Region code of the registered address.
    pub base_address: String,
    pub base_address_desc: String,
    pub address: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
}

impl Entity for Supplier {
    const COLLECTION: &'static str = "/suppliers";
    const PLURAL: &'static str = "suppliers";
    const UPLOAD: Option<UploadTarget> = None;
    const DERIVED: &'static [&'static str] = &["statusDesc", "updatedAtDesc"];

    fn id(&self) -> u64 {
        self.id
    }

    fn enrich(&mut self, statuses: &[Status]) {
        self.status_desc = enrich::status_label(statuses, self.status);
        self.updated_at_desc = enrich::format_date(self.updated_at.as_ref());
    }
}

// ── Product category domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::Status;
use crate::store::domain::{Entity, UploadTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProductCategory {
    pub id: u64,
    pub name: String,
    pub level: i32,
    pub status: i32,
    /// Parent category ids.
    pub belongs: Vec<i64>,
    pub rank: i32,
    pub icon: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub belongs_desc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
}

impl Entity for ProductCategory {
    const COLLECTION: &'static str = "/product-categories";
    const PLURAL: &'static str = "productCategories";
    const UPLOAD: Option<UploadTarget> = None;
    const DERIVED: &'static [&'static str] = &["statusDesc", "belongsDesc", "updatedAtDesc"];

    fn id(&self) -> u64 {
        self.id
    }

    fn enrich(&mut self, statuses: &[Status]) {
        self.status_desc = enrich::status_label(statuses, self.status);
        self.updated_at_desc = enrich::format_date(self.updated_at.as_ref());
    }
}

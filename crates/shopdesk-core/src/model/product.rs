// ── Product domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::{Status, UploadFile};
use crate::store::domain::{Entity, UploadTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub price: f64,
    /// Purchase unit: `specs` of `unit`, e.g. 250 g.
    pub specs: u64,
    pub unit: String,
    pub catalog: String,
    /// Picture URLs — the canonical form of the upload widget's `files`.
    pub pics: Vec<String>,
    /// Index of the main picture, 1-based.
    pub main_pic: u32,
    pub sn: String,
    pub status: i32,
    pub rank: i32,
    pub keywords: String,
    /// Category ids the product belongs to. Defaults to empty so the
    /// view never scans a missing array.
    pub categories: Vec<i64>,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub categories_desc: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<UploadFile>>,
}

impl Entity for Product {
    const COLLECTION: &'static str = "/products";
    const PLURAL: &'static str = "products";
    const UPLOAD: Option<UploadTarget> = Some(UploadTarget::Multi("pics"));
    const DERIVED: &'static [&'static str] = &[
        "statusDesc",
        "categoriesDesc",
        "startedAtDesc",
        "endedAtDesc",
        "updatedAtDesc",
    ];

    fn id(&self) -> u64 {
        self.id
    }

    fn enrich(&mut self, statuses: &[Status]) {
        self.status_desc = enrich::status_label(statuses, self.status);
        self.started_at_desc = enrich::format_date(self.started_at.as_ref());
        self.ended_at_desc = enrich::format_date(self.ended_at.as_ref());
        self.updated_at_desc = enrich::format_date(self.updated_at.as_ref());
        self.files = enrich::to_upload_files_multi(&self.pics);
    }
}

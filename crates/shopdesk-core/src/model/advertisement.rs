// ── Advertisement domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::{Status, UploadFile};
use crate::store::domain::{Entity, UploadTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Advertisement {
    pub id: u64,
    pub status: i32,
    /// Landing link the banner points at.
    pub link: String,
    pub summary: String,
    /// Placement category code (home banner, side bar, …).
    pub category: String,
    pub rank: i32,
    /// Banner picture URL — the canonical form of the upload widget's `files`.
    pub pic: String,
    pub started_at: Option<DateTime<Utc>>,
    pub ended_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub started_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ended_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<UploadFile>>,
}

impl Entity for Advertisement {
    const COLLECTION: &'static str = "/advertisements";
    const PLURAL: &'static str = "advertisements";
    const UPLOAD: Option<UploadTarget> = Some(UploadTarget::Single("pic"));
    const DERIVED: &'static [&'static str] = &[
        "statusDesc",
        "categoryDesc",
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
        self.files = enrich::to_upload_files(&self.pic);
    }
}

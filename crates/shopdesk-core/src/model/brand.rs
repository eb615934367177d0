// ── Brand domain type ──

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::{Status, UploadFile};
use crate::store::domain::{Entity, UploadTarget};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Brand {
    pub id: u64,
    pub name: String,
    pub status: i32,
    /// Logo picture URL — the canonical form of the upload widget's `files`.
    pub logo: String,
    pub catalog: String,
    pub first_letter: String,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub files: Option<Vec<UploadFile>>,
}

impl Entity for Brand {
    const COLLECTION: &'static str = "/brands";
    const PLURAL: &'static str = "brands";
    const UPLOAD: Option<UploadTarget> = Some(UploadTarget::Single("logo"));
    const DERIVED: &'static [&'static str] = &["statusDesc", "updatedAtDesc"];

    fn id(&self) -> u64 {
        self.id
    }

    fn enrich(&mut self, statuses: &[Status]) {
        self.status_desc = enrich::status_label(statuses, self.status);
        self.updated_at_desc = enrich::format_date(self.updated_at.as_ref());
        self.files = enrich::to_upload_files(&self.logo);
    }
}

// ── Region domain type ──
//
// Regions form the country → province → city → area → street hierarchy
// used by address pickers. The `category` string names the level.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumString};

use crate::enrich;
use crate::model::Status;
use crate::store::domain::{Entity, UploadTarget};

/// The region hierarchy levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, AsRefStr, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum RegionCategory {
    Country,
    Province,
    City,
    Area,
    Street,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Region {
    pub id: u64,
    /// Hierarchy level code (`country`, `province`, …).
    pub category: String,
    pub name: String,
    /// Administrative code, unique within a category.
    pub code: i64,
    /// Code of the containing region, 0 at the top level.
    pub parent: i64,
    pub status: i32,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at_desc: Option<String>,
}

impl Entity for Region {
    const COLLECTION: &'static str = "/regions";
    const PLURAL: &'static str = "regions";
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

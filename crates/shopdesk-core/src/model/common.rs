// ── Shared reference and upload types ──

use serde::{Deserialize, Serialize};

/// One entry of a status enumeration (`GET /commons/statuses`,
/// `GET /orders/statuses`): a numeric code and its display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Status {
    pub name: String,
    pub value: i32,
}

/// One entry of a category enumeration (`GET /regions/categories`,
/// `GET /advertisement-categories`): a string code and its display name.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct CategoryOption {
    pub name: String,
    pub value: String,
}

/// Upload-widget descriptor derived from a record's picture fields.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct UploadFile {
    pub name: String,
    pub url: String,
    pub status: String,
}

impl UploadFile {
    /// A descriptor for an already-uploaded file.
    pub fn done(url: &str) -> Self {
        Self {
            name: String::new(),
            url: url.to_owned(),
            status: "done".to_owned(),
        }
    }
}

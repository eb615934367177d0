// ── Display enrichment helpers ──
//
// Pure derivations from raw server fields into view-ready ones. Invoked
// by the stores after every list / get / update that returns a record;
// never serialized back to the server.

use chrono::{DateTime, Utc};

use crate::model::{Status, UploadFile};

/// Format a server timestamp as the console's short date string.
pub fn format_date(ts: Option<&DateTime<Utc>>) -> Option<String> {
    ts.map(|t| t.format("%Y-%m-%d").to_string())
}

/// Resolve a numeric status code against the status directory.
///
/// Returns `None` when the directory has not loaded or the code is
/// unlisted — the record then carries no label.
pub fn status_label(statuses: &[Status], value: i32) -> Option<String> {
    statuses
        .iter()
        .find(|status| status.value == value)
        .map(|status| status.name.clone())
}

/// Expand a single upload-reference URL into the upload widget's
/// descriptor list. Empty references yield no descriptor.
pub fn to_upload_files(url: &str) -> Option<Vec<UploadFile>> {
    if url.is_empty() {
        return None;
    }
    Some(vec![UploadFile::done(url)])
}

/// Expand a list of upload-reference URLs (multi-picture records).
pub fn to_upload_files_multi(urls: &[String]) -> Option<Vec<UploadFile>> {
    if urls.is_empty() {
        return None;
    }
    Some(urls.iter().map(|url| UploadFile::done(url)).collect())
}

/// Fix a money amount to two decimals, the way order screens render it.
pub fn format_amount(value: f64) -> String {
    format!("{value:.2}")
}

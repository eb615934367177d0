// ── Order domain type ──
//
// Orders are read-only in the back office and key on the serial number
// `sn`, not the row id, so they live outside the generic id-keyed store.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::enrich;
use crate::model::Status;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Order {
    pub id: u64,
    /// Order serial number, the public identifier.
    pub sn: String,
    #[serde(rename = "userID")]
    pub user_id: u64,
    pub amount: f64,
    pub pay_amount: f64,
    pub status: i32,
    pub courier: u64,
    pub courier_name: String,
    pub pay_source: String,

    pub receiver_name: String,
    pub receiver_mobile: String,
    /// Region code of the delivery address.
    pub receiver_base_address: String,
    /// Server-resolved region names for the code above.
    pub receiver_base_address_desc: String,
    pub receiver_address: String,

    pub paid_at: Option<DateTime<Utc>>,
    pub delivery_at: Option<DateTime<Utc>>,
    pub received_at: Option<DateTime<Utc>>,
    pub created_at: Option<DateTime<Utc>>,
    pub updated_at: Option<DateTime<Utc>>,

    /// Line items, present on the detail endpoint only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sub_orders: Option<Vec<SubOrder>>,

    // ── Client-derived display fields ───────────────────────────────
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_desc: Option<String>,
    /// Full delivery address: resolved region names + street address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pay_amount_desc: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at_desc: Option<String>,
}

impl Order {
    /// Attach display fields. The status label resolves against the
    /// order status enumeration when it has loaded.
    pub fn enrich(&mut self, statuses: &[Status]) {
        self.status_desc = enrich::status_label(statuses, self.status);
        self.address = Some(format!(
            "{}{}",
            self.receiver_base_address_desc, self.receiver_address
        ));
        self.amount_desc = Some(enrich::format_amount(self.amount));
        self.pay_amount_desc = Some(enrich::format_amount(self.pay_amount));
        self.created_at_desc = enrich::format_date(self.created_at.as_ref());
    }
}

/// One purchased line of an order.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SubOrder {
    pub id: u64,
    pub main_order: u64,
    pub product: u64,
    pub product_name: String,
    pub product_price: f64,
    pub product_specs_count: u64,
    pub product_unit: String,
    pub product_count: u64,
    pub product_amount: f64,
    pub product_pay_amount: f64,
}

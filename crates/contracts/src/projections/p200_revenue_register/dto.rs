use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::enums::Platform;

/// One row of the cross-platform unified revenue register.
///
/// The persisted register only holds revenue rows: `net_revenue > 0`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnifiedSaleRow {
    pub date: NaiveDate,
    pub platform: Platform,
    pub order_id: String,
    pub product_name: String,
    pub gross_revenue: f64,
    pub discount: f64,
    pub net_revenue: f64,
    pub quantity: i64,
}

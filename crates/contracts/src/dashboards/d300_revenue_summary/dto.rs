use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One order line from the 30-day revenue export
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderRow {
    pub day: NaiveDate,
    pub order_id: String,
    pub product_title: String,
    pub total_sales: f64,
    pub discounts: f64,
    pub net_sales: f64,
    pub quantity: i64,
}

/// Net revenue total for one calendar day
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DayRevenue {
    pub day: NaiveDate,
    pub net_sales: f64,
}

/// Net revenue total for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRevenue {
    pub product_title: String,
    pub net_sales: f64,
}

/// Net sales and discounts granted for one product
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductDiscount {
    pub product_title: String,
    pub net_sales: f64,
    pub discounts: f64,
}

/// Point-in-time aggregates over the prepared 30-day window.
///
/// Computed fresh per invocation, never mutated. `new_revenue` and
/// `repeat_revenue` are the order-size proxy split: orders strictly above
/// the median per-order value count as repeat.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueMetrics {
    pub total_net: f64,
    pub total_gross: f64,
    pub total_discounts: f64,
    /// Count of distinct order ids
    pub orders: u64,
    /// Average order value, 0 when there are no orders
    pub aov: f64,
    /// Ascending by day
    pub revenue_by_day: Vec<DayRevenue>,
    /// Descending by net revenue
    pub revenue_by_product: Vec<ProductRevenue>,
    pub discount_by_product: Vec<ProductDiscount>,
    /// Share of net revenue held by the top 1/3/5 products, in percent
    pub top_1: f64,
    pub top_3: f64,
    pub top_5: f64,
    pub new_revenue: f64,
    pub repeat_revenue: f64,
}

/// Period-over-period deltas; `None` encodes "not available"
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueChanges {
    pub wow_pct: Option<f64>,
    pub mom_pct: Option<f64>,
    pub aov_wow: Option<f64>,
    /// Absolute change between the two most recent days
    pub day_delta: Option<f64>,
    /// Average daily net revenue extrapolated to a 30-day month
    pub run_rate: f64,
    pub latest_day: Option<NaiveDate>,
}

/// Threshold evaluation output; `alerts` is never empty
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSignals {
    pub alerts: Vec<String>,
    pub discount_pct: f64,
    /// Net revenue per unit of discount; None when no discounts were granted
    pub discount_roi: Option<f64>,
}

/// Full dashboard payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevenueSummaryResponse {
    pub window_days: i64,
    pub metrics: RevenueMetrics,
    pub changes: RevenueChanges,
    pub signals: RevenueSignals,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unavailable_changes_serialize_as_null() {
        let changes = RevenueChanges {
            wow_pct: None,
            mom_pct: Some(-4.5),
            aov_wow: None,
            day_delta: None,
            run_rate: 90000.0,
            latest_day: NaiveDate::from_ymd_opt(2025, 6, 1),
        };

        let json = serde_json::to_value(&changes).unwrap();
        assert!(json["wow_pct"].is_null());
        assert_eq!(json["mom_pct"], -4.5);
        assert_eq!(json["latest_day"], "2025-06-01");
    }
}

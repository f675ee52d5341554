use std::cmp::Ordering;
use std::collections::{BTreeMap, HashMap, HashSet};

use chrono::NaiveDate;
use contracts::dashboards::d300_revenue_summary::{
    DayRevenue, OrderRow, ProductDiscount, ProductRevenue, RevenueMetrics,
};

use crate::shared::format::round2;

/// Compute the point-in-time aggregates over the prepared window.
///
/// Concentration ratios are 0.0 when there is no net revenue at all (the
/// prepared table is then empty, since non-revenue rows are filtered out).
pub fn compute_revenue_metrics(rows: &[OrderRow]) -> RevenueMetrics {
    let total_net: f64 = rows.iter().map(|r| r.net_sales).sum();
    let total_gross: f64 = rows.iter().map(|r| r.total_sales).sum();
    let total_discounts: f64 = rows.iter().map(|r| r.discounts).sum();

    let orders = rows
        .iter()
        .map(|r| r.order_id.as_str())
        .collect::<HashSet<_>>()
        .len() as u64;
    let aov = if orders > 0 {
        round2(total_net / orders as f64)
    } else {
        0.0
    };

    // Net revenue per calendar day, ascending
    let mut by_day: BTreeMap<NaiveDate, f64> = BTreeMap::new();
    for row in rows {
        *by_day.entry(row.day).or_insert(0.0) += row.net_sales;
    }
    let revenue_by_day: Vec<DayRevenue> = by_day
        .into_iter()
        .map(|(day, net_sales)| DayRevenue { day, net_sales })
        .collect();

    // Per-product net revenue and discounts
    let mut by_product: BTreeMap<&str, (f64, f64)> = BTreeMap::new();
    for row in rows {
        let entry = by_product.entry(row.product_title.as_str()).or_insert((0.0, 0.0));
        entry.0 += row.net_sales;
        entry.1 += row.discounts;
    }

    let mut revenue_by_product: Vec<ProductRevenue> = by_product
        .iter()
        .map(|(product_title, (net_sales, _))| ProductRevenue {
            product_title: product_title.to_string(),
            net_sales: *net_sales,
        })
        .collect();
    revenue_by_product.sort_by(|a, b| {
        b.net_sales
            .partial_cmp(&a.net_sales)
            .unwrap_or(Ordering::Equal)
    });

    let discount_by_product: Vec<ProductDiscount> = by_product
        .iter()
        .map(|(product_title, (net_sales, discounts))| ProductDiscount {
            product_title: product_title.to_string(),
            net_sales: *net_sales,
            discounts: *discounts,
        })
        .collect();

    let concentration = |n: usize| -> f64 {
        if total_net <= 0.0 {
            return 0.0;
        }
        let top: f64 = revenue_by_product.iter().take(n).map(|p| p.net_sales).sum();
        round2(top / total_net * 100.0)
    };
    let top_1 = concentration(1);
    let top_3 = concentration(3);
    let top_5 = concentration(5);

    // New vs repeat revenue, order-level proxy: orders strictly above the
    // median per-order value count as repeat. Roughly half the order count
    // lands on each side; the revenue split follows the order-size skew.
    let mut order_revenue: HashMap<&str, f64> = HashMap::new();
    for row in rows {
        *order_revenue.entry(row.order_id.as_str()).or_insert(0.0) += row.net_sales;
    }
    let mut order_values: Vec<f64> = order_revenue.into_values().collect();
    order_values.sort_by(|a, b| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    let median = median_of_sorted(&order_values);
    let repeat_revenue: f64 = order_values.iter().filter(|v| **v > median).sum();
    let new_revenue = total_net - repeat_revenue;

    RevenueMetrics {
        total_net,
        total_gross,
        total_discounts,
        orders,
        aov,
        revenue_by_day,
        revenue_by_product,
        discount_by_product,
        top_1,
        top_3,
        top_5,
        new_revenue,
        repeat_revenue,
    }
}

/// Median with even-count interpolation; 0 for an empty slice
fn median_of_sorted(values: &[f64]) -> f64 {
    let n = values.len();
    if n == 0 {
        return 0.0;
    }
    if n % 2 == 1 {
        values[n / 2]
    } else {
        (values[n / 2 - 1] + values[n / 2]) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 5, 1).unwrap() + Duration::days(offset)
    }

    fn row(day_offset: i64, order_id: &str, product: &str, net: f64) -> OrderRow {
        OrderRow {
            day: day(day_offset),
            order_id: order_id.to_string(),
            product_title: product.to_string(),
            total_sales: net,
            discounts: 0.0,
            net_sales: net,
            quantity: 1,
        }
    }

    #[test]
    fn three_order_scenario() {
        // Orders of 100/200/300 across three products and three days:
        // median order value is 200, only the 300 order is repeat revenue.
        let rows = vec![
            row(0, "ORD-1", "Smart Wallet", 100.0),
            row(1, "ORD-2", "Travel Bag", 200.0),
            row(2, "ORD-3", "Power Bank", 300.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert_eq!(metrics.total_net, 600.0);
        assert_eq!(metrics.orders, 3);
        assert_eq!(metrics.aov, 200.0);
        assert_eq!(metrics.top_1, 50.0);
        assert_eq!(metrics.top_3, 100.0);
        assert_eq!(metrics.repeat_revenue, 300.0);
        assert_eq!(metrics.new_revenue, 300.0);
    }

    #[test]
    fn single_product_concentration_is_total() {
        let rows = vec![
            row(0, "ORD-1", "Smart Wallet", 100.0),
            row(1, "ORD-2", "Smart Wallet", 200.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert_eq!(metrics.top_1, 100.0);
        assert_eq!(metrics.top_3, 100.0);
        assert_eq!(metrics.top_5, 100.0);
    }

    #[test]
    fn concentration_ordering_holds() {
        let rows = vec![
            row(0, "ORD-1", "A", 500.0),
            row(0, "ORD-2", "B", 300.0),
            row(0, "ORD-3", "C", 100.0),
            row(0, "ORD-4", "D", 60.0),
            row(0, "ORD-5", "E", 30.0),
            row(0, "ORD-6", "F", 10.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert!(metrics.top_1 <= metrics.top_3);
        assert!(metrics.top_3 <= metrics.top_5);
        assert!(metrics.top_5 <= 100.0);
    }

    #[test]
    fn aov_times_orders_matches_total_net() {
        let rows = vec![
            row(0, "ORD-1", "A", 133.33),
            row(1, "ORD-2", "B", 266.67),
            row(2, "ORD-3", "C", 99.99),
        ];

        let metrics = compute_revenue_metrics(&rows);
        let reconstructed = metrics.aov * metrics.orders as f64;
        assert!((reconstructed - metrics.total_net).abs() < 0.02);
    }

    #[test]
    fn new_plus_repeat_equals_total_net_exactly() {
        let rows = vec![
            row(0, "ORD-1", "A", 120.5),
            row(0, "ORD-1", "B", 79.5),
            row(1, "ORD-2", "A", 310.0),
            row(2, "ORD-3", "C", 45.25),
            row(3, "ORD-4", "B", 800.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert_eq!(
            metrics.new_revenue + metrics.repeat_revenue,
            metrics.total_net
        );
    }

    #[test]
    fn multi_line_orders_are_counted_once() {
        // Two lines of the same order: one distinct order, AOV is the sum.
        let rows = vec![
            row(0, "ORD-1", "A", 100.0),
            row(0, "ORD-1", "B", 50.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert_eq!(metrics.orders, 1);
        assert_eq!(metrics.aov, 150.0);
    }

    #[test]
    fn even_order_count_uses_interpolated_median() {
        // Order values 100/200/300/400: median 250, repeat = 300 + 400.
        let rows = vec![
            row(0, "ORD-1", "A", 100.0),
            row(0, "ORD-2", "A", 200.0),
            row(1, "ORD-3", "A", 300.0),
            row(1, "ORD-4", "A", 400.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        assert_eq!(metrics.repeat_revenue, 700.0);
        assert_eq!(metrics.new_revenue, 300.0);
    }

    #[test]
    fn empty_window_yields_zero_sentinels() {
        let metrics = compute_revenue_metrics(&[]);
        assert_eq!(metrics.total_net, 0.0);
        assert_eq!(metrics.orders, 0);
        assert_eq!(metrics.aov, 0.0);
        assert_eq!(metrics.top_1, 0.0);
        assert_eq!(metrics.top_3, 0.0);
        assert_eq!(metrics.top_5, 0.0);
        assert!(metrics.revenue_by_day.is_empty());
    }

    #[test]
    fn revenue_by_product_is_descending() {
        let rows = vec![
            row(0, "ORD-1", "Low", 10.0),
            row(0, "ORD-2", "High", 500.0),
            row(0, "ORD-3", "Mid", 100.0),
        ];

        let metrics = compute_revenue_metrics(&rows);
        let names: Vec<&str> = metrics
            .revenue_by_product
            .iter()
            .map(|p| p.product_title.as_str())
            .collect();
        assert_eq!(names, vec!["High", "Mid", "Low"]);
    }
}

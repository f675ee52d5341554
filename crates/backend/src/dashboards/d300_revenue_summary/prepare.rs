use chrono::Duration;
use contracts::dashboards::d300_revenue_summary::OrderRow;

/// Length of the reporting window in days. The window is inclusive of the
/// boundary day, so it spans 31 calendar days ending at the latest date.
pub const WINDOW_DAYS: i64 = 30;

/// Keep only revenue rows (net_sales > 0) and window them to the last
/// 30 days ending at the maximum date present in the input.
pub fn prepare_orders(rows: Vec<OrderRow>) -> Vec<OrderRow> {
    let mut rows: Vec<OrderRow> = rows.into_iter().filter(|r| r.net_sales > 0.0).collect();

    let Some(max_date) = rows.iter().map(|r| r.day).max() else {
        return rows;
    };
    let cutoff = max_date - Duration::days(WINDOW_DAYS);
    rows.retain(|r| r.day >= cutoff);

    rows
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn row(day: NaiveDate, net_sales: f64) -> OrderRow {
        OrderRow {
            day,
            order_id: "ORD-1".to_string(),
            product_title: "Smart Wallet".to_string(),
            total_sales: net_sales,
            discounts: 0.0,
            net_sales,
            quantity: 1,
        }
    }

    fn day(offset: i64) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 1, 1).unwrap() + Duration::days(offset - 1)
    }

    #[test]
    fn non_positive_net_sales_rows_are_dropped() {
        let rows = vec![row(day(1), 100.0), row(day(1), 0.0), row(day(1), -50.0)];
        let prepared = prepare_orders(rows);
        assert_eq!(prepared.len(), 1);
        assert_eq!(prepared[0].net_sales, 100.0);
    }

    #[test]
    fn window_is_inclusive_of_the_boundary_day() {
        // Rows on every day 1..=40; max date is day 40, so the boundary is
        // day 10 and exactly days 10..=40 survive.
        let rows: Vec<OrderRow> = (1..=40).map(|offset| row(day(offset), 100.0)).collect();

        let prepared = prepare_orders(rows);
        assert_eq!(prepared.len(), 31);
        assert_eq!(prepared.iter().map(|r| r.day).min(), Some(day(10)));
        assert_eq!(prepared.iter().map(|r| r.day).max(), Some(day(40)));
    }

    #[test]
    fn empty_input_stays_empty() {
        assert!(prepare_orders(Vec::new()).is_empty());
    }
}

use contracts::dashboards::d300_revenue_summary::{RevenueMetrics, RevenueSignals};

use crate::shared::format::round2;

const DISCOUNT_LEAKAGE_PCT: f64 = 25.0;
const CONCENTRATION_TOP3_PCT: f64 = 55.0;
const DISCOUNT_ROI_FLOOR: f64 = 3.0;

/// Evaluate the fixed thresholds against a metrics snapshot.
///
/// Rules fire independently, in a fixed order; when none fire a single
/// stable-health line is emitted instead, so the list is never empty.
pub fn revenue_signals(metrics: &RevenueMetrics) -> RevenueSignals {
    let mut alerts = Vec::new();

    let discount_pct = if metrics.total_gross > 0.0 {
        round2(metrics.total_discounts / metrics.total_gross * 100.0)
    } else {
        0.0
    };

    let discount_roi = if metrics.total_discounts > 0.0 {
        Some(round2(metrics.total_net / metrics.total_discounts))
    } else {
        None
    };

    if discount_pct > DISCOUNT_LEAKAGE_PCT {
        alerts.push(format!(
            "High discount leakage: {discount_pct}% of gross revenue."
        ));
    }

    if metrics.top_3 > CONCENTRATION_TOP3_PCT {
        alerts.push(format!(
            "Revenue concentration risk: Top 3 products drive {}% of net revenue.",
            metrics.top_3
        ));
    }

    if let Some(roi) = discount_roi {
        if roi < DISCOUNT_ROI_FLOOR {
            alerts.push(format!(
                "Low discount ROI: ₹{roi} revenue per ₹1 discount."
            ));
        }
    }

    if alerts.is_empty() {
        alerts.push("Revenue health looks stable with no major red flags.".to_string());
    }

    RevenueSignals {
        alerts,
        discount_pct,
        discount_roi,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metrics(total_net: f64, total_gross: f64, total_discounts: f64, top_3: f64) -> RevenueMetrics {
        RevenueMetrics {
            total_net,
            total_gross,
            total_discounts,
            orders: 10,
            aov: 0.0,
            revenue_by_day: Vec::new(),
            revenue_by_product: Vec::new(),
            discount_by_product: Vec::new(),
            top_1: 0.0,
            top_3,
            top_5: 0.0,
            new_revenue: 0.0,
            repeat_revenue: 0.0,
        }
    }

    #[test]
    fn stable_health_when_no_rule_fires() {
        let signals = revenue_signals(&metrics(9000.0, 10000.0, 1000.0, 40.0));
        assert_eq!(
            signals.alerts,
            vec!["Revenue health looks stable with no major red flags.".to_string()]
        );
        assert_eq!(signals.discount_pct, 10.0);
        assert_eq!(signals.discount_roi, Some(9.0));
    }

    #[test]
    fn all_rules_fire_in_fixed_order() {
        // 30% discount share, concentrated top-3, ROI just above 2.
        let signals = revenue_signals(&metrics(7000.0, 10000.0, 3000.0, 70.0));
        assert_eq!(signals.alerts.len(), 3);
        assert!(signals.alerts[0].starts_with("High discount leakage"));
        assert!(signals.alerts[1].starts_with("Revenue concentration risk"));
        assert!(signals.alerts[2].starts_with("Low discount ROI"));
    }

    #[test]
    fn no_discounts_means_no_roi_and_no_roi_alert() {
        let signals = revenue_signals(&metrics(10000.0, 10000.0, 0.0, 40.0));
        assert_eq!(signals.discount_pct, 0.0);
        assert_eq!(signals.discount_roi, None);
        assert!(signals
            .alerts
            .iter()
            .all(|a| !a.starts_with("Low discount ROI")));
    }

    #[test]
    fn zero_gross_revenue_means_zero_discount_pct() {
        let signals = revenue_signals(&metrics(0.0, 0.0, 0.0, 0.0));
        assert_eq!(signals.discount_pct, 0.0);
        assert_eq!(signals.alerts.len(), 1);
    }

    #[test]
    fn thresholds_are_strict_inequalities() {
        // Exactly 25% discount share and exactly 55% concentration: no alert.
        let signals = revenue_signals(&metrics(7500.0, 10000.0, 2500.0, 55.0));
        assert_eq!(
            signals.alerts,
            vec!["Revenue health looks stable with no major red flags.".to_string()]
        );
    }
}

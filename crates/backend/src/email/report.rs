use contracts::dashboards::d300_revenue_summary::{RevenueChanges, RevenueMetrics, RevenueSignals};

use crate::shared::format::{format_money, format_pct_opt};

use super::EmailMessage;

/// Build the daily report subject and plaintext body from the three
/// snapshots. Pure formatting, no I/O.
pub fn build_report(
    metrics: &RevenueMetrics,
    changes: &RevenueChanges,
    signals: &RevenueSignals,
    dashboard_url: &str,
) -> EmailMessage {
    let exec_summary = match changes.day_delta {
        Some(delta) => {
            let direction = if delta > 0.0 { "up" } else { "down" };
            format!(
                "Net revenue moved {direction} by ₹{} compared to yesterday.",
                format_money(delta.abs())
            )
        }
        None => "Not enough data for daily comparison.".to_string(),
    };

    let alerts_text = signals
        .alerts
        .iter()
        .map(|alert| format!("- {alert}"))
        .collect::<Vec<_>>()
        .join("\n");

    let subject = format!(
        "₹{} Net Revenue | WoW {} | Revenue Command",
        format_money(metrics.total_net),
        format_pct_opt(changes.wow_pct)
    );

    let body = format!(
        "Hi Founder,

Today's revenue performance at a glance:

• Net revenue: ₹{total_net}
• Orders: {orders}
• Average Order Value: ₹{aov}
• WoW change: {wow}
• MoM change: {mom}
• Monthly run rate: ₹{run_rate}

What stood out today:
{exec_summary}

Potential risks / signals:
{alerts_text}

For a deeper breakdown (products, discounts, trends),
open the Revenue Command Dashboard:
{dashboard_url}

—
Automated Revenue Command
",
        total_net = format_money(metrics.total_net),
        orders = metrics.orders,
        aov = format_money(metrics.aov),
        wow = format_pct_opt(changes.wow_pct),
        mom = format_pct_opt(changes.mom_pct),
        run_rate = format_money(changes.run_rate),
    );

    EmailMessage { subject, body_text: body }
}

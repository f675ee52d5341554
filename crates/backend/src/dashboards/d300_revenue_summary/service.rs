use anyhow::{Context, Result};
use contracts::dashboards::d300_revenue_summary::RevenueSummaryResponse;

use crate::shared::config::Config;

use super::{changes, metrics, prepare, repository, signals};

/// Build the full dashboard payload from the order export on disk.
///
/// Every invocation re-reads the file and computes fresh snapshots; nothing
/// is cached between calls.
pub fn get_revenue_summary(config: &Config) -> Result<RevenueSummaryResponse> {
    let path = config.orders_path();
    let raw = repository::load_order_rows(&path)
        .with_context(|| format!("loading order export from {}", path.display()))?;
    let prepared = prepare::prepare_orders(raw);
    tracing::debug!(
        "D300: {} rows in the {}-day window",
        prepared.len(),
        prepare::WINDOW_DAYS
    );

    let metrics = metrics::compute_revenue_metrics(&prepared);
    let changes = changes::compute_revenue_changes(&prepared);
    let signals = signals::revenue_signals(&metrics);

    Ok(RevenueSummaryResponse {
        window_days: prepare::WINDOW_DAYS,
        metrics,
        changes,
        signals,
    })
}

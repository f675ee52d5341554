use axum::{extract::State, http::StatusCode, Json};
use contracts::dashboards::d300_revenue_summary::RevenueSummaryResponse;

use crate::dashboards::d300_revenue_summary::service;
use crate::shared::state::AppState;

/// GET /api/d300/revenue_summary
pub async fn get_revenue_summary(
    State(state): State<AppState>,
) -> Result<Json<RevenueSummaryResponse>, StatusCode> {
    match service::get_revenue_summary(state.config()) {
        Ok(response) => {
            tracing::info!(
                "D300 Dashboard: returning summary for {} orders across {} days",
                response.metrics.orders,
                response.metrics.revenue_by_day.len()
            );
            Ok(Json(response))
        }
        Err(e) => {
            tracing::error!("D300 Dashboard: failed to build revenue summary: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

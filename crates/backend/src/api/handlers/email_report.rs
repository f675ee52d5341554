use axum::{extract::State, http::StatusCode, Json};
use contracts::system::email::SendDailyResponse;

use crate::shared::state::AppState;
use crate::system::tasks::daily_report;

/// POST /api/email/send-daily
///
/// Manual trigger for the daily report. Goes through the same send gate as
/// the scheduled worker, so repeated calls within a day are no-ops.
pub async fn send_daily(
    State(state): State<AppState>,
) -> Result<Json<SendDailyResponse>, StatusCode> {
    match daily_report::send_daily_report(&state).await {
        Ok(status) => Ok(Json(SendDailyResponse { status })),
        Err(e) => {
            tracing::error!("Daily email failed: {:#}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

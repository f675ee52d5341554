use axum::{extract::State, http::StatusCode, Json};
use contracts::usecases::u101_unify_revenue::UnifyResponse;

use crate::shared::state::AppState;
use crate::usecases::u101_unify_revenue::{executor, UnifyError};

/// POST /api/u101/unify/start
pub async fn start_unify(
    State(state): State<AppState>,
) -> Result<Json<UnifyResponse>, StatusCode> {
    match executor::build_unified_register(&state.config().data_dir()) {
        Ok(response) => {
            tracing::info!(
                "U101: unified {} rows from {} platform(s)",
                response.rows_written,
                response.platforms.len()
            );
            Ok(Json(response))
        }
        Err(UnifyError::NoInputData) => {
            tracing::error!("U101: no platform revenue files found");
            Err(StatusCode::UNPROCESSABLE_ENTITY)
        }
        Err(e) => {
            tracing::error!("U101: unify failed: {}", e);
            Err(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

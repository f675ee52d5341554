use axum::{extract::State, http::StatusCode, Json};
use contracts::system::auth::{LoginRequest, LoginResponse};

use crate::shared::state::AppState;
use crate::system::auth::{jwt, AuthError};

/// POST /api/system/auth/login
///
/// Shared-secret login for the dashboard. While no password is configured
/// the endpoint refuses access instead of letting anyone in.
pub async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, (StatusCode, String)> {
    match state.verifier().verify(&request.password) {
        Ok(true) => {
            let access_token = jwt::generate_access_token(state.jwt_secret()).map_err(|e| {
                tracing::error!("Failed to issue access token: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to issue access token".to_string(),
                )
            })?;

            tracing::info!("Dashboard login succeeded");
            Ok(Json(LoginResponse { access_token }))
        }
        Ok(false) => {
            tracing::warn!("Dashboard login rejected: invalid password");
            Err((StatusCode::UNAUTHORIZED, "Invalid password".to_string()))
        }
        Err(AuthError::MissingConfiguration(key)) => {
            tracing::error!("Dashboard login unavailable: {} is not set", key);
            Err((
                StatusCode::SERVICE_UNAVAILABLE,
                "Password not configured. Contact admin.".to_string(),
            ))
        }
    }
}

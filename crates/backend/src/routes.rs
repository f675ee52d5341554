use axum::{
    http::{header, Method},
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
};

use crate::{api::handlers, shared::state::AppState, system};

/// Application router: public health + login, token-gated dashboard,
/// batch usecase triggers, static dashboard assets as fallback.
pub fn configure_routes(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::AUTHORIZATION]);

    Router::new()
        .route("/health", get(|| async { "ok" }))
        // ========================================
        // SYSTEM AUTH ROUTES (PUBLIC)
        // ========================================
        .route(
            "/api/system/auth/login",
            post(system::handlers::auth::login),
        )
        // ========================================
        // DASHBOARDS (PROTECTED)
        // ========================================
        // D300 Revenue Summary Dashboard
        .route(
            "/api/d300/revenue_summary",
            get(handlers::d300_revenue_summary::get_revenue_summary).layer(
                middleware::from_fn_with_state(
                    state.clone(),
                    system::auth::middleware::require_auth,
                ),
            ),
        )
        // ========================================
        // USECASES
        // ========================================
        // UseCase u101: rebuild the unified revenue register
        .route(
            "/api/u101/unify/start",
            post(handlers::u101_unify::start_unify),
        )
        // Daily report trigger (same gate as the scheduled send)
        .route(
            "/api/email/send-daily",
            post(handlers::email_report::send_daily),
        )
        .fallback_service(ServeDir::new("dist"))
        .layer(cors)
        .with_state(state)
}

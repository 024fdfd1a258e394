use crate::handlers::{assessment, form};
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub fn create_router(state: AppState) -> Router {
    let api_routes = Router::new()
        .route("/assessments", post(assessment::create_assessment))
        .route("/inputs/clamp", post(form::clamp_input))
        .route("/form/reset", post(form::reset_form));

    Router::new()
        .route("/health", get(form::health))
        .nest("/v1", api_routes)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

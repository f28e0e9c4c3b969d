use super::{
    handlers::{cleaners, docs, health, jobs, map},
    middleware::logging::logging_middleware,
    middleware::request_id::request_id_middleware,
    state::AppState,
};
use axum::{
    Router, middleware,
    routing::{get, post},
};

pub fn create_router(state: AppState) -> Router {
    let demo_routes = Router::new()
        .route("/api/v1/cleaners", get(cleaners::list_cleaners))
        .route("/api/v1/cleaners/{id}", get(cleaners::get_cleaner))
        .route("/api/v1/cleaners/{id}/map", get(cleaners::cleaner_map_page))
        .route("/api/v1/jobs", get(jobs::list_jobs))
        .route("/api/v1/jobs/{id}", get(jobs::get_job));

    let mut router = Router::new()
        // Health
        .route("/health", get(health::health_check))
        // Map composition
        .route("/api/v1/map/view", post(map::compose_view))
        .route("/api/v1/map/page", post(map::map_page))
        // Docs
        .route("/api/v1/docs", get(docs::api_docs));

    // In-memory demo roster; a deployment fronting real schedule data turns
    // this off and drives the map endpoints directly.
    if state.config.enable_demo_roster {
        router = router.merge(demo_routes);
    }

    router
        .layer(middleware::from_fn(logging_middleware))
        .layer(middleware::from_fn(request_id_middleware))
        .with_state(state)
}

use crate::application::render_map::dto::{MapView, MapViewRequest};
use crate::presentation::html::leaflet;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::State,
    response::Html,
};

/// `POST /api/v1/map/view` — the machine-readable composition.
pub async fn compose_view(
    State(state): State<AppState>,
    Json(req): Json<MapViewRequest>,
) -> Result<Json<MapView>, AppError> {
    let view = state.render_map.execute(&req.cleaner, &req.jobs).await?;
    Ok(Json(view))
}

/// `POST /api/v1/map/page` — the same composition rendered as a standalone
/// Leaflet page.
pub async fn map_page(
    State(state): State<AppState>,
    Json(req): Json<MapViewRequest>,
) -> Result<Html<String>, AppError> {
    let title = format!("Schema för {}", req.cleaner.name);
    let view = state.render_map.execute(&req.cleaner, &req.jobs).await?;
    Ok(Html(leaflet::render_page(&view, &title)))
}

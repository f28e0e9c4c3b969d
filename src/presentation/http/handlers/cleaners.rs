use crate::domain::cleaner::Cleaner;
use crate::presentation::html::leaflet;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, Query, State},
    response::Html,
};
use serde::Deserialize;

pub async fn list_cleaners(State(state): State<AppState>) -> Json<Vec<Cleaner>> {
    Json(state.demo.cleaners().to_vec())
}

pub async fn get_cleaner(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Cleaner>, AppError> {
    state
        .demo
        .find_cleaner(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("cleaner {}", id)))
}

#[derive(Debug, Deserialize, Default)]
pub struct CleanerMapQuery {
    /// Comma-separated job ids; omitted means the whole demo schedule.
    pub jobs: Option<String>,
}

/// `GET /api/v1/cleaners/{id}/map` — Leaflet page for a demo cleaner.
pub async fn cleaner_map_page(
    State(state): State<AppState>,
    Path(id): Path<String>,
    Query(params): Query<CleanerMapQuery>,
) -> Result<Html<String>, AppError> {
    let cleaner = state
        .demo
        .find_cleaner(&id)
        .ok_or_else(|| AppError::NotFound(format!("cleaner {}", id)))?;

    let jobs = match params.jobs.as_deref() {
        Some(ids) => state
            .demo
            .jobs_by_ids(ids.split(',').map(str::trim).filter(|s| !s.is_empty()))?,
        None => state.demo.jobs().to_vec(),
    };

    let view = state.render_map.execute(cleaner, &jobs).await?;
    let title = format!("Schema för {}", cleaner.name);
    Ok(Html(leaflet::render_page(&view, &title)))
}

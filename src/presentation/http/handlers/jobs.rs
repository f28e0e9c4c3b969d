use crate::domain::job::Job;
use crate::presentation::http::{errors::AppError, state::AppState};
use axum::{
    Json,
    extract::{Path, State},
};

pub async fn list_jobs(State(state): State<AppState>) -> Json<Vec<Job>> {
    Json(state.demo.jobs().to_vec())
}

pub async fn get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Job>, AppError> {
    state
        .demo
        .find_job(&id)
        .cloned()
        .map(Json)
        .ok_or_else(|| AppError::NotFound(format!("job {}", id)))
}

use axum::{Json, response::IntoResponse};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    geocoder: &'static str,
    version: &'static str,
}

pub async fn health_check() -> impl IntoResponse {
    // Nothing external to probe: resolution is in-process and the tile
    // service is only ever contacted by the browser.
    Json(HealthResponse {
        status: "healthy",
        geocoder: "city-table",
        version: env!("CARGO_PKG_VERSION"),
    })
}

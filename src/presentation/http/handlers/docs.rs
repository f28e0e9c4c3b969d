use axum::Json;

pub async fn api_docs() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "openapi": "3.0.0",
        "info": {
            "title": "Cleanmap API",
            "version": "1.0.0"
        },
        "paths": {
            "/health": { "get": { "summary": "Health check" } },
            "/api/v1/map/view": { "post": { "summary": "Compose a map view for a cleaner and their schedule" } },
            "/api/v1/map/page": { "post": { "summary": "Render a standalone Leaflet page for a cleaner and their schedule" } },
            "/api/v1/cleaners": { "get": { "summary": "List demo cleaners" } },
            "/api/v1/cleaners/{id}": { "get": { "summary": "Get demo cleaner by id" } },
            "/api/v1/cleaners/{id}/map": { "get": { "summary": "Leaflet page for a demo cleaner (optional ?jobs=a,b filter)" } },
            "/api/v1/jobs": { "get": { "summary": "List demo jobs" } },
            "/api/v1/jobs/{id}": { "get": { "summary": "Get demo job by id" } },
            "/api/v1/docs": { "get": { "summary": "OpenAPI spec" } }
        }
    }))
}

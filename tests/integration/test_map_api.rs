mod helpers;

use axum::http::StatusCode;
use helpers::{expect_status, get, post_json, read_json, read_text, spawn_app};
use serde_json::{Value, json};

fn schedule_body() -> Value {
    json!({
        "cleaner": { "name": "Anna Andersson", "home_address": "Södermalm, Stockholm" },
        "jobs": [
            {
                "id": "job_a",
                "client_name": "Konsulthuset",
                "address": "S:t Persgatan 8, Uppsala",
                "scheduled_start_time": "09:00",
                "scheduled_end_time": "11:30"
            },
            {
                "id": "job_b",
                "client_name": "Villan",
                "address": "Avenyn 1, Göteborg",
                "scheduled_start_time": "13:00",
                "scheduled_end_time": "15:00"
            }
        ]
    })
}

#[tokio::test]
async fn health_reports_healthy() {
    let app = spawn_app();
    let res = expect_status(get(&app, "/health").await, StatusCode::OK).await;
    let body: Value = read_json(res).await;
    assert_eq!(body["status"], "healthy");
}

#[tokio::test]
async fn responses_carry_a_request_id() {
    let app = spawn_app();
    let res = get(&app, "/health").await;
    assert!(res.headers().contains_key("x-request-id"));
}

#[tokio::test]
async fn map_view_composes_markers_and_route() {
    let app = spawn_app();
    let res = expect_status(
        post_json(&app, "/api/v1/map/view", schedule_body()).await,
        StatusCode::OK,
    )
    .await;
    let view: Value = read_json(res).await;

    // Home anchors the view: matched address, exact table coordinate.
    assert_eq!(view["center"]["lat"], 59.3293);
    assert_eq!(view["center"]["lng"], 18.0686);
    assert_eq!(view["zoom"], 11);
    assert_eq!(view["scroll_wheel_zoom"], false);
    assert_eq!(
        view["tile_layer"]["url_template"],
        "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png"
    );

    assert_eq!(view["home_marker"]["color"], "#10b981");
    assert_eq!(view["home_marker"]["popup"]["title"], "Anna Anderssons hem");
    assert_eq!(
        view["home_marker"]["popup"]["lines"][0],
        "Södermalm, Stockholm"
    );

    let markers = view["job_markers"].as_array().expect("job markers array");
    assert_eq!(markers.len(), 2);
    assert_eq!(markers[0]["id"], "job_a");
    assert_eq!(markers[0]["position"]["lat"], 59.8586);
    assert_eq!(markers[0]["color"], "#ef4444");
    assert_eq!(markers[0]["popup"]["lines"][1], "Tid: 09:00 - 11:30");
    assert_eq!(markers[1]["id"], "job_b");
    assert_eq!(markers[1]["position"]["lng"], 11.9746);

    // Route: home first, then the jobs in schedule order.
    let points = view["route_line"]["points"]
        .as_array()
        .expect("route line points");
    assert_eq!(points.len(), 3);
    assert_eq!(points[0], view["center"]);
    assert_eq!(points[1], markers[0]["position"]);
    assert_eq!(points[2], markers[1]["position"]);
    assert_eq!(view["route_line"]["dash_array"], "5, 10");
}

#[tokio::test]
async fn empty_schedule_composes_without_a_route_line() {
    let app = spawn_app();
    let body = json!({
        "cleaner": { "name": "Anna", "home_address": "Stockholm" },
        "jobs": []
    });
    let res = expect_status(
        post_json(&app, "/api/v1/map/view", body).await,
        StatusCode::OK,
    )
    .await;
    let view: Value = read_json(res).await;
    assert!(view["route_line"].is_null());
    assert_eq!(view["job_markers"].as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn single_job_schedule_draws_the_route_line() {
    let app = spawn_app();
    let body = json!({
        "cleaner": { "name": "Anna", "home_address": "Stockholm" },
        "jobs": [{ "id": "only", "client_name": "Kund", "address": "Malmö" }]
    });
    let res = expect_status(
        post_json(&app, "/api/v1/map/view", body).await,
        StatusCode::OK,
    )
    .await;
    let view: Value = read_json(res).await;
    assert_eq!(view["route_line"]["points"].as_array().unwrap().len(), 2);
}

#[tokio::test]
async fn unmatched_addresses_still_render_with_a_fallback_position() {
    let app = spawn_app();
    let body = json!({
        "cleaner": { "name": "Anna", "home_address": "Ingenstans" },
        "jobs": [{ "id": "x", "client_name": "Kund", "address": "" }]
    });
    let res = expect_status(
        post_json(&app, "/api/v1/map/view", body).await,
        StatusCode::OK,
    )
    .await;
    let view: Value = read_json(res).await;

    let lat = view["center"]["lat"].as_f64().unwrap();
    let lng = view["center"]["lng"].as_f64().unwrap();
    assert!((lat - 59.3293).abs() <= 0.1);
    assert!((lng - 18.0686).abs() <= 0.15);
    assert_eq!(view["job_markers"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn duplicate_job_ids_are_rejected() {
    let app = spawn_app();
    let body = json!({
        "cleaner": { "name": "Anna", "home_address": "Stockholm" },
        "jobs": [
            { "id": "dup", "client_name": "A", "address": "Uppsala" },
            { "id": "dup", "client_name": "B", "address": "Malmö" }
        ]
    });
    let res = expect_status(
        post_json(&app, "/api/v1/map/view", body).await,
        StatusCode::BAD_REQUEST,
    )
    .await;
    let err: Value = read_json(res).await;
    assert!(err["error"].as_str().unwrap().contains("duplicate job id"));
}

#[tokio::test]
async fn map_page_renders_a_leaflet_document() {
    let app = spawn_app();
    let res = expect_status(
        post_json(&app, "/api/v1/map/page", schedule_body()).await,
        StatusCode::OK,
    )
    .await;
    let content_type = res
        .headers()
        .get("content-type")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default()
        .to_string();
    assert!(content_type.starts_with("text/html"));

    let page = read_text(res).await;
    assert!(page.contains("leaflet"));
    assert!(page.contains(r#"<div id="map"></div>"#));
    assert!(page.contains("Anna Andersson"));
}

#[tokio::test]
async fn demo_roster_lists_and_resolves_ids() {
    let app = spawn_app();

    let res = expect_status(get(&app, "/api/v1/cleaners").await, StatusCode::OK).await;
    let cleaners: Value = read_json(res).await;
    let first_id = cleaners[0]["id"].as_str().expect("cleaner id").to_string();

    let res = expect_status(
        get(&app, &format!("/api/v1/cleaners/{}", first_id)).await,
        StatusCode::OK,
    )
    .await;
    let cleaner: Value = read_json(res).await;
    assert_eq!(cleaner["id"], first_id.as_str());

    let res = expect_status(get(&app, "/api/v1/jobs").await, StatusCode::OK).await;
    let jobs: Value = read_json(res).await;
    assert!(!jobs.as_array().unwrap().is_empty());

    expect_status(
        get(&app, "/api/v1/cleaners/nope").await,
        StatusCode::NOT_FOUND,
    )
    .await;
    expect_status(get(&app, "/api/v1/jobs/nope").await, StatusCode::NOT_FOUND).await;
}

#[tokio::test]
async fn demo_cleaner_map_page_renders_and_filters_jobs() {
    let app = spawn_app();

    let res = expect_status(
        get(&app, "/api/v1/cleaners/cleaner_001/map").await,
        StatusCode::OK,
    )
    .await;
    let page = read_text(res).await;
    assert!(page.contains("Anna Andersson"));

    expect_status(
        get(&app, "/api/v1/cleaners/cleaner_001/map?jobs=job_001,job_002").await,
        StatusCode::OK,
    )
    .await;

    // Unknown job ids in the filter are a client error, not a silent skip.
    expect_status(
        get(&app, "/api/v1/cleaners/cleaner_001/map?jobs=job_999").await,
        StatusCode::NOT_FOUND,
    )
    .await;
}

#[tokio::test]
async fn docs_describe_the_map_endpoints() {
    let app = spawn_app();
    let res = expect_status(get(&app, "/api/v1/docs").await, StatusCode::OK).await;
    let docs: Value = read_json(res).await;
    assert!(docs["paths"]["/api/v1/map/view"].is_object());
    assert!(docs["paths"]["/api/v1/cleaners/{id}/map"].is_object());
}

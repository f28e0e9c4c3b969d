use super::dto::{MapView, Marker, Popup, RouteLine, TileLayer};
use crate::domain::{cleaner::Cleaner, errors::DomainError, geo::Route, job::Job};
use crate::infrastructure::geocoding::traits::GeocodingService;
use chrono::Utc;
use std::collections::HashSet;
use std::sync::Arc;

/// Initial zoom; wide enough to show a city-sized schedule around home.
pub const DEFAULT_ZOOM: u8 = 11;

const HOME_MARKER_COLOR: &str = "#10b981";
const JOB_MARKER_COLOR: &str = "#ef4444";
const ROUTE_COLOR: &str = "#3b82f6";
const ROUTE_WEIGHT: u8 = 3;
const ROUTE_OPACITY: f64 = 0.7;
const ROUTE_DASH: &str = "5, 10";

/// Builds a [`MapView`] from a cleaner and their schedule.
///
/// Resolves the home address once and each job address once, in schedule
/// order, then assembles markers and the optional connecting line. Inputs
/// are borrowed and never mutated; every marker carries a derived copy of
/// what it needs.
pub struct RenderMapUseCase {
    geocoder: Arc<dyn GeocodingService>,
    tile_layer: TileLayer,
}

impl RenderMapUseCase {
    pub fn new(geocoder: Arc<dyn GeocodingService>, tile_layer: TileLayer) -> Self {
        Self { geocoder, tile_layer }
    }

    pub async fn execute(&self, cleaner: &Cleaner, jobs: &[Job]) -> Result<MapView, DomainError> {
        ensure_unique_job_ids(jobs)?;

        let home = self.geocoder.resolve(&cleaner.home_address).await;

        let mut job_markers = Vec::with_capacity(jobs.len());
        for job in jobs {
            let position = self.geocoder.resolve(&job.address).await;
            job_markers.push(Marker {
                id: Some(job.id.clone()),
                position,
                color: JOB_MARKER_COLOR.to_string(),
                popup: Popup {
                    title: job.client_name.clone(),
                    lines: vec![job.address.clone(), format!("Tid: {}", job.time_window())],
                },
            });
        }

        let route = Route::from_home_and_stops(home, job_markers.iter().map(|m| m.position));
        let route_line = route.is_drawable().then(|| RouteLine {
            points: route.points.clone(),
            color: ROUTE_COLOR.to_string(),
            weight: ROUTE_WEIGHT,
            opacity: ROUTE_OPACITY,
            dash_array: ROUTE_DASH.to_string(),
        });

        Ok(MapView {
            center: home,
            zoom: DEFAULT_ZOOM,
            scroll_wheel_zoom: false,
            tile_layer: self.tile_layer.clone(),
            home_marker: Marker {
                id: None,
                position: home,
                color: HOME_MARKER_COLOR.to_string(),
                popup: Popup {
                    title: format!("{}s hem", cleaner.name),
                    lines: vec![cleaner.home_address.clone()],
                },
            },
            job_markers,
            route_line,
            generated_at: Utc::now(),
        })
    }
}

/// Duplicate ids would silently collide as rendering keys; reject them here.
fn ensure_unique_job_ids(jobs: &[Job]) -> Result<(), DomainError> {
    let mut seen = HashSet::with_capacity(jobs.len());
    for job in jobs {
        if !seen.insert(job.id.as_str()) {
            return Err(DomainError::ValidationError(format!(
                "duplicate job id: {}",
                job.id
            )));
        }
    }
    Ok(())
}

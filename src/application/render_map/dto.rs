use crate::domain::{cleaner::Cleaner, geo::Coordinate, job::Job};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Input contract of the map composition: a cleaner and an ordered schedule.
#[derive(Debug, Clone, Deserialize, TS)]
#[ts(export)]
pub struct MapViewRequest {
    pub cleaner: Cleaner,
    #[serde(default)]
    pub jobs: Vec<Job>,
}

/// The fully resolved, ready-to-draw map composition.
///
/// Everything the page needs is in here; the renderer adds no data of its
/// own. Serialized as-is for API consumers and embedded verbatim into the
/// Leaflet page.
#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct MapView {
    /// Initial view centre: the home coordinate.
    pub center: Coordinate,
    pub zoom: u8,
    pub scroll_wheel_zoom: bool,
    pub tile_layer: TileLayer,
    pub home_marker: Marker,
    /// One marker per job, schedule order.
    pub job_markers: Vec<Marker>,
    /// Present only when the route connects at least two points.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub route_line: Option<RouteLine>,
    pub generated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct TileLayer {
    pub url_template: String,
    pub attribution: String,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Marker {
    /// Job id for job markers; absent on the home marker. Doubles as the
    /// rendering key, which is why job ids must be unique.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub position: Coordinate,
    /// Fill color of the circular div-icon.
    pub color: String,
    pub popup: Popup,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct Popup {
    pub title: String,
    pub lines: Vec<String>,
}

#[derive(Debug, Clone, Serialize, TS)]
#[ts(export)]
pub struct RouteLine {
    pub points: Vec<Coordinate>,
    pub color: String,
    pub weight: u8,
    pub opacity: f64,
    pub dash_array: String,
}

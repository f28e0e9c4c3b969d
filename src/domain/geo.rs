use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// A WGS84 latitude/longitude pair.
///
/// Derived from address text on every composition; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// Ordered stop sequence for one cleaner's day: home first, then each job's
/// position in schedule order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Route {
    pub points: Vec<Coordinate>,
}

impl Route {
    pub fn from_home_and_stops(home: Coordinate, stops: impl IntoIterator<Item = Coordinate>) -> Self {
        let mut points = vec![home];
        points.extend(stops);
        Self { points }
    }

    /// A connecting line only makes sense between two or more stops.
    pub fn is_drawable(&self) -> bool {
        self.points.len() > 1
    }
}

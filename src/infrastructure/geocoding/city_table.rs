use super::traits::GeocodingService;
use crate::domain::geo::Coordinate;
use async_trait::async_trait;
use lazy_static::lazy_static;
use rand::Rng;

/// Default coordinates: Stockholm city centre (latitude, longitude)
pub const DEFAULT_CENTER: Coordinate = Coordinate::new(59.3293, 18.0686);

/// Span of the fallback jitter window, centred on [`DEFAULT_CENTER`].
const LAT_JITTER_SPAN: f64 = 0.2;
const LNG_JITTER_SPAN: f64 = 0.3;

/// Known city centres, scanned in this order; the first match wins.
const CITY_COORDS: &[(&str, Coordinate)] = &[
    ("Stockholm", Coordinate::new(59.3293, 18.0686)),
    ("Göteborg", Coordinate::new(57.7089, 11.9746)),
    ("Malmö", Coordinate::new(55.6050, 13.0038)),
    ("Uppsala", Coordinate::new(59.8586, 17.6389)),
    ("Huddinge", Coordinate::new(59.2348, 17.9826)),
];

lazy_static! {
    static ref CITY_TABLE: Vec<(String, Coordinate)> = CITY_COORDS
        .iter()
        .map(|(city, coords)| (city.to_lowercase(), *coords))
        .collect();
}

/// Demo-only resolver backed by the fixed city table.
///
/// Matched addresses resolve to the table coordinate. Unmatched addresses
/// take a randomized position near [`DEFAULT_CENTER`] — repeat calls on the
/// same unmatched address will NOT agree with each other.
#[derive(Debug, Default)]
pub struct CityTableResolver;

impl CityTableResolver {
    pub fn new() -> Self {
        Self
    }

    /// Case-insensitive substring scan over the city table.
    pub fn lookup(address: &str) -> Option<Coordinate> {
        let needle = address.to_lowercase();
        CITY_TABLE
            .iter()
            .find(|(city, _)| needle.contains(city.as_str()))
            .map(|(_, coords)| *coords)
    }

    /// Resolve with a caller-supplied random source, so tests can seed it.
    pub fn resolve_with<R: Rng>(&self, address: &str, rng: &mut R) -> Coordinate {
        if let Some(coords) = Self::lookup(address) {
            return coords;
        }
        Coordinate::new(
            DEFAULT_CENTER.lat + (rng.gen_range(0.0..1.0) - 0.5) * LAT_JITTER_SPAN,
            DEFAULT_CENTER.lng + (rng.gen_range(0.0..1.0) - 0.5) * LNG_JITTER_SPAN,
        )
    }
}

#[async_trait]
impl GeocodingService for CityTableResolver {
    async fn resolve(&self, address: &str) -> Coordinate {
        self.resolve_with(address, &mut rand::thread_rng())
    }
}

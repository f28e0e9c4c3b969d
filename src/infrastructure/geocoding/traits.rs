use crate::domain::geo::Coordinate;
use async_trait::async_trait;

/// Address-to-coordinate resolution.
///
/// The narrow seam between the map composition and whatever produces
/// positions for it; a real geocoding backend slots in behind this trait
/// without touching the renderer.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GeocodingService: Send + Sync {
    /// Resolve an address to a position. Never fails: any input, including
    /// the empty string, yields a coordinate.
    async fn resolve(&self, address: &str) -> Coordinate;
}

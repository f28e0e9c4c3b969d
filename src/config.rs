//! Application configuration loading from environment variables.
//!
//! All configuration is loaded from the environment at startup via standard `std::env::var`.
//! Every variable is optional; the defaults run a self-contained demo instance.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Logging level (default: "info,cleanmap_api=debug,tower_http=debug")
//! - `HOST`: Server bind address (default: "0.0.0.0")
//! - `PORT`: Server port (default: 3000)
//! - `MAP_TILE_URL`: Tile layer URL template (default: OpenStreetMap)
//! - `MAP_TILE_ATTRIBUTION`: Tile layer attribution HTML (default: OpenStreetMap notice)
//! - `ENABLE_DEMO_ROSTER`: Mount the in-memory demo cleaners/jobs routes (default: true)

use serde::Deserialize;

/// Default tile endpoint: the public OpenStreetMap raster tiles.
pub const DEFAULT_TILE_URL: &str = "https://{s}.tile.openstreetmap.org/{z}/{x}/{y}.png";

/// Attribution required by the default tile endpoint.
pub const DEFAULT_TILE_ATTRIBUTION: &str =
    r#"&copy; <a href="https://www.openstreetmap.org/copyright">OpenStreetMap</a> contributors"#;

/// Complete server configuration loaded from environment.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Server bind address
    pub host: String,

    /// Server port
    pub port: u16,

    /// URL template the browser fetches map tiles from
    pub tile_url: String,

    /// Attribution HTML shown on the map for the tile provider
    pub tile_attribution: String,

    /// Serve the in-memory demo roster endpoints
    pub enable_demo_roster: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set but cannot be parsed to the
    /// expected type. Unset variables fall back to their defaults.
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            host: env_or("HOST", "0.0.0.0".to_string())?,
            port: env_or("PORT", 3000)?,
            tile_url: env_or("MAP_TILE_URL", DEFAULT_TILE_URL.to_string())?,
            tile_attribution: env_or("MAP_TILE_ATTRIBUTION", DEFAULT_TILE_ATTRIBUTION.to_string())?,
            enable_demo_roster: env_or("ENABLE_DEMO_ROSTER", true)?,
        })
    }
}

/// Load an environment variable with a default value.
///
/// Returns the parsed environment variable if set, otherwise returns the default.
///
/// # Errors
///
/// Returns an error if the variable is set but cannot be parsed.
fn env_or<T>(key: &str, default: T) -> anyhow::Result<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match std::env::var(key) {
        Ok(val) => val
            .parse::<T>()
            .map_err(|e| anyhow::anyhow!("Failed to parse {}: {}", key, e)),
        Err(_) => Ok(default),
    }
}

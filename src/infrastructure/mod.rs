pub mod demo;
pub mod geocoding;

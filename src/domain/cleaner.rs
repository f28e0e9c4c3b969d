use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// The service worker whose home location anchors the map.
///
/// Map composition only needs `name` and `home_address`; the remaining fields
/// travel with the roster.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Cleaner {
    #[serde(default)]
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub home_address: String,
}

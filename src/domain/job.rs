use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
    Urgent,
}

/// A scheduled work assignment with a client address and time window.
///
/// Ids must be unique within one schedule; they double as rendering keys.
/// The scheduled times are kept as time-of-day text: a missing or malformed
/// value renders as empty text rather than failing the composition.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Job {
    pub id: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub scheduled_start_time: String,
    #[serde(default)]
    pub scheduled_end_time: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
}

impl Job {
    /// Popup-facing time window, `start - end`.
    pub fn time_window(&self) -> String {
        format!("{} - {}", self.scheduled_start_time, self.scheduled_end_time)
    }
}

use serde::{Deserialize, Serialize};

/// Response to `GET /pods/{id}/measurements`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct Measurements {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub result: Vec<Measurement>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Measurement {
    pub time: MeasurementTime,
    // degrees, in the pod's configured unit
    pub temperature: f64,
    // percent relative
    pub humidity: f64,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MeasurementTime {
    // ISO-8601, UTC, e.g. "2023-01-14T09:31:43.213Z"
    pub time: String,
    pub seconds_ago: i64,
}

impl Measurements {
    /// The reading with the smallest `secondsAgo`.
    pub fn latest(&self) -> Option<&Measurement> {
        self.result.iter().min_by_key(|m| m.time.seconds_ago)
    }
}

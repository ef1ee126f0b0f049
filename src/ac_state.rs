use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::ParseModeError;

/// The operating configuration of a pod's air conditioner.
///
/// Fields the vendor sends that aren't modelled here end up in `extra`, and are
/// written back out on submission, so a state read from the API can be
/// modified and posted without losing anything.
#[derive(Deserialize, Serialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AcState {
    pub on: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mode: Option<Mode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_temperature: Option<i32>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature_unit: Option<TemperatureUnit>,

    // "low", "medium", "high", "auto", ... depends on the remote
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fan_level: Option<String>,

    // "stopped", "rangeFull", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub swing: Option<String>,

    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Cool,
    Heat,
    Fan,
    Dry,
    Auto,
}

#[derive(Deserialize, Serialize, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemperatureUnit {
    C,
    F,
}

impl std::str::FromStr for Mode {
    type Err = ParseModeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        serde_json::from_value(Value::String(s.to_string()))
            .map_err(|_| ParseModeError(s.to_string()))
    }
}

/// Response to `GET /pods/{id}/acStates?fields=status,acState&limit=1`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct AcStatus {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub result: Vec<AcStateEntry>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AcStateEntry {
    // "Success", "Failed", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub ac_state: AcState,
}

impl AcStatus {
    /// Most recent entry; the request asks for exactly one.
    pub fn latest(&self) -> Option<&AcStateEntry> {
        self.result.first()
    }
}

/// Body of `POST /pods/{id}/acStates`.
#[derive(Serialize, Debug)]
#[serde(rename_all = "camelCase")]
pub struct SetAcStateRequest<'s> {
    pub ac_state: &'s AcState,
}

/// Response to `POST /pods/{id}/acStates`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct SetResult {
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<AcStateChange>,
}

#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct AcStateChange {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub status: String,
    // "UserRequest", ...
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ac_state: Option<AcState>,
    #[serde(default)]
    pub changed_properties: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failure_reason: Option<String>,
}

impl SetResult {
    pub fn is_success(&self) -> bool {
        self.status.eq_ignore_ascii_case("success")
            && self
                .result
                .as_ref()
                .map_or(true, |change| change.status.eq_ignore_ascii_case("success"))
    }
}

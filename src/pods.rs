use serde::{Deserialize, Serialize};

/// Response to `GET /users/me/pods?fields=id,room`.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct PodList {
    // "success"
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    pub result: Vec<Pod>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Pod {
    // short alphanumeric, e.g. "AbCd1234"
    pub id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub room: Option<Room>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq)]
pub struct Room {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

impl Pod {
    pub fn room_name(&self) -> Option<&str> {
        self.room.as_ref().map(|room| room.name.as_str())
    }
}

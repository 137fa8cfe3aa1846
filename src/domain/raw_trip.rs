use serde::{Deserialize, Serialize};

// Shape requested from the language model and returned by the route endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawTrip {
    pub start_location: RawLocation,
    pub end_location: RawLocation,
    pub waypoints: Vec<RawWaypoint>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocation {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<RawCoordinates>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawWaypoint {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(rename = "type", default)]
    pub r#type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<RawCoordinates>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RawCoordinates {
    pub latitude: f64,
    pub longitude: f64,
}

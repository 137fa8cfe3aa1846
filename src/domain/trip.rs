use crate::domain::{LonLat, WaypointType};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LonLat>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Waypoint {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub r#type: WaypointType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinates: Option<LonLat>,
}

/// A normalized trip. Waypoints are kept in traversal order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Trip {
    pub start_location: Location,
    pub end_location: Location,
    pub waypoints: Vec<Waypoint>,
}

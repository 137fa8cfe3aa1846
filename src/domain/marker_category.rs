use crate::domain::WaypointType;
use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerCategory {
    Start,
    End,
    Scenic,
    Historic,
    Both,
}

impl MarkerCategory {
    pub fn color(&self) -> &'static str {
        match self {
            MarkerCategory::Start => "#22c55e",
            MarkerCategory::End => "#ef4444",
            MarkerCategory::Scenic => "#3b82f6",
            MarkerCategory::Historic => "#eab308",
            MarkerCategory::Both => "#a855f7",
        }
    }
}

impl From<&WaypointType> for MarkerCategory {
    fn from(value: &WaypointType) -> Self {
        match value {
            WaypointType::Scenic => MarkerCategory::Scenic,
            WaypointType::Historic => MarkerCategory::Historic,
            WaypointType::Both | WaypointType::Other(_) => MarkerCategory::Both,
        }
    }
}

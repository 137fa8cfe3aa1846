use crate::domain::{LonLat, Trip};
use geojson::{Feature, Geometry, JsonObject, Value};

/// Ordered path through the trip: start, waypoints, end.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RouteGeometry {
    points: Vec<LonLat>,
}

impl RouteGeometry {
    pub fn points(&self) -> &[LonLat] {
        &self.points
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn to_feature(&self) -> Feature {
        let line = self.points.iter().map(|point| Vec::from(*point)).collect();

        Feature {
            bbox: None,
            geometry: Some(Geometry::new(Value::LineString(line))),
            id: None,
            properties: Some(JsonObject::new()),
            foreign_members: None,
        }
    }
}

/// Skips every location without coordinates and never reorders or deduplicates.
pub fn build_route_geometry(trip: Option<&Trip>) -> Option<RouteGeometry> {
    let trip = trip?;

    let points = std::iter::once(trip.start_location.coordinates)
        .chain(trip.waypoints.iter().map(|waypoint| waypoint.coordinates))
        .chain(std::iter::once(trip.end_location.coordinates))
        .flatten()
        .collect();

    Some(RouteGeometry { points })
}

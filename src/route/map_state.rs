use crate::domain::{LonLat, MarkerCategory, Trip};
use crate::route::camera_fit::{CameraFit, compute_camera_fit};
use crate::route::geometry::{RouteGeometry, build_route_geometry};
use geojson::{Feature, FeatureCollection, Geometry, JsonObject, Value};
use serde_json::json;

#[derive(Debug, Clone, PartialEq)]
pub struct Marker {
    pub label: String,
    pub name: String,
    pub category: MarkerCategory,
    pub position: LonLat,
}

/// Everything the map renderer needs to draw a trip.
#[derive(Debug, Clone, PartialEq)]
pub struct MapState {
    pub route: RouteGeometry,
    pub markers: Vec<Marker>,
    pub camera: Option<CameraFit>,
}

impl MapState {
    pub fn from_trip(trip: &Trip) -> Self {
        let route = build_route_geometry(Some(trip)).unwrap_or_default();
        let camera = compute_camera_fit(route.points());

        MapState {
            route,
            markers: markers(trip),
            camera,
        }
    }

    pub fn to_feature_collection(&self) -> FeatureCollection {
        let mut features = Vec::with_capacity(self.markers.len() + 1);
        features.push(self.route.to_feature());
        features.extend(self.markers.iter().map(marker_feature));

        FeatureCollection {
            bbox: None,
            features,
            foreign_members: None,
        }
    }
}

// Waypoints are numbered by their position in the trip, including those without coordinates.
fn markers(trip: &Trip) -> Vec<Marker> {
    let start = trip.start_location.coordinates.map(|position| Marker {
        label: "Start".to_string(),
        name: trip.start_location.name.clone(),
        category: MarkerCategory::Start,
        position,
    });

    let waypoints = trip.waypoints.iter().enumerate().filter_map(|(index, waypoint)| {
        waypoint.coordinates.map(|position| Marker {
            label: (index + 1).to_string(),
            name: waypoint.name.clone(),
            category: MarkerCategory::from(&waypoint.r#type),
            position,
        })
    });

    let end = trip.end_location.coordinates.map(|position| Marker {
        label: "End".to_string(),
        name: trip.end_location.name.clone(),
        category: MarkerCategory::End,
        position,
    });

    start.into_iter().chain(waypoints).chain(end).collect()
}

fn marker_feature(marker: &Marker) -> Feature {
    let mut properties = JsonObject::new();
    properties.insert("label".to_string(), json!(marker.label));
    properties.insert("name".to_string(), json!(marker.name));
    properties.insert("category".to_string(), json!(marker.category));
    properties.insert("color".to_string(), json!(marker.category.color()));

    Feature {
        bbox: None,
        geometry: Some(Geometry::new(Value::Point(Vec::from(marker.position)))),
        id: None,
        properties: Some(properties),
        foreign_members: None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Location, Waypoint, WaypointType};
    use pretty_assertions::assert_eq;

    fn trip() -> Trip {
        Trip {
            start_location: Location {
                name: "Seattle".to_string(),
                coordinates: Some(LonLat(-122.33, 47.61)),
            },
            end_location: Location {
                name: "Portland".to_string(),
                coordinates: Some(LonLat(-122.68, 45.52)),
            },
            waypoints: vec![
                Waypoint {
                    name: "Lost Lake".to_string(),
                    description: String::new(),
                    r#type: WaypointType::Scenic,
                    coordinates: None,
                },
                Waypoint {
                    name: "Astoria".to_string(),
                    description: String::new(),
                    r#type: WaypointType::Other("maritime".to_string()),
                    coordinates: Some(LonLat(-123.83, 46.19)),
                },
            ],
        }
    }

    #[test]
    fn numbers_waypoint_markers_by_trip_position() {
        let state = MapState::from_trip(&trip());

        let labels = state.markers.iter().map(|marker| marker.label.as_str()).collect::<Vec<_>>();
        assert_eq!(labels, vec!["Start", "2", "End"]);
        assert_eq!(state.markers[1].category, MarkerCategory::Both);
    }

    #[test]
    fn derives_the_route_and_camera_from_the_trip() {
        let state = MapState::from_trip(&trip());

        assert_eq!(state.route.points().len(), 3);
        assert!(state.camera.is_some());
    }

    #[test]
    fn has_no_camera_without_coordinates() {
        let mut trip = trip();
        trip.start_location.coordinates = None;
        trip.end_location.coordinates = None;
        trip.waypoints.iter_mut().for_each(|waypoint| waypoint.coordinates = None);

        let state = MapState::from_trip(&trip);

        assert!(state.route.is_empty());
        assert!(state.markers.is_empty());
        assert_eq!(state.camera, None);
    }

    #[test]
    fn exports_the_route_first_then_the_markers() {
        let collection = MapState::from_trip(&trip()).to_feature_collection();

        assert_eq!(collection.features.len(), 4);
        assert!(matches!(collection.features[0].geometry.as_ref().map(|g| &g.value), Some(Value::LineString(_))));
        let color = collection.features[1].properties.as_ref().and_then(|properties| properties.get("color")).cloned();
        assert_eq!(color, Some(json!("#22c55e")));
    }
}

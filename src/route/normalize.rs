use crate::domain::{LonLat, Location, RawCoordinates, RawLocation, RawTrip, RawWaypoint, Trip, Waypoint};

/// Converts the extractor's `{latitude, longitude}` objects into `[lon, lat]` pairs.
/// Entries without coordinates are kept with `coordinates: None`.
pub fn normalize(raw: RawTrip) -> Trip {
    Trip {
        start_location: normalize_location(raw.start_location),
        end_location: normalize_location(raw.end_location),
        waypoints: raw.waypoints.into_iter().map(normalize_waypoint).collect(),
    }
}

fn normalize_location(location: RawLocation) -> Location {
    Location {
        name: location.name,
        coordinates: location.coordinates.map(to_lon_lat),
    }
}

fn normalize_waypoint(waypoint: RawWaypoint) -> Waypoint {
    Waypoint {
        name: waypoint.name,
        description: waypoint.description,
        r#type: waypoint.r#type.into(),
        coordinates: waypoint.coordinates.map(to_lon_lat),
    }
}

fn to_lon_lat(coordinates: RawCoordinates) -> LonLat {
    LonLat(coordinates.longitude, coordinates.latitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::WaypointType;
    use pretty_assertions::assert_eq;

    fn raw_waypoint(name: &str, r#type: &str, coordinates: Option<RawCoordinates>) -> RawWaypoint {
        RawWaypoint {
            name: name.to_string(),
            description: format!("About {}.", name),
            r#type: r#type.to_string(),
            coordinates,
        }
    }

    #[test]
    fn swaps_coordinates_to_longitude_first() {
        let raw = RawTrip {
            start_location: RawLocation {
                name: "Seattle".to_string(),
                coordinates: Some(RawCoordinates { latitude: 47.6062, longitude: -122.3321 }),
            },
            end_location: RawLocation {
                name: "Portland".to_string(),
                coordinates: Some(RawCoordinates { latitude: 45.5152, longitude: -122.6784 }),
            },
            waypoints: vec![raw_waypoint("Olympia", "historic", Some(RawCoordinates { latitude: 47.0379, longitude: -122.9007 }))],
        };

        let trip = normalize(raw);

        assert_eq!(trip.start_location.coordinates, Some(LonLat(-122.3321, 47.6062)));
        assert_eq!(trip.end_location.coordinates, Some(LonLat(-122.6784, 45.5152)));
        assert_eq!(trip.waypoints[0].coordinates, Some(LonLat(-122.9007, 47.0379)));
    }

    #[test]
    fn keeps_entries_without_coordinates_unchanged() {
        let raw = RawTrip {
            start_location: RawLocation {
                name: "Somewhere".to_string(),
                coordinates: None,
            },
            end_location: RawLocation {
                name: "Elsewhere".to_string(),
                coordinates: None,
            },
            waypoints: vec![
                raw_waypoint("Ruby Beach", "scenic", None),
                raw_waypoint("Fort Clatsop", "both", Some(RawCoordinates { latitude: 46.13, longitude: -123.88 })),
                raw_waypoint("Tillamook", "culinary", None),
            ],
        };

        let trip = normalize(raw);

        assert_eq!(trip.start_location, Location { name: "Somewhere".to_string(), coordinates: None });
        assert_eq!(trip.end_location, Location { name: "Elsewhere".to_string(), coordinates: None });
        assert_eq!(
            trip.waypoints,
            vec![
                Waypoint {
                    name: "Ruby Beach".to_string(),
                    description: "About Ruby Beach.".to_string(),
                    r#type: WaypointType::Scenic,
                    coordinates: None,
                },
                Waypoint {
                    name: "Fort Clatsop".to_string(),
                    description: "About Fort Clatsop.".to_string(),
                    r#type: WaypointType::Both,
                    coordinates: Some(LonLat(-123.88, 46.13)),
                },
                Waypoint {
                    name: "Tillamook".to_string(),
                    description: "About Tillamook.".to_string(),
                    r#type: WaypointType::Other("culinary".to_string()),
                    coordinates: None,
                },
            ]
        );
    }
}

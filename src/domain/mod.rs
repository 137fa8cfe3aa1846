mod lon_lat;
mod marker_category;
mod raw_trip;
mod trip;
mod waypoint_type;

pub use lon_lat::LonLat;
pub use marker_category::MarkerCategory;
pub use raw_trip::{RawCoordinates, RawLocation, RawTrip, RawWaypoint};
pub use trip::{Location, Trip, Waypoint};
pub use waypoint_type::WaypointType;
